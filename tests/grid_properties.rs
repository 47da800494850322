use ivp_analysis::{
    GRID_DECIMALS, GRID_TOLERANCE,
    core::grid::{grid, round_to},
    prelude::*,
};
use proptest::prelude::*;

mod common;
use common::reference_problem;

fn admitted(x: f64, stop: f64, bound: f64) -> bool {
    x < stop && round_to(x, GRID_DECIMALS) <= round_to(bound, GRID_DECIMALS) + GRID_TOLERANCE
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]
    #[test]
    fn prop_grid_length_and_order(
        start in -10.0f64..10.0,
        step in 1e-2f64..3.0,
        span in 0.0f64..20.0,
        overshoot in 0.0f64..3.0,
    ) {
        let bound = start + span;
        let stop = bound + overshoot;
        let nodes = grid(start, stop, step, bound).unwrap();

        let k_max = ((stop - start) / step).ceil() as usize + 2;
        let expected = (0..=k_max)
            .filter(|&k| admitted(start + k as f64 * step, stop, bound))
            .count();
        prop_assert_eq!(nodes.len(), expected);

        prop_assert!(nodes.windows(2).all(|w| w[0] < w[1]));
        if let Some(first) = nodes.first() {
            prop_assert_eq!(*first, start);
        }
    }

    #[test]
    fn prop_trajectory_matches_grid(k in 1usize..60) {
        let problem = reference_problem();
        let step = problem.config().step_for(k);
        for method in Method::ALL {
            let integrator = Integrator::new(&problem, method);
            prop_assert_eq!(
                integrator.approximate(step).unwrap().len(),
                integrator.grid_for(step).unwrap().len()
            );
        }
    }
}

#[test]
fn endpoint_is_included_for_every_subdivision() {
    let problem = reference_problem();
    for k in 1..200 {
        let nodes = problem.grid_for(problem.config().step_for(k)).unwrap();
        assert_eq!(nodes.len(), k + 1, "k = {k}");
        assert!((nodes[k] - 8.0).abs() < 1e-9);
    }
}

#[test]
fn all_methods_share_one_grid() {
    let problem = reference_problem();
    let step = 7.0 / 3.0;
    let lengths: Vec<usize> = Method::ALL
        .iter()
        .map(|&m| Integrator::new(&problem, m).approximate(step).unwrap().len())
        .collect();
    assert_eq!(lengths, vec![4, 4, 4]);
}

#[test]
fn invalid_step_is_domain_error() {
    let problem = reference_problem();
    for step in [0.0, -1.0, f64::NAN] {
        let err = Integrator::new(&problem, Method::Euler).approximate(step).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
    }
}

#[test]
fn step_below_float_spacing_is_rejected() {
    // Around 1e12 the spacing of f64 is about 1.2e-4, so 1e-5 steps collapse
    let err = grid(1e12, 1e12 + 0.01, 1e-5, 1e12 + 0.01).unwrap_err();
    assert_eq!(err, Error::InvalidStepSize(1e-5));
    assert!(err.is_domain());
}

#[test]
fn five_decimal_limit_keeps_its_endpoint() {
    let config = ProblemConfig::new(1.0, 0.0, 3.00006, 2, 1, 4).unwrap();
    let problem = DecayProblem::new(config, 1.0).unwrap();
    let nodes = problem.grid_for(problem.step_size()).unwrap();
    assert_eq!(nodes.len(), 3);
    assert!((nodes[2] - 3.00006).abs() < 1e-12);
    for k in problem.subdivision_range() {
        let nodes = problem.grid_for(problem.config().step_for(k)).unwrap();
        assert_eq!(nodes.len(), k + 1, "k = {k}");
    }
}
