use ivp_analysis::prelude::*;

mod common;
use common::reference_problem;

#[test]
fn rejects_zero_x0_and_keeps_previous_configuration() {
    let mut problem = reference_problem();
    let before = *problem.config();
    let c_before = problem.constant();

    let err = ProblemConfig::new(0.0, 1.0, 5.0, 4, 1, 5)
        .and_then(|config| problem.reconfigure(config))
        .unwrap_err();
    assert_eq!(err, Error::ZeroInitialAbscissa);
    assert_eq!(err.kind(), ErrorKind::Configuration);

    assert_eq!(problem.config(), &before);
    assert_eq!(problem.constant(), c_before);
}

#[test]
fn rejects_short_span_and_keeps_previous_configuration() {
    let mut problem = reference_problem();
    let before = *problem.config();
    let exact_before = problem.exact_sequence().unwrap();

    let short = ProblemConfig::new(2.0, 1.0, 3.5, 4, 1, 5).unwrap();
    let err = problem.reconfigure(short).unwrap_err();
    assert!(matches!(err, Error::SpanTooShort { min, .. } if min == 2.0));
    assert!(err.is_configuration());

    assert_eq!(problem.config(), &before);
    assert_eq!(problem.exact_sequence().unwrap(), exact_before);
}

#[test]
fn reconfigure_recomputes_derived_values() {
    let mut problem = reference_problem();
    let config = ProblemParams::builder()
        .x0(2.0)
        .y0(1.0)
        .x_limit(6.0)
        .n(8)
        .n_start(2)
        .n_end(6)
        .build()
        .validate()
        .unwrap();
    problem.reconfigure(config).unwrap();

    assert_eq!(problem.step_size(), 0.5);
    assert_eq!(problem.constant(), 2.0 - (-0.5f64).exp());
    assert_eq!(problem.grid_for(problem.step_size()).unwrap().len(), 9);
    assert_eq!(problem.subdivision_range(), vec![2, 3, 4, 5, 6]);
    assert!((problem.exact(2.0).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn rejects_invalid_sweep() {
    let err = ProblemParams::builder().n_start(5).n_end(3).build().validate().unwrap_err();
    assert_eq!(err, Error::InvalidSweep { start: 5, end: 3 });
}
