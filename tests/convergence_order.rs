use ivp_analysis::{prelude::*, solve};

mod common;
use common::{ratios, reference_problem, shifted_problem};

// Halving h should divide the endpoint error by roughly 2^p
fn assert_doubling_ratios(method: Method, expected: f64) {
    let problem = reference_problem();
    let errors = solve::convergence_study(&problem, &method, &[10, 20, 40, 80]).unwrap();
    for r in ratios(&errors) {
        assert!(
            (r - expected).abs() <= 0.3 * expected,
            "{method}: ratio {r} not within 30% of {expected} (errors {errors:?})"
        );
    }
}

#[test]
fn euler_is_first_order() {
    assert_doubling_ratios(Method::Euler, 2.0);
}

#[test]
fn heun_is_second_order() {
    assert_doubling_ratios(Method::Heun, 4.0);
}

#[test]
fn rk4_is_fourth_order() {
    assert_doubling_ratios(Method::Rk4, 16.0);
}

#[test]
fn observed_orders_match_theory() {
    let config = ProblemConfig::new(1.0, 0.0, 8.0, 4, 10, 20).unwrap();
    let problem = HomogeneousProblem::new(config).unwrap();
    for method in Method::ALL {
        let integrator = Integrator::new(&problem, method);
        let errors = integrator.global_error().unwrap();
        let p = solve::mean_order(&integrator.subdivision_range(), &errors).unwrap();
        assert!(
            (p - method.order() as f64).abs() < 0.3,
            "{method}: observed order {p}"
        );
    }
}

#[test]
fn global_error_shrinks_across_sweep() {
    let problem = shifted_problem();
    for method in Method::ALL {
        let errors = Integrator::new(&problem, method).global_error().unwrap();
        assert_eq!(errors.len(), 11);
        assert!(errors.last().unwrap() < errors.first().unwrap(), "{method}: {errors:?}");
    }
}

#[test]
fn higher_order_is_more_accurate() {
    let problem = reference_problem();
    let at = |m: Method| solve::endpoint_error(&problem, &m, 40).unwrap();
    assert!(at(Method::Rk4) < at(Method::Heun));
    assert!(at(Method::Heun) < at(Method::Euler));
}
