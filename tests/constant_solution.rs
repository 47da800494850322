use approx::assert_abs_diff_eq;
use ivp_analysis::prelude::*;

mod common;
use common::constant_problem;

#[test]
fn every_method_reproduces_constant_solution() {
    let problem = constant_problem();
    for method in Method::ALL {
        let integrator = Integrator::new(&problem, method);

        let y = integrator.approximate(1.0).unwrap();
        assert_eq!(y.len(), 5, "{method}");
        for yi in &y {
            assert_abs_diff_eq!(*yi, 2.0, epsilon = 1e-12);
        }

        let local = integrator.local_error().unwrap();
        assert_eq!(local.len(), 5, "{method}");
        for e in &local {
            assert_abs_diff_eq!(*e, 0.0, epsilon = 1e-12);
        }

        for e in integrator.global_error().unwrap() {
            assert_abs_diff_eq!(e, 0.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn exact_sequence_is_constant() {
    let problem = constant_problem();
    assert_eq!(problem.exact_sequence().unwrap(), vec![2.0; 5]);
    assert_eq!(problem.grid_for(1.0).unwrap(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}
