//! # Example: Convergence Order
//!
//! Halve the step size repeatedly and watch the endpoint error of each
//! method shrink by roughly 2^p, where p is the order of the method.
//!
//! Run with:
//!   cargo run --example convergence

use ivp_analysis::{prelude::*, solve};

fn main() {
    env_logger::builder().format_timestamp_secs().init();

    let problem = HomogeneousProblem::default();
    let counts = [10, 20, 40, 80, 160];

    for method in Method::ALL {
        match solve::convergence_study(&problem, &method, &counts) {
            Ok(errors) => {
                println!("{} (order {})", method.name(), method.order());
                for (k, e) in counts.iter().zip(errors.iter()) {
                    println!("  k = {k:>4}, h = {:.5}, error = {e:.3e}", problem.config().step_for(*k));
                }
                if let Some(p) = solve::mean_order(&counts, &errors) {
                    println!("  observed order = {p:.3}");
                }
                println!();
            }
            Err(e) => eprintln!("{}: {e}", method.name()),
        }
    }
}
