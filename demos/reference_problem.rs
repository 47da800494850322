//! # Example: Reference Problem
//!
//! Compare Euler, improved Euler and RK4 against the exact solution of
//!
//! dy/dx = y/x - x·e^(y/x),   y(1) = 0,   x in [1, 8]
//!
//! whose closed form is y = -x·ln(x).
//!
//! Run with:
//!   cargo run --example reference_problem

use ivp_analysis::prelude::*;

fn main() {
    env_logger::builder().format_timestamp_secs().init();

    let problem = HomogeneousProblem::default();
    let h = problem.step_size();

    let table = || -> Result<(), Error> {
        let x = problem.grid_for(h)?;
        let exact = problem.exact_sequence()?;

        println!("h = {h}");
        println!("{:>8} {:>12} {:>12} {:>12} {:>12}", "x", "exact", "euler", "heun", "rk4");

        let trajectories = Method::ALL
            .iter()
            .map(|&m| Integrator::new(&problem, m).approximate(h))
            .collect::<Result<Vec<_>, _>>()?;
        for i in 0..x.len() {
            println!(
                "{:>8.4} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
                x[i], exact[i], trajectories[0][i], trajectories[1][i], trajectories[2][i]
            );
        }

        println!();
        println!("Local truncation error");
        for method in Method::ALL {
            let local = Integrator::new(&problem, method).local_error()?;
            println!("{:>16}: {:?}", method.name(), local);
        }
        Ok(())
    };

    if let Err(e) = table() {
        eprintln!("Computation failed: {e}");
    }
}
