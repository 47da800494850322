//! # Example: Experiment from TOML
//!
//! Load a problem configuration and method selection from a TOML file and
//! print every sequence a plotting front end would receive.
//!
//! Run with:
//!   cargo run --example experiment -- demos/experiment.toml

use ivp_analysis::prelude::*;

fn main() {
    env_logger::builder().format_timestamp_secs().init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/experiment.toml".to_string());

    let report = ExperimentConfig::read_toml(&path)
        .and_then(Experiment::from_config)
        .and_then(|experiment| experiment.run());

    match report {
        Ok(report) => {
            println!("config: {:?}", report.config);
            println!("grid:   {:?}", report.grid);
            println!("exact:  {:?}", report.exact);
            for m in &report.methods {
                println!();
                println!("{} (order {})", m.name, m.order);
                println!("  approximation:   {:?}", m.approximation);
                println!("  local error:     {:?}", m.local_error);
                println!("  subdivisions:    {:?}", m.subdivisions);
                println!("  global error:    {:?}", m.global_error);
                println!("  observed orders: {:?}", m.observed_orders);
            }
        }
        Err(e) => eprintln!("Experiment failed ({:?}): {e}", e.kind()),
    }
}
