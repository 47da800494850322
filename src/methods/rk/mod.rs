//! Explicit Runge-Kutta update rules

mod rk4;

pub use rk4::Rk4;
