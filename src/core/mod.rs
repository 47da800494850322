//! Core traits and types used throughout the library.

pub mod config;
pub mod grid;
pub mod problem;
