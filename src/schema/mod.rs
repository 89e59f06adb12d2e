//! Schema module - Configuration and catalog types for knapsack search runs.

mod catalog;
mod config;

pub use catalog::*;
pub use config::*;
