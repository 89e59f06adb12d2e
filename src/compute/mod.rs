//! Compute module - The evolutionary search machinery.

pub mod evolution;
