//! Multi-objective knapsack optimization via NSGA-II.
//!
//! This crate implements a (mu+lambda) evolutionary search for Pareto-optimal
//! knapsack solutions: minimize total carried weight, maximize total carried
//! value. Individuals are sets of item ids; selection uses non-dominated
//! sorting with crowding-distance truncation, and a running Pareto archive
//! keeps every non-dominated solution seen across a run.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: run configuration and the item catalog
//! - `compute`: the evolutionary machinery (evaluation, variation, selection,
//!   archive, statistics, and the generational loop)
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use knapsack_nsga2::{EvolutionConfig, EvolutionEngine, ItemCatalog};
//!
//! // Generate the item catalog once, before the search starts.
//! let mut catalog_rng = StdRng::seed_from_u64(64);
//! let catalog = ItemCatalog::random(20, &mut catalog_rng);
//!
//! // Configure and run a short seeded search.
//! let config = EvolutionConfig {
//!     ngen: 10,
//!     random_seed: Some(64),
//!     ..Default::default()
//! };
//! let engine = EvolutionEngine::new(catalog, config).expect("valid configuration");
//! let result = engine.run();
//!
//! // Final scalar metrics and the convergence series.
//! let last = result.final_record();
//! println!("max weight {:.2}, max value {:.2}", last.max.weight, last.max.value);
//! for (generation, max) in result.logbook.max_series() {
//!     println!("{generation}: ({:.2}, {:.2})", max.weight, max.value);
//! }
//! ```
//!
//! # Determinism
//!
//! Every stochastic decision of a run draws from one seeded stream in a
//! fixed sequential order, so two runs with the same catalog and the same
//! `random_seed` produce bit-identical logbooks, populations, and archives.

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::evolution::{
    EvolutionEngine, EvolutionResult, Individual, Logbook, ObjectiveVector, ParetoArchive,
};
pub use schema::{ConfigError, EvolutionConfig, Item, ItemCatalog};
