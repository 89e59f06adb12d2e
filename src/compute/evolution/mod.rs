//! Evolutionary search module: NSGA-II over set-valued knapsack genomes.
//!
//! # Overview
//!
//! The search system consists of:
//!
//! - **Individuals** (`individual`): set-valued genomes with cached fitness
//! - **Evaluation** (`evaluate`): pure objective scoring with an
//!   infeasibility penalty
//! - **Variation** (`variation`): random initialization, set crossover, and
//!   add/remove mutation over a single seeded RNG stream
//! - **Selection** (`select`): non-dominated sorting with crowding-distance
//!   truncation
//! - **Pareto Archive** (`archive`): running hall of fame of non-dominated
//!   solutions
//! - **Statistics** (`stats`): per-generation aggregate records
//! - **Search Loop** (`search`): the (mu+lambda) generational engine tying
//!   the pieces together
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use knapsack_nsga2::compute::evolution::EvolutionEngine;
//! use knapsack_nsga2::schema::{EvolutionConfig, ItemCatalog};
//!
//! let mut catalog_rng = StdRng::seed_from_u64(64);
//! let catalog = ItemCatalog::random(20, &mut catalog_rng);
//!
//! let config = EvolutionConfig {
//!     ngen: 20,
//!     random_seed: Some(64),
//!     ..Default::default()
//! };
//!
//! let engine = EvolutionEngine::new(catalog, config).expect("valid configuration");
//! let result = engine.run();
//!
//! println!("pareto front size: {}", result.archive.len());
//! println!("final max value: {:.2}", result.final_record().max.value);
//! ```

mod archive;
mod evaluate;
mod individual;
mod search;
mod select;
mod stats;
mod variation;

pub use archive::{ArchivedSolution, ParetoArchive};
pub use evaluate::{KnapsackEvaluator, PENALTY_WEIGHT};
pub use individual::{Fitness, Individual, ObjectiveVector};
pub use search::{EvolutionEngine, EvolutionResult, Progress};
pub use select::{crowding_distance, non_dominated_sort, select};
pub use stats::{GenerationRecord, Logbook, summarize};
pub use variation::{EvoRng, crossover};
