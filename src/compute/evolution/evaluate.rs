//! Fitness evaluation for knapsack individuals.
//!
//! Evaluation is pure: it reads the catalog and the genome, and never mutates
//! either. Infeasibility is handled by a penalty vector, not by rejection, so
//! infeasible genomes stay in the gene pool while losing every selection
//! contest.

use crate::schema::ItemCatalog;

use super::individual::{Individual, ObjectiveVector};

/// Sentinel weight assigned to infeasible individuals. Paired with a value of
/// zero it is dominated by every feasible solution, including the empty one.
pub const PENALTY_WEIGHT: f64 = 10_000.0;

/// Evaluates individuals against an item catalog under feasibility limits.
pub struct KnapsackEvaluator {
    catalog: ItemCatalog,
    max_item: usize,
    max_weight: f64,
}

impl KnapsackEvaluator {
    /// Create a new evaluator.
    pub fn new(catalog: ItemCatalog, max_item: usize, max_weight: f64) -> Self {
        Self {
            catalog,
            max_item,
            max_weight,
        }
    }

    /// The catalog this evaluator resolves item ids against.
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// Compute the objective vector for an individual.
    ///
    /// Sums weight and value over the carried items. Individuals exceeding
    /// `max_item` members or `max_weight` total weight receive the penalty
    /// vector `(PENALTY_WEIGHT, 0)`. An empty individual is feasible and
    /// scores (0, 0).
    pub fn evaluate(&self, individual: &Individual) -> ObjectiveVector {
        let mut weight = 0.0;
        let mut value = 0.0;
        for &id in individual.items() {
            let item = &self.catalog[id];
            weight += item.weight;
            value += item.value;
        }

        if individual.len() > self.max_item || weight > self.max_weight {
            return ObjectiveVector::new(PENALTY_WEIGHT, 0.0);
        }
        ObjectiveVector::new(weight, value)
    }
}
