//! Individual representation: a set-valued genome with cached fitness.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A point in objective space: total carried weight and total carried value.
///
/// Optimization directions are fixed at compile time: weight is minimized,
/// value is maximized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveVector {
    /// Summed item weight (minimized).
    pub weight: f64,
    /// Summed item value (maximized).
    pub value: f64,
}

impl ObjectiveVector {
    /// Create an objective vector.
    pub const fn new(weight: f64, value: f64) -> Self {
        Self { weight, value }
    }

    /// Pareto dominance under (minimize weight, maximize value).
    ///
    /// True iff `self` is at least as good as `other` in both dimensions and
    /// strictly better in at least one.
    pub fn dominates(&self, other: &ObjectiveVector) -> bool {
        if self.weight > other.weight || self.value < other.value {
            return false;
        }
        self.weight < other.weight || self.value > other.value
    }
}

/// Cached evaluation state attached to an individual.
///
/// `Unevaluated` marks a genome that changed since the last evaluation (or was
/// never evaluated); selection and statistics require `Evaluated`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Fitness {
    /// No valid objective vector for the current genome.
    Unevaluated,
    /// Objective vector valid for the current genome.
    Evaluated(ObjectiveVector),
}

/// A candidate solution: a set of item ids plus cached fitness.
///
/// Membership is a true set (no duplicates, order irrelevant); iteration over
/// the members is always in ascending id order, which keeps every stochastic
/// choice over members reproducible. Any genome mutation resets the fitness
/// to [`Fitness::Unevaluated`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    items: BTreeSet<usize>,
    fitness: Fitness,
}

impl Individual {
    /// Create an unevaluated individual from a set of item ids.
    pub fn new(items: BTreeSet<usize>) -> Self {
        Self {
            items,
            fitness: Fitness::Unevaluated,
        }
    }

    /// Create an empty individual. Feasible by definition: it evaluates to
    /// (0, 0).
    pub fn empty() -> Self {
        Self::new(BTreeSet::new())
    }

    /// The genome: carried item ids in ascending order.
    pub fn items(&self) -> &BTreeSet<usize> {
        &self.items
    }

    /// Number of carried items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the genome is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check membership of an item id.
    pub fn contains(&self, id: usize) -> bool {
        self.items.contains(&id)
    }

    /// Add an item id. A duplicate add is a set no-op, but the fitness is
    /// invalidated either way: the operator asked for a mutation.
    pub fn insert(&mut self, id: usize) -> bool {
        self.fitness = Fitness::Unevaluated;
        self.items.insert(id)
    }

    /// Remove an item id, invalidating the fitness.
    pub fn remove(&mut self, id: usize) -> bool {
        self.fitness = Fitness::Unevaluated;
        self.items.remove(&id)
    }

    /// Replace the whole genome, invalidating the fitness.
    pub fn replace_items(&mut self, items: BTreeSet<usize>) {
        self.items = items;
        self.fitness = Fitness::Unevaluated;
    }

    /// Current fitness state.
    pub fn fitness(&self) -> Fitness {
        self.fitness
    }

    /// The cached objective vector, if the individual has been evaluated.
    pub fn objectives(&self) -> Option<ObjectiveVector> {
        match self.fitness {
            Fitness::Unevaluated => None,
            Fitness::Evaluated(objectives) => Some(objectives),
        }
    }

    /// Check whether the cached fitness is valid.
    pub fn is_evaluated(&self) -> bool {
        matches!(self.fitness, Fitness::Evaluated(_))
    }

    /// Attach an evaluated objective vector.
    pub fn set_objectives(&mut self, objectives: ObjectiveVector) {
        self.fitness = Fitness::Evaluated(objectives);
    }

    /// Mark the fitness stale.
    pub fn invalidate(&mut self) {
        self.fitness = Fitness::Unevaluated;
    }
}

impl FromIterator<usize> for Individual {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
