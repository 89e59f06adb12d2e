//! Pareto archive (hall of fame) for the best solutions seen across a run.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::individual::{Individual, ObjectiveVector};

fn objectives(individual: &Individual) -> ObjectiveVector {
    individual
        .objectives()
        .expect("archive members are always evaluated")
}

/// The set of non-dominated individuals observed so far.
///
/// Membership can shrink (a new candidate evicts the members it dominates)
/// or grow, but the set is internally non-dominated after every update and
/// deduplicated by objective-vector equality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParetoArchive {
    members: Vec<Individual>,
}

impl ParetoArchive {
    /// Create an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a batch of evaluated candidates into the archive.
    ///
    /// A candidate dominated by any current member is discarded. Otherwise it
    /// evicts every member it dominates and is inserted, unless a member with
    /// an equal objective vector already exists.
    pub fn update(&mut self, candidates: &[Individual]) {
        for candidate in candidates {
            let incoming = candidate
                .objectives()
                .expect("archive candidates must be evaluated");

            if self.members.iter().any(|m| objectives(m).dominates(&incoming)) {
                continue;
            }
            self.members.retain(|m| !incoming.dominates(&objectives(m)));
            if self.members.iter().any(|m| objectives(m) == incoming) {
                continue;
            }
            self.members.push(candidate.clone());
        }
    }

    /// Archive size.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the archive is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The archived individuals, in insertion order.
    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    /// Iterate over archived individuals.
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.members.iter()
    }

    /// Best value component across the archive. Monotonically non-decreasing
    /// over a run: a member can only be evicted by a candidate at least as
    /// valuable.
    pub fn best_value(&self) -> Option<f64> {
        self.members
            .iter()
            .map(|m| objectives(m).value)
            .reduce(f64::max)
    }

    /// Check the archive invariant: no member dominates another.
    pub fn is_non_dominated(&self) -> bool {
        let objs: Vec<ObjectiveVector> = self.members.iter().map(objectives).collect();
        for i in 0..objs.len() {
            for j in 0..objs.len() {
                if i != j && objs[i].dominates(&objs[j]) {
                    return false;
                }
            }
        }
        true
    }

    /// Flatten the archive into serializable solutions.
    pub fn to_export(&self) -> Vec<ArchivedSolution> {
        self.members
            .iter()
            .map(|m| {
                let objs = objectives(m);
                ArchivedSolution {
                    items: m.items().iter().copied().collect(),
                    weight: objs.weight,
                    value: objs.value,
                }
            })
            .collect()
    }

    /// Write the archive to a JSON file.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.to_export())?;
        fs::write(path, json)
    }
}

/// One archived solution in export form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedSolution {
    /// Carried item ids, ascending.
    pub items: Vec<usize>,
    /// Total weight.
    pub weight: f64,
    /// Total value.
    pub value: f64,
}
