//! Stochastic variation: random individuals, set crossover, add/remove
//! mutation.
//!
//! All randomness flows through a single [`EvoRng`] stream so that a seeded
//! run draws in one fixed, documented order.

use std::collections::BTreeSet;

use rand::prelude::*;

use super::individual::Individual;

/// Random number generator wrapper for the evolution stream.
///
/// Wraps a seeded [`StdRng`]; every stochastic decision of a run (population
/// initialization, offspring trial choice, mutation draws) goes through one
/// instance, which makes identically seeded runs bit-identical.
pub struct EvoRng {
    rng: StdRng,
}

impl EvoRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with an entropy seed. Runs are not reproducible.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Uniform draw in [0, 1).
    pub fn draw(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    /// Uniform index in [0, len).
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Build a random individual: `init_size` item ids drawn with replacement
    /// from `0..nbr_items` into a set. Duplicates collapse, so the effective
    /// size may be smaller than `init_size`.
    pub fn random_individual(&mut self, nbr_items: usize, init_size: usize) -> Individual {
        let mut items = BTreeSet::new();
        for _ in 0..init_size {
            items.insert(self.rng.gen_range(0..nbr_items));
        }
        Individual::new(items)
    }

    /// Mutate an individual in place.
    ///
    /// With probability 0.5 remove one member chosen uniformly from the sorted
    /// member sequence; otherwise (or when the remove branch hit an empty set)
    /// add one id drawn uniformly from `0..nbr_items`. Adding an id that is
    /// already carried is a set no-op. The fitness is left stale either way.
    pub fn mutate(&mut self, individual: &mut Individual, nbr_items: usize) {
        if self.rng.gen_bool(0.5) && !individual.is_empty() {
            let idx = self.rng.gen_range(0..individual.len());
            let id = individual
                .items()
                .iter()
                .copied()
                .nth(idx)
                .expect("index drawn below set length");
            individual.remove(id);
        } else {
            let id = self.rng.gen_range(0..nbr_items);
            individual.insert(id);
        }
    }
}

/// In-place set crossover.
///
/// `a` becomes the intersection of the two parents; `b` becomes the symmetric
/// difference of a snapshot of the original `a` against `b`. The snapshot is
/// taken before `a` is rewritten, so the order of the two rewrites is safe.
/// Both children come out with stale fitness.
pub fn crossover(a: &mut Individual, b: &mut Individual) {
    let original_a = a.items().clone();
    let intersection = &original_a & b.items();
    let difference = &original_a ^ b.items();
    a.replace_items(intersection);
    b.replace_items(difference);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::evolution::individual::ObjectiveVector;

    #[test]
    fn test_random_individual_bounds() {
        let mut rng = EvoRng::new(42);
        let ind = rng.random_individual(20, 5);

        assert!(ind.len() <= 5);
        assert!(ind.items().iter().all(|&id| id < 20));
        assert!(!ind.is_evaluated());
    }

    #[test]
    fn test_random_individual_deterministic() {
        let a = EvoRng::new(7).random_individual(20, 5);
        let b = EvoRng::new(7).random_individual(20, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_crossover_children() {
        let mut a: Individual = [1, 2, 3, 4].into_iter().collect();
        let mut b: Individual = [3, 4, 5, 6].into_iter().collect();
        a.set_objectives(ObjectiveVector::new(1.0, 1.0));
        b.set_objectives(ObjectiveVector::new(1.0, 1.0));

        crossover(&mut a, &mut b);

        let child_a: Vec<usize> = a.items().iter().copied().collect();
        let child_b: Vec<usize> = b.items().iter().copied().collect();
        assert_eq!(child_a, vec![3, 4]);
        assert_eq!(child_b, vec![1, 2, 5, 6]);
        assert!(!a.is_evaluated());
        assert!(!b.is_evaluated());
    }

    #[test]
    fn test_crossover_children_subset_of_parent_union() {
        let pa: Individual = [0, 2, 7, 9].into_iter().collect();
        let pb: Individual = [2, 3, 9, 11].into_iter().collect();
        let union: BTreeSet<usize> = pa.items() | pb.items();

        let mut a = pa.clone();
        let mut b = pb.clone();
        crossover(&mut a, &mut b);

        assert!(a.items().is_subset(&union));
        assert!(b.items().is_subset(&union));
    }

    #[test]
    fn test_crossover_disjoint_parents() {
        let mut a: Individual = [1, 2].into_iter().collect();
        let mut b: Individual = [3, 4].into_iter().collect();
        crossover(&mut a, &mut b);

        assert!(a.is_empty());
        assert_eq!(b.len(), 4);
    }

    #[test]
    fn test_mutation_changes_cardinality_by_at_most_one() {
        let base: Individual = [1, 4, 8, 12].into_iter().collect();
        for seed in 0..32 {
            let mut ind = base.clone();
            EvoRng::new(seed).mutate(&mut ind, 20);

            let diff = ind.len() as i64 - base.len() as i64;
            assert!((-1..=1).contains(&diff), "seed {seed} changed size by {diff}");
            assert!(ind.items().iter().all(|&id| id < 20));
            assert!(!ind.is_evaluated());
        }
    }

    #[test]
    fn test_mutation_on_full_membership() {
        // Every catalog id carried: the add branch is a guaranteed no-op and
        // the remove branch removes exactly one.
        let nbr_items = 10;
        let full: Individual = (0..nbr_items).collect();

        let mut saw_add = false;
        let mut saw_remove = false;
        for seed in 0..64 {
            let mut ind = full.clone();
            EvoRng::new(seed).mutate(&mut ind, nbr_items);

            if ind.len() == nbr_items {
                assert_eq!(ind.items(), full.items());
                saw_add = true;
            } else {
                assert_eq!(ind.len(), nbr_items - 1);
                assert!(ind.items().is_subset(full.items()));
                saw_remove = true;
            }
        }
        assert!(saw_add && saw_remove);
    }

    #[test]
    fn test_mutation_on_empty_always_adds() {
        for seed in 0..32 {
            let mut ind = Individual::empty();
            EvoRng::new(seed).mutate(&mut ind, 20);
            assert_eq!(ind.len(), 1, "seed {seed} did not add to the empty set");
        }
    }

    #[test]
    fn test_mutation_independent_of_insertion_order() {
        // Same members, different construction order: identical draws must
        // produce identical results.
        let a: Individual = [9, 1, 5].into_iter().collect();
        let b: Individual = [5, 9, 1].into_iter().collect();

        for seed in 0..16 {
            let mut ma = a.clone();
            let mut mb = b.clone();
            EvoRng::new(seed).mutate(&mut ma, 20);
            EvoRng::new(seed).mutate(&mut mb, 20);
            assert_eq!(ma.items(), mb.items());
        }
    }
}
