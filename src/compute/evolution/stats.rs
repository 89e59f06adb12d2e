//! Per-generation statistics over the population's objective vectors.

use serde::{Deserialize, Serialize};

use super::individual::{Individual, ObjectiveVector};

/// Aggregate statistics for one completed generation.
///
/// Each field is computed per objective dimension independently; `std` uses
/// the population denominator (n, not n-1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Generation index, 0 for the evaluated initial population.
    pub generation: usize,
    /// Number of fitness evaluations performed this generation.
    pub nevals: usize,
    /// Arithmetic mean per dimension.
    pub avg: ObjectiveVector,
    /// Population standard deviation per dimension.
    pub std: ObjectiveVector,
    /// Minimum per dimension.
    pub min: ObjectiveVector,
    /// Maximum per dimension.
    pub max: ObjectiveVector,
}

/// Summarize an evaluated population into a [`GenerationRecord`].
pub fn summarize(generation: usize, nevals: usize, population: &[Individual]) -> GenerationRecord {
    assert!(!population.is_empty(), "cannot summarize an empty population");

    let objs: Vec<ObjectiveVector> = population
        .iter()
        .map(|ind| {
            ind.objectives()
                .expect("statistics require an evaluated population")
        })
        .collect();
    let n = objs.len() as f64;

    let mean = |f: fn(&ObjectiveVector) -> f64| objs.iter().map(f).sum::<f64>() / n;
    let avg_weight = mean(|o| o.weight);
    let avg_value = mean(|o| o.value);

    let var = |f: fn(&ObjectiveVector) -> f64, mean: f64| {
        objs.iter().map(|o| (f(o) - mean).powi(2)).sum::<f64>() / n
    };

    let fold = |f: fn(&ObjectiveVector) -> f64, pick: fn(f64, f64) -> f64| {
        objs.iter().map(f).reduce(pick).expect("non-empty population")
    };

    GenerationRecord {
        generation,
        nevals,
        avg: ObjectiveVector::new(avg_weight, avg_value),
        std: ObjectiveVector::new(
            var(|o| o.weight, avg_weight).sqrt(),
            var(|o| o.value, avg_value).sqrt(),
        ),
        min: ObjectiveVector::new(fold(|o| o.weight, f64::min), fold(|o| o.value, f64::min)),
        max: ObjectiveVector::new(fold(|o| o.weight, f64::max), fold(|o| o.value, f64::max)),
    }
}

/// Append-only log of generation records, one per completed generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Logbook {
    records: Vec<GenerationRecord>,
}

impl Logbook {
    /// Append a record.
    pub fn push(&mut self, record: GenerationRecord) {
        self.records.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the logbook is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in generation order.
    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    /// The most recent record.
    pub fn last(&self) -> Option<&GenerationRecord> {
        self.records.last()
    }

    /// The ordered (generation, max-objective) series, one pair per record.
    /// This is the input a convergence chart renders: two line series over a
    /// shared generation axis.
    pub fn max_series(&self) -> Vec<(usize, ObjectiveVector)> {
        self.records.iter().map(|r| (r.generation, r.max)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ind(weight: f64, value: f64) -> Individual {
        let mut individual = Individual::empty();
        individual.set_objectives(ObjectiveVector::new(weight, value));
        individual
    }

    #[test]
    fn test_summarize_known_population() {
        let population = vec![ind(2.0, 10.0), ind(4.0, 30.0), ind(6.0, 20.0)];
        let record = summarize(3, 2, &population);

        assert_eq!(record.generation, 3);
        assert_eq!(record.nevals, 2);
        assert_eq!(record.avg, ObjectiveVector::new(4.0, 20.0));
        assert_eq!(record.min, ObjectiveVector::new(2.0, 10.0));
        assert_eq!(record.max, ObjectiveVector::new(6.0, 30.0));
    }

    #[test]
    fn test_std_population_denominator() {
        // Weights 2 and 6: mean 4, population variance ((2-4)^2+(6-4)^2)/2 = 4.
        let population = vec![ind(2.0, 10.0), ind(6.0, 10.0)];
        let record = summarize(0, 2, &population);

        assert!((record.std.weight - 2.0).abs() < 1e-12);
        assert_eq!(record.std.value, 0.0);
    }

    #[test]
    fn test_min_max_independent_per_dimension() {
        // Lightest and most valuable are different individuals.
        let population = vec![ind(2.0, 10.0), ind(8.0, 90.0)];
        let record = summarize(0, 0, &population);

        assert_eq!(record.min, ObjectiveVector::new(2.0, 10.0));
        assert_eq!(record.max, ObjectiveVector::new(8.0, 90.0));
    }

    #[test]
    fn test_summarize_does_not_mutate() {
        let population = vec![ind(2.0, 10.0)];
        let before = population.clone();
        let _ = summarize(0, 0, &population);
        assert_eq!(population, before);
    }

    #[test]
    fn test_logbook_series() {
        let mut logbook = Logbook::default();
        logbook.push(summarize(0, 3, &[ind(2.0, 10.0)]));
        logbook.push(summarize(1, 1, &[ind(4.0, 40.0)]));

        assert_eq!(logbook.len(), 2);
        assert_eq!(logbook.last().unwrap().generation, 1);

        let series = logbook.max_series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[1], (1, ObjectiveVector::new(4.0, 40.0)));
    }
}
