//! Configuration types for evolutionary knapsack search runs.

use serde::{Deserialize, Serialize};

/// Top-level run configuration for the (mu+lambda) NSGA-II search.
///
/// Defaults reproduce the canonical experiment: 20 items, populations of 50
/// parents and 100 offspring over 100 generations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Number of generations to run. Generation 0 (the evaluated initial
    /// population) is recorded separately, so the logbook ends up with
    /// `ngen + 1` records.
    #[serde(default = "default_ngen")]
    pub ngen: usize,
    /// Parent population size.
    #[serde(default = "default_mu")]
    pub mu: usize,
    /// Offspring produced per generation.
    #[serde(default = "default_lambda")]
    pub lambda: usize,
    /// Probability that an offspring trial performs crossover.
    #[serde(default = "default_cxpb")]
    pub cxpb: f64,
    /// Probability that an offspring trial performs mutation, drawn only when
    /// crossover was not chosen. Crossover and mutation are never composed on
    /// the same trial.
    #[serde(default = "default_mutpb")]
    pub mutpb: f64,
    /// Number of items in the catalog. Genome ids range over `0..nbr_items`.
    #[serde(default = "default_nbr_items")]
    pub nbr_items: usize,
    /// Item draws (with replacement) per initial individual. Duplicates
    /// collapse, so effective initial size may be smaller.
    #[serde(default = "default_ind_init_size")]
    pub ind_init_size: usize,
    /// Maximum feasible item count before the evaluator's penalty applies.
    #[serde(default = "default_max_item")]
    pub max_item: usize,
    /// Maximum feasible total weight before the evaluator's penalty applies.
    #[serde(default = "default_max_weight")]
    pub max_weight: f64,
    /// Seed for the evolution RNG stream. `None` seeds from entropy, which
    /// forfeits run reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            ngen: default_ngen(),
            mu: default_mu(),
            lambda: default_lambda(),
            cxpb: default_cxpb(),
            mutpb: default_mutpb(),
            nbr_items: default_nbr_items(),
            ind_init_size: default_ind_init_size(),
            max_item: default_max_item(),
            max_weight: default_max_weight(),
            random_seed: None,
        }
    }
}

fn default_ngen() -> usize {
    100
}
fn default_mu() -> usize {
    50
}
fn default_lambda() -> usize {
    100
}
fn default_cxpb() -> f64 {
    0.7
}
fn default_mutpb() -> f64 {
    0.2
}
fn default_nbr_items() -> usize {
    20
}
fn default_ind_init_size() -> usize {
    5
}
fn default_max_item() -> usize {
    50
}
fn default_max_weight() -> f64 {
    50.0
}

impl EvolutionConfig {
    /// Validate run parameters. Called before any search state is built; an
    /// invalid configuration never produces a partial run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (param, n) in [
            ("ngen", self.ngen),
            ("mu", self.mu),
            ("lambda", self.lambda),
            ("nbr_items", self.nbr_items),
        ] {
            if n == 0 {
                return Err(ConfigError::NonPositive { param });
            }
        }
        for (param, p) in [("cxpb", self.cxpb), ("mutpb", self.mutpb)] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::ProbabilityOutOfRange { param, value: p });
            }
        }
        if self.cxpb + self.mutpb > 1.0 {
            return Err(ConfigError::VariationBudgetExceeded {
                cxpb: self.cxpb,
                mutpb: self.mutpb,
            });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{param} must be positive")]
    NonPositive { param: &'static str },
    #[error("{param} must lie in [0, 1], got {value}")]
    ProbabilityOutOfRange { param: &'static str, value: f64 },
    #[error("cxpb + mutpb must not exceed 1.0, got {cxpb} + {mutpb}")]
    VariationBudgetExceeded { cxpb: f64, mutpb: f64 },
    #[error("catalog holds {catalog} items but the configuration expects {expected}")]
    CatalogSizeMismatch { catalog: usize, expected: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EvolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_sizes_rejected() {
        for field in ["ngen", "mu", "lambda", "nbr_items"] {
            let mut config = EvolutionConfig::default();
            match field {
                "ngen" => config.ngen = 0,
                "mu" => config.mu = 0,
                "lambda" => config.lambda = 0,
                _ => config.nbr_items = 0,
            }
            assert_eq!(
                config.validate(),
                Err(ConfigError::NonPositive { param: field })
            );
        }
    }

    #[test]
    fn test_probability_bounds() {
        let config = EvolutionConfig {
            cxpb: 1.2,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ProbabilityOutOfRange {
                param: "cxpb",
                value: 1.2
            })
        );
    }

    #[test]
    fn test_variation_budget() {
        let config = EvolutionConfig {
            cxpb: 0.7,
            mutpb: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::VariationBudgetExceeded { .. })
        ));
    }

    #[test]
    fn test_serde_defaults() {
        let config: EvolutionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.ngen, 100);
        assert_eq!(config.mu, 50);
        assert_eq!(config.lambda, 100);
        assert_eq!(config.random_seed, None);
    }
}
