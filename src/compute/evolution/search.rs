//! The (mu+lambda) generational evolution loop.

use log::{debug, info};

use crate::schema::{ConfigError, EvolutionConfig, ItemCatalog};

use super::archive::ParetoArchive;
use super::evaluate::KnapsackEvaluator;
use super::individual::Individual;
use super::select::select;
use super::stats::{GenerationRecord, Logbook, summarize};
use super::variation::{EvoRng, crossover};

/// Snapshot handed to the progress callback after each recorded generation.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    /// The record just appended to the logbook.
    pub record: &'a GenerationRecord,
    /// The archive after this generation's update.
    pub archive: &'a ParetoArchive,
}

/// Final outputs of a run.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The final population, `mu` individuals.
    pub population: Vec<Individual>,
    /// Every non-dominated solution seen across the run.
    pub archive: ParetoArchive,
    /// One record per generation, indices `0..=ngen`.
    pub logbook: Logbook,
}

impl EvolutionResult {
    /// The last generation's record (index `ngen`). Its `max` components are
    /// the run's final scalar metrics.
    pub fn final_record(&self) -> &GenerationRecord {
        self.logbook
            .last()
            .expect("a completed run records at least generation 0")
    }
}

/// Evolution engine running the (mu+lambda) NSGA-II search.
///
/// Owns the population, the offspring batch, the archive, and the logbook for
/// the duration of a run; the loop is strictly sequential and each generation
/// completes fully before the next begins.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    rng: EvoRng,
    evaluator: KnapsackEvaluator,
    population: Vec<Individual>,
    archive: ParetoArchive,
    logbook: Logbook,
    generation: usize,
}

impl EvolutionEngine {
    /// Create an engine over a catalog. Fails up front on an invalid
    /// configuration or a catalog whose size disagrees with it; no partial
    /// run state is built.
    pub fn new(catalog: ItemCatalog, config: EvolutionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if catalog.len() != config.nbr_items {
            return Err(ConfigError::CatalogSizeMismatch {
                catalog: catalog.len(),
                expected: config.nbr_items,
            });
        }

        let rng = match config.random_seed {
            Some(seed) => EvoRng::new(seed),
            None => EvoRng::random(),
        };
        let evaluator = KnapsackEvaluator::new(catalog, config.max_item, config.max_weight);

        Ok(Self {
            config,
            rng,
            evaluator,
            population: Vec::new(),
            archive: ParetoArchive::new(),
            logbook: Logbook::default(),
            generation: 0,
        })
    }

    /// Build and evaluate the initial population, seed the archive, and
    /// record generation 0.
    fn initialize(&mut self) {
        for _ in 0..self.config.mu {
            self.population.push(
                self.rng
                    .random_individual(self.config.nbr_items, self.config.ind_init_size),
            );
        }
        let nevals = evaluate_stale(&self.evaluator, &mut self.population);
        self.archive.update(&self.population);
        self.logbook.push(summarize(0, nevals, &self.population));
    }

    /// One offspring trial: crossover, mutation, or plain reproduction,
    /// decided by a single draw. The branches are mutually exclusive.
    fn produce_offspring(&mut self) -> Individual {
        let choice = self.rng.draw();
        let mu = self.population.len();

        if choice < self.config.cxpb {
            let mut a = self.population[self.rng.index(mu)].clone();
            let mut b = self.population[self.rng.index(mu)].clone();
            crossover(&mut a, &mut b);
            a
        } else if choice < self.config.cxpb + self.config.mutpb {
            let mut child = self.population[self.rng.index(mu)].clone();
            self.rng.mutate(&mut child, self.config.nbr_items);
            child
        } else {
            self.population[self.rng.index(mu)].clone()
        }
    }

    /// Run one generation: produce lambda offspring, evaluate the stale ones,
    /// truncate parents and offspring to mu survivors, update the archive,
    /// and append a record.
    fn step_generation(&mut self) {
        let mut offspring: Vec<Individual> = (0..self.config.lambda)
            .map(|_| self.produce_offspring())
            .collect();
        let nevals = evaluate_stale(&self.evaluator, &mut offspring);

        let mut pool = std::mem::take(&mut self.population);
        pool.extend(offspring);
        self.population = select(&pool, self.config.mu);

        self.generation += 1;
        self.archive.update(&self.population);

        let record = summarize(self.generation, nevals, &self.population);
        debug!(
            "generation {}: {} evaluations, max value {:.2}, archive size {}",
            self.generation,
            nevals,
            record.max.value,
            self.archive.len()
        );
        self.logbook.push(record);
    }

    /// Run the search, invoking `callback` after generation 0 and after each
    /// of the `ngen` generation steps.
    pub fn run_with_callback<F>(mut self, mut callback: F) -> EvolutionResult
    where
        F: FnMut(Progress<'_>),
    {
        info!(
            "starting run: ngen={} mu={} lambda={} cxpb={} mutpb={}",
            self.config.ngen, self.config.mu, self.config.lambda, self.config.cxpb, self.config.mutpb
        );

        self.initialize();
        callback(Progress {
            record: self.logbook.last().expect("generation 0 recorded"),
            archive: &self.archive,
        });

        for _ in 0..self.config.ngen {
            self.step_generation();
            callback(Progress {
                record: self.logbook.last().expect("generation recorded"),
                archive: &self.archive,
            });
        }

        let last = self.logbook.last().expect("generation recorded");
        info!(
            "run complete: archive size {}, final max ({:.2}, {:.2})",
            self.archive.len(),
            last.max.weight,
            last.max.value
        );

        EvolutionResult {
            population: self.population,
            archive: self.archive,
            logbook: self.logbook,
        }
    }

    /// Run the search to completion.
    pub fn run(self) -> EvolutionResult {
        self.run_with_callback(|_| {})
    }
}

/// Evaluate every individual whose cached fitness is stale. Individuals
/// cloned unmodified keep their valid fitness and are skipped, so the
/// evaluation count tracks the offspring actually changed.
fn evaluate_stale(evaluator: &KnapsackEvaluator, individuals: &mut [Individual]) -> usize {
    let mut nevals = 0;
    for individual in individuals.iter_mut() {
        if !individual.is_evaluated() {
            let objectives = evaluator.evaluate(individual);
            individual.set_objectives(objectives);
            nevals += 1;
        }
    }
    nevals
}
