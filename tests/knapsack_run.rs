//! End-to-end run of the canonical knapsack experiment.

use rand::SeedableRng;
use rand::rngs::StdRng;

use knapsack_nsga2::compute::evolution::PENALTY_WEIGHT;
use knapsack_nsga2::{EvolutionConfig, EvolutionEngine, EvolutionResult, ItemCatalog};

fn canonical_catalog() -> ItemCatalog {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(64);
    ItemCatalog::random(20, &mut rng)
}

fn canonical_config() -> EvolutionConfig {
    EvolutionConfig {
        ngen: 100,
        mu: 50,
        lambda: 100,
        cxpb: 0.7,
        mutpb: 0.2,
        nbr_items: 20,
        ind_init_size: 5,
        max_item: 50,
        max_weight: 50.0,
        random_seed: Some(64),
    }
}

fn run_canonical() -> EvolutionResult {
    let engine =
        EvolutionEngine::new(canonical_catalog(), canonical_config()).expect("valid configuration");
    engine.run()
}

#[test]
fn full_run_shape() {
    let result = run_canonical();

    assert_eq!(result.population.len(), 50);
    // Generation 0 plus 100 generation steps.
    assert_eq!(result.logbook.len(), 101);
    assert_eq!(result.final_record().generation, 100);

    assert!(!result.archive.is_empty());
    assert!(result.archive.is_non_dominated());
}

#[test]
fn full_run_respects_feasibility_limits() {
    let result = run_canonical();

    // Archived solutions are feasible: a penalized individual is dominated by
    // the empty knapsack and can never enter the front.
    for member in result.archive.iter() {
        let objectives = member.objectives().unwrap();
        assert!(objectives.weight < PENALTY_WEIGHT);
        assert!(objectives.weight <= 50.0);
        assert!(member.len() <= 50);
    }

    // Evaluation counts stay within the offspring budget.
    for record in result.logbook.records() {
        assert!(record.nevals <= 100);
    }
}

#[test]
fn archive_best_value_is_monotonic() {
    let engine =
        EvolutionEngine::new(canonical_catalog(), canonical_config()).expect("valid configuration");

    let mut best_values = Vec::new();
    let _ = engine.run_with_callback(|progress| {
        best_values.push(progress.archive.best_value().unwrap());
    });

    assert_eq!(best_values.len(), 101);
    assert!(best_values.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn identically_seeded_runs_are_identical() {
    let a = run_canonical();
    let b = run_canonical();

    assert_eq!(a.logbook, b.logbook);
    assert_eq!(a.population, b.population);
    assert_eq!(a.archive.members(), b.archive.members());
}

#[test]
fn archive_export_writes_json() {
    let result = run_canonical();

    let dir = std::env::temp_dir().join("knapsack_nsga2_test_export");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("front.json");

    result.archive.export(&path).unwrap();
    let json = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), result.archive.len());
}
