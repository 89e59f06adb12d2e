//! Item catalog: the static (weight, value) table the evaluator reads.

use std::ops::Index;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single knapsack item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item id, equal to its position in the catalog.
    pub id: usize,
    /// Carried weight (positive).
    pub weight: f64,
    /// Carried value (positive).
    pub value: f64,
}

/// Ordered, fixed-size mapping from item id to item.
///
/// Built once before a search starts and never mutated. Genomes store ids
/// into this table; the evaluator resolves them here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Build a catalog from explicit items. Ids must match positions.
    pub fn new(items: Vec<Item>) -> Self {
        debug_assert!(items.iter().enumerate().all(|(i, item)| item.id == i));
        Self { items }
    }

    /// Generate a random catalog of `nbr_items` items: integer weights in
    /// [1, 10], values uniform in [0, 100).
    pub fn random<R: Rng>(nbr_items: usize, rng: &mut R) -> Self {
        let items = (0..nbr_items)
            .map(|id| Item {
                id,
                weight: rng.gen_range(1..=10) as f64,
                value: rng.gen_range(0.0..100.0),
            })
            .collect();
        Self { items }
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: usize) -> Option<&Item> {
        self.items.get(id)
    }

    /// Iterate over all items in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

impl Index<usize> for ItemCatalog {
    type Output = Item;

    fn index(&self, id: usize) -> &Item {
        &self.items[id]
    }
}
