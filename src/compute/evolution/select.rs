//! NSGA-II selection: fast non-dominated sorting and crowding distance.
//!
//! The truncation rule takes whole fronts in rank order and breaks the tie on
//! the overflowing front by descending crowding distance, preferring the more
//! isolated solutions. All tie-breaks are stable in pool order, so selection
//! over a fixed pool is fully deterministic.

use std::cmp::Ordering;

use super::individual::{Individual, ObjectiveVector};

fn objectives(individual: &Individual) -> ObjectiveVector {
    individual
        .objectives()
        .expect("selection pool must be fully evaluated")
}

/// Partition `pool` into dominance fronts F0, F1, F2, ...
///
/// Returned fronts hold indices into `pool`. F0 members are dominated by
/// nobody in the pool; Fn members are dominated only by members of earlier
/// fronts. Every pool index appears in exactly one front. Computed by the
/// standard domination-count / dominated-set propagation.
pub fn non_dominated_sort(pool: &[Individual]) -> Vec<Vec<usize>> {
    let n = pool.len();
    let objs: Vec<ObjectiveVector> = pool.iter().map(objectives).collect();

    let mut domination_count = vec![0usize; n];
    let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 0..n {
        for j in (i + 1)..n {
            if objs[i].dominates(&objs[j]) {
                dominated[i].push(j);
                domination_count[j] += 1;
            } else if objs[j].dominates(&objs[i]) {
                dominated[j].push(i);
                domination_count[i] += 1;
            }
        }
    }

    let mut fronts = Vec::new();
    let mut current: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();
    while !current.is_empty() {
        let mut next = Vec::new();
        for &i in &current {
            for &j in &dominated[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next.push(j);
                }
            }
        }
        next.sort_unstable();
        fronts.push(std::mem::replace(&mut current, next));
    }
    fronts
}

/// Crowding distance for the members of one front.
///
/// Returns distances parallel to `front`. Per objective dimension the front
/// is sorted by that objective; the two boundary members get infinite
/// distance and interior members accumulate the gap between their neighbors,
/// normalized by the objective's range across the front. A degenerate zero
/// range contributes nothing for that dimension.
pub fn crowding_distance(pool: &[Individual], front: &[usize]) -> Vec<f64> {
    let m = front.len();
    if m <= 2 {
        return vec![f64::INFINITY; m];
    }

    let objs: Vec<ObjectiveVector> = front.iter().map(|&i| objectives(&pool[i])).collect();
    let mut distance = vec![0.0f64; m];

    for axis in 0..2 {
        let key = |k: usize| -> f64 {
            if axis == 0 { objs[k].weight } else { objs[k].value }
        };

        let mut order: Vec<usize> = (0..m).collect();
        order.sort_by(|&a, &b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal));

        distance[order[0]] = f64::INFINITY;
        distance[order[m - 1]] = f64::INFINITY;

        let range = key(order[m - 1]) - key(order[0]);
        if range <= 0.0 {
            continue;
        }
        for w in 1..m - 1 {
            distance[order[w]] += (key(order[w + 1]) - key(order[w - 1])) / range;
        }
    }
    distance
}

/// NSGA-II truncation: select `k` survivors from `pool`.
///
/// Whole fronts are taken in rank order until the next front would overflow
/// `k`; that front is then cut by descending crowding distance, remaining
/// ties broken by pool order. A pool smaller than `k` is a contract violation
/// in offspring production and panics.
pub fn select(pool: &[Individual], k: usize) -> Vec<Individual> {
    assert!(
        pool.len() >= k,
        "selection pool holds {} individuals but {} were requested",
        pool.len(),
        k
    );

    let mut survivors = Vec::with_capacity(k);
    for front in non_dominated_sort(pool) {
        if survivors.len() + front.len() <= k {
            survivors.extend(front.iter().map(|&i| pool[i].clone()));
            if survivors.len() == k {
                break;
            }
        } else {
            let distance = crowding_distance(pool, &front);
            let mut order: Vec<usize> = (0..front.len()).collect();
            order.sort_by(|&a, &b| {
                distance[b]
                    .partial_cmp(&distance[a])
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| front[a].cmp(&front[b]))
            });

            let remaining = k - survivors.len();
            survivors.extend(order.into_iter().take(remaining).map(|w| pool[front[w]].clone()));
            break;
        }
    }
    survivors
}
