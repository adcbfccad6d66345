//! Tour construction heuristics.

use std::time::Instant;

use log::debug;

use crate::error::{SolverError, SolverResult};
use crate::instance::TspInstance;
use crate::solution::Solution;

/// Trait for tour construction heuristics
pub trait ConstructionHeuristic {
    fn construct(&self, instance: &TspInstance) -> SolverResult<Solution>;
    fn name(&self) -> &str;
}

// ==================== Nearest Neighbor ====================

/// Greedy nearest-neighbor construction.
///
/// Starts at the first city in input order and repeatedly steps to the
/// closest unvisited city. Candidates at distance 0 from the current city
/// never qualify; among equal distances the first city in input order wins.
/// The tour closes with the edge from the last visited city back to the
/// start.
pub struct NearestNeighborHeuristic;

impl NearestNeighborHeuristic {
    pub fn new() -> Self {
        NearestNeighborHeuristic
    }

    /// Scan the unvisited cities in input order for the one at the strictly
    /// smallest positive distance from `current`. The strict `<` keeps the
    /// first city that reaches the minimum.
    fn find_nearest(&self, instance: &TspInstance, current: usize, visited: &[bool]) -> Option<usize> {
        let mut best_idx = None;
        let mut best_dist = u64::MAX;

        for idx in 0..instance.dimension() {
            if visited[idx] {
                continue;
            }
            let d = instance.distance(current, idx);
            if d > 0 && d < best_dist {
                best_dist = d;
                best_idx = Some(idx);
            }
        }

        best_idx
    }
}

impl Default for NearestNeighborHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstructionHeuristic for NearestNeighborHeuristic {
    fn construct(&self, instance: &TspInstance) -> SolverResult<Solution> {
        let start = Instant::now();
        let n = instance.dimension();

        if n == 0 {
            return Err(SolverError::EmptyInstance);
        }

        let mut visited = vec![false; n];
        let mut tour = Vec::with_capacity(n);
        let mut cost = 0u64;

        let mut current = 0;
        visited[0] = true;
        tour.push(0);

        while tour.len() < n {
            let next = self
                .find_nearest(instance, current, &visited)
                .ok_or_else(|| SolverError::DegenerateInstance {
                    current: instance.cities[current].id,
                    unvisited: visited
                        .iter()
                        .enumerate()
                        .filter(|(_, &v)| !v)
                        .map(|(idx, _)| instance.cities[idx].id)
                        .collect(),
                })?;

            cost += instance.distance(current, next);
            visited[next] = true;
            tour.push(next);
            current = next;
        }

        // Closing edge back to the start city
        cost += instance.distance(tour[0], tour[n - 1]);
        debug_assert_eq!(cost, instance.tour_cost(&tour));

        debug!("nearest-neighbor tour built: n={} cost={}", n, cost);

        let mut solution = Solution {
            tour,
            cost,
            algorithm: self.name().to_string(),
            computation_time: 0.0,
            iterations: None,
        };
        solution.computation_time = start.elapsed().as_secs_f64();
        Ok(solution)
    }

    fn name(&self) -> &str {
        "NearestNeighbor"
    }
}
