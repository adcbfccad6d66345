//! The two-stage solver pipeline.
//!
//! Sequences nearest-neighbor construction and 2-opt improvement; the first
//! failure from either stage aborts the run.

use std::time::Instant;

use log::info;

use crate::error::SolverResult;
use crate::heuristics::construction::{ConstructionHeuristic, NearestNeighborHeuristic};
use crate::heuristics::local_search::{LocalSearch, TwoOptSearch};
use crate::instance::TspInstance;
use crate::solution::Solution;

/// Run the full pipeline on an instance: build an initial tour with
/// nearest-neighbor, then improve it with 2-opt until no improving move
/// remains. Wall-clock time for both stages is recorded on the returned
/// solution.
pub fn solve(instance: &TspInstance) -> SolverResult<Solution> {
    let start = Instant::now();

    let nn = NearestNeighborHeuristic::new();
    let mut solution = nn.construct(instance)?;
    info!(
        "initial tour: cost={} ({} cities)",
        solution.cost,
        instance.dimension()
    );

    let two_opt = TwoOptSearch::new();
    two_opt.improve(instance, &mut solution);
    info!(
        "improved tour: cost={} after {} accepted moves",
        solution.cost,
        solution.iterations.unwrap_or(0)
    );

    solution.algorithm = "NearestNeighbor+2-Opt".to_string();
    solution.computation_time = start.elapsed().as_secs_f64();
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use crate::instance::City;

    #[test]
    fn test_pipeline_equals_build_then_improve() {
        let instance = TspInstance::new(
            "test",
            vec![
                City::new(1, 0, 0),
                City::new(2, 40, 2),
                City::new(3, 21, 35),
                City::new(4, 3, 18),
                City::new(5, 36, 20),
                City::new(6, 15, 7),
                City::new(7, 28, 28),
            ],
        );

        let mut expected = NearestNeighborHeuristic::new().construct(&instance).unwrap();
        TwoOptSearch::new().improve(&instance, &mut expected);

        let solution = solve(&instance).unwrap();
        assert_eq!(solution.tour, expected.tour);
        assert_eq!(solution.cost, expected.cost);
        assert_eq!(solution.algorithm, "NearestNeighbor+2-Opt");
        assert!(solution.is_permutation(&instance));
    }

    #[test]
    fn test_random_instances_stay_permutations_and_never_worsen() {
        use rand::prelude::*;
        use rand_chacha::ChaCha8Rng;
        use std::collections::HashSet;

        for seed in 0..5u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let n = rng.gen_range(5..40);

            // Sample distinct grid points 20 apart so every pairwise
            // distance is positive and the builder cannot degenerate
            let mut seen = HashSet::new();
            let mut cities = Vec::with_capacity(n);
            while cities.len() < n {
                let x = rng.gen_range(0..50i64) * 20;
                let y = rng.gen_range(0..50i64) * 20;
                if seen.insert((x, y)) {
                    cities.push(City::new(cities.len() as i64 + 1, x, y));
                }
            }
            let instance = TspInstance::new("random", cities);

            let initial = NearestNeighborHeuristic::new().construct(&instance).unwrap();
            assert!(initial.is_permutation(&instance));
            assert_eq!(initial.cost, instance.tour_cost(&initial.tour));

            let solution = solve(&instance).unwrap();
            assert!(solution.cost <= initial.cost);
            assert!(solution.is_permutation(&instance));
            assert_eq!(solution.cost, instance.tour_cost(&solution.tour));

            // Convergence is a fixed point: a second improvement pass
            // accepts nothing
            let mut converged = solution.clone();
            let moved = TwoOptSearch::new().improve(&instance, &mut converged);
            assert!(!moved);
            assert_eq!(converged.tour, solution.tour);
        }
    }

    #[test]
    fn test_pipeline_forwards_builder_failures() {
        let empty = TspInstance::new("empty", Vec::new());
        assert!(matches!(solve(&empty), Err(SolverError::EmptyInstance)));

        let degenerate = TspInstance::new(
            "degenerate",
            vec![City::new(1, 2, 2), City::new(2, 2, 2)],
        );
        assert!(matches!(
            solve(&degenerate),
            Err(SolverError::DegenerateInstance { .. })
        ));
    }
}
