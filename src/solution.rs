//! Solution representation and output for the TSP solver.
//!
//! A solution carries the tour as a sequence of positions into the
//! instance's city list, together with its cached cyclic cost. The cached
//! cost must stay consistent with the tour it accompanies; `validate`
//! recomputes it from scratch.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SolverResult;
use crate::instance::TspInstance;

/// Represents a solution tour over a TSP instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// The tour as a sequence of city positions (implicitly cyclic)
    pub tour: Vec<usize>,
    /// Total cyclic tour cost, including the wrap edge
    pub cost: u64,
    /// Algorithm that generated this solution
    pub algorithm: String,
    /// Computation time in seconds
    pub computation_time: f64,
    /// Number of accepted improvement moves (if applicable)
    pub iterations: Option<usize>,
}

impl Solution {
    /// Create a solution from a tour, computing its cost.
    pub fn from_tour(instance: &TspInstance, tour: Vec<usize>, algorithm: &str) -> Self {
        let cost = instance.tour_cost(&tour);
        Solution {
            tour,
            cost,
            algorithm: algorithm.to_string(),
            computation_time: 0.0,
            iterations: None,
        }
    }

    /// Recompute the cached cost from the tour.
    pub fn validate(&mut self, instance: &TspInstance) {
        self.cost = instance.tour_cost(&self.tour);
    }

    /// Check that the tour visits every city of the instance exactly once.
    pub fn is_permutation(&self, instance: &TspInstance) -> bool {
        if self.tour.len() != instance.dimension() {
            return false;
        }

        let unique: HashSet<usize> = self.tour.iter().cloned().collect();
        unique.len() == instance.dimension()
    }

    /// Append this solution to `<input_path>.tour`.
    ///
    /// The block format is the total integer cost on the first line followed
    /// by one city id per line in visitation order. The file is opened in
    /// append mode: re-running on the same input accumulates result blocks.
    /// Returns the path written to.
    pub fn append_tour_file<P: AsRef<Path>>(
        &self,
        instance: &TspInstance,
        input_path: P,
    ) -> SolverResult<PathBuf> {
        let mut out_name = OsString::from(input_path.as_ref().as_os_str());
        out_name.push(".tour");
        let out_path = PathBuf::from(out_name);

        let mut block = self.cost.to_string();
        for &pos in &self.tour {
            block.push('\n');
            block.push_str(&instance.cities[pos].id.to_string());
        }
        block.push('\n');

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&out_path)?;
        file.write_all(block.as_bytes())?;

        Ok(out_path)
    }

    /// City ids in visitation order.
    pub fn city_ids(&self, instance: &TspInstance) -> Vec<i64> {
        self.tour
            .iter()
            .map(|&pos| instance.cities[pos].id)
            .collect()
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution ({})", self.algorithm)?;
        writeln!(f, "  Cost: {}", self.cost)?;
        writeln!(f, "  Time: {:.4}s", self.computation_time)?;
        if let Some(iter) = self.iterations {
            writeln!(f, "  Accepted moves: {}", iter)?;
        }
        writeln!(f, "  Tour: {:?}", self.tour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::City;

    fn square_instance() -> TspInstance {
        TspInstance::new(
            "square",
            vec![
                City::new(1, 0, 0),
                City::new(2, 0, 10),
                City::new(3, 10, 10),
                City::new(4, 10, 0),
            ],
        )
    }

    #[test]
    fn test_from_tour_computes_cost() {
        let instance = square_instance();
        let solution = Solution::from_tour(&instance, vec![0, 1, 2, 3], "test");
        assert_eq!(solution.cost, 40);
    }

    #[test]
    fn test_is_permutation() {
        let instance = square_instance();

        let complete = Solution::from_tour(&instance, vec![2, 0, 3, 1], "test");
        assert!(complete.is_permutation(&instance));

        let short = Solution::from_tour(&instance, vec![0, 1, 2], "test");
        assert!(!short.is_permutation(&instance));

        let duplicated = Solution::from_tour(&instance, vec![0, 1, 2, 2], "test");
        assert!(!duplicated.is_permutation(&instance));
    }

    #[test]
    fn test_validate_refreshes_cost() {
        let instance = square_instance();
        let mut solution = Solution::from_tour(&instance, vec![0, 1, 2, 3], "test");
        solution.tour = vec![0, 2, 1, 3];
        solution.validate(&instance);
        assert_eq!(solution.cost, 48);
    }

    #[test]
    fn test_append_tour_file_accumulates_blocks() {
        let instance = square_instance();
        let solution = Solution::from_tour(&instance, vec![0, 1, 2, 3], "test");

        let input_path =
            std::env::temp_dir().join(format!("tsp_solver_out_{}.txt", std::process::id()));
        let tour_path = input_path.with_file_name(format!(
            "{}.tour",
            input_path.file_name().unwrap().to_string_lossy()
        ));
        let _ = std::fs::remove_file(&tour_path);

        let written = solution.append_tour_file(&instance, &input_path).unwrap();
        assert_eq!(written, tour_path);
        solution.append_tour_file(&instance, &input_path).unwrap();

        let contents = std::fs::read_to_string(&tour_path).unwrap();
        assert_eq!(contents, "40\n1\n2\n3\n4\n40\n1\n2\n3\n4\n");

        let _ = std::fs::remove_file(&tour_path);
    }
}
