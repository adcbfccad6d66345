//! Module for parsing and representing Euclidean TSP instances.
//!
//! Instances are flat text files with one city per line, three
//! whitespace-separated integer fields `id x y`. File order is preserved
//! exactly: it determines the tour builder's start city and its tie-break
//! behavior.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};

/// A city in the plane. Created once at load time, never mutated.
///
/// Identity is the id as given in the file (ids are not required to be
/// contiguous); equality is structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// City identifier as given in the input file
    pub id: i64,
    /// X coordinate
    pub x: i64,
    /// Y coordinate
    pub y: i64,
}

impl City {
    pub fn new(id: i64, x: i64, y: i64) -> Self {
        City { id, x, y }
    }
}

/// Euclidean distance between two cities, rounded to the nearest integer.
///
/// Ties round half-to-even. Symmetric, and zero for coinciding coordinates;
/// the strict triangle inequality may not survive the rounding.
pub fn euclidean_distance(a: &City, b: &City) -> u64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt().round_ties_even() as u64
}

/// A complete TSP instance: the ordered city list plus a precomputed
/// distance matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TspInstance {
    /// Name of the instance (input file name)
    pub name: String,
    /// Cities in input-file order
    pub cities: Vec<City>,
    /// Precomputed distance matrix, indexed by position in `cities`
    #[serde(skip)]
    pub distance_matrix: Vec<Vec<u64>>,
}

impl TspInstance {
    /// Build an instance from an already-parsed city list.
    pub fn new(name: impl Into<String>, cities: Vec<City>) -> Self {
        let distance_matrix = Self::compute_distance_matrix(&cities);
        TspInstance {
            name: name.into(),
            cities,
            distance_matrix,
        }
    }

    /// Parse an instance from a flat `id x y` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> SolverResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_reader(name, BufReader::new(file))
    }

    /// Parse an instance from any buffered reader.
    ///
    /// Blank lines are skipped (the format tolerates a trailing newline);
    /// any other line must split into exactly three integer fields.
    pub fn from_reader<R: BufRead>(name: impl Into<String>, reader: R) -> SolverResult<Self> {
        let mut cities = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 3 {
                return Err(SolverError::InputFormat {
                    line: line_no + 1,
                    content: line.to_string(),
                });
            }

            let mut parsed = fields.iter().map(|f| f.parse::<i64>());
            match (parsed.next(), parsed.next(), parsed.next()) {
                (Some(Ok(id)), Some(Ok(x)), Some(Ok(y))) => cities.push(City::new(id, x, y)),
                _ => {
                    return Err(SolverError::InputFormat {
                        line: line_no + 1,
                        content: line.to_string(),
                    })
                }
            }
        }

        let instance = Self::new(name, cities);
        debug!(
            "parsed instance {:?}: {} cities",
            instance.name,
            instance.dimension()
        );
        Ok(instance)
    }

    /// Compute the dense Euclidean distance matrix.
    fn compute_distance_matrix(cities: &[City]) -> Vec<Vec<u64>> {
        let n = cities.len();
        let mut matrix = vec![vec![0u64; n]; n];

        for i in 0..n {
            for j in 0..n {
                if i != j {
                    matrix[i][j] = euclidean_distance(&cities[i], &cities[j]);
                }
            }
        }

        matrix
    }

    /// Get the distance between two cities by position.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> u64 {
        self.distance_matrix[i][j]
    }

    /// Number of cities in the instance.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.cities.len()
    }

    /// Total cyclic cost of a tour given as positions into `cities`:
    /// the sum of consecutive edges plus the wrap edge from the last city
    /// back to the first. A tour of fewer than two cities costs 0.
    pub fn tour_cost(&self, tour: &[usize]) -> u64 {
        if tour.len() < 2 {
            return 0;
        }

        let mut cost = 0;
        for i in 0..tour.len() - 1 {
            cost += self.distance(tour[i], tour[i + 1]);
        }

        cost + self.distance(tour[tour.len() - 1], tour[0])
    }

    /// Get statistics about the instance.
    pub fn statistics(&self) -> InstanceStatistics {
        let min_x = self.cities.iter().map(|c| c.x).min().unwrap_or(0);
        let max_x = self.cities.iter().map(|c| c.x).max().unwrap_or(0);
        let min_y = self.cities.iter().map(|c| c.y).min().unwrap_or(0);
        let max_y = self.cities.iter().map(|c| c.y).max().unwrap_or(0);

        let mut total = 0u64;
        let mut count = 0u64;
        let mut max_distance = 0u64;
        for i in 0..self.dimension() {
            for j in i + 1..self.dimension() {
                let d = self.distance(i, j);
                total += d;
                count += 1;
                max_distance = max_distance.max(d);
            }
        }
        let avg_distance = if count > 0 {
            total as f64 / count as f64
        } else {
            0.0
        };

        InstanceStatistics {
            name: self.name.clone(),
            dimension: self.dimension(),
            min_x,
            max_x,
            min_y,
            max_y,
            avg_distance,
            max_distance,
        }
    }
}

/// Statistics about a TSP instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceStatistics {
    pub name: String,
    pub dimension: usize,
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
    pub avg_distance: f64,
    pub max_distance: u64,
}

impl std::fmt::Display for InstanceStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Instance: {}", self.name)?;
        writeln!(f, "  Cities: {}", self.dimension)?;
        writeln!(
            f,
            "  Bounding box: [{}, {}] x [{}, {}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )?;
        writeln!(f, "  Avg distance: {:.2}", self.avg_distance)?;
        writeln!(f, "  Max distance: {}", self.max_distance)
    }
}
