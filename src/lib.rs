//! Euclidean TSP Solver Library
//!
//! A heuristic solver for the Euclidean Traveling Salesman Problem: given
//! cities with integer planar coordinates, produce a cyclic tour visiting
//! each city exactly once and report its total rounded-Euclidean cost.
//!
//! # Features
//!
//! - Flat `id x y` instance files, parsed in file order
//! - Greedy nearest-neighbor tour construction
//! - 2-opt local search with first-improvement acceptance
//! - `.tour` result files (total cost, then city ids in visitation order)
//!
//! # Example
//!
//! ```no_run
//! use tsp_solver::instance::TspInstance;
//! use tsp_solver::pipeline;
//!
//! let instance = TspInstance::from_file("cities.txt").unwrap();
//! let solution = pipeline::solve(&instance).unwrap();
//!
//! println!("Tour cost: {}", solution.cost);
//! ```

pub mod error;
pub mod heuristics;
pub mod instance;
pub mod pipeline;
pub mod solution;

pub use error::SolverError;
pub use instance::TspInstance;
pub use solution::Solution;
