//! Error types for the solver.
//!
//! Every failure kind is unrecoverable for the current run: the pipeline
//! aborts on the first error and reports it with enough context to diagnose
//! the offending input line or city.

use thiserror::Error;

/// Result type alias for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;

/// Unified error type for all solver operations.
#[derive(Debug, Error)]
pub enum SolverError {
    /// An input line did not parse into exactly one id and two integer
    /// coordinates.
    #[error("line {line}: expected `id x y` integer fields, got {content:?}")]
    InputFormat {
        /// 1-based line number in the input file.
        line: usize,
        /// The offending line text.
        content: String,
    },

    /// Zero cities were presented to the tour builder.
    #[error("instance contains no cities")]
    EmptyInstance,

    /// The nearest-neighbor scan found no candidate at strictly positive
    /// distance while unvisited cities remain. Happens when every remaining
    /// city coincides with the current one.
    #[error("no unvisited city at positive distance from city {current}; remaining: {unvisited:?}")]
    DegenerateInstance {
        /// Id of the city the scan was positioned at.
        current: i64,
        /// Ids of the cities still unvisited.
        unvisited: Vec<i64>,
    },

    /// Input file missing/unreadable, or output file unwritable.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
