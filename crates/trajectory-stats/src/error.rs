//! Statistics Error Types

use thiserror::Error;

/// Errors raised when a trajectory batch violates shape preconditions
#[derive(Debug, Clone, Error)]
pub enum StatsError {
    /// The batch contained no trajectories
    #[error("Trajectory batch is empty")]
    EmptyBatch,

    /// A trajectory has the wrong number of variable columns
    #[error("Trajectory {index} has {actual} variables, expected exactly {expected}")]
    WrongVariableCount {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A trajectory is too short for lag-1 statistics
    #[error("Trajectory {index} has {actual} time steps, need at least 2")]
    TooFewTimeSteps { index: usize, actual: usize },
}
