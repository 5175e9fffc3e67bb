//! Trajectory Summary Statistics
//!
//! Reduces multivariate time-series trajectories to fixed-length feature
//! vectors (moments, lag-1 autocovariances, pairwise correlations and
//! lag-1 cross-covariances, followed by a polynomial expansion) so that
//! simulated and observed data can be compared in a reduced statistic
//! space during likelihood-free inference.

mod config;
mod error;
mod extractor;
mod moments;

pub use config::StatsConfig;
pub use error::StatsError;
pub use extractor::{
    raw_feature_matrix, CombinedStatistics, IdentityStatistics, SummaryStatistics,
    TrajectoryStatistics, RAW_DIMENSION, TRAJECTORY_VARIABLES, VARIABLE_PAIRS,
};
pub use moments::{auto_covariance, cross_covariance, pearson};
