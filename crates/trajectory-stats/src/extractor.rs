//! Summary-Statistic Extraction
//!
//! Reduces each (T x 5) trajectory in a batch to a 24-feature row, then
//! applies a polynomial expansion so downstream distance computations run
//! in the reduced statistic space.

use crate::config::StatsConfig;
use crate::error::StatsError;
use crate::moments::{auto_covariance, cross_covariance, mean, pearson, population_variance};
use ndarray::{Array2, ArrayView1};
use poly_expand::{FeatureExpansion, PolynomialExpansion};
use tracing::debug;

/// Number of variable columns each trajectory must carry, including the
/// excluded index column 0
pub const TRAJECTORY_VARIABLES: usize = 5;

/// Raw feature count per trajectory before expansion:
/// 4 means + 4 variances + 4 autocovariances + 6 correlations
/// + 6 cross-covariances
pub const RAW_DIMENSION: usize = 24;

/// Variable pairs for the correlation and cross-covariance features.
/// Fixed over columns 1..=4; column 0 is a time/forcing index and is
/// excluded from all statistics.
pub const VARIABLE_PAIRS: [(usize, usize); 6] = [(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)];

/// Single-method statistics protocol invoked by the inference engine
pub trait SummaryStatistics {
    /// Feature representation produced from a batch
    type Output;

    /// Reduce a batch of trajectories to its feature representation
    fn statistics(&self, trajectories: &[Array2<f64>]) -> Result<Self::Output, StatsError>;
}

fn validate(index: usize, trajectory: &Array2<f64>) -> Result<(), StatsError> {
    let (steps, variables) = trajectory.dim();
    if variables != TRAJECTORY_VARIABLES {
        return Err(StatsError::WrongVariableCount {
            index,
            expected: TRAJECTORY_VARIABLES,
            actual: variables,
        });
    }
    if steps < 2 {
        return Err(StatsError::TooFewTimeSteps {
            index,
            actual: steps,
        });
    }
    Ok(())
}

/// One 24-feature row for a validated trajectory, laid out as
/// mean, variance, autocovariance, correlation, cross-covariance.
fn summary_row(trajectory: &Array2<f64>) -> [f64; RAW_DIMENSION] {
    // Column 0 is dropped; columns 1..=4 drive every feature.
    let columns: Vec<Vec<f64>> = (1..TRAJECTORY_VARIABLES)
        .map(|c| trajectory.column(c).to_vec())
        .collect();

    let mut row = [0.0; RAW_DIMENSION];
    let mut idx = 0;

    for column in &columns {
        row[idx] = mean(column);
        idx += 1;
    }
    for column in &columns {
        row[idx] = population_variance(column);
        idx += 1;
    }
    for column in &columns {
        row[idx] = auto_covariance(column, 1);
        idx += 1;
    }
    for &(a, b) in &VARIABLE_PAIRS {
        row[idx] = pearson(&columns[a - 1], &columns[b - 1]);
        idx += 1;
    }
    for &(a, b) in &VARIABLE_PAIRS {
        row[idx] = cross_covariance(&columns[a - 1], &columns[b - 1]);
        idx += 1;
    }

    row
}

/// Assemble the (N x 24) pre-expansion feature matrix for a batch.
/// Row i depends only on trajectory i; input order is preserved.
pub fn raw_feature_matrix(trajectories: &[Array2<f64>]) -> Result<Array2<f64>, StatsError> {
    if trajectories.is_empty() {
        return Err(StatsError::EmptyBatch);
    }

    let mut result = Array2::<f64>::zeros((trajectories.len(), RAW_DIMENSION));
    for (index, trajectory) in trajectories.iter().enumerate() {
        validate(index, trajectory)?;
        let row = summary_row(trajectory);
        result.row_mut(index).assign(&ArrayView1::from(&row[..]));
    }
    Ok(result)
}

/// Full summary-statistic extractor: 24 raw features per trajectory
/// followed by the injected polynomial expansion.
pub struct TrajectoryStatistics<E: FeatureExpansion = PolynomialExpansion> {
    config: StatsConfig,
    expansion: E,
}

impl TrajectoryStatistics {
    /// Create an extractor using the standard polynomial expansion
    pub fn new(config: StatsConfig) -> Self {
        Self {
            config,
            expansion: PolynomialExpansion,
        }
    }
}

impl Default for TrajectoryStatistics {
    fn default() -> Self {
        Self::new(StatsConfig::default())
    }
}

impl<E: FeatureExpansion> TrajectoryStatistics<E> {
    /// Create an extractor with a custom expansion step
    pub fn with_expansion(config: StatsConfig, expansion: E) -> Self {
        Self { config, expansion }
    }

    fn expanded_features(&self, trajectories: &[Array2<f64>]) -> Result<Array2<f64>, StatsError> {
        let raw = raw_feature_matrix(trajectories)?;
        debug!(
            "Computed {} summary-statistic rows (degree={}, cross={})",
            trajectories.len(),
            self.config.degree,
            self.config.cross
        );
        Ok(self
            .expansion
            .expand(raw.view(), self.config.degree, self.config.cross))
    }
}

impl<E: FeatureExpansion> SummaryStatistics for TrajectoryStatistics<E> {
    type Output = Array2<f64>;

    fn statistics(&self, trajectories: &[Array2<f64>]) -> Result<Array2<f64>, StatsError> {
        self.expanded_features(trajectories)
    }
}

/// Pass-through placeholder: returns the first trajectory of the batch
/// unchanged and ignores everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStatistics;

impl SummaryStatistics for IdentityStatistics {
    type Output = Array2<f64>;

    fn statistics(&self, trajectories: &[Array2<f64>]) -> Result<Array2<f64>, StatsError> {
        trajectories.first().cloned().ok_or(StatsError::EmptyBatch)
    }
}

/// Combined extractor: the expanded feature matrix paired with the first
/// trajectory verbatim, for downstream consumers that need both the
/// summary statistics and a raw reference trajectory.
pub struct CombinedStatistics<E: FeatureExpansion = PolynomialExpansion> {
    inner: TrajectoryStatistics<E>,
}

impl CombinedStatistics {
    /// Create a combined extractor using the standard polynomial expansion
    pub fn new(config: StatsConfig) -> Self {
        Self {
            inner: TrajectoryStatistics::new(config),
        }
    }
}

impl<E: FeatureExpansion> CombinedStatistics<E> {
    /// Create a combined extractor with a custom expansion step
    pub fn with_expansion(config: StatsConfig, expansion: E) -> Self {
        Self {
            inner: TrajectoryStatistics::with_expansion(config, expansion),
        }
    }
}

impl<E: FeatureExpansion> SummaryStatistics for CombinedStatistics<E> {
    type Output = (Array2<f64>, Array2<f64>);

    fn statistics(
        &self,
        trajectories: &[Array2<f64>],
    ) -> Result<(Array2<f64>, Array2<f64>), StatsError> {
        let features = self.inner.expanded_features(trajectories)?;
        // Non-empty is guaranteed once feature extraction succeeded.
        let first = trajectories[0].clone();
        Ok((features, first))
    }
}
