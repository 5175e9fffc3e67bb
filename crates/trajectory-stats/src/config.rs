//! Extractor configuration

use serde::{Deserialize, Serialize};

/// Configuration for the polynomial expansion step
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Polynomial expansion degree
    pub degree: usize,

    /// Include pairwise cross-terms in the expansion
    pub cross: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            degree: 2,
            cross: true,
        }
    }
}

impl StatsConfig {
    /// Config that leaves the 24 raw features unexpanded
    pub fn raw() -> Self {
        Self {
            degree: 1,
            cross: false,
        }
    }
}
