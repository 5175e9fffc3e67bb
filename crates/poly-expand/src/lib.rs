//! Polynomial Feature Expansion
//!
//! Expands a numeric feature matrix with power and pairwise product terms
//! for use in reduced-statistic distance computations.

mod expansion;

pub use expansion::{FeatureExpansion, PolynomialExpansion};
