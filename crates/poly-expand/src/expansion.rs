//! Feature Matrix Expansion

use ndarray::{Array2, ArrayView2, Axis};
use tracing::debug;

/// Expansion of a per-row feature matrix into a wider feature space
pub trait FeatureExpansion {
    /// Expand an (N x F) feature matrix. Row order is preserved; every
    /// output row depends only on the corresponding input row.
    fn expand(&self, features: ArrayView2<'_, f64>, degree: usize, cross: bool) -> Array2<f64>;
}

/// Polynomial expansion: powers of each column up to `degree`, optionally
/// followed by the pairwise products of the original columns.
///
/// For an (N x F) input the output layout is
/// `[X, X^2, ..., X^degree, x_i * x_j for i < j]`, so at degree 2 with
/// cross terms an F-column input yields `2F + F*(F-1)/2` columns.
/// `degree = 1` without cross terms returns the input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolynomialExpansion;

impl PolynomialExpansion {
    /// Number of output columns for `input_cols` input features
    pub fn output_width(input_cols: usize, degree: usize, cross: bool) -> usize {
        let powers = degree.max(1) * input_cols;
        let pairs = if cross && input_cols > 1 {
            input_cols * (input_cols - 1) / 2
        } else {
            0
        };
        powers + pairs
    }
}

impl FeatureExpansion for PolynomialExpansion {
    fn expand(&self, features: ArrayView2<'_, f64>, degree: usize, cross: bool) -> Array2<f64> {
        let (rows, cols) = features.dim();
        let width = Self::output_width(cols, degree, cross);
        debug!(
            "Expanding feature matrix: {}x{} -> {}x{} (degree={}, cross={})",
            rows, cols, rows, width, degree, cross
        );

        let mut result = Array2::<f64>::zeros((rows, width));
        result
            .slice_mut(ndarray::s![.., ..cols])
            .assign(&features);

        let mut offset = cols;
        for power in 2..=degree {
            for col in 0..cols {
                let raised = features.index_axis(Axis(1), col).mapv(|v| v.powi(power as i32));
                result.column_mut(offset).assign(&raised);
                offset += 1;
            }
        }

        if cross && cols > 1 {
            for first in 0..cols {
                for second in (first + 1)..cols {
                    let product = &features.index_axis(Axis(1), first)
                        * &features.index_axis(Axis(1), second);
                    result.column_mut(offset).assign(&product);
                    offset += 1;
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_degree_one_no_cross_is_identity() {
        let input = array![[1.0, 2.0], [3.0, 4.0]];
        let expanded = PolynomialExpansion.expand(input.view(), 1, false);
        assert_eq!(expanded, input);
    }

    #[test]
    fn test_degree_two_with_cross() {
        let input = array![[2.0, 3.0]];
        let expanded = PolynomialExpansion.expand(input.view(), 2, true);
        // [x0, x1, x0^2, x1^2, x0*x1]
        assert_eq!(expanded, array![[2.0, 3.0, 4.0, 9.0, 6.0]]);
    }

    #[test]
    fn test_cross_terms_use_original_columns_only() {
        let input = array![[2.0, 3.0, 5.0]];
        let expanded = PolynomialExpansion.expand(input.view(), 3, true);
        // 3 originals + 3 squares + 3 cubes + 3 pairs
        assert_eq!(expanded.ncols(), 12);
        assert_eq!(expanded[[0, 9]], 6.0); // x0*x1
        assert_eq!(expanded[[0, 10]], 10.0); // x0*x2
        assert_eq!(expanded[[0, 11]], 15.0); // x1*x2
    }

    #[test]
    fn test_single_column_skips_cross_terms() {
        let input = array![[2.0], [3.0]];
        let expanded = PolynomialExpansion.expand(input.view(), 2, true);
        assert_eq!(expanded, array![[2.0, 4.0], [3.0, 9.0]]);
    }

    #[test]
    fn test_output_width() {
        assert_eq!(PolynomialExpansion::output_width(24, 2, true), 324);
        assert_eq!(PolynomialExpansion::output_width(24, 2, false), 48);
        assert_eq!(PolynomialExpansion::output_width(24, 1, false), 24);
        assert_eq!(PolynomialExpansion::output_width(1, 3, true), 3);
    }

    #[test]
    fn test_rows_expanded_independently() {
        let input = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let full = PolynomialExpansion.expand(input.view(), 2, true);
        for row in 0..3 {
            let single = input.slice(ndarray::s![row..row + 1, ..]);
            let expanded = PolynomialExpansion.expand(single, 2, true);
            assert_eq!(expanded.row(0), full.row(row));
        }
    }
}
