//! Pearson correlation and simple linear regression over two columns.
//!
//! ## Formulas
//! With `n` paired samples:
//! - r = (nΣxy − ΣxΣy) / √((nΣx² − (Σx)²)(nΣy² − (Σy)²))
//! - slope = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²)
//! - intercept = (Σy − slope·Σx) / n
//!
//! Raw sums are accumulated in `f64` in a single pass. When the denominator
//! of r is exactly zero (no samples, or a constant column) the coefficient,
//! slope and intercept are all reported as 0.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// A numeric column value that can join a correlation
pub trait Sample: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(i32, i64, u32, u64, f32, f64);

/// Why a correlation came back zero-valued
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrelationIssue {
    #[error("x and y must have the same length (x: {x_len}, y: {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },
}

/// Summary of two paired samples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub n: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xy: f64,
    pub sum_x2: f64,
    pub sum_y2: f64,
    pub denominator: f64,
    /// Pearson r in [-1, 1]
    pub coefficient: f64,
    pub slope: f64,
    pub intercept: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<CorrelationIssue>,
}

impl CorrelationResult {
    /// Evaluate the fitted line `y = slope·x + intercept`
    pub fn regression_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostic.is_none()
    }
}

/// Correlate two equal-length columns.
///
/// Mismatched lengths are not fatal: the problem is logged and attached to a
/// zero-valued result so the rest of a report can still be produced.
pub fn correlate<A: Sample, B: Sample>(x: &[A], y: &[B]) -> CorrelationResult {
    if x.len() != y.len() {
        let issue = CorrelationIssue::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        };
        warn!("Skipping correlation: {}", issue);
        return CorrelationResult {
            diagnostic: Some(issue),
            ..CorrelationResult::default()
        };
    }

    let mut result = CorrelationResult {
        n: x.len(),
        ..CorrelationResult::default()
    };

    for (&xi, &yi) in x.iter().zip(y) {
        let (xi, yi) = (xi.to_f64(), yi.to_f64());
        result.sum_x += xi;
        result.sum_y += yi;
        result.sum_xy += xi * yi;
        result.sum_x2 += xi * xi;
        result.sum_y2 += yi * yi;
    }

    let n = result.n as f64;
    let covariance_term = n * result.sum_xy - result.sum_x * result.sum_y;
    let x_spread = n * result.sum_x2 - result.sum_x * result.sum_x;
    let y_spread = n * result.sum_y2 - result.sum_y * result.sum_y;

    result.denominator = (x_spread * y_spread).sqrt();
    if result.denominator == 0.0 || result.denominator.is_nan() {
        result.denominator = 0.0;
        return result;
    }

    result.coefficient = covariance_term / result.denominator;
    result.slope = covariance_term / x_spread;
    result.intercept = (result.sum_y - result.slope * result.sum_x) / n;
    result
}
