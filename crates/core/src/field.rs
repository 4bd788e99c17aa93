//! Two-dimensional scalar field sampled over a rectangular grid.
//!
//! A `ScalarField` stores `width * height` f64 values in row-major layout:
//! the row index is the y sample, the column index the x sample, matching
//! `field[row = y, col = x]`. Values are unbounded reals; non-finite
//! samples (from evaluating a potential at a singular point) are stored
//! as-is and skipped by the min/max scans.

use crate::function::FieldFunction;
use serde::Serialize;

/// A 2-D grid of real samples, one per grid point.
#[derive(Debug, Clone, Serialize)]
pub struct ScalarField {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl ScalarField {
    /// Samples `func` at every point of the Cartesian product of `x` and
    /// `y`, producing a field of shape `(y.len(), x.len())`.
    ///
    /// Evaluation is per-point in row-major order; identical inputs always
    /// produce bit-identical fields.
    pub fn from_fn<F>(x: &[f64], y: &[f64], func: &F) -> Self
    where
        F: FieldFunction + ?Sized,
    {
        let mut data = Vec::with_capacity(x.len() * y.len());
        for &yy in y {
            for &xx in x {
                data.push(func.eval(xx, yy));
            }
        }
        Self {
            width: x.len(),
            height: y.len(),
            data,
        }
    }

    /// Number of x samples (columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of y samples (rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Gets the sample at column `xi`, row `yi`.
    ///
    /// # Panics
    ///
    /// Panics if `xi >= width` or `yi >= height`.
    pub fn get(&self, xi: usize, yi: usize) -> f64 {
        assert!(xi < self.width && yi < self.height);
        self.data[yi * self.width + xi]
    }

    /// Smallest finite sample, or NaN if the field has no finite samples.
    ///
    /// Non-finite samples are skipped so that a single singular grid point
    /// does not collapse the contour range to an infinite span.
    pub fn min_finite(&self) -> f64 {
        let min = self
            .data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(f64::INFINITY, f64::min);
        if min.is_finite() {
            min
        } else {
            f64::NAN
        }
    }

    /// Largest finite sample, or NaN if the field has no finite samples.
    pub fn max_finite(&self) -> f64 {
        let max = self
            .data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(f64::NEG_INFINITY, f64::max);
        if max.is_finite() {
            max
        } else {
            f64::NAN
        }
    }
}
