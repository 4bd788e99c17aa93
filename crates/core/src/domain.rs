//! Rectangular sampling domain: x/y ranges plus a per-axis sample count.

use crate::error::ValidationError;

/// A validated rectangular sampling domain.
///
/// Construction enforces the structural preconditions on ranges and sample
/// count, so a `SamplingDomain` value always describes a usable grid:
/// both ranges are finite and ordered min < max, and `num_points >= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingDomain {
    xrange: (f64, f64),
    yrange: (f64, f64),
    num_points: usize,
}

impl SamplingDomain {
    /// Creates a domain over `xrange` x `yrange` sampled at `num_points`
    /// evenly spaced points per axis.
    pub fn new(
        xrange: (f64, f64),
        yrange: (f64, f64),
        num_points: usize,
    ) -> Result<Self, ValidationError> {
        if num_points == 0 {
            return Err(ValidationError::ZeroNumPoints);
        }
        check_range("x", xrange)?;
        check_range("y", yrange)?;
        Ok(Self {
            xrange,
            yrange,
            num_points,
        })
    }

    /// The (min, max) x bounds.
    pub fn xrange(&self) -> (f64, f64) {
        self.xrange
    }

    /// The (min, max) y bounds.
    pub fn yrange(&self) -> (f64, f64) {
        self.yrange
    }

    /// Samples per axis.
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Evenly spaced x coordinates, both endpoints included.
    pub fn x_coords(&self) -> Vec<f64> {
        linspace(self.xrange.0, self.xrange.1, self.num_points)
    }

    /// Evenly spaced y coordinates, both endpoints included.
    pub fn y_coords(&self) -> Vec<f64> {
        linspace(self.yrange.0, self.yrange.1, self.num_points)
    }
}

fn check_range(axis: &'static str, (min, max): (f64, f64)) -> Result<(), ValidationError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ValidationError::NonFiniteRange { axis, min, max });
    }
    if min >= max {
        return Err(ValidationError::UnorderedRange { axis, min, max });
    }
    Ok(())
}

/// `n` evenly spaced values from `start` to `stop`, endpoints included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut coords: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            // pin the endpoint so the last sample lands exactly on stop
            coords[n - 1] = stop;
            coords
        }
    }
}
