//! Point source/sink with a logarithmic potential singularity.

use num_complex::Complex64;
use std::f64::consts::PI;

/// A well: a point source or sink of 2-D potential flow.
///
/// Contributes `q/(2π) · ln((z − zw)/r)` to the complex potential, using
/// the principal branch of the complex logarithm. The reference radius `r`
/// sets the zero-potential contour: at distance exactly `r` from the
/// center, Φ = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Well {
    /// x coordinate of the well center.
    pub x: f64,
    /// y coordinate of the well center.
    pub y: f64,
    /// Signed discharge q (m²/time). Positive injects, negative extracts.
    pub discharge: f64,
    /// Reference radius r, must be positive.
    pub radius: f64,
}

impl Well {
    /// Creates a well at `(x, y)` with discharge `discharge` and reference
    /// radius `radius`.
    pub fn new(x: f64, y: f64, discharge: f64, radius: f64) -> Self {
        Self {
            x,
            y,
            discharge,
            radius,
        }
    }

    /// The well center as a complex number.
    pub fn center(&self) -> Complex64 {
        Complex64::new(self.x, self.y)
    }

    /// Complex potential at `z`.
    ///
    /// At `z` equal to the well center the logarithm argument is zero and
    /// the result is non-finite rather than a panic; sampling domains
    /// should avoid placing grid points exactly on well centers.
    pub fn omega(&self, z: Complex64) -> Complex64 {
        self.discharge / (2.0 * PI) * ((z - self.center()) / self.radius).ln()
    }
}

/// A well evaluated through the conformal map w = z².
///
/// Contributes `q/(2π) · ln((z² − zw²)/r)`. Squaring the plane folds the
/// domain onto a half-plane: every well gains an image at −zw, so pairing
/// a squared well with its x-axis mirror (opposite sign) turns both
/// coordinate axes into constant-potential boundaries. Used for wells
/// near perpendicular straight boundaries through the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquaredWell {
    /// x coordinate of the well center.
    pub x: f64,
    /// y coordinate of the well center.
    pub y: f64,
    /// Signed discharge q (m²/time). Positive injects, negative extracts.
    pub discharge: f64,
    /// Reference radius r, must be positive.
    pub radius: f64,
}

impl SquaredWell {
    /// Creates a squared-plane well at `(x, y)` with discharge `discharge`
    /// and reference radius `radius`.
    pub fn new(x: f64, y: f64, discharge: f64, radius: f64) -> Self {
        Self {
            x,
            y,
            discharge,
            radius,
        }
    }

    /// The well center as a complex number.
    pub fn center(&self) -> Complex64 {
        Complex64::new(self.x, self.y)
    }

    /// Complex potential at `z`.
    ///
    /// Non-finite at the well center and at its image −zw, where the
    /// logarithm argument vanishes.
    pub fn omega(&self, z: Complex64) -> Complex64 {
        let zw = self.center();
        self.discharge / (2.0 * PI) * ((z * z - zw * zw) / self.radius).ln()
    }
}
