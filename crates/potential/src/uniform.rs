//! Uniform regional flow.

use num_complex::Complex64;

/// Uniform flow with components `qx`, `qy`.
///
/// Complex potential Ω(z) = (−qx + i·qy)·z, giving
/// Φ = −x·qx − y·qy and Ψ = x·qy − y·qx.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformFlow {
    /// Flow component in the x direction.
    pub qx: f64,
    /// Flow component in the y direction.
    pub qy: f64,
}

impl UniformFlow {
    /// Creates a uniform flow field with the given components.
    pub fn new(qx: f64, qy: f64) -> Self {
        Self { qx, qy }
    }

    /// Complex potential at `z`.
    pub fn omega(&self, z: Complex64) -> Complex64 {
        Complex64::new(-self.qx, self.qy) * z
    }
}
