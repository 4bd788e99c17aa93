#![deny(unsafe_code)]
//! Analytic potential-flow primitives and their superposition.
//!
//! Each primitive maps a point z = x + iy to a complex potential
//! Ω(z) = Φ + iΨ, where Φ is the discharge potential and Ψ the stream
//! function. Primitives combine linearly: a [`Superposition`] sums
//! coefficient-weighted terms into one composite field whose real and
//! imaginary parts feed the flow-net engine.

pub mod superposition;
pub mod uniform;
pub mod well;

pub use superposition::{Element, Superposition};
pub use uniform::UniformFlow;
pub use well::{SquaredWell, Well};
