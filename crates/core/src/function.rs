//! The `FieldFunction` trait: a caller-supplied real scalar field.
//!
//! The trait is object-safe so fields can be passed as `&dyn FieldFunction`
//! for runtime switching between analytic models, and it is blanket
//! implemented for any `Fn(f64, f64) -> f64` closure.

/// A real-valued scalar field over the plane, `(x, y) -> f64`.
///
/// Implementations must be pure: evaluation may not mutate external state,
/// and identical arguments must produce identical results (the grid
/// evaluator relies on this for deterministic output). Returning a
/// non-finite value is allowed — a potential sampled at a singular point
/// yields infinity rather than an error.
pub trait FieldFunction {
    /// Evaluates the field at `(x, y)`.
    fn eval(&self, x: f64, y: f64) -> f64;
}

impl<F> FieldFunction for F
where
    F: Fn(f64, f64) -> f64,
{
    fn eval(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}
