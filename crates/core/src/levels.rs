//! Matched contour levels for the two families of a flow net.
//!
//! Equipotential lines and streamlines only form a geometrically meaningful
//! net when adjacent contours in *both* families represent the same
//! increment. The step is therefore derived once, from the potential
//! field's range, and reused for the stream-function levels instead of
//! dividing each field's own range independently.

use crate::field::ScalarField;

/// Computes matched level arrays for a potential field and a stream field.
///
/// The step is `(max(phi) - min(phi)) / levels`. Each array starts at its
/// field's minimum and increments by that shared step, stopping strictly
/// below the field's maximum.
///
/// If the potential field is constant (or has no finite samples) the step
/// degenerates to zero and both arrays are empty.
pub fn matched_levels(
    phi: &ScalarField,
    psi: &ScalarField,
    levels: usize,
) -> (Vec<f64>, Vec<f64>) {
    let phi_min = phi.min_finite();
    let phi_max = phi.max_finite();
    let step = (phi_max - phi_min) / levels as f64;
    let levels_phi = arange(phi_min, phi_max, step);
    let levels_psi = arange(psi.min_finite(), psi.max_finite(), step);
    (levels_phi, levels_psi)
}

/// Hard cap on generated levels. A step far smaller than the span (a
/// near-constant potential field paired with a wide stream-function range)
/// would otherwise ask for an absurdly large array.
const MAX_LEVEL_COUNT: usize = 1 << 20;

/// Evenly spaced values from `start` (inclusive) to `stop` (exclusive)
/// with the given step.
///
/// Returns an empty vector when the step is not strictly positive, when
/// any argument is non-finite, when the span is empty, or when the step
/// would produce more than [`MAX_LEVEL_COUNT`] values.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || !(step > 0.0) || stop <= start {
        return Vec::new();
    }
    let span = ((stop - start) / step).ceil();
    if !span.is_finite() || span > MAX_LEVEL_COUNT as f64 {
        return Vec::new();
    }
    let count = span as usize;
    (0..count)
        .map(|i| start + i as f64 * step)
        .filter(|v| *v < stop)
        .collect()
}
