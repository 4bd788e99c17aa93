//! Input validation for the contour entry points.
//!
//! Validation is a precondition gate, not a recovery mechanism: it runs
//! before any grid allocation and is the only place the core can fail.
//! Both field functions are probed once at (0, 0) so a broken caller
//! function is caught up front instead of partway through an
//! O(num_points squared) evaluation.

use crate::domain::SamplingDomain;
use crate::error::ValidationError;
use crate::function::FieldFunction;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Validates the inputs shared by the contour entry points and returns the
/// sampling domain they describe.
///
/// Fails with a [`ValidationError`] when `levels` or `num_points` is zero,
/// when either range is non-finite or not ordered min < max, or when either
/// field function panics during the (0, 0) probe.
///
/// The probe only exercises the call contract. A non-finite probe result is
/// accepted: a well centered at the origin yields a non-finite potential at
/// (0, 0), which is a valid field, not a malformed function.
pub fn validate_contour_inputs<P, S>(
    xrange: (f64, f64),
    yrange: (f64, f64),
    phi_func: &P,
    psi_func: &S,
    levels: usize,
    num_points: usize,
) -> Result<SamplingDomain, ValidationError>
where
    P: FieldFunction + ?Sized,
    S: FieldFunction + ?Sized,
{
    if levels == 0 {
        return Err(ValidationError::ZeroLevels);
    }
    let domain = SamplingDomain::new(xrange, yrange, num_points)?;
    probe(phi_func, "phi")?;
    probe(psi_func, "psi")?;
    Ok(domain)
}

/// Calls `func` once at (0, 0), converting a panic into a
/// [`ValidationError::ProbeFailed`]. The result value is discarded.
fn probe<F>(func: &F, which: &'static str) -> Result<(), ValidationError>
where
    F: FieldFunction + ?Sized,
{
    match catch_unwind(AssertUnwindSafe(|| func.eval(0.0, 0.0))) {
        Ok(_) => Ok(()),
        Err(payload) => Err(ValidationError::ProbeFailed {
            which,
            reason: panic_reason(payload.as_ref()),
        }),
    }
}

fn panic_reason(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_owned()
    }
}
