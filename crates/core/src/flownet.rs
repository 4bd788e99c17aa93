//! Engine entry points: flow-net and single-field contour computation.
//!
//! These are the functions thin scripts call. They validate, sample the
//! caller's field functions over the domain, and (for the flow net)
//! compute matched contour levels. No drawing happens here; the results
//! are plain numeric arrays for a render adapter to consume.

use crate::field::ScalarField;
use crate::function::FieldFunction;
use crate::levels::matched_levels;
use crate::validate::validate_contour_inputs;
use crate::ValidationError;
use serde::Serialize;

/// Default number of contour levels.
pub const DEFAULT_LEVELS: usize = 10;
/// Default number of samples per axis.
pub const DEFAULT_NUM_POINTS: usize = 100;

/// A computed flow net: grid coordinates, both sampled fields, and the
/// matched level arrays for each contour family.
#[derive(Debug, Clone, Serialize)]
pub struct FlowNet {
    /// x coordinates, one per column.
    pub x: Vec<f64>,
    /// y coordinates, one per row.
    pub y: Vec<f64>,
    /// Discharge potential samples, shape (num_points, num_points).
    pub phi: ScalarField,
    /// Stream function samples, shape (num_points, num_points).
    pub psi: ScalarField,
    /// Equipotential contour levels.
    pub levels_phi: Vec<f64>,
    /// Streamline contour levels, same step as `levels_phi`.
    pub levels_psi: Vec<f64>,
}

/// A single sampled scalar field with its grid coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct Contour {
    /// x coordinates, one per column.
    pub x: Vec<f64>,
    /// y coordinates, one per row.
    pub y: Vec<f64>,
    /// Field samples, shape (num_points, num_points).
    pub field: ScalarField,
}

/// Computes a flow net: samples the potential and stream functions over
/// the domain and derives matched contour levels from the potential
/// field's range.
///
/// Fails with a [`ValidationError`] on any precondition breach (see
/// [`validate_contour_inputs`]); never fails after validation passes.
pub fn compute_flow_net<P, S>(
    xrange: (f64, f64),
    yrange: (f64, f64),
    phi_func: &P,
    psi_func: &S,
    levels: usize,
    num_points: usize,
) -> Result<FlowNet, ValidationError>
where
    P: FieldFunction + ?Sized,
    S: FieldFunction + ?Sized,
{
    let domain = validate_contour_inputs(xrange, yrange, phi_func, psi_func, levels, num_points)?;
    let x = domain.x_coords();
    let y = domain.y_coords();
    let phi = ScalarField::from_fn(&x, &y, phi_func);
    let psi = ScalarField::from_fn(&x, &y, psi_func);
    let (levels_phi, levels_psi) = matched_levels(&phi, &psi, levels);
    Ok(FlowNet {
        x,
        y,
        phi,
        psi,
        levels_phi,
        levels_psi,
    })
}

/// Samples a single scalar function over the domain.
///
/// Used when the potential or the stream function is rendered alone
/// rather than as a matched net. `levels` takes part in validation only;
/// the render layer decides how to slice the field.
pub fn compute_contour<F>(
    xrange: (f64, f64),
    yrange: (f64, f64),
    function: &F,
    levels: usize,
    num_points: usize,
) -> Result<Contour, ValidationError>
where
    F: FieldFunction + ?Sized,
{
    let domain =
        validate_contour_inputs(xrange, yrange, function, function, levels, num_points)?;
    let x = domain.x_coords();
    let y = domain.y_coords();
    let field = ScalarField::from_fn(&x, &y, function);
    Ok(Contour { x, y, field })
}
