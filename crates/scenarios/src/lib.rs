#![deny(unsafe_code)]
//! Scenario registry: maps scenario names to configured potential-flow
//! models, and provides CPU-side contour snapshot rendering.
//!
//! This crate sits between `flownet-core` (grid sampling, matched levels)
//! and `flownet-potential` (analytic primitives). The CLI depends on it to
//! avoid duplicating model-assembly logic.

pub mod error;
pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use error::ScenarioError;

use flownet_core::params::param_f64;
use flownet_potential::{Element, SquaredWell, Superposition, UniformFlow, Well};
use serde_json::Value;

/// All available scenario names.
const SCENARIO_NAMES: &[&str] = &["uniform-flow", "well", "well-uniform", "image-wells"];

/// Default regional flow in the x direction.
const DEFAULT_QX: f64 = 10.0;
/// Default regional flow in the y direction.
const DEFAULT_QY: f64 = 1.0;
/// Default well discharge for the single-well scenario.
const DEFAULT_WELL_DISCHARGE: f64 = 1.0;
/// Default well discharge for the doublet scenario.
const DEFAULT_DOUBLET_DISCHARGE: f64 = 500.0;
/// Default well reference radius.
const DEFAULT_RADIUS: f64 = 0.1;
/// Default discharge of the first image-well pair.
const DEFAULT_IMAGE_Q0: f64 = 10.0;
/// Default discharge of the second image-well pair.
const DEFAULT_IMAGE_Q2: f64 = 5.0;
/// Default reference radius for the image-well pairs.
const DEFAULT_IMAGE_RADIUS: f64 = 0.25;
/// Default reference potential for the image-well scenario.
const DEFAULT_PHI_OFFSET: f64 = 1.0;

/// A named flow configuration with script defaults.
///
/// Use [`Scenario::from_name`] for string-based selection (CLI), then
/// [`Scenario::build`] to assemble the superposition, overriding defaults
/// from a JSON params object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Uniform regional flow, no wells. Params: `qx`, `qy`.
    UniformFlow,
    /// A single well in otherwise still ground. Params: `q`, `r`, `x0`, `y0`.
    Well,
    /// An injection/extraction well pair in uniform regional flow.
    /// Params: `qx`, `qy`, `q`, `r`, `x0`, `y0`.
    WellUniform,
    /// Two mirrored pairs of z²-mapped wells with a reference potential,
    /// holding both coordinate axes at constant head.
    /// Params: `q0`, `q2`, `r`, `x0`, `y0`, `x2`, `y2`, `phi0`.
    ImageWells,
}

impl Scenario {
    /// Selects a scenario by name.
    pub fn from_name(name: &str) -> Result<Self, ScenarioError> {
        match name {
            "uniform-flow" => Ok(Scenario::UniformFlow),
            "well" => Ok(Scenario::Well),
            "well-uniform" => Ok(Scenario::WellUniform),
            "image-wells" => Ok(Scenario::ImageWells),
            _ => Err(ScenarioError::UnknownScenario(name.to_owned())),
        }
    }

    /// Returns a slice of all recognized scenario names.
    pub fn list() -> &'static [&'static str] {
        SCENARIO_NAMES
    }

    /// The canonical name of this scenario.
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::UniformFlow => "uniform-flow",
            Scenario::Well => "well",
            Scenario::WellUniform => "well-uniform",
            Scenario::ImageWells => "image-wells",
        }
    }

    /// Assembles the configured superposition, overlaying `params` on the
    /// scenario defaults. Missing or mistyped params fall back silently.
    pub fn build(&self, params: &Value) -> Superposition {
        match self {
            Scenario::UniformFlow => {
                let qx = param_f64(params, "qx", DEFAULT_QX);
                let qy = param_f64(params, "qy", DEFAULT_QY);
                Superposition::new().with_element(Element::Uniform(UniformFlow::new(qx, qy)))
            }
            Scenario::Well => {
                let q = param_f64(params, "q", DEFAULT_WELL_DISCHARGE);
                let r = param_f64(params, "r", DEFAULT_RADIUS);
                let x0 = param_f64(params, "x0", 0.0);
                let y0 = param_f64(params, "y0", 0.0);
                Superposition::new().with_element(Element::Well(Well::new(x0, y0, q, r)))
            }
            Scenario::WellUniform => {
                let qx = param_f64(params, "qx", DEFAULT_QX);
                let qy = param_f64(params, "qy", DEFAULT_QY);
                let q = param_f64(params, "q", DEFAULT_DOUBLET_DISCHARGE);
                let r = param_f64(params, "r", DEFAULT_RADIUS);
                let x0 = param_f64(params, "x0", 0.0);
                let y0 = param_f64(params, "y0", 0.0);
                // The extraction well sits two radii downstream of the
                // injection well, along the regional flow direction.
                let angle = f64::atan2(qx, qy);
                let x1 = x0 + 2.0 * r * angle.sin();
                let y1 = y0 + 2.0 * r * angle.cos();
                Superposition::new()
                    .with_element(Element::Uniform(UniformFlow::new(qx, qy)))
                    .with_term(1.0, Element::Well(Well::new(x0, y0, q, r)))
                    .with_term(-1.0, Element::Well(Well::new(x1, y1, q, r)))
            }
            Scenario::ImageWells => {
                let q0 = param_f64(params, "q0", DEFAULT_IMAGE_Q0);
                let q2 = param_f64(params, "q2", DEFAULT_IMAGE_Q2);
                let r = param_f64(params, "r", DEFAULT_IMAGE_RADIUS);
                let x0 = param_f64(params, "x0", 1.0);
                let y0 = param_f64(params, "y0", 2.0);
                let x2 = param_f64(params, "x2", 2.0);
                let y2 = param_f64(params, "y2", 4.0);
                let phi0 = param_f64(params, "phi0", DEFAULT_PHI_OFFSET);
                // Each well is paired with an x-axis mirror of opposite
                // sign; in the squared plane this pins phi to phi0 along
                // both coordinate axes.
                Superposition::new()
                    .with_term(1.0, Element::SquaredWell(SquaredWell::new(x0, y0, q0, r)))
                    .with_term(-1.0, Element::SquaredWell(SquaredWell::new(x0, -y0, q0, r)))
                    .with_term(1.0, Element::SquaredWell(SquaredWell::new(x2, y2, q2, r)))
                    .with_term(-1.0, Element::SquaredWell(SquaredWell::new(x2, -y2, q2, r)))
                    .with_phi_offset(phi0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_name_resolves_all_listed_scenarios() {
        for name in Scenario::list() {
            let scenario = Scenario::from_name(name).unwrap();
            assert_eq!(scenario.name(), *name);
        }
    }

    #[test]
    fn from_name_unknown_returns_error() {
        let result = Scenario::from_name("vortex");
        match result.unwrap_err() {
            ScenarioError::UnknownScenario(name) => assert_eq!(name, "vortex"),
            other => panic!("expected UnknownScenario, got {other:?}"),
        }
    }

    #[test]
    fn uniform_flow_defaults_match_script_values() {
        let sp = Scenario::UniformFlow.build(&json!({}));
        // qx = 10, qy = 1: phi = -10x - y
        assert_eq!(sp.phi(0.0, 0.0), 0.0);
        assert_eq!(sp.phi(1.0, 0.0), -10.0);
        assert_eq!(sp.phi(0.0, 1.0), -1.0);
    }

    #[test]
    fn uniform_flow_params_override_defaults() {
        let sp = Scenario::UniformFlow.build(&json!({"qx": 2.0, "qy": 0.0}));
        assert_eq!(sp.phi(1.0, 5.0), -2.0);
    }

    #[test]
    fn well_scenario_has_zero_potential_at_reference_radius() {
        let sp = Scenario::Well.build(&json!({}));
        // default well at the origin with r = 0.1
        assert!(sp.phi(0.1, 0.0).abs() < 1e-12);
    }

    #[test]
    fn well_scenario_is_singular_at_center() {
        let sp = Scenario::Well.build(&json!({"x0": 2.0, "y0": 3.0}));
        assert!(!sp.phi(2.0, 3.0).is_finite());
    }

    #[test]
    fn well_uniform_has_three_terms() {
        let sp = Scenario::WellUniform.build(&json!({}));
        assert_eq!(sp.terms().len(), 3);
    }

    #[test]
    fn well_uniform_is_singular_at_both_well_centers() {
        let sp = Scenario::WellUniform.build(&json!({}));
        assert!(!sp.phi(0.0, 0.0).is_finite());
        // second well: two radii from the first, along atan2(qx, qy)
        let angle = f64::atan2(10.0, 1.0);
        let (x1, y1) = (0.2 * angle.sin(), 0.2 * angle.cos());
        assert!(!sp.phi(x1, y1).is_finite());
    }

    #[test]
    fn image_wells_has_four_terms() {
        let sp = Scenario::ImageWells.build(&json!({}));
        assert_eq!(sp.terms().len(), 4);
    }

    #[test]
    fn image_wells_hold_constant_head_on_both_axes() {
        let sp = Scenario::ImageWells.build(&json!({}));
        // mirrored pairs cancel along x = 0 and y = 0, leaving phi0 = 1
        for v in [0.5, 3.0, 7.5, 10.0] {
            assert!((sp.phi(v, 0.0) - 1.0).abs() < 1e-9, "phi({v}, 0)");
            assert!((sp.phi(0.0, v) - 1.0).abs() < 1e-9, "phi(0, {v})");
        }
    }

    #[test]
    fn image_wells_are_singular_at_default_centers() {
        let sp = Scenario::ImageWells.build(&json!({}));
        assert!(!sp.phi(1.0, 2.0).is_finite());
        assert!(!sp.phi(2.0, 4.0).is_finite());
    }

    #[test]
    fn image_wells_phi0_override_shifts_phi_only() {
        let base = Scenario::ImageWells.build(&json!({}));
        let shifted = Scenario::ImageWells.build(&json!({"phi0": 5.0}));
        assert!((shifted.phi(3.0, 3.0) - base.phi(3.0, 3.0) - 4.0).abs() < 1e-12);
        assert_eq!(shifted.psi(3.0, 3.0), base.psi(3.0, 3.0));
    }

    #[test]
    fn image_wells_params_override_well_placement() {
        let sp = Scenario::ImageWells.build(&json!({"x0": 4.0, "y0": 1.0}));
        assert!(!sp.phi(4.0, 1.0).is_finite());
        assert!(sp.phi(1.0, 2.0).is_finite());
    }

    #[test]
    fn well_uniform_far_field_approaches_uniform_flow() {
        // The +q/-q pair cancels at distance; far away the potential
        // gradient is dominated by the regional flow.
        let sp = Scenario::WellUniform.build(&json!({}));
        let uniform = Scenario::UniformFlow.build(&json!({}));
        let far = 1.0e6;
        let d_sp = sp.phi(far + 1.0, 0.0) - sp.phi(far, 0.0);
        let d_uniform = uniform.phi(far + 1.0, 0.0) - uniform.phi(far, 0.0);
        assert!(
            (d_sp - d_uniform).abs() < 1e-3,
            "far-field gradient {d_sp} vs uniform {d_uniform}"
        );
    }
}
