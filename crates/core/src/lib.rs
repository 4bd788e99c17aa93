#![deny(unsafe_code)]
//! Core engine for two-dimensional potential-flow nets.
//!
//! Provides the `FieldFunction` trait, `ScalarField` grid type,
//! `SamplingDomain`, input validation, matched contour-level computation,
//! and the `compute_flow_net` / `compute_contour` entry points. The core
//! produces plain numeric arrays only; rendering belongs to the layers
//! above it.

pub mod domain;
pub mod error;
pub mod field;
pub mod flownet;
pub mod function;
pub mod levels;
pub mod params;
pub mod validate;

pub use domain::SamplingDomain;
pub use error::ValidationError;
pub use field::ScalarField;
pub use flownet::{
    compute_contour, compute_flow_net, Contour, FlowNet, DEFAULT_LEVELS, DEFAULT_NUM_POINTS,
};
pub use function::FieldFunction;
pub use levels::matched_levels;
pub use validate::validate_contour_inputs;
