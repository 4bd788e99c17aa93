//! Linear superposition of potential-flow elements.
//!
//! Potential flow is linear: any number of wells and uniform-flow fields
//! combine by summing their complex potentials. A [`Superposition`] holds
//! an ordered list of (coefficient, element) terms plus an optional
//! additive reference offset applied to Φ only. No validation happens
//! here; composition is structural.

use crate::uniform::UniformFlow;
use crate::well::{SquaredWell, Well};
use num_complex::Complex64;

/// One potential-flow primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    /// A point source or sink.
    Well(Well),
    /// A point source or sink in the z²-mapped plane.
    SquaredWell(SquaredWell),
    /// Uniform regional flow.
    Uniform(UniformFlow),
}

impl Element {
    /// Complex potential of this element at `z`.
    pub fn omega(&self, z: Complex64) -> Complex64 {
        match self {
            Element::Well(well) => well.omega(z),
            Element::SquaredWell(well) => well.omega(z),
            Element::Uniform(flow) => flow.omega(z),
        }
    }
}

/// A composite complex potential: sum of coefficient-weighted elements.
#[derive(Debug, Clone, Default)]
pub struct Superposition {
    terms: Vec<(f64, Element)>,
    phi_offset: f64,
}

impl Superposition {
    /// Creates an empty superposition (identically zero potential).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a term with the given real coefficient (builder style).
    ///
    /// Coefficients of ±1 express source/sink pairs without duplicating
    /// element parameters.
    pub fn with_term(mut self, coefficient: f64, element: Element) -> Self {
        self.terms.push((coefficient, element));
        self
    }

    /// Adds an element with coefficient +1.
    pub fn with_element(self, element: Element) -> Self {
        self.with_term(1.0, element)
    }

    /// Sets the reference potential offset, added to Φ only.
    pub fn with_phi_offset(mut self, offset: f64) -> Self {
        self.phi_offset = offset;
        self
    }

    /// The terms in insertion order.
    pub fn terms(&self) -> &[(f64, Element)] {
        &self.terms
    }

    /// Composite complex potential at `(x, y)`, excluding the Φ offset.
    pub fn omega(&self, x: f64, y: f64) -> Complex64 {
        let z = Complex64::new(x, y);
        self.terms
            .iter()
            .map(|&(coefficient, element)| coefficient * element.omega(z))
            .sum()
    }

    /// Discharge potential Φ at `(x, y)`, including the reference offset.
    pub fn phi(&self, x: f64, y: f64) -> f64 {
        self.omega(x, y).re + self.phi_offset
    }

    /// Stream function Ψ at `(x, y)`.
    pub fn psi(&self, x: f64, y: f64) -> f64 {
        self.omega(x, y).im
    }

    /// Borrowing closure over [`Self::phi`], usable as a field function.
    pub fn phi_fn(&self) -> impl Fn(f64, f64) -> f64 + '_ {
        move |x, y| self.phi(x, y)
    }

    /// Borrowing closure over [`Self::psi`], usable as a field function.
    pub fn psi_fn(&self) -> impl Fn(f64, f64) -> f64 + '_ {
        move |x, y| self.psi(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_superposition_is_zero() {
        let sp = Superposition::new();
        assert_eq!(sp.phi(3.0, 4.0), 0.0);
        assert_eq!(sp.psi(3.0, 4.0), 0.0);
    }

    #[test]
    fn two_wells_superpose_linearly() {
        let w1 = Well::new(0.0, 0.0, 1.0, 0.1);
        let w2 = Well::new(5.0, 5.0, 3.0, 0.2);
        let sp = Superposition::new()
            .with_element(Element::Well(w1))
            .with_element(Element::Well(w2));
        let z = Complex64::new(2.0, -1.0);
        let expected = w1.omega(z) + w2.omega(z);
        let got = sp.omega(2.0, -1.0);
        assert!((got.re - expected.re).abs() < 1e-12);
        assert!((got.im - expected.im).abs() < 1e-12);
    }

    #[test]
    fn coefficient_scales_contribution() {
        let well = Well::new(0.0, 0.0, 1.0, 0.1);
        let plus = Superposition::new().with_term(1.0, Element::Well(well));
        let minus = Superposition::new().with_term(-1.0, Element::Well(well));
        assert!((plus.phi(1.0, 1.0) + minus.phi(1.0, 1.0)).abs() < 1e-12);
        assert!((plus.psi(1.0, 1.0) + minus.psi(1.0, 1.0)).abs() < 1e-12);
    }

    #[test]
    fn phi_offset_shifts_phi_only() {
        let flow = UniformFlow::new(10.0, 1.0);
        let base = Superposition::new().with_element(Element::Uniform(flow));
        let shifted = Superposition::new()
            .with_element(Element::Uniform(flow))
            .with_phi_offset(42.0);
        assert!((shifted.phi(1.0, 2.0) - base.phi(1.0, 2.0) - 42.0).abs() < 1e-12);
        assert_eq!(shifted.psi(1.0, 2.0), base.psi(1.0, 2.0));
    }

    #[test]
    fn well_in_uniform_flow_sums_both_parts() {
        let flow = UniformFlow::new(10.0, 1.0);
        let well = Well::new(0.0, 0.0, 500.0, 0.1);
        let sp = Superposition::new()
            .with_element(Element::Uniform(flow))
            .with_element(Element::Well(well));
        let z = Complex64::new(3.0, 4.0);
        let expected = flow.omega(z) + well.omega(z);
        assert!((sp.phi(3.0, 4.0) - expected.re).abs() < 1e-12);
        assert!((sp.psi(3.0, 4.0) - expected.im).abs() < 1e-12);
    }

    #[test]
    fn mirrored_squared_well_pair_has_constant_phi_on_the_axes() {
        // +q at zw and -q at its x-axis mirror: the mapped arguments are
        // conjugates on both coordinate axes, so phi reduces to the offset.
        let well = SquaredWell::new(1.0, 2.0, 10.0, 0.25);
        let mirror = SquaredWell::new(1.0, -2.0, 10.0, 0.25);
        let sp = Superposition::new()
            .with_term(1.0, Element::SquaredWell(well))
            .with_term(-1.0, Element::SquaredWell(mirror))
            .with_phi_offset(1.0);
        for (x, y) in [(5.0, 0.0), (0.3, 0.0), (0.0, 7.0)] {
            assert!(
                (sp.phi(x, y) - 1.0).abs() < 1e-9,
                "phi at ({x}, {y}): {}",
                sp.phi(x, y)
            );
        }
    }

    #[test]
    fn field_closures_match_direct_evaluation() {
        let sp = Superposition::new().with_element(Element::Uniform(UniformFlow::new(2.0, 3.0)));
        let phi = sp.phi_fn();
        let psi = sp.psi_fn();
        assert_eq!(phi(1.0, 1.0), sp.phi(1.0, 1.0));
        assert_eq!(psi(1.0, 1.0), sp.psi(1.0, 1.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn coordinate() -> impl Strategy<Value = f64> {
            (-100.0_f64..100.0).prop_filter("avoid the well centers", |v| v.abs() > 1e-3)
        }

        proptest! {
            #[test]
            fn superposition_linearity(
                x in coordinate(),
                y in coordinate(),
                q1 in -100.0_f64..100.0,
                q2 in -100.0_f64..100.0,
            ) {
                let w1 = Well::new(0.0, 0.0, q1, 0.1);
                let w2 = Well::new(5.0, 5.0, q2, 0.1);
                let sp = Superposition::new()
                    .with_element(Element::Well(w1))
                    .with_element(Element::Well(w2));
                let z = Complex64::new(x, y);
                let expected = w1.omega(z) + w2.omega(z);
                prop_assert!((sp.phi(x, y) - expected.re).abs() < 1e-9);
                prop_assert!((sp.psi(x, y) - expected.im).abs() < 1e-9);
            }
        }
    }
}
