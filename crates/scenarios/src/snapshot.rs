//! CPU-side PNG rendering of a computed [`FlowNet`].
//!
//! Feature-gated behind `png` (default on) so embedders can depend on the
//! scenario registry without pulling in the `image` crate. The pixel
//! buffer conversion itself lives in [`crate::pixel`] (always available).

use crate::error::ScenarioError;
use crate::pixel::flow_net_to_rgba;
use flownet_core::FlowNet;
use std::path::Path;

/// Writes a flow net as a PNG image: streamlines in blue, equipotential
/// lines in red, white background, y axis up.
///
/// Returns `ScenarioError::InvalidDimensions` if the grid size overflows
/// `u32`, or `ScenarioError::Io` on write failure.
pub fn write_png(net: &FlowNet, path: &Path) -> Result<(), ScenarioError> {
    let rgba = flow_net_to_rgba(net);
    let w = u32::try_from(net.phi.width()).map_err(|_| ScenarioError::InvalidDimensions)?;
    let h = u32::try_from(net.phi.height()).map_err(|_| ScenarioError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| ScenarioError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| ScenarioError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flownet_core::compute_flow_net;

    #[test]
    fn write_png_round_trip() {
        let phi = |x: f64, y: f64| -10.0 * x - y;
        let psi = |x: f64, y: f64| x - 10.0 * y;
        let net = compute_flow_net((-10.0, 10.0), (-10.0, 10.0), &phi, &psi, 10, 16).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("net.png");
        write_png(&net, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 16);
    }
}
