//! Pure-computation pixel buffer conversion from a computed [`FlowNet`].
//!
//! This module is always available (no feature gate) so the PNG snapshot
//! path and any other consumer share the same conversion. A grid cell is
//! painted when the field value crosses a contour level between the cell
//! and its right or upper neighbor: streamlines in blue first, then
//! equipotential lines in red on top, on a white background. The buffer
//! is flipped vertically so the image y axis points up.

use flownet_core::{FlowNet, ScalarField};

/// Streamline color (solid blue in the reference styling).
const STREAMLINE: [u8; 4] = [0, 0, 255, 255];
/// Equipotential color (dashed red in the reference styling).
const EQUIPOTENTIAL: [u8; 4] = [255, 0, 0, 255];

/// Rasterizes both contour families of a flow net to an RGBA8 buffer of
/// length `width * height * 4`.
pub fn flow_net_to_rgba(net: &FlowNet) -> Vec<u8> {
    let w = net.phi.width();
    let h = net.phi.height();
    // white, fully opaque background
    let mut buf = vec![255u8; w * h * 4];
    paint_crossings(&mut buf, &net.psi, &net.levels_psi, STREAMLINE);
    paint_crossings(&mut buf, &net.phi, &net.levels_phi, EQUIPOTENTIAL);
    buf
}

fn paint_crossings(buf: &mut [u8], field: &ScalarField, levels: &[f64], color: [u8; 4]) {
    let w = field.width();
    let h = field.height();
    for yi in 0..h {
        for xi in 0..w {
            let v = field.get(xi, yi);
            let right = (xi + 1 < w).then(|| field.get(xi + 1, yi));
            let above = (yi + 1 < h).then(|| field.get(xi, yi + 1));
            let crossed = levels
                .iter()
                .any(|&level| crosses(v, right, level) || crosses(v, above, level));
            if crossed {
                // field row 0 is ymin; image row 0 is the top of the figure
                let row = h - 1 - yi;
                let idx = (row * w + xi) * 4;
                buf[idx..idx + 4].copy_from_slice(&color);
            }
        }
    }
}

/// Half-open crossing test: the level lies between the two samples.
///
/// Non-finite samples (singular grid points) never cross; the half-open
/// interval keeps a contour from being painted twice on exact hits.
fn crosses(a: f64, b: Option<f64>, level: f64) -> bool {
    match b {
        Some(b) if a.is_finite() && b.is_finite() => {
            let lo = a.min(b);
            let hi = a.max(b);
            lo <= level && level < hi
        }
        _ => false,
    }
}
