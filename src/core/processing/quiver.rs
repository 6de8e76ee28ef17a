use ndarray::Array2;
use tracing::warn;

use crate::core::grid::Mesh;
use crate::core::processing::ops::max_magnitude;

/// Fraction of the strided grid spacing spanned by the longest arrow
pub const ARROW_FILL: f64 = 0.9;

/// One arrow: tail at (x, y), vector (dx, dy), all in unit coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

/// Build quiver arrows at every `stride`th mesh point, autoscaled so the
/// longest arrow covers `ARROW_FILL` of the spacing between drawn points.
/// Zero and non-finite vectors are skipped.
pub fn build_arrows(u: &Array2<f64>, v: &Array2<f64>, mesh: &Mesh, stride: usize) -> Vec<Arrow> {
    debug_assert_eq!(u.dim(), v.dim());
    let stride = stride.max(1);
    let (rows, cols) = u.dim();

    let peak = max_magnitude(u, v);
    if peak <= 0.0 {
        warn!("Vector field is zero everywhere, no arrows drawn");
        return Vec::new();
    }

    let spacing = |n: usize| {
        if n > 1 {
            stride as f64 / (n - 1) as f64
        } else {
            1.0
        }
    };
    let cell = spacing(cols).min(spacing(rows)).min(1.0);
    let scale = ARROW_FILL * cell / peak;

    let mut arrows = Vec::new();
    for i in (0..rows).step_by(stride) {
        for j in (0..cols).step_by(stride) {
            let (du, dv) = (u[[i, j]], v[[i, j]]);
            if !(du.is_finite() && dv.is_finite()) || (du == 0.0 && dv == 0.0) {
                continue;
            }
            arrows.push(Arrow {
                x: mesh.x[j],
                y: mesh.y[i],
                dx: du * scale,
                dy: dv * scale,
            });
        }
    }
    arrows
}
