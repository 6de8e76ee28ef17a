//! The unit-square plotting grid: orientation, ghost trimming and coordinate meshes.
//!
//! Arrays are stored with the first index running along x. Plotting order puts
//! rows along y and columns along x, so every array is transposed before use.
//! Row 0 sits at y = 0 (lower origin).
use ndarray::{Array1, Array2, s};

use crate::error::{Error, Result};

/// Width of the ghost border on each edge
pub const GHOST_WIDTH: usize = 1;

/// Transpose a stored array into plotting order, in standard layout
pub fn to_plot_orientation(stored: Array2<f64>) -> Array2<f64> {
    stored.reversed_axes().as_standard_layout().into_owned()
}

/// Drop one row/column from each of the four edges: (R, C) -> (R-2, C-2)
pub fn trim_ghost(data: &Array2<f64>, name: &str) -> Result<Array2<f64>> {
    let (rows, cols) = data.dim();
    if rows <= 2 * GHOST_WIDTH || cols <= 2 * GHOST_WIDTH {
        return Err(Error::TooSmallToTrim {
            name: name.to_string(),
            shape: (rows, cols),
        });
    }
    let g = GHOST_WIDTH as isize;
    Ok(data.slice(s![g..-g, g..-g]).to_owned())
}

/// `n` evenly spaced samples over [0, 1]
pub fn linspace_unit(n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::zeros(1),
        _ => Array1::linspace(0.0, 1.0, n),
    }
}

/// Coordinate mesh over [0,1]x[0,1] matching an array of shape (rows, cols)
#[derive(Debug, Clone)]
pub struct Mesh {
    /// `cols` samples along x
    pub x: Array1<f64>,
    /// `rows` samples along y
    pub y: Array1<f64>,
}

impl Mesh {
    pub fn for_shape((rows, cols): (usize, usize)) -> Self {
        Self {
            x: linspace_unit(cols),
            y: linspace_unit(rows),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.y.len(), self.x.len())
    }
}

/// Bilinear sample of `data` at unit coordinates (x, y); None outside [0,1]^2 or on non-finite cells
pub fn sample_bilinear(data: &Array2<f64>, x: f64, y: f64) -> Option<f64> {
    if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
        return None;
    }
    let (rows, cols) = data.dim();
    if rows == 0 || cols == 0 {
        return None;
    }
    let fx = x * (cols.saturating_sub(1)) as f64;
    let fy = y * (rows.saturating_sub(1)) as f64;
    let j0 = (fx.floor() as usize).min(cols - 1);
    let i0 = (fy.floor() as usize).min(rows - 1);
    let j1 = (j0 + 1).min(cols - 1);
    let i1 = (i0 + 1).min(rows - 1);
    let dx = fx - j0 as f64;
    let dy = fy - i0 as f64;

    let v00 = data[[i0, j0]];
    let v01 = data[[i0, j1]];
    let v10 = data[[i1, j0]];
    let v11 = data[[i1, j1]];

    let bottom = v00 * (1.0 - dx) + v01 * dx;
    let top = v10 * (1.0 - dx) + v11 * dx;
    let value = bottom * (1.0 - dy) + top * dy;
    value.is_finite().then_some(value)
}
