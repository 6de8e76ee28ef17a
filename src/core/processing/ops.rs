use ndarray::{Array2, Zip};

/// Element-wise vector magnitude: sqrt(u^2 + v^2)
pub fn magnitude_arrays(u: &Array2<f64>, v: &Array2<f64>) -> Array2<f64> {
    let mut result = Array2::zeros(u.dim());
    Zip::from(u).and(v).and(&mut result).for_each(|u_val, v_val, res| {
        *res = u_val.hypot(*v_val);
    });
    result
}

/// Largest finite magnitude in the field, 0.0 when there is none
pub fn max_magnitude(u: &Array2<f64>, v: &Array2<f64>) -> f64 {
    magnitude_arrays(u, v)
        .iter()
        .copied()
        .filter(|m| m.is_finite())
        .fold(0.0, f64::max)
}
