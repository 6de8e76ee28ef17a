use ndarray::Array2;

/// Summary statistics over the finite cells of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueStats {
    pub valid_count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
}

impl ValueStats {
    pub fn is_flat(&self) -> bool {
        (self.max - self.min).abs() < f64::EPSILON
    }
}

/// Single pass over finite cells: min/max plus Welford mean/std.
/// Returns None when no cell is finite.
pub fn compute_value_stats(data: &Array2<f64>) -> Option<ValueStats> {
    let mut count: u64 = 0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut mean = 0.0_f64;
    let mut m2 = 0.0_f64; // Sum of squares of differences from the current mean

    for &v in data.iter() {
        if !v.is_finite() {
            continue;
        }
        count += 1;
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }

        // Welford's online algorithm
        let delta = v - mean;
        mean += delta / (count as f64);
        let delta2 = v - mean;
        m2 += delta * delta2;
    }

    if count == 0 {
        return None;
    }

    let std = if count > 1 {
        (m2 / (count as f64)).sqrt()
    } else {
        0.0
    };

    Some(ValueStats {
        valid_count: count as usize,
        min,
        max,
        mean,
        std,
    })
}
