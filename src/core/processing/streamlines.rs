//! Streamline tracing over a 2D vector field on the unit square.
//!
//! Seeds are drawn from an occupancy mask of `30 * density` cells per side,
//! walking the mask in a spiral from the outer boundary inward. Each seed is
//! integrated forward and backward with a midpoint (RK2) step along the
//! normalized field. A trajectory stops when it leaves the domain, reaches a
//! stagnant or undefined region, enters a cell another line already owns, or
//! exceeds the maximum length. Lines shorter than the minimum length give
//! their cells back to the mask.
use ndarray::Array2;
use tracing::debug;

use crate::core::grid::sample_bilinear;
use crate::core::params::MAX_DENSITY;
use crate::core::processing::ops::max_magnitude;

/// Mask cells per side at density 1.0
pub const BASE_MASK_CELLS: f64 = 30.0;
/// Shortest line kept, in axes units
pub const MIN_LENGTH: f64 = 0.1;
/// Longest trajectory traced in each direction from a seed, in axes units
pub const MAX_LENGTH: f64 = 4.0;
/// Integration step as a fraction of one mask cell
const STEP_FRACTION: f64 = 0.2;

/// A traced line in unit coordinates, ordered along the flow
#[derive(Debug, Clone, PartialEq)]
pub struct Streamline {
    pub points: Vec<(f64, f64)>,
}

impl Streamline {
    pub fn length(&self) -> f64 {
        polyline_length(&self.points)
    }

    /// Position and flow direction for the single arrowhead drawn at the middle of the line
    pub fn arrow(&self) -> Option<((f64, f64), (f64, f64))> {
        if self.points.len() < 2 {
            return None;
        }
        let mid = (self.points.len() - 1) / 2;
        let (x0, y0) = self.points[mid];
        let (x1, y1) = self.points[mid + 1];
        let (dx, dy) = (x1 - x0, y1 - y0);
        let norm = dx.hypot(dy);
        if norm == 0.0 {
            return None;
        }
        Some(((x0, y0), (dx / norm, dy / norm)))
    }
}

fn polyline_length(points: &[(f64, f64)]) -> f64 {
    points
        .windows(2)
        .map(|w| (w[1].0 - w[0].0).hypot(w[1].1 - w[0].1))
        .sum()
}

struct OccupancyMask {
    n: usize,
    cells: Vec<bool>,
}

impl OccupancyMask {
    fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![false; n * n],
        }
    }

    fn index_of(&self, (x, y): (f64, f64)) -> usize {
        let last = self.n - 1;
        let col = ((x * self.n as f64).floor().max(0.0) as usize).min(last);
        let row = ((y * self.n as f64).floor().max(0.0) as usize).min(last);
        row * self.n + col
    }

    fn center(&self, col: usize, row: usize) -> (f64, f64) {
        (
            (col as f64 + 0.5) / self.n as f64,
            (row as f64 + 0.5) / self.n as f64,
        )
    }
}

/// Mask cells (col, row) ordered boundary first, spiralling inward
fn spiral_seeds(n: usize) -> Vec<(usize, usize)> {
    let mut seeds = Vec::with_capacity(n * n);
    let (mut x0, mut y0) = (0isize, 0isize);
    let (mut x1, mut y1) = (n as isize - 1, n as isize - 1);

    while x0 <= x1 && y0 <= y1 {
        for x in x0..=x1 {
            seeds.push((x as usize, y0 as usize));
        }
        for y in (y0 + 1)..=y1 {
            seeds.push((x1 as usize, y as usize));
        }
        if y1 > y0 {
            for x in (x0..x1).rev() {
                seeds.push((x as usize, y1 as usize));
            }
        }
        if x1 > x0 {
            for y in ((y0 + 1)..y1).rev() {
                seeds.push((x0 as usize, y as usize));
            }
        }
        x0 += 1;
        y0 += 1;
        x1 -= 1;
        y1 -= 1;
    }
    seeds
}

struct Tracer<'a> {
    u: &'a Array2<f64>,
    v: &'a Array2<f64>,
    min_speed: f64,
    step: f64,
    max_steps: usize,
}

impl Tracer<'_> {
    /// Unit flow direction at `p`, None where the field is undefined or stagnant.
    /// Points just outside the domain take the value on the nearest edge.
    fn direction(&self, (x, y): (f64, f64)) -> Option<(f64, f64)> {
        let (x, y) = (x.clamp(0.0, 1.0), y.clamp(0.0, 1.0));
        let u = sample_bilinear(self.u, x, y)?;
        let v = sample_bilinear(self.v, x, y)?;
        let speed = u.hypot(v);
        if speed <= self.min_speed {
            return None;
        }
        Some((u / speed, v / speed))
    }

    /// Follow the field from `start` in direction `sign`, claiming mask cells on the way.
    /// The returned points begin at `start`.
    fn trace(
        &self,
        start: (f64, f64),
        sign: f64,
        mask: &mut OccupancyMask,
        claimed: &mut Vec<usize>,
    ) -> Vec<(f64, f64)> {
        let mut points = vec![start];
        let mut p = start;
        let mut cell = mask.index_of(p);
        let h = self.step;

        for _ in 0..self.max_steps {
            let Some((dx1, dy1)) = self.direction(p) else {
                break;
            };
            let mid = (p.0 + 0.5 * h * sign * dx1, p.1 + 0.5 * h * sign * dy1);
            let Some((dx2, dy2)) = self.direction(mid) else {
                break;
            };
            let next = (p.0 + h * sign * dx2, p.1 + h * sign * dy2);

            if !in_unit_square(next) {
                points.push(clip_to_boundary(p, next));
                break;
            }

            let next_cell = mask.index_of(next);
            if next_cell != cell {
                if mask.cells[next_cell] {
                    break;
                }
                mask.cells[next_cell] = true;
                claimed.push(next_cell);
                cell = next_cell;
            }
            points.push(next);
            p = next;
        }
        points
    }
}

fn in_unit_square((x, y): (f64, f64)) -> bool {
    (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y)
}

/// Point where the segment `inside -> outside` crosses the unit square boundary
fn clip_to_boundary(inside: (f64, f64), outside: (f64, f64)) -> (f64, f64) {
    let mut t: f64 = 1.0;
    for (a, b) in [(inside.0, outside.0), (inside.1, outside.1)] {
        if b > 1.0 {
            t = t.min((1.0 - a) / (b - a));
        } else if b < 0.0 {
            t = t.min((0.0 - a) / (b - a));
        }
    }
    let t = t.clamp(0.0, 1.0);
    (
        (inside.0 + t * (outside.0 - inside.0)).clamp(0.0, 1.0),
        (inside.1 + t * (outside.1 - inside.1)).clamp(0.0, 1.0),
    )
}

/// Trace streamlines for the field (u, v), both in plotting orientation and of equal shape
pub fn trace_streamlines(u: &Array2<f64>, v: &Array2<f64>, density: f64) -> Vec<Streamline> {
    debug_assert_eq!(u.dim(), v.dim());

    let peak = max_magnitude(u, v);
    if peak <= 0.0 {
        return Vec::new();
    }

    let density = density.min(MAX_DENSITY);
    let n = ((BASE_MASK_CELLS * density).round() as usize).max(1);
    let mut mask = OccupancyMask::new(n);
    let step = STEP_FRACTION / n as f64;
    let tracer = Tracer {
        u,
        v,
        min_speed: peak * 1e-9,
        step,
        max_steps: (MAX_LENGTH / step).ceil() as usize,
    };

    let mut lines = Vec::new();
    for (col, row) in spiral_seeds(n) {
        let seed_cell = row * n + col;
        if mask.cells[seed_cell] {
            continue;
        }
        let start = mask.center(col, row);
        if tracer.direction(start).is_none() {
            continue;
        }

        mask.cells[seed_cell] = true;
        let mut claimed = vec![seed_cell];
        let backward = tracer.trace(start, -1.0, &mut mask, &mut claimed);
        let forward = tracer.trace(start, 1.0, &mut mask, &mut claimed);

        let mut points: Vec<(f64, f64)> = backward.into_iter().rev().collect();
        points.extend(forward.into_iter().skip(1));

        let line = Streamline { points };
        if line.length() < MIN_LENGTH {
            for cell in claimed {
                mask.cells[cell] = false;
            }
            continue;
        }
        lines.push(line);
    }

    debug!(
        "Traced {} streamlines on a {}x{} mask (density {})",
        lines.len(),
        n,
        n,
        density
    );
    lines
}
