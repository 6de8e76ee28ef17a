//! Colour ramps for heat maps and the colorbar.

use crate::types::Colormap;

/// Colour value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0 }
    }
}

// Evenly spaced stops, sampled from the matplotlib ramps of the same name
const VIRIDIS: &[Color] = &[
    Color::rgb(68, 1, 84),
    Color::rgb(71, 44, 122),
    Color::rgb(59, 81, 139),
    Color::rgb(44, 113, 142),
    Color::rgb(33, 144, 141),
    Color::rgb(39, 173, 129),
    Color::rgb(92, 200, 99),
    Color::rgb(170, 220, 50),
    Color::rgb(253, 231, 37),
];

const GRAY: &[Color] = &[Color::rgb(0, 0, 0), Color::rgb(255, 255, 255)];

const COOLWARM: &[Color] = &[
    Color::rgb(59, 76, 192),
    Color::rgb(124, 159, 249),
    Color::rgb(192, 212, 245),
    Color::rgb(242, 203, 183),
    Color::rgb(238, 132, 104),
    Color::rgb(180, 4, 38),
];

const TEMPERATURE: &[Color] = &[
    Color::rgb(25, 0, 76),
    Color::rgb(0, 0, 255),
    Color::rgb(0, 255, 255),
    Color::rgb(0, 255, 0),
    Color::rgb(255, 255, 0),
    Color::rgb(255, 165, 0),
    Color::rgb(255, 0, 0),
    Color::rgb(139, 0, 0),
];

impl Colormap {
    fn stops(self) -> &'static [Color] {
        match self {
            Colormap::Viridis => VIRIDIS,
            Colormap::Gray => GRAY,
            Colormap::Coolwarm => COOLWARM,
            Colormap::Temperature => TEMPERATURE,
        }
    }

    /// Colour at normalized position `t` in [0, 1]; NaN maps to transparent
    pub fn color_at(self, t: f64) -> Color {
        if t.is_nan() {
            return Color::transparent();
        }
        let stops = self.stops();
        let t = t.clamp(0.0, 1.0);
        let segments = stops.len() - 1;
        let pos = t * segments as f64;
        let idx = (pos.floor() as usize).min(segments - 1);
        interpolate_color(stops[idx], stops[idx + 1], (pos - idx as f64) as f32)
    }
}

/// Linear colour interpolation
pub fn interpolate_color(color1: Color, color2: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let t_inv = 1.0 - t;

    Color::new(
        ((color1.r as f32 * t_inv) + (color2.r as f32 * t)).round() as u8,
        ((color1.g as f32 * t_inv) + (color2.g as f32 * t)).round() as u8,
        ((color1.b as f32 * t_inv) + (color2.b as f32 * t)).round() as u8,
        ((color1.a as f32 * t_inv) + (color2.a as f32 * t)).round() as u8,
    )
}

/// Map `value` into [0, 1] over `[min, max]`. A degenerate range maps everything to 0.5.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return f64::NAN;
    }
    let range = max - min;
    if range.abs() < f64::EPSILON {
        return 0.5;
    }
    (value - min) / range
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hit_first_and_last_stop() {
        assert_eq!(Colormap::Viridis.color_at(0.0), VIRIDIS[0]);
        assert_eq!(Colormap::Viridis.color_at(1.0), VIRIDIS[VIRIDIS.len() - 1]);
        assert_eq!(Colormap::Gray.color_at(-3.0), Color::rgb(0, 0, 0));
        assert_eq!(Colormap::Gray.color_at(7.0), Color::rgb(255, 255, 255));
    }

    #[test]
    fn gray_midpoint_is_mid_gray() {
        let c = Colormap::Gray.color_at(0.5);
        assert_eq!((c.r, c.g, c.b, c.a), (128, 128, 128, 255));
    }

    #[test]
    fn nan_is_transparent() {
        assert_eq!(Colormap::Coolwarm.color_at(f64::NAN).a, 0);
    }

    #[test]
    fn normalize_handles_flat_range() {
        assert_eq!(normalize(3.0, 3.0, 3.0), 0.5);
        assert_eq!(normalize(5.0, 0.0, 10.0), 0.5);
        assert!(normalize(f64::INFINITY, 0.0, 1.0).is_nan());
    }
}
