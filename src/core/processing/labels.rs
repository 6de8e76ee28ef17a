//! Numeric tick labels drawn as stroked segments, so no font file is needed.
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Format a tick value compactly: plain decimals for moderate magnitudes,
/// scientific notation otherwise.
pub fn format_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-2..1e4).contains(&magnitude) {
        return format!("{:.1e}", value);
    }
    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_string() } else { text.to_string() }
}

// Segment endpoints in a unit cell: x in [0, 1], y in [0, 1] downwards
type Segment = ((f32, f32), (f32, f32));

const TOP: Segment = ((0.0, 0.0), (1.0, 0.0));
const UPPER_RIGHT: Segment = ((1.0, 0.0), (1.0, 0.5));
const LOWER_RIGHT: Segment = ((1.0, 0.5), (1.0, 1.0));
const BOTTOM: Segment = ((0.0, 1.0), (1.0, 1.0));
const LOWER_LEFT: Segment = ((0.0, 0.5), (0.0, 1.0));
const UPPER_LEFT: Segment = ((0.0, 0.0), (0.0, 0.5));
const MIDDLE: Segment = ((0.0, 0.5), (1.0, 0.5));

fn glyph(ch: char) -> Vec<Segment> {
    match ch {
        '0' => vec![TOP, UPPER_RIGHT, LOWER_RIGHT, BOTTOM, LOWER_LEFT, UPPER_LEFT],
        '1' => vec![UPPER_RIGHT, LOWER_RIGHT],
        '2' => vec![TOP, UPPER_RIGHT, MIDDLE, LOWER_LEFT, BOTTOM],
        '3' => vec![TOP, UPPER_RIGHT, MIDDLE, LOWER_RIGHT, BOTTOM],
        '4' => vec![UPPER_LEFT, MIDDLE, UPPER_RIGHT, LOWER_RIGHT],
        '5' => vec![TOP, UPPER_LEFT, MIDDLE, LOWER_RIGHT, BOTTOM],
        '6' => vec![TOP, UPPER_LEFT, MIDDLE, LOWER_LEFT, LOWER_RIGHT, BOTTOM],
        '7' => vec![TOP, UPPER_RIGHT, LOWER_RIGHT],
        '8' => vec![TOP, UPPER_RIGHT, LOWER_RIGHT, BOTTOM, LOWER_LEFT, UPPER_LEFT, MIDDLE],
        '9' => vec![TOP, UPPER_RIGHT, LOWER_RIGHT, BOTTOM, UPPER_LEFT, MIDDLE],
        '-' => vec![MIDDLE],
        '+' => vec![MIDDLE, ((0.5, 0.25), (0.5, 0.75))],
        'e' => vec![MIDDLE, UPPER_RIGHT, TOP, UPPER_LEFT, LOWER_LEFT, BOTTOM],
        _ => Vec::new(),
    }
}

/// Width of `text` in pixels at the given glyph height
pub fn text_width(text: &str, height: f32) -> f32 {
    text.chars()
        .map(|c| advance(c, height))
        .sum::<f32>()
        .max(0.0)
}

fn advance(ch: char, height: f32) -> f32 {
    let w = height * 0.5;
    match ch {
        '.' => w * 0.6,
        _ => w * 1.4,
    }
}

/// Draw `text` with its top-left corner at (x, y)
pub fn draw_text(pixmap: &mut Pixmap, x: f32, y: f32, text: &str, height: f32, color: [u8; 4]) {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = true;

    let stroke = Stroke {
        width: (height * 0.12).max(1.0),
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };

    let w = height * 0.5;
    let mut pen_x = x;
    let mut pb = PathBuilder::new();
    for ch in text.chars() {
        if ch == '.' {
            let r = stroke.width * 0.5;
            pb.push_circle(pen_x + w * 0.2, y + height - r, r);
        } else {
            for ((x0, y0), (x1, y1)) in glyph(ch) {
                pb.move_to(pen_x + x0 * w, y + y0 * height);
                pb.line_to(pen_x + x1 * w, y + y1 * height);
            }
        }
        pen_x += advance(ch, height);
    }
    if let Some(path) = pb.finish() {
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_format_compactly() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(1.0), "1");
        assert_eq!(format_tick(0.5), "0.5");
        assert_eq!(format_tick(-2.125), "-2.125");
        assert_eq!(format_tick(12.3457), "12.346");
        assert_eq!(format_tick(15000.0), "1.5e4");
        assert_eq!(format_tick(0.0012), "1.2e-3");
    }

    #[test]
    fn every_formatted_char_has_a_glyph() {
        for value in [0.25, -3.5, 1.5e7, -4.0e-5, 42.0] {
            for ch in format_tick(value).chars() {
                assert!(ch == '.' || !glyph(ch).is_empty(), "no glyph for {ch:?}");
            }
        }
    }

    #[test]
    fn drawing_marks_pixels() {
        let mut pixmap = Pixmap::new(40, 20).unwrap();
        draw_text(&mut pixmap, 2.0, 2.0, "1.5", 14.0, [0, 0, 0, 255]);
        assert!(pixmap.pixels().iter().any(|p| p.alpha() > 0));
        assert!(text_width("10", 14.0) > text_width("1", 14.0));
    }
}
