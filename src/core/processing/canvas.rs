//! Rasterize a composed `Figure` with tiny-skia.
//!
//! Layout: a square plot area of `style.size` pixels framed by tick labels,
//! plus a colorbar strip on the right when the figure has an image layer.
//! Layers are clipped to the plot area and drawn in composition order.
use tiny_skia::{
    FillRule, IntSize, LineCap, LineJoin, Mask, Paint, PathBuilder, Pixmap, PixmapPaint, Rect,
    Stroke, Transform,
};
use tracing::debug;

use crate::core::colormap::{Color, normalize};
use crate::core::figure::{Colorbar, Extent, Figure, ImageLayer, Layer, QuiverLayer, StreamLayer};
use crate::core::params::FigureStyle;
use crate::core::processing::labels::{draw_text, format_tick, text_width};
use crate::core::processing::resize::upscale_rgba_nearest;
use crate::error::{Error, Result};

const MARGIN_LEFT: u32 = 64;
const MARGIN_TOP: u32 = 24;
const MARGIN_RIGHT: u32 = 28;
const MARGIN_BOTTOM: u32 = 44;
const COLORBAR_GAP: u32 = 20;
const COLORBAR_WIDTH: u32 = 20;
const COLORBAR_LABELS: u32 = 84;
const TICK_LENGTH: f32 = 5.0;
const LABEL_HEIGHT: f32 = 12.0;

const INK: [u8; 4] = [0, 0, 0, 255];
const STREAM_COLOR: [u8; 4] = [31, 119, 180, 255];
const QUIVER_COLOR: [u8; 4] = [20, 20, 20, 255];

/// Straight-alpha RGBA pixels of a finished figure
#[derive(Debug, Clone)]
pub struct RenderedFigure {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl RenderedFigure {
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * 4;
        [
            self.rgba[i],
            self.rgba[i + 1],
            self.rgba[i + 2],
            self.rgba[i + 3],
        ]
    }
}

/// Pixel geometry of the figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub left: u32,
    pub top: u32,
    pub side: u32,
    pub colorbar_left: Option<u32>,
    pub extent: Extent,
}

impl Layout {
    pub fn new(side: u32, with_colorbar: bool, extent: Extent) -> Self {
        let plot_right = MARGIN_LEFT + side;
        let (width, colorbar_left) = if with_colorbar {
            (
                plot_right + COLORBAR_GAP + COLORBAR_WIDTH + COLORBAR_LABELS,
                Some(plot_right + COLORBAR_GAP),
            )
        } else {
            (plot_right + MARGIN_RIGHT, None)
        };
        Self {
            width,
            height: MARGIN_TOP + side + MARGIN_BOTTOM,
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            side,
            colorbar_left,
            extent,
        }
    }

    /// Data coordinates to pixel coordinates, y pointing up in data space
    pub fn to_pixel(&self, x: f64, y: f64) -> (f32, f32) {
        let (x0, x1) = self.extent.x;
        let (y0, y1) = self.extent.y;
        let fx = (x - x0) / (x1 - x0);
        let fy = (y - y0) / (y1 - y0);
        (
            self.left as f32 + (fx * self.side as f64) as f32,
            self.top as f32 + ((1.0 - fy) * self.side as f64) as f32,
        )
    }

    fn plot_rect(&self) -> Option<Rect> {
        Rect::from_xywh(
            self.left as f32,
            self.top as f32,
            self.side as f32,
            self.side as f32,
        )
    }
}

fn paint(color: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = true;
    paint
}

fn line_stroke(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    }
}

/// Cell colours of an image layer, one RGBA pixel per cell, top row first
pub fn heatmap_rgba(layer: &ImageLayer) -> Vec<u8> {
    let (rows, cols) = layer.data.dim();
    let (min, max) = layer.value_range();
    let mut out = Vec::with_capacity(rows * cols * 4);
    for r in (0..rows).rev() {
        for c in 0..cols {
            let t = normalize(layer.data[[r, c]], min, max);
            let Color { r, g, b, a } = layer.colormap.color_at(t);
            out.extend_from_slice(&[r, g, b, a]);
        }
    }
    out
}

fn draw_image(pixmap: &mut Pixmap, layout: &Layout, layer: &ImageLayer) -> Result<()> {
    let (rows, cols) = layer.data.dim();
    if rows == 0 || cols == 0 {
        return Ok(());
    }
    let cells = heatmap_rgba(layer);
    let side = layout.side as usize;
    let scaled = upscale_rgba_nearest(&cells, cols, rows, side, side)?;
    let size = IntSize::from_wh(layout.side, layout.side)
        .ok_or_else(|| Error::Render("plot area has zero size".into()))?;
    let image = Pixmap::from_vec(scaled, size)
        .ok_or_else(|| Error::Render("heat map buffer does not match plot area".into()))?;
    pixmap.draw_pixmap(
        layout.left as i32,
        layout.top as i32,
        image.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
    Ok(())
}

/// Filled triangular arrowhead with its tip at `tip`, pointing along `dir` (pixel space)
fn push_arrowhead(pb: &mut PathBuilder, tip: (f32, f32), dir: (f32, f32), length: f32) {
    let norm = dir.0.hypot(dir.1);
    if norm == 0.0 {
        return;
    }
    let (ux, uy) = (dir.0 / norm, dir.1 / norm);
    let half = length * 0.45;
    let base = (tip.0 - ux * length, tip.1 - uy * length);
    pb.move_to(tip.0, tip.1);
    pb.line_to(base.0 - uy * half, base.1 + ux * half);
    pb.line_to(base.0 + uy * half, base.1 - ux * half);
    pb.close();
}

fn draw_streamlines(pixmap: &mut Pixmap, layout: &Layout, layer: &StreamLayer, clip: &Mask) {
    let line_paint = paint(STREAM_COLOR);
    let stroke = line_stroke(1.3);
    let mut lines = PathBuilder::new();
    let mut heads = PathBuilder::new();

    for line in &layer.lines {
        let mut points = line.points.iter();
        let Some(&(x, y)) = points.next() else {
            continue;
        };
        let (px, py) = layout.to_pixel(x, y);
        lines.move_to(px, py);
        for &(x, y) in points {
            let (px, py) = layout.to_pixel(x, y);
            lines.line_to(px, py);
        }

        if let Some(((x, y), (dx, dy))) = line.arrow() {
            let tip = layout.to_pixel(x, y);
            // pixel y grows downwards
            push_arrowhead(&mut heads, tip, (dx as f32, -dy as f32), 7.0);
        }
    }

    if let Some(path) = lines.finish() {
        pixmap.stroke_path(&path, &line_paint, &stroke, Transform::identity(), Some(clip));
    }
    if let Some(path) = heads.finish() {
        pixmap.fill_path(
            &path,
            &line_paint,
            FillRule::Winding,
            Transform::identity(),
            Some(clip),
        );
    }
}

fn draw_quiver(pixmap: &mut Pixmap, layout: &Layout, layer: &QuiverLayer, clip: &Mask) {
    let arrow_paint = paint(QUIVER_COLOR);
    let stroke = line_stroke(1.2);
    let mut shafts = PathBuilder::new();
    let mut heads = PathBuilder::new();

    for arrow in &layer.arrows {
        let tail = layout.to_pixel(arrow.x, arrow.y);
        let tip = layout.to_pixel(arrow.x + arrow.dx, arrow.y + arrow.dy);
        let dir = (tip.0 - tail.0, tip.1 - tail.1);
        let length = dir.0.hypot(dir.1);
        if length < 0.5 {
            continue;
        }
        let head = (length * 0.3).clamp(2.0, 8.0).min(length);
        let shaft_end = (
            tip.0 - dir.0 / length * head * 0.8,
            tip.1 - dir.1 / length * head * 0.8,
        );
        shafts.move_to(tail.0, tail.1);
        shafts.line_to(shaft_end.0, shaft_end.1);
        push_arrowhead(&mut heads, tip, dir, head);
    }

    if let Some(path) = shafts.finish() {
        pixmap.stroke_path(&path, &arrow_paint, &stroke, Transform::identity(), Some(clip));
    }
    if let Some(path) = heads.finish() {
        pixmap.fill_path(
            &path,
            &arrow_paint,
            FillRule::Winding,
            Transform::identity(),
            Some(clip),
        );
    }
}

fn draw_axes(pixmap: &mut Pixmap, layout: &Layout) {
    let ink = paint(INK);
    let stroke = line_stroke(1.0);

    if let Some(rect) = layout.plot_rect() {
        let frame = PathBuilder::from_rect(rect);
        pixmap.stroke_path(&frame, &ink, &stroke, Transform::identity(), None);
    }

    let (x0, x1) = layout.extent.x;
    let (y0, y1) = layout.extent.y;
    let mut ticks = PathBuilder::new();
    for f in [0.0, 0.5, 1.0] {
        let xv = x0 + f * (x1 - x0);
        let (px, py) = layout.to_pixel(xv, y0);
        ticks.move_to(px, py);
        ticks.line_to(px, py + TICK_LENGTH);
        let text = format_tick(xv);
        let w = text_width(&text, LABEL_HEIGHT);
        draw_text(pixmap, px - w / 2.0, py + TICK_LENGTH + 4.0, &text, LABEL_HEIGHT, INK);

        let yv = y0 + f * (y1 - y0);
        let (px, py) = layout.to_pixel(x0, yv);
        ticks.move_to(px, py);
        ticks.line_to(px - TICK_LENGTH, py);
        let text = format_tick(yv);
        let w = text_width(&text, LABEL_HEIGHT);
        draw_text(
            pixmap,
            px - TICK_LENGTH - 4.0 - w,
            py - LABEL_HEIGHT / 2.0,
            &text,
            LABEL_HEIGHT,
            INK,
        );
    }
    if let Some(path) = ticks.finish() {
        pixmap.stroke_path(&path, &ink, &stroke, Transform::identity(), None);
    }
}

fn draw_colorbar(pixmap: &mut Pixmap, layout: &Layout, colorbar: &Colorbar) {
    let Some(left) = layout.colorbar_left else {
        return;
    };
    let (left, top, side) = (left as f32, layout.top as f32, layout.side);

    for row in 0..side {
        let t = 1.0 - (row as f64 + 0.5) / side as f64;
        let Color { r, g, b, a } = colorbar.colormap.color_at(t);
        if let Some(rect) = Rect::from_xywh(left, top + row as f32, COLORBAR_WIDTH as f32, 1.0) {
            let mut fill = paint([r, g, b, a]);
            fill.anti_alias = false;
            pixmap.fill_rect(rect, &fill, Transform::identity(), None);
        }
    }

    let ink = paint(INK);
    let stroke = line_stroke(1.0);
    if let Some(rect) = Rect::from_xywh(left, top, COLORBAR_WIDTH as f32, side as f32) {
        let frame = PathBuilder::from_rect(rect);
        pixmap.stroke_path(&frame, &ink, &stroke, Transform::identity(), None);
    }

    let right = left + COLORBAR_WIDTH as f32;
    let mut ticks = PathBuilder::new();
    for (f, value) in [
        (0.0, colorbar.min),
        (0.5, (colorbar.min + colorbar.max) / 2.0),
        (1.0, colorbar.max),
    ] {
        let y = top + ((1.0 - f) * side as f64) as f32;
        ticks.move_to(right, y);
        ticks.line_to(right + TICK_LENGTH, y);
        draw_text(
            pixmap,
            right + TICK_LENGTH + 4.0,
            y - LABEL_HEIGHT / 2.0,
            &format_tick(value),
            LABEL_HEIGHT,
            INK,
        );
    }
    if let Some(path) = ticks.finish() {
        pixmap.stroke_path(&path, &ink, &stroke, Transform::identity(), None);
    }
}

fn plot_clip(layout: &Layout) -> Result<Mask> {
    let mut mask = Mask::new(layout.width, layout.height)
        .ok_or_else(|| Error::Render("cannot allocate clip mask".into()))?;
    let rect = layout
        .plot_rect()
        .ok_or_else(|| Error::Render("plot area has zero size".into()))?;
    mask.fill_path(
        &PathBuilder::from_rect(rect),
        FillRule::Winding,
        false,
        Transform::identity(),
    );
    Ok(mask)
}

/// Rasterize every layer, the axes and the colorbar into one image
pub fn render_figure(figure: &Figure, style: &FigureStyle) -> Result<RenderedFigure> {
    style.validate()?;
    let layout = Layout::new(style.size, !figure.colorbars.is_empty(), figure.extent);
    let mut pixmap = Pixmap::new(layout.width, layout.height).ok_or_else(|| {
        Error::Render(format!(
            "cannot allocate {}x{} canvas",
            layout.width, layout.height
        ))
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);
    let clip = plot_clip(&layout)?;

    for layer in &figure.layers {
        match layer {
            Layer::Image(image) => draw_image(&mut pixmap, &layout, image)?,
            Layer::Streamlines(stream) => draw_streamlines(&mut pixmap, &layout, stream, &clip),
            Layer::Quiver(quiver) => draw_quiver(&mut pixmap, &layout, quiver, &clip),
        }
    }
    draw_axes(&mut pixmap, &layout);
    if let Some(colorbar) = figure.colorbars.first() {
        draw_colorbar(&mut pixmap, &layout, colorbar);
    }

    debug!(
        "Rendered {} layer(s) onto a {}x{} canvas",
        figure.layers.len(),
        layout.width,
        layout.height
    );

    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    Ok(RenderedFigure {
        title: figure.title.clone(),
        width: layout.width as usize,
        height: layout.height as usize,
        rgba,
    })
}
