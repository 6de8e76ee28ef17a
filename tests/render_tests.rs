//! Render pipeline tests.
//!
//! Exercise `compose_figure` and `render_source` against an in-memory
//! `MemorySource` and a viewer that records what it was asked to present.

use h5render::api::{Viewer, render_source, render_to_buffer};
use h5render::io::writers::FileViewer;
use h5render::{
    Colormap, Error, Extent, FigureStyle, Layer, LayerKind, MemorySource, OutputFormat, RenderParams,
    RenderedFigure, Result, compose_figure,
};
use ndarray::{Array2, Array3};

#[derive(Default)]
struct RecordingViewer {
    frames: Vec<(usize, usize)>,
}

impl Viewer for RecordingViewer {
    fn present(&mut self, figure: &RenderedFigure) -> Result<()> {
        assert_eq!(figure.rgba.len(), figure.width * figure.height * 4);
        self.frames.push((figure.width, figure.height));
        Ok(())
    }
}

fn small_style() -> FigureStyle {
    FigureStyle {
        size: 120,
        ..Default::default()
    }
}

/// 12x12 arrays with a ghost border: density, a rotating flow and a uniform flow
fn sample_source() -> MemorySource {
    let rho = Array2::from_shape_fn((12, 12), |(i, j)| (i * 12 + j) as f64);
    let vx = Array2::from_shape_fn((12, 12), |(_, j)| j as f64 - 5.5);
    let vy = Array2::from_shape_fn((12, 12), |(i, _)| 5.5 - i as f64);
    MemorySource::new("sim_0007.h5")
        .with("rho", rho)
        .with("vx", vx)
        .with("vy", vy)
        .with("bx", Array2::<f64>::ones((12, 12)))
        .with("by", Array2::<f64>::zeros((12, 12)))
}

fn params() -> RenderParams {
    let mut params = RenderParams::new("sim_0007.h5");
    params.style = small_style();
    params
}

// =============================================================================
// Heat map
// =============================================================================

#[test]
fn imshow_drops_ghost_border() {
    let source = sample_source();
    let figure = compose_figure(&source, &params().with_imshow("rho")).unwrap();

    let image = figure.image().unwrap();
    assert_eq!(image.data.dim(), (10, 10));
    assert_eq!(image.mesh.shape(), (10, 10));
    assert_eq!(figure.colorbar_count(), 1);
    assert_eq!(figure.extent, Extent::UNIT);
}

#[test]
fn show_ghost_keeps_full_grid_on_same_extent() {
    let source = sample_source();
    let figure = compose_figure(&source, &params().with_imshow("rho").with_ghost(true)).unwrap();

    assert_eq!(figure.image().unwrap().data.dim(), (12, 12));
    assert_eq!(figure.colorbar_count(), 1);
    assert_eq!(figure.extent, Extent::UNIT);
}

#[test]
fn arrays_are_transposed_into_plot_order() {
    let stored = Array2::from_shape_fn((5, 4), |(i, j)| (10 * i + j) as f64);
    let source = MemorySource::new("t.h5").with("rho", stored.clone());
    let figure = compose_figure(&source, &params().with_imshow("rho").with_ghost(true)).unwrap();

    let data = &figure.image().unwrap().data;
    assert_eq!(data.dim(), (4, 5));
    assert_eq!(data[[3, 1]], stored[[1, 3]]);
}

#[test]
fn colorbar_spans_interior_values() {
    let source = sample_source();
    let figure = compose_figure(&source, &params().with_imshow("rho")).unwrap();

    // interior of a 12x12 ramp runs from cell (1,1) to (10,10)
    let bar = &figure.colorbars[0];
    assert_eq!(bar.min, 13.0);
    assert_eq!(bar.max, 130.0);
    assert_eq!(bar.label, "rho");
    assert_eq!(bar.colormap, Colormap::Viridis);
}

// =============================================================================
// Vector layers
// =============================================================================

#[test]
fn layers_follow_fixed_order() {
    let source = sample_source();
    let p = params()
        .with_quiver("bx", "by")
        .with_streamplot("vx", "vy")
        .with_imshow("rho");
    let figure = compose_figure(&source, &p).unwrap();

    assert_eq!(
        figure.layer_kinds(),
        vec![LayerKind::Image, LayerKind::Streamlines, LayerKind::Quiver]
    );
    assert_eq!(figure.colorbar_count(), 1);
    assert!(figure.layers.iter().all(|l| l.shape() == (10, 10)));
}

#[test]
fn show_ghost_applies_to_every_layer() {
    let source = sample_source();
    let p = params()
        .with_imshow("rho")
        .with_streamplot("vx", "vy")
        .with_quiver("bx", "by")
        .with_ghost(true);
    let figure = compose_figure(&source, &p).unwrap();

    assert_eq!(figure.layers.len(), 3);
    assert!(figure.layers.iter().all(|l| l.shape() == (12, 12)));
    assert_eq!(figure.extent, Extent::UNIT);
}

#[test]
fn quiver_keeps_ghost_cells_on_request() {
    let source = sample_source();
    let trimmed = compose_figure(&source, &params().with_quiver("bx", "by")).unwrap();
    let full = compose_figure(&source, &params().with_quiver("bx", "by").with_ghost(true)).unwrap();

    assert_eq!(trimmed.layers[0].shape(), (10, 10));
    assert_eq!(full.layers[0].shape(), (12, 12));
    match (&trimmed.layers[0], &full.layers[0]) {
        (Layer::Quiver(t), Layer::Quiver(f)) => {
            assert_eq!(t.arrows.len(), 100);
            assert_eq!(f.arrows.len(), 144);
        }
        _ => panic!("expected quiver layers"),
    }
}

#[test]
fn streamplot_without_image_has_no_colorbar() {
    let source = sample_source();
    let figure = compose_figure(&source, &params().with_streamplot("vx", "vy")).unwrap();
    assert_eq!(figure.layer_kinds(), vec![LayerKind::Streamlines]);
    assert_eq!(figure.colorbar_count(), 0);
}

#[test]
fn mismatched_components_fail() {
    let source = sample_source().with("short", Array2::<f64>::zeros((12, 10)));
    let err = compose_figure(&source, &params().with_streamplot("vx", "short")).unwrap_err();
    match err {
        Error::ShapeMismatch {
            first,
            first_shape,
            second,
            second_shape,
        } => {
            assert_eq!(first, "vx");
            assert_eq!(first_shape, (12, 12));
            assert_eq!(second, "short");
            assert_eq!(second_shape, (12, 10));
        }
        other => panic!("expected ShapeMismatch, got {other:?}"),
    }
}

#[test]
fn mismatched_quiver_components_fail() {
    let source = sample_source().with("wide", Array2::<f64>::zeros((14, 12)));
    let err = compose_figure(&source, &params().with_quiver("wide", "by")).unwrap_err();
    match err {
        Error::ShapeMismatch {
            first,
            first_shape,
            second,
            second_shape,
        } => {
            assert_eq!(first, "wide");
            assert_eq!(first_shape, (14, 12));
            assert_eq!(second, "by");
            assert_eq!(second_shape, (12, 12));
        }
        other => panic!("expected ShapeMismatch, got {other:?}"),
    }
}

#[test]
fn oversized_style_fails_without_panicking() {
    let source = sample_source();
    let mut viewer = RecordingViewer::default();

    let mut p = params().with_streamplot("vx", "vy");
    p.style.density = 1e300;
    assert!(matches!(
        render_source(&source, &p, &mut viewer),
        Err(Error::Argument(_))
    ));

    let mut p = params().with_imshow("rho");
    p.style.size = u32::MAX;
    assert!(matches!(
        render_source(&source, &p, &mut viewer),
        Err(Error::Argument(_))
    ));
    assert!(matches!(compose_figure(&source, &p), Err(Error::Argument(_))));
    assert!(viewer.frames.is_empty());
}

// =============================================================================
// Failures present nothing
// =============================================================================

#[test]
fn missing_dataset_presents_nothing() {
    let source = sample_source();
    let mut viewer = RecordingViewer::default();
    let err = render_source(&source, &params().with_imshow("pressure"), &mut viewer).unwrap_err();

    match err {
        Error::DatasetNotFound {
            name, available, ..
        } => {
            assert_eq!(name, "pressure");
            assert_eq!(available, "bx, by, rho, vx, vy");
        }
        other => panic!("expected DatasetNotFound, got {other:?}"),
    }
    assert!(viewer.frames.is_empty());
}

#[test]
fn one_bad_layer_aborts_the_figure() {
    let source = sample_source();
    let mut viewer = RecordingViewer::default();
    let p = params().with_imshow("rho").with_quiver("vx", "missing");
    assert!(render_source(&source, &p, &mut viewer).is_err());
    assert!(viewer.frames.is_empty());
}

#[test]
fn three_dimensional_dataset_is_rejected() {
    let source = MemorySource::new("t.h5").with("cube", Array3::<f64>::zeros((4, 4, 4)));
    let err = compose_figure(&source, &params().with_imshow("cube")).unwrap_err();
    assert!(matches!(err, Error::NotTwoDimensional { ndim: 3, .. }));
}

#[test]
fn tiny_grid_cannot_be_trimmed() {
    let source = MemorySource::new("t.h5").with("rho", Array2::<f64>::zeros((2, 5)));
    let err = compose_figure(&source, &params().with_imshow("rho")).unwrap_err();
    assert!(matches!(err, Error::TooSmallToTrim { .. }));

    // keeping the border makes it drawable
    assert!(compose_figure(&source, &params().with_imshow("rho").with_ghost(true)).is_ok());
}

// =============================================================================
// Presenting
// =============================================================================

#[test]
fn successful_render_presents_once() {
    let source = sample_source();
    let mut viewer = RecordingViewer::default();
    let p = params().with_imshow("rho").with_streamplot("vx", "vy");
    let figure = render_source(&source, &p, &mut viewer).unwrap();

    assert_eq!(viewer.frames.len(), 1);
    assert_eq!(figure.title, "sim_0007.h5 - rho, streamplot (vx, vy)");
}

#[test]
fn no_layers_still_shows_axes() {
    let source = sample_source();
    let mut viewer = RecordingViewer::default();
    let figure = render_source(&source, &params(), &mut viewer).unwrap();
    assert!(figure.layers.is_empty());
    assert_eq!(viewer.frames.len(), 1);
}

#[test]
fn colorbar_widens_the_canvas() {
    let source = sample_source();
    let (_, plain) = render_to_buffer(&source, &params().with_quiver("bx", "by")).unwrap();
    let (_, with_bar) = render_to_buffer(&source, &params().with_imshow("rho")).unwrap();
    assert_eq!(plain.height, with_bar.height);
    assert!(with_bar.width > plain.width);
}

#[test]
fn invalid_style_is_rejected_before_reading() {
    let source = sample_source();
    let mut p = params().with_imshow("rho");
    p.style.size = 0;
    let mut viewer = RecordingViewer::default();
    assert!(matches!(
        render_source(&source, &p, &mut viewer),
        Err(Error::Argument(_))
    ));
    assert!(viewer.frames.is_empty());
}

// =============================================================================
// File output
// =============================================================================

#[test]
fn file_viewer_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("rho.png");
    let mut viewer = FileViewer::new(&output, None).unwrap();
    assert_eq!(viewer.format, OutputFormat::Png);

    let source = sample_source();
    render_source(&source, &params().with_imshow("rho"), &mut viewer).unwrap();

    let (_, expected) = render_to_buffer(&source, &params().with_imshow("rho")).unwrap();
    let written = image::open(&output).unwrap();
    assert_eq!(written.width() as usize, expected.width);
    assert_eq!(written.height() as usize, expected.height);
}

#[test]
fn file_viewer_writes_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("flow.jpg");
    let mut viewer = FileViewer::new(&output, None).unwrap();
    assert_eq!(viewer.format, OutputFormat::Jpeg);

    render_source(&sample_source(), &params().with_streamplot("vx", "vy"), &mut viewer).unwrap();
    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
}

#[test]
fn unknown_extension_needs_explicit_format() {
    assert!(matches!(
        FileViewer::new("figure.bmp", None),
        Err(Error::Argument(_))
    ));
    let viewer = FileViewer::new("figure.bmp", Some(OutputFormat::Png)).unwrap();
    assert_eq!(viewer.format, OutputFormat::Png);
}
