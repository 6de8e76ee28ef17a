//! High-level, ergonomic library API: render an HDF5 file to a viewer (window or
//! file), or compose and rasterize figures from any `ArraySource`. Prefer these
//! entrypoints over the low-level processing modules when embedding h5render.
use std::path::Path;

use tracing::info;

use crate::core::figure::Figure;
use crate::core::params::{FigureStyle, RenderParams};
use crate::core::processing::canvas::{RenderedFigure, render_figure};
use crate::error::Result;
use crate::io::hdf5::Hdf5Reader;
use crate::io::source::ArraySource;
use crate::io::writers::FileViewer;
use crate::types::OutputFormat;

pub use crate::core::processing::pipeline::compose_figure;

/// Something that can present a finished figure: an on-screen window, a file
/// writer, or a test double that records what it was given.
pub trait Viewer {
    /// Show or persist the figure. Interactive viewers block until closed.
    fn present(&mut self, figure: &RenderedFigure) -> Result<()>;
}

impl<V: Viewer + ?Sized> Viewer for Box<V> {
    fn present(&mut self, figure: &RenderedFigure) -> Result<()> {
        (**self).present(figure)
    }
}

/// Compose and rasterize a figure without presenting it
pub fn render_to_buffer<S: ArraySource + ?Sized>(
    source: &S,
    params: &RenderParams,
) -> Result<(Figure, RenderedFigure)> {
    params.style.validate()?;
    let figure = compose_figure(source, params)?;
    let rendered = render_figure(&figure, &params.style)?;
    Ok((figure, rendered))
}

/// Render from an already open source and hand the result to `viewer`.
/// Nothing is presented if any layer fails to build.
pub fn render_source<S: ArraySource + ?Sized>(
    source: &S,
    params: &RenderParams,
    viewer: &mut dyn Viewer,
) -> Result<Figure> {
    let (figure, rendered) = render_to_buffer(source, params)?;
    viewer.present(&rendered)?;
    Ok(figure)
}

/// Open `params.filename`, build every requested layer, and present the figure.
///
/// The file is closed before the viewer runs, so a window left open does not
/// hold the HDF5 handle.
pub fn render(params: &RenderParams, viewer: &mut dyn Viewer) -> Result<()> {
    params.style.validate()?;
    info!("Opening {:?}", params.filename);

    let figure = {
        let reader = Hdf5Reader::open(&params.filename)?;
        compose_figure(&reader, params)?
    };
    let rendered = render_figure(&figure, &params.style)?;
    info!(
        "Presenting `{}` ({} layer(s))",
        figure.title,
        figure.layers.len()
    );
    viewer.present(&rendered)
}

/// Render straight to an image file; the format is inferred from the extension
/// when not given.
pub fn render_to_path(
    params: &RenderParams,
    output: &Path,
    format: Option<OutputFormat>,
) -> Result<()> {
    let mut viewer = FileViewer::new(output, format)?;
    render(params, &mut viewer)
}

/// Load a style from JSON, or the default style when no path is given
pub fn load_style(path: Option<&Path>) -> Result<FigureStyle> {
    match path {
        Some(p) => FigureStyle::from_json_file(p),
        None => Ok(FigureStyle::default()),
    }
}
