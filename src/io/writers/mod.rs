//! Figure writers: PNG through `image`, JPEG through `jpeg-encoder`, and the
//! `FileViewer` that saves instead of opening a window.
pub mod jpeg;
pub mod png;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::api::Viewer;
use crate::core::processing::canvas::RenderedFigure;
use crate::error::{Error, Result};
use crate::types::OutputFormat;

/// Save a rendered figure in the given format
pub fn save_figure(figure: &RenderedFigure, output: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Png => {
            png::write_rgba_png(output, figure.width, figure.height, &figure.rgba)?
        }
        OutputFormat::Jpeg => {
            jpeg::write_rgb_jpeg(output, figure.width, figure.height, &figure.rgba)?
        }
    }
    info!(
        "Saved {}x{} figure to {:?}",
        figure.width, figure.height, output
    );
    Ok(())
}

/// Viewer that writes the figure to disk
#[derive(Debug, Clone)]
pub struct FileViewer {
    pub output: PathBuf,
    pub format: OutputFormat,
}

impl FileViewer {
    /// Use `format` if given, else infer it from the output extension
    pub fn new(output: impl Into<PathBuf>, format: Option<OutputFormat>) -> Result<Self> {
        let output = output.into();
        let format = match format.or_else(|| OutputFormat::from_path(&output)) {
            Some(f) => f,
            None => {
                return Err(Error::Argument(format!(
                    "cannot infer output format from {:?}; use --format png|jpeg",
                    output
                )));
            }
        };
        Ok(Self { output, format })
    }
}

impl Viewer for FileViewer {
    fn present(&mut self, figure: &RenderedFigure) -> Result<()> {
        save_figure(figure, &self.output, self.format)
    }
}
