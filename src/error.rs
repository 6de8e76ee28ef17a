//! Crate-level error type and `Result` alias.
//! Separates file access, dataset lookup and shape validation failures from
//! argument, rendering and output errors so callers can match on what went wrong.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot access file {}: {reason}", path.display())]
    FileAccess { path: PathBuf, reason: String },

    #[error("Dataset `{name}` not found in {}. Available: {available}", path.display())]
    DatasetNotFound {
        name: String,
        path: PathBuf,
        available: String,
    },

    #[error(
        "Shape mismatch: `{first}` is {}x{} but `{second}` is {}x{}",
        first_shape.0, first_shape.1, second_shape.0, second_shape.1
    )]
    ShapeMismatch {
        first: String,
        first_shape: (usize, usize),
        second: String,
        second_shape: (usize, usize),
    },

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Dataset `{name}` has {ndim} dimensions, expected 2")]
    NotTwoDimensional { name: String, ndim: usize },

    #[error(
        "Dataset `{name}` is {}x{}, too small to drop a one-cell ghost border (use --show_ghost)",
        shape.0, shape.1
    )]
    TooSmallToTrim { name: String, shape: (usize, usize) },

    #[error("Failed to read dataset `{name}`: {reason}")]
    Read { name: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Rendering error: {0}")]
    Render(String),

    #[error("Display error: {0}")]
    Display(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::Render(e.to_string())
    }
}
