use std::path::Path;

use ndarray::Array2;

use crate::error::{Error, Result};

/// A read-only container of named 2D arrays.
///
/// Arrays come back in storage order (first index along x); orientation and
/// ghost trimming happen in the processing pipeline.
pub trait ArraySource {
    /// Where the arrays come from, for diagnostics
    fn location(&self) -> &Path;

    /// Top-level names available in the container
    fn names(&self) -> Vec<String>;

    fn contains(&self, name: &str) -> bool;

    /// Read one dataset as a 2D `f64` grid
    fn read_2d(&self, name: &str) -> Result<Array2<f64>>;
}

/// Build the `DatasetNotFound` error for `name`, listing what the source does have
pub fn not_found<S: ArraySource + ?Sized>(source: &S, name: &str) -> Error {
    let mut names = source.names();
    names.sort();
    let available = if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    };
    Error::DatasetNotFound {
        name: name.to_string(),
        path: source.location().to_path_buf(),
        available,
    }
}
