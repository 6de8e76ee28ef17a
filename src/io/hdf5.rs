use std::path::{Path, PathBuf};

use ndarray::Array2;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::io::source::{ArraySource, not_found};

/// Read-only HDF5 file handle.
///
/// The underlying file is closed when the reader is dropped, so scoping the
/// reader to a block scopes the file access to that block.
pub struct Hdf5Reader {
    file: hdf5::File,
    path: PathBuf,
}

impl Hdf5Reader {
    /// Open an existing HDF5 file read-only
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::FileAccess {
                path: path.to_path_buf(),
                reason: "no such file".to_string(),
            });
        }
        let file = hdf5::File::open(path).map_err(|e| Error::FileAccess {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        info!("Opened {:?} read-only", path);
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }
}

impl ArraySource for Hdf5Reader {
    fn location(&self) -> &Path {
        &self.path
    }

    fn names(&self) -> Vec<String> {
        self.file.member_names().unwrap_or_default()
    }

    fn contains(&self, name: &str) -> bool {
        self.file.link_exists(name)
    }

    fn read_2d(&self, name: &str) -> Result<Array2<f64>> {
        if !self.contains(name) {
            return Err(not_found(self, name));
        }
        let dataset = self.file.dataset(name).map_err(|e| Error::Read {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        let shape = dataset.shape();
        if shape.len() != 2 {
            return Err(Error::NotTwoDimensional {
                name: name.to_string(),
                ndim: shape.len(),
            });
        }

        let data: Array2<f64> = dataset.read_2d().map_err(|e| Error::Read {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        debug!("Read `{}` with stored shape {}x{}", name, shape[0], shape[1]);
        Ok(data)
    }
}
