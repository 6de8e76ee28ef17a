use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ndarray::ArrayD;
use ndarray::{Array2, Ix2};

use crate::error::{Error, Result};
use crate::io::source::{ArraySource, not_found};

/// In-memory array container, handy for tests and for callers that already
/// hold their grids.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    location: PathBuf,
    arrays: BTreeMap<String, ArrayD<f64>>,
}

impl MemorySource {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
            arrays: BTreeMap::new(),
        }
    }

    /// Insert an array of any dimensionality, stored with the first index along x
    pub fn insert<D: ndarray::Dimension>(
        &mut self,
        name: impl Into<String>,
        array: ndarray::Array<f64, D>,
    ) -> &mut Self {
        self.arrays.insert(name.into(), array.into_dyn());
        self
    }

    pub fn with<D: ndarray::Dimension>(
        mut self,
        name: impl Into<String>,
        array: ndarray::Array<f64, D>,
    ) -> Self {
        self.insert(name, array);
        self
    }
}

impl ArraySource for MemorySource {
    fn location(&self) -> &Path {
        &self.location
    }

    fn names(&self) -> Vec<String> {
        self.arrays.keys().cloned().collect()
    }

    fn contains(&self, name: &str) -> bool {
        self.arrays.contains_key(name)
    }

    fn read_2d(&self, name: &str) -> Result<Array2<f64>> {
        let array = self.arrays.get(name).ok_or_else(|| not_found(self, name))?;
        let ndim = array.ndim();
        array
            .clone()
            .into_dimensionality::<Ix2>()
            .map_err(|_| Error::NotTwoDimensional {
                name: name.to_string(),
                ndim,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array3};

    #[test]
    fn reads_back_2d_arrays() {
        let source = MemorySource::new("mem.h5").with("rho", Array2::<f64>::ones((3, 4)));
        let rho = source.read_2d("rho").unwrap();
        assert_eq!(rho.dim(), (3, 4));
        assert!(source.contains("rho"));
    }

    #[test]
    fn missing_name_lists_available() {
        let source = MemorySource::new("mem.h5")
            .with("vy", Array2::<f64>::zeros((2, 2)))
            .with("vx", Array2::<f64>::zeros((2, 2)));
        match source.read_2d("rh") {
            Err(Error::DatasetNotFound {
                name, available, ..
            }) => {
                assert_eq!(name, "rh");
                assert_eq!(available, "vx, vy");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_wrong_dimensionality() {
        let source = MemorySource::new("mem.h5")
            .with("line", Array1::<f64>::zeros(5))
            .with("cube", Array3::<f64>::zeros((2, 2, 2)));
        assert!(matches!(
            source.read_2d("line"),
            Err(Error::NotTwoDimensional { ndim: 1, .. })
        ));
        assert!(matches!(
            source.read_2d("cube"),
            Err(Error::NotTwoDimensional { ndim: 3, .. })
        ));
    }
}
