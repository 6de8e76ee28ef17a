//! HDF5 reader tests.
//!
//! Write real HDF5 files into a temporary directory and render them through
//! the public API.

use std::path::{Path, PathBuf};

use h5render::{ArraySource, Error, Hdf5Reader, RenderParams, render_to_path};
use ndarray::{Array2, Array3};

fn write_sample(dir: &Path) -> PathBuf {
    let path = dir.join("sim.h5");
    let file = hdf5::File::create(&path).unwrap();

    let rho = Array2::from_shape_fn((12, 12), |(i, j)| (i + j) as f64);
    file.new_dataset_builder()
        .with_data(&rho)
        .create("rho")
        .unwrap();

    // integer data is converted on read
    let cells = Array2::from_shape_fn((12, 12), |(i, j)| (i * j) as i32);
    file.new_dataset_builder()
        .with_data(&cells)
        .create("cells")
        .unwrap();

    let vx = Array2::<f32>::from_elem((12, 12), 1.0);
    let vy = Array2::<f32>::from_elem((12, 12), 0.5);
    file.new_dataset_builder().with_data(&vx).create("vx").unwrap();
    file.new_dataset_builder().with_data(&vy).create("vy").unwrap();

    let cube = Array3::<f64>::zeros((3, 3, 3));
    file.new_dataset_builder()
        .with_data(&cube)
        .create("cube")
        .unwrap();

    path
}

#[test]
fn missing_file_is_a_file_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Hdf5Reader::open(dir.path().join("nope.h5")).err().unwrap();
    assert!(matches!(err, Error::FileAccess { .. }));
}

#[test]
fn non_hdf5_file_is_a_file_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.h5");
    std::fs::write(&path, b"not an hdf5 file").unwrap();
    let err = Hdf5Reader::open(&path).err().unwrap();
    assert!(matches!(err, Error::FileAccess { .. }));
}

#[test]
fn reads_datasets_as_f64() {
    let dir = tempfile::tempdir().unwrap();
    let reader = Hdf5Reader::open(write_sample(dir.path())).unwrap();

    let mut names = reader.names();
    names.sort();
    assert_eq!(names, vec!["cells", "cube", "rho", "vx", "vy"]);

    let rho = reader.read_2d("rho").unwrap();
    assert_eq!(rho.dim(), (12, 12));
    assert_eq!(rho[[3, 4]], 7.0);

    let cells = reader.read_2d("cells").unwrap();
    assert_eq!(cells[[5, 6]], 30.0);
}

#[test]
fn lookup_errors_name_the_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let reader = Hdf5Reader::open(write_sample(dir.path())).unwrap();

    match reader.read_2d("pressure") {
        Err(Error::DatasetNotFound { name, available, .. }) => {
            assert_eq!(name, "pressure");
            assert_eq!(available, "cells, cube, rho, vx, vy");
        }
        other => panic!("expected DatasetNotFound, got {other:?}"),
    }
    assert!(matches!(
        reader.read_2d("cube"),
        Err(Error::NotTwoDimensional { ndim: 3, .. })
    ));
}

#[test]
fn renders_file_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());
    let output = dir.path().join("out.png");

    let mut params = RenderParams::new(&input)
        .with_imshow("rho")
        .with_quiver("vx", "vy");
    params.style.size = 96;
    render_to_path(&params, &output, None).unwrap();

    let written = image::open(&output).unwrap();
    assert!(written.width() > 96 && written.height() > 96);
}

#[test]
fn missing_dataset_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sample(dir.path());
    let output = dir.path().join("out.png");

    let params = RenderParams::new(&input).with_imshow("pressure");
    assert!(render_to_path(&params, &output, None).is_err());
    assert!(!output.exists());
}
