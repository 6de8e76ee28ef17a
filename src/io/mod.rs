//! I/O layer: the `ArraySource` seam, the HDF5 reader behind it, an in-memory
//! source, and `writers` for saving rendered figures as PNG/JPEG.
pub mod source;
pub use source::ArraySource;

pub mod hdf5;
pub use self::hdf5::Hdf5Reader;

pub mod memory;
pub use memory::MemorySource;

pub mod writers;
