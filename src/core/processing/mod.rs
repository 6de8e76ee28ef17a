//! Processing stages between raw arrays and pixels.
pub mod autoscale;
pub mod canvas;
pub mod labels;
pub mod ops;
pub mod pipeline;
pub mod quiver;
pub mod resize;
pub mod streamlines;
