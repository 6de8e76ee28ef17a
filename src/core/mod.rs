//! Core building blocks: grid orientation and ghost trimming, colour maps,
//! the composed figure model, and the processing stages that fill and
//! rasterize it. These are internal primitives consumed by the high-level
//! `api` module.
pub mod colormap;
pub mod figure;
pub mod grid;
pub mod params;
pub mod processing;
