//! On-screen viewer backed by eframe/egui.
pub mod app;

pub use app::WindowViewer;
