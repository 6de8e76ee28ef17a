//! Command Line Interface (CLI) layer for h5render.
//!
//! `args` defines the clap parser and `runner` turns parsed flags into
//! `RenderParams`, picks a viewer (window or file) and renders. Embedders
//! should call `h5render::api` directly instead of going through the CLI.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
