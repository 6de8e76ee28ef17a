use clap::Parser;
use std::path::PathBuf;

use h5render::{Colormap, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "render",
    version,
    about = "Render 2D arrays from an HDF5 file as heat map, streamlines and quiver layers"
)]
pub struct CliArgs {
    /// Input HDF5 file
    pub filename: PathBuf,

    /// Dataset to draw as a heat map with a colorbar
    #[arg(long, visible_alias = "variable", value_name = "NAME")]
    pub imshow: Option<String>,

    /// Two datasets (x and y components) to draw as streamlines
    #[arg(long, num_args = 2, value_names = ["NAME1", "NAME2"])]
    pub streamplot: Option<Vec<String>>,

    /// Two datasets (x and y components) to draw as arrows
    #[arg(long, num_args = 2, value_names = ["NAME1", "NAME2"])]
    pub quiver: Option<Vec<String>>,

    /// Keep the one-cell ghost border instead of trimming it
    #[arg(long = "show_ghost", visible_alias = "show-ghost", default_value_t = false)]
    pub show_ghost: bool,

    /// Colour map for the heat map
    #[arg(long, value_enum)]
    pub colormap: Option<Colormap>,

    /// Side of the square plot area in pixels
    #[arg(long, value_name = "PX")]
    pub size: Option<u32>,

    /// Streamline density (1.0 gives a 30x30 seeding grid)
    #[arg(long, value_name = "D")]
    pub density: Option<f64>,

    /// Draw a quiver arrow at every Nth grid point
    #[arg(long, value_name = "N")]
    pub quiver_stride: Option<usize>,

    /// JSON file with figure style defaults; flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Save the figure to this file instead of opening a window
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format (png or jpeg); inferred from the extension if omitted
    #[arg(short = 'f', long, value_enum, requires = "output")]
    pub format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
