//! Shared types and enums used across h5render.
//! Includes `Colormap`, `OutputFormat`, `LayerKind` and the `VectorPair`
//! naming a two-component field.
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Viridis,
    Gray,
    Coolwarm,
    Temperature,
}

impl std::fmt::Display for Colormap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Colormap::Viridis => "viridis",
            Colormap::Gray => "gray",
            Colormap::Coolwarm => "coolwarm",
            Colormap::Temperature => "temperature",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    Png,
    Jpeg, // Lossy, alpha dropped
}

impl OutputFormat {
    /// Guess the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(OutputFormat::Png),
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            _ => None,
        }
    }
}

/// Kind of plot layer, in the order layers are composed onto the axes
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum LayerKind {
    Image,
    Streamlines,
    Quiver,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Image => write!(f, "imshow"),
            LayerKind::Streamlines => write!(f, "streamplot"),
            LayerKind::Quiver => write!(f, "quiver"),
        }
    }
}

/// Dataset names of the x and y components of a vector field
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct VectorPair {
    pub x: String,
    pub y: String,
}

impl VectorPair {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl std::fmt::Display for VectorPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
