use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Colormap, VectorPair};

/// Accepted plot-area side, in pixels
pub const SIZE_RANGE: std::ops::RangeInclusive<u32> = 16..=8192;
/// Largest streamline density; the seeding mask is then 300 cells per side
pub const MAX_DENSITY: f64 = 10.0;

/// Figure styling, suitable for JSON config files.
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureStyle {
    pub colormap: Colormap,
    /// Side of the square plot area in pixels
    pub size: u32,
    /// Streamline density; 1.0 seeds a 30x30 occupancy mask
    pub density: f64,
    /// Draw a quiver arrow at every Nth grid point
    pub quiver_stride: usize,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            colormap: Colormap::Viridis,
            size: 640,
            density: 1.0,
            quiver_stride: 1,
        }
    }
}

impl FigureStyle {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let style: FigureStyle = serde_json::from_str(&text)?;
        style.validate()?;
        Ok(style)
    }

    pub fn validate(&self) -> Result<()> {
        if !SIZE_RANGE.contains(&self.size) {
            return Err(Error::Argument(format!(
                "size must be between {} and {} pixels, got {}",
                SIZE_RANGE.start(),
                SIZE_RANGE.end(),
                self.size
            )));
        }
        if !(self.density.is_finite() && self.density > 0.0 && self.density <= MAX_DENSITY) {
            return Err(Error::Argument(format!(
                "density must be in (0, {}], got {}",
                MAX_DENSITY, self.density
            )));
        }
        if self.quiver_stride == 0 {
            return Err(Error::Argument("quiver stride must be at least 1".into()));
        }
        Ok(())
    }
}

/// Everything a single render call needs: which file, which layers, how to draw them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderParams {
    pub filename: PathBuf,
    pub imshow: Option<String>,
    pub streamplot: Option<VectorPair>,
    pub quiver: Option<VectorPair>,
    /// Keep the one-cell ghost border instead of trimming it
    pub show_ghost: bool,
    pub style: FigureStyle,
}

impl RenderParams {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            imshow: None,
            streamplot: None,
            quiver: None,
            show_ghost: false,
            style: FigureStyle::default(),
        }
    }

    pub fn with_imshow(mut self, name: impl Into<String>) -> Self {
        self.imshow = Some(name.into());
        self
    }

    pub fn with_streamplot(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.streamplot = Some(VectorPair::new(x, y));
        self
    }

    pub fn with_quiver(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.quiver = Some(VectorPair::new(x, y));
        self
    }

    pub fn with_ghost(mut self, show_ghost: bool) -> Self {
        self.show_ghost = show_ghost;
        self
    }

    pub fn has_layers(&self) -> bool {
        self.imshow.is_some() || self.streamplot.is_some() || self.quiver.is_some()
    }
}
