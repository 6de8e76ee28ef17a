//! The composed figure: plot layers on one set of axes with a fixed extent.
//! Produced by the processing pipeline, consumed by the canvas.
use ndarray::Array2;

use crate::core::grid::Mesh;
use crate::core::processing::autoscale::ValueStats;
use crate::core::processing::quiver::Arrow;
use crate::core::processing::streamlines::Streamline;
use crate::types::{Colormap, LayerKind, VectorPair};

/// Axis limits of the figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Extent {
    pub const UNIT: Extent = Extent {
        x: (0.0, 1.0),
        y: (0.0, 1.0),
    };
}

/// Heat map of one grid, in plotting orientation (row 0 at the bottom)
#[derive(Debug, Clone)]
pub struct ImageLayer {
    pub name: String,
    pub data: Array2<f64>,
    pub mesh: Mesh,
    pub stats: Option<ValueStats>,
    pub colormap: Colormap,
}

impl ImageLayer {
    /// Colour scale limits; an all-NaN grid falls back to [0, 1]
    pub fn value_range(&self) -> (f64, f64) {
        self.stats.map(|s| (s.min, s.max)).unwrap_or((0.0, 1.0))
    }
}

#[derive(Debug, Clone)]
pub struct StreamLayer {
    pub names: VectorPair,
    pub shape: (usize, usize),
    pub lines: Vec<Streamline>,
}

#[derive(Debug, Clone)]
pub struct QuiverLayer {
    pub names: VectorPair,
    pub shape: (usize, usize),
    pub arrows: Vec<Arrow>,
}

#[derive(Debug, Clone)]
pub enum Layer {
    Image(ImageLayer),
    Streamlines(StreamLayer),
    Quiver(QuiverLayer),
}

impl Layer {
    pub fn kind(&self) -> LayerKind {
        match self {
            Layer::Image(_) => LayerKind::Image,
            Layer::Streamlines(_) => LayerKind::Streamlines,
            Layer::Quiver(_) => LayerKind::Quiver,
        }
    }

    /// Grid shape the layer was built from, (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Layer::Image(l) => l.data.dim(),
            Layer::Streamlines(l) => l.shape,
            Layer::Quiver(l) => l.shape,
        }
    }
}

/// Colour scale shown next to the axes for an image layer
#[derive(Debug, Clone, PartialEq)]
pub struct Colorbar {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub colormap: Colormap,
}

#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    /// Drawn in order: image, streamlines, quiver
    pub layers: Vec<Layer>,
    pub colorbars: Vec<Colorbar>,
    pub extent: Extent,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            layers: Vec::new(),
            colorbars: Vec::new(),
            extent: Extent::UNIT,
        }
    }

    /// Add a layer, keeping layers in composition order
    pub fn push(&mut self, layer: Layer) {
        if let Layer::Image(image) = &layer {
            let (min, max) = image.value_range();
            self.colorbars.push(Colorbar {
                label: image.name.clone(),
                min,
                max,
                colormap: image.colormap,
            });
        }
        let kind = layer.kind();
        let at = self
            .layers
            .iter()
            .position(|l| l.kind() > kind)
            .unwrap_or(self.layers.len());
        self.layers.insert(at, layer);
    }

    pub fn layer_kinds(&self) -> Vec<LayerKind> {
        self.layers.iter().map(Layer::kind).collect()
    }

    pub fn colorbar_count(&self) -> usize {
        self.colorbars.len()
    }

    pub fn image(&self) -> Option<&ImageLayer> {
        self.layers.iter().find_map(|l| match l {
            Layer::Image(image) => Some(image),
            _ => None,
        })
    }
}
