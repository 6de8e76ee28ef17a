//! Read → orient → trim → build layers.
use ndarray::Array2;
use tracing::{debug, info, warn};

use crate::core::figure::{Figure, ImageLayer, Layer, QuiverLayer, StreamLayer};
use crate::core::grid::{Mesh, to_plot_orientation, trim_ghost};
use crate::core::params::RenderParams;
use crate::core::processing::autoscale::compute_value_stats;
use crate::core::processing::quiver::build_arrows;
use crate::core::processing::streamlines::trace_streamlines;
use crate::error::{Error, Result};
use crate::io::source::ArraySource;
use crate::types::VectorPair;

/// Read one dataset and bring it into plotting order, dropping the ghost border unless kept
pub fn load_grid<S: ArraySource + ?Sized>(
    source: &S,
    name: &str,
    show_ghost: bool,
) -> Result<Array2<f64>> {
    let stored = source.read_2d(name)?;
    prepare_grid(stored, name, show_ghost)
}

fn prepare_grid(stored: Array2<f64>, name: &str, show_ghost: bool) -> Result<Array2<f64>> {
    let plot = to_plot_orientation(stored);
    let grid = if show_ghost {
        plot
    } else {
        trim_ghost(&plot, name)?
    };
    let (rows, cols) = grid.dim();
    info!(
        "Loaded `{}` as {}x{} grid ({})",
        name,
        rows,
        cols,
        if show_ghost { "with ghost cells" } else { "interior" }
    );
    Ok(grid)
}

/// Read both components of a vector field; they must share one shape
pub fn load_vector_field<S: ArraySource + ?Sized>(
    source: &S,
    pair: &VectorPair,
    show_ghost: bool,
) -> Result<(Array2<f64>, Array2<f64>)> {
    let x = source.read_2d(&pair.x)?;
    let y = source.read_2d(&pair.y)?;
    if x.dim() != y.dim() {
        return Err(Error::ShapeMismatch {
            first: pair.x.clone(),
            first_shape: x.dim(),
            second: pair.y.clone(),
            second_shape: y.dim(),
        });
    }
    Ok((
        prepare_grid(x, &pair.x, show_ghost)?,
        prepare_grid(y, &pair.y, show_ghost)?,
    ))
}

fn figure_title<S: ArraySource + ?Sized>(source: &S, params: &RenderParams) -> String {
    let file = source
        .location()
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.location().display().to_string());
    let mut parts = Vec::new();
    if let Some(name) = &params.imshow {
        parts.push(name.clone());
    }
    if let Some(pair) = &params.streamplot {
        parts.push(format!("streamplot {}", pair));
    }
    if let Some(pair) = &params.quiver {
        parts.push(format!("quiver {}", pair));
    }
    if parts.is_empty() {
        file
    } else {
        format!("{} - {}", file, parts.join(", "))
    }
}

/// Build every requested layer. Any failure aborts the whole figure.
pub fn compose_figure<S: ArraySource + ?Sized>(source: &S, params: &RenderParams) -> Result<Figure> {
    let style = &params.style;
    style.validate()?;
    let mut figure = Figure::new(figure_title(source, params));

    if let Some(name) = &params.imshow {
        let data = load_grid(source, name, params.show_ghost)?;
        let stats = compute_value_stats(&data);
        match &stats {
            None => warn!("`{}` has no finite values", name),
            Some(s) if s.is_flat() => warn!("`{}` is constant ({})", name, s.min),
            Some(s) => debug!(
                "`{}` range [{}, {}], mean {:.4}, std {:.4}",
                name, s.min, s.max, s.mean, s.std
            ),
        }
        figure.push(Layer::Image(ImageLayer {
            name: name.clone(),
            mesh: Mesh::for_shape(data.dim()),
            data,
            stats,
            colormap: style.colormap,
        }));
    }

    if let Some(pair) = &params.streamplot {
        let (u, v) = load_vector_field(source, pair, params.show_ghost)?;
        let lines = trace_streamlines(&u, &v, style.density);
        if lines.is_empty() {
            warn!("No streamlines for {}", pair);
        }
        figure.push(Layer::Streamlines(StreamLayer {
            names: pair.clone(),
            shape: u.dim(),
            lines,
        }));
    }

    if let Some(pair) = &params.quiver {
        let (u, v) = load_vector_field(source, pair, params.show_ghost)?;
        let mesh = Mesh::for_shape(u.dim());
        let arrows = build_arrows(&u, &v, &mesh, style.quiver_stride);
        debug!("Built {} arrows for {}", arrows.len(), pair);
        figure.push(Layer::Quiver(QuiverLayer {
            names: pair.clone(),
            shape: u.dim(),
            arrows,
        }));
    }

    if !params.has_layers() {
        warn!("No layers requested, showing empty axes");
    }
    Ok(figure)
}
