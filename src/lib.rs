#![doc = r#"
h5render: render 2D arrays from HDF5 simulation output.

This crate reads named 2D datasets from an HDF5 file and draws them on one set of
axes spanning [0, 1]²: a heat map with a colorbar (`imshow`), streamlines of a
two-component field (`streamplot`), and arrows of a two-component field (`quiver`).
By default the one-cell ghost border around each array is trimmed before drawing.
It powers the `render` CLI and can be embedded in your own Rust applications.

Requirements
------------
- HDF5 development headers and runtime available on your system.
- Rust 2024 edition toolchain.

Add dependency
--------------
```toml
[dependencies]
h5render = { version = "0.1", default-features = false }
```

Quick start: render a file to PNG
---------------------------------
```rust,no_run
use std::path::Path;
use h5render::{render_to_path, RenderParams};

fn main() -> h5render::Result<()> {
    let params = RenderParams::new("/data/run_0042.h5")
        .with_imshow("rho")
        .with_streamplot("vx", "vy");

    render_to_path(&params, Path::new("/out/rho.png"), None)
}
```

Compose from in-memory arrays
-----------------------------
```rust
use ndarray::Array2;
use h5render::{compose_figure, LayerKind, MemorySource, RenderParams};

fn main() -> h5render::Result<()> {
    let source = MemorySource::new("sim.h5").with("rho", Array2::<f64>::zeros((12, 12)));
    let params = RenderParams::new("sim.h5").with_imshow("rho");

    let figure = compose_figure(&source, &params)?;
    assert_eq!(figure.layer_kinds(), vec![LayerKind::Image]);
    assert_eq!(figure.image().map(|l| l.data.dim()), Some((10, 10)));
    Ok(())
}
```

Error handling
--------------
All public functions return `h5render::Result<T>`; match on `h5render::Error` to handle
specific cases.

```rust,no_run
use h5render::{render_to_path, Error, RenderParams};

fn main() {
    let params = RenderParams::new("/data/run.h5").with_imshow("pressure");
    match render_to_path(&params, std::path::Path::new("/out/p.png"), None) {
        Ok(()) => {}
        Err(Error::DatasetNotFound { name, available, .. }) => {
            eprintln!("no `{name}`; file has: {available}")
        }
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Feature flags
-------------
- `gui` (default): on-screen viewer built on eframe.
- `full`: enables the complete feature set.

Useful modules
--------------
- [`api`]: high-level entry points and the `Viewer` trait.
- [`types`]: enums and small shared types (e.g. `Colormap`, `OutputFormat`, `VectorPair`).
- [`io`]: HDF5 and in-memory array sources, image writers.
- [`error`]: crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// GUI module (only available with gui feature)
#[cfg(feature = "gui")]
pub mod gui;

// Curated public API surface
// Types
pub use core::figure::{Extent, Figure, Layer};
pub use core::params::{FigureStyle, RenderParams};
pub use core::processing::canvas::RenderedFigure;
pub use error::{Error, Result};
pub use types::{Colormap, LayerKind, OutputFormat, VectorPair};

// Sources
pub use io::{ArraySource, Hdf5Reader, MemorySource};

// High-level API re-exports
pub use api::{
    Viewer, compose_figure, load_style, render, render_source, render_to_buffer, render_to_path,
};
