use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use h5render::api::{load_style, render};
use h5render::io::writers::FileViewer;
use h5render::{RenderParams, Result, VectorPair};

use super::args::CliArgs;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn to_pair(names: Option<&[String]>) -> Option<VectorPair> {
    match names {
        Some([x, y]) => Some(VectorPair::new(x.as_str(), y.as_str())),
        _ => None,
    }
}

/// Merge the style file (if any) with explicit flags into one parameter set
pub fn build_params(args: &CliArgs) -> Result<RenderParams> {
    let mut style = load_style(args.config.as_deref())?;
    if let Some(colormap) = args.colormap {
        style.colormap = colormap;
    }
    if let Some(size) = args.size {
        style.size = size;
    }
    if let Some(density) = args.density {
        style.density = density;
    }
    if let Some(stride) = args.quiver_stride {
        style.quiver_stride = stride;
    }
    style.validate()?;

    Ok(RenderParams {
        filename: args.filename.clone(),
        imshow: args.imshow.clone(),
        streamplot: to_pair(args.streamplot.as_deref()),
        quiver: to_pair(args.quiver.as_deref()),
        show_ghost: args.show_ghost,
        style,
    })
}

#[cfg(feature = "gui")]
fn show_in_window(params: &RenderParams) -> Result<()> {
    let mut viewer = h5render::gui::WindowViewer::new();
    render(params, &mut viewer)
}

#[cfg(not(feature = "gui"))]
fn show_in_window(_params: &RenderParams) -> Result<()> {
    Err(h5render::Error::Argument(
        "built without the `gui` feature; pass --output PATH to save the figure".into(),
    ))
}

pub fn run(args: CliArgs) -> Result<()> {
    init_logging(args.log);
    debug!("{:?}", args);

    let params = build_params(&args)?;
    match &args.output {
        Some(output) => {
            let mut viewer = FileViewer::new(output, args.format)?;
            render(&params, &mut viewer)?;
            info!("Wrote {:?}", output);
            Ok(())
        }
        None => show_in_window(&params),
    }
}
