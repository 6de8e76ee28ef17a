use fast_image_resize::{PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::debug;

use crate::error::{Error, Result};

/// Scale an RGBA cell raster to the plot area with nearest-neighbour sampling,
/// so every grid cell stays a flat block of colour.
pub fn upscale_rgba_nearest(
    data: &[u8],
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> Result<Vec<u8>> {
    if original_cols == target_cols && original_rows == target_rows {
        return Ok(data.to_vec());
    }
    if original_cols == 0 || original_rows == 0 || target_cols == 0 || target_rows == 0 {
        return Err(Error::Render(format!(
            "cannot resize {}x{} raster to {}x{}",
            original_cols, original_rows, target_cols, target_rows
        )));
    }

    debug!(
        "Upscaling {}x{} cells to {}x{} pixels",
        original_cols, original_rows, target_cols, target_rows
    );

    let resize_options = ResizeOptions::new().resize_alg(ResizeAlg::Nearest);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols as u32,
        original_rows as u32,
        data.to_vec(),
        PixelType::U8x4,
    )
    .map_err(Error::external)?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::external)?;

    Ok(dst_image.into_vec())
}
