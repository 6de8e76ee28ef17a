use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// Write straight-alpha RGBA pixels as a PNG
pub fn write_rgba_png(output: &Path, cols: usize, rows: usize, rgba_data: &[u8]) -> Result<()> {
    let image = RgbaImage::from_raw(cols as u32, rows as u32, rgba_data.to_vec()).ok_or_else(
        || {
            Error::Render(format!(
                "pixel buffer of {} bytes does not match {}x{} RGBA",
                rgba_data.len(),
                cols,
                rows
            ))
        },
    )?;
    image.save_with_format(output, ImageFormat::Png)?;
    Ok(())
}
