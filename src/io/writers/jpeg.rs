use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{Error, Result};

/// Write RGBA pixels as a JPEG, dropping alpha
pub fn write_rgb_jpeg(output: &Path, cols: usize, rows: usize, rgba_data: &[u8]) -> Result<()> {
    let (width, height) = match (u16::try_from(cols), u16::try_from(rows)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(Error::Argument(format!(
                "JPEG output is limited to 65535x65535, figure is {}x{}",
                cols, rows
            )));
        }
    };

    let rgb_data: Vec<u8> = rgba_data
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, 95);
    encoder
        .encode(&rgb_data, width, height, ColorType::Rgb)
        .map_err(Error::external)?;
    Ok(())
}
