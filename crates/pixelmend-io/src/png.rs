//! PNG image format support
//!
//! Decodes via the `png` crate, normalizing grayscale and alpha variants
//! to interleaved RGB; encodes the raster as 8-bit RGB.

use crate::{IoError, IoResult};
use pixelmend_core::RasterRgb;
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into an RGB raster.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<RasterRgb> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {:?}",
            info.bit_depth
        )));
    }

    let width = info.width;
    let height = info.height;
    let pixels = width as usize * height as usize;
    let data = &buf[..info.buffer_size()];

    let rgb = match info.color_type {
        ColorType::Rgb => data.to_vec(),
        ColorType::Rgba => {
            let mut rgb = Vec::with_capacity(pixels * 3);
            for px in data.chunks_exact(4) {
                rgb.extend_from_slice(&px[..3]);
            }
            rgb
        }
        ColorType::Grayscale => {
            let mut rgb = Vec::with_capacity(pixels * 3);
            for &v in data {
                rgb.extend_from_slice(&[v, v, v]);
            }
            rgb
        }
        ColorType::GrayscaleAlpha => {
            let mut rgb = Vec::with_capacity(pixels * 3);
            for px in data.chunks_exact(2) {
                rgb.extend_from_slice(&[px[0], px[0], px[0]]);
            }
            rgb
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type: {:?}",
                other
            )));
        }
    };

    RasterRgb::from_raw(width, height, rgb).map_err(IoError::Core)
}

/// Write an RGB raster as an 8-bit RGB PNG.
pub fn write_png<W: Write>(raster: &RasterRgb, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(raster.as_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    Ok(())
}
