//! JPEG image format support
//!
//! Reads via the `jpeg-decoder` crate (grayscale expanded to RGB, CMYK
//! rejected), writes via `jpeg-encoder` at a fixed baseline quality.

use crate::{IoError, IoResult};
use jpeg_decoder::PixelFormat;
use jpeg_encoder::{ColorType, Encoder};
use pixelmend_core::RasterRgb;
use std::io::Read;

/// Baseline quality used for all JPEG writes.
pub const JPEG_QUALITY: u8 = 90;

/// Read a JPEG image into an RGB raster.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<RasterRgb> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG image info".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let rgb = match info.pixel_format {
        PixelFormat::RGB24 => data,
        PixelFormat::L8 => {
            let mut rgb = Vec::with_capacity(data.len() * 3);
            for v in data {
                rgb.extend_from_slice(&[v, v, v]);
            }
            rgb
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    RasterRgb::from_raw(width, height, rgb).map_err(IoError::Core)
}

/// Write an RGB raster as a baseline JPEG.
pub fn write_jpeg<W: std::io::Write>(raster: &RasterRgb, writer: W) -> IoResult<()> {
    let width = u16::try_from(raster.width())
        .map_err(|_| IoError::EncodeError("image too wide for JPEG".to_string()))?;
    let height = u16::try_from(raster.height())
        .map_err(|_| IoError::EncodeError("image too tall for JPEG".to_string()))?;

    let encoder = Encoder::new(writer, JPEG_QUALITY);
    encoder
        .encode(raster.as_bytes(), width, height, ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;
    Ok(())
}
