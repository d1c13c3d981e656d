//! TGA image format support
//!
//! Reads uncompressed (type 2) and run-length encoded (type 10) truecolor
//! Targa files at 24 or 32 bits per pixel; writes uncompressed 24-bit
//! top-down TGA. The format has no magic number, so callers route to this
//! module by file extension.

use crate::{IoError, IoResult};
use pixelmend_core::RasterRgb;
use std::io::{Read, Write};

/// TGA header size
const TGA_HEADER_SIZE: usize = 18;

/// Image type: uncompressed truecolor
const TYPE_TRUECOLOR: u8 = 2;

/// Image type: run-length encoded truecolor
const TYPE_TRUECOLOR_RLE: u8 = 10;

/// Descriptor bit: rows stored top-down
const DESC_TOP_DOWN: u8 = 0x20;

/// Read a TGA image into an RGB raster.
pub fn read_tga<R: Read>(mut reader: R) -> IoResult<RasterRgb> {
    let mut header = [0u8; TGA_HEADER_SIZE];
    reader.read_exact(&mut header)?;

    let id_length = header[0] as usize;
    let colormap_type = header[1];
    let image_type = header[2];
    let width = u16::from_le_bytes([header[12], header[13]]) as u32;
    let height = u16::from_le_bytes([header[14], header[15]]) as u32;
    let bits_per_pixel = header[16];
    let descriptor = header[17];

    if colormap_type != 0 {
        return Err(IoError::UnsupportedFormat(
            "colormapped TGA not supported".to_string(),
        ));
    }
    if image_type != TYPE_TRUECOLOR && image_type != TYPE_TRUECOLOR_RLE {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported TGA image type: {}",
            image_type
        )));
    }
    if bits_per_pixel != 24 && bits_per_pixel != 32 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported TGA bit depth: {}",
            bits_per_pixel
        )));
    }
    if width == 0 || height == 0 {
        return Err(IoError::InvalidData("zero TGA dimension".to_string()));
    }

    if id_length > 0 {
        let mut skip = vec![0u8; id_length];
        reader.read_exact(&mut skip)?;
    }

    let bytes_per_pixel = bits_per_pixel as usize / 8;
    let pixel_count = width as usize * height as usize;

    // Decode into BGR(A) pixel stream
    let mut pixels = vec![0u8; pixel_count * bytes_per_pixel];
    if image_type == TYPE_TRUECOLOR {
        reader.read_exact(&mut pixels)?;
    } else {
        read_rle(&mut reader, &mut pixels, bytes_per_pixel)?;
    }

    let top_down = descriptor & DESC_TOP_DOWN != 0;
    let mut raster = RasterRgb::new(width, height)?;
    for row in 0..height {
        let y = if top_down { row } else { height - 1 - row };
        let row_start = row as usize * width as usize * bytes_per_pixel;
        for x in 0..width {
            let i = row_start + x as usize * bytes_per_pixel;
            raster.set_rgb_unchecked(x, y, pixels[i + 2], pixels[i + 1], pixels[i]);
        }
    }

    Ok(raster)
}

/// Decode an RLE pixel stream into `out`.
fn read_rle<R: Read>(reader: &mut R, out: &mut [u8], bytes_per_pixel: usize) -> IoResult<()> {
    let mut pos = 0;
    while pos < out.len() {
        let mut packet = [0u8; 1];
        reader.read_exact(&mut packet)?;
        let run = (packet[0] & 0x7F) as usize + 1;
        let end = pos + run * bytes_per_pixel;
        if end > out.len() {
            return Err(IoError::InvalidData(
                "TGA RLE packet overruns image".to_string(),
            ));
        }

        if packet[0] & 0x80 != 0 {
            // Run packet: one pixel repeated `run` times
            let mut pixel = vec![0u8; bytes_per_pixel];
            reader.read_exact(&mut pixel)?;
            for chunk in out[pos..end].chunks_exact_mut(bytes_per_pixel) {
                chunk.copy_from_slice(&pixel);
            }
        } else {
            // Raw packet: `run` literal pixels
            reader.read_exact(&mut out[pos..end])?;
        }
        pos = end;
    }
    Ok(())
}

/// Write an RGB raster as an uncompressed 24-bit top-down TGA.
pub fn write_tga<W: Write>(raster: &RasterRgb, mut writer: W) -> IoResult<()> {
    let width = u16::try_from(raster.width())
        .map_err(|_| IoError::EncodeError("image too wide for TGA".to_string()))?;
    let height = u16::try_from(raster.height())
        .map_err(|_| IoError::EncodeError("image too tall for TGA".to_string()))?;

    let mut header = [0u8; TGA_HEADER_SIZE];
    header[2] = TYPE_TRUECOLOR;
    header[12..14].copy_from_slice(&width.to_le_bytes());
    header[14..16].copy_from_slice(&height.to_le_bytes());
    header[16] = 24;
    header[17] = DESC_TOP_DOWN;
    writer.write_all(&header)?;

    let mut row_buffer = vec![0u8; raster.width() as usize * 3];
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let (r, g, b) = raster.get_rgb_unchecked(x, y);
            let i = x as usize * 3;
            row_buffer[i] = b;
            row_buffer[i + 1] = g;
            row_buffer[i + 2] = r;
        }
        writer.write_all(&row_buffer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn gradient(w: u32, h: u32) -> RasterRgb {
        let mut raster = RasterRgb::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                raster.set_rgb_unchecked(x, y, (x * 23) as u8, (y * 41) as u8, ((x ^ y) * 11) as u8);
            }
        }
        raster
    }

    #[test]
    fn test_round_trip() {
        let raster = gradient(9, 6);
        let mut encoded = Vec::new();
        write_tga(&raster, &mut encoded).unwrap();
        assert_eq!(read_tga(Cursor::new(encoded)).unwrap(), raster);
    }

    #[test]
    fn test_bottom_up_read() {
        // Hand-build a 2x2 bottom-up (descriptor 0) 24-bit TGA.
        let mut data = vec![0u8; TGA_HEADER_SIZE];
        data[2] = TYPE_TRUECOLOR;
        data[12..14].copy_from_slice(&2u16.to_le_bytes());
        data[14..16].copy_from_slice(&2u16.to_le_bytes());
        data[16] = 24;
        // First stored row is the bottom image row; pixels are BGR.
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6]); // image row y=1
        data.extend_from_slice(&[7, 8, 9, 10, 11, 12]); // image row y=0

        let raster = read_tga(Cursor::new(data)).unwrap();
        assert_eq!(raster.get_rgb_unchecked(0, 1), (3, 2, 1));
        assert_eq!(raster.get_rgb_unchecked(1, 1), (6, 5, 4));
        assert_eq!(raster.get_rgb_unchecked(0, 0), (9, 8, 7));
        assert_eq!(raster.get_rgb_unchecked(1, 0), (12, 11, 10));
    }

    #[test]
    fn test_rle_read() {
        // 4x1 top-down RLE: a run of 3 red pixels then 1 literal blue.
        let mut data = vec![0u8; TGA_HEADER_SIZE];
        data[2] = TYPE_TRUECOLOR_RLE;
        data[12..14].copy_from_slice(&4u16.to_le_bytes());
        data[14..16].copy_from_slice(&1u16.to_le_bytes());
        data[16] = 24;
        data[17] = DESC_TOP_DOWN;
        data.extend_from_slice(&[0x80 | 2, 0, 0, 255]); // run of 3, BGR red
        data.extend_from_slice(&[0x00, 255, 0, 0]); // raw of 1, BGR blue

        let raster = read_tga(Cursor::new(data)).unwrap();
        assert_eq!(raster.get_rgb_unchecked(0, 0), (255, 0, 0));
        assert_eq!(raster.get_rgb_unchecked(2, 0), (255, 0, 0));
        assert_eq!(raster.get_rgb_unchecked(3, 0), (0, 0, 255));
    }

    #[test]
    fn test_rejects_colormapped() {
        let mut data = vec![0u8; TGA_HEADER_SIZE];
        data[1] = 1; // colormap present
        data[2] = 1; // colormapped image type
        assert!(read_tga(Cursor::new(data)).is_err());
    }
}
