//! BMP image format support
//!
//! Reads uncompressed Windows bitmaps (8-bit paletted or grayscale, 24-bit
//! BGR, 32-bit BGRA) into an RGB raster and writes 24-bit uncompressed BMP.

use crate::{IoError, IoResult};
use pixelmend_core::RasterRgb;
use std::io::{Read, Write};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

/// Read a BMP image into an RGB raster.
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<RasterRgb> {
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header)?;

    if &file_header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }

    let pixel_offset = u32::from_le_bytes([
        file_header[10],
        file_header[11],
        file_header[12],
        file_header[13],
    ]) as usize;

    let mut info_header = [0u8; 40];
    reader.read_exact(&mut info_header)?;

    let header_size = u32::from_le_bytes([
        info_header[0],
        info_header[1],
        info_header[2],
        info_header[3],
    ]);
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {}",
            header_size
        )));
    }

    let width = i32::from_le_bytes([
        info_header[4],
        info_header[5],
        info_header[6],
        info_header[7],
    ]);
    let height = i32::from_le_bytes([
        info_header[8],
        info_header[9],
        info_header[10],
        info_header[11],
    ]);

    let planes = u16::from_le_bytes([info_header[12], info_header[13]]);
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {}",
            planes
        )));
    }

    let bits_per_pixel = u16::from_le_bytes([info_header[14], info_header[15]]);
    let compression = u32::from_le_bytes([
        info_header[16],
        info_header[17],
        info_header[18],
        info_header[19],
    ]);

    // Uncompressed (or bitfields with the default masks) only
    if compression != 0 && compression != 3 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {}",
            compression
        )));
    }

    if !matches!(bits_per_pixel, 8 | 24 | 32) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP bit depth: {}",
            bits_per_pixel
        )));
    }

    let top_down = height < 0;
    let width = width.unsigned_abs();
    let height = height.unsigned_abs();
    if width == 0 || height == 0 {
        return Err(IoError::InvalidData("zero BMP dimension".to_string()));
    }

    // 8-bit images carry a palette (BGRA quads); map indices through it.
    let palette = if bits_per_pixel == 8 {
        let bytes_to_skip = header_size as usize - 40;
        if bytes_to_skip > 0 {
            let mut skip = vec![0u8; bytes_to_skip];
            reader.read_exact(&mut skip)?;
        }
        let mut quads = vec![0u8; 256 * 4];
        reader.read_exact(&mut quads)?;
        let mut pal = Vec::with_capacity(256);
        for quad in quads.chunks_exact(4) {
            pal.push((quad[2], quad[1], quad[0]));
        }
        Some(pal)
    } else {
        None
    };

    // Skip any gap between the headers and the pixel data
    let current_pos = BMP_FILE_HEADER_SIZE
        + header_size as usize
        + palette.as_ref().map_or(0, |_| 256 * 4);
    if pixel_offset > current_pos {
        let mut skip = vec![0u8; pixel_offset - current_pos];
        reader.read_exact(&mut skip)?;
    }

    let mut raster = RasterRgb::new(width, height)?;

    // BMP rows are padded to 4-byte boundaries
    let row_stride = ((width as usize * bits_per_pixel as usize + 31) / 32) * 4;
    let mut row_buffer = vec![0u8; row_stride];

    for row in 0..height {
        reader.read_exact(&mut row_buffer)?;
        let y = if top_down { row } else { height - 1 - row };

        match bits_per_pixel {
            8 => {
                let pal = palette.as_ref().unwrap();
                for x in 0..width {
                    let (r, g, b) = pal[row_buffer[x as usize] as usize];
                    raster.set_rgb_unchecked(x, y, r, g, b);
                }
            }
            24 => {
                for x in 0..width {
                    let i = x as usize * 3;
                    raster.set_rgb_unchecked(x, y, row_buffer[i + 2], row_buffer[i + 1], row_buffer[i]);
                }
            }
            32 => {
                for x in 0..width {
                    let i = x as usize * 4;
                    raster.set_rgb_unchecked(x, y, row_buffer[i + 2], row_buffer[i + 1], row_buffer[i]);
                }
            }
            _ => unreachable!(),
        }
    }

    Ok(raster)
}

/// Write an RGB raster as a 24-bit uncompressed BMP.
pub fn write_bmp<W: Write>(raster: &RasterRgb, mut writer: W) -> IoResult<()> {
    let width = raster.width();
    let height = raster.height();

    let row_stride = ((width as usize * 24 + 31) / 32) * 4;
    let pixel_data_size = row_stride * height as usize;
    let pixel_offset = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize;
    let file_size = pixel_offset + pixel_data_size;

    // File header
    writer.write_all(b"BM")?;
    writer.write_all(&(file_size as u32).to_le_bytes())?;
    writer.write_all(&[0u8; 4])?; // Reserved
    writer.write_all(&(pixel_offset as u32).to_le_bytes())?;

    // Info header
    writer.write_all(&BMP_INFO_HEADER_SIZE.to_le_bytes())?;
    writer.write_all(&(width as i32).to_le_bytes())?;
    writer.write_all(&(height as i32).to_le_bytes())?; // Bottom-up
    writer.write_all(&1u16.to_le_bytes())?; // Planes
    writer.write_all(&24u16.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // Compression
    writer.write_all(&(pixel_data_size as u32).to_le_bytes())?;
    writer.write_all(&0i32.to_le_bytes())?; // X pixels per meter
    writer.write_all(&0i32.to_le_bytes())?; // Y pixels per meter
    writer.write_all(&0u32.to_le_bytes())?; // Colors used
    writer.write_all(&0u32.to_le_bytes())?; // Important colors

    // Pixel rows, bottom-up, BGR, padded
    let mut row_buffer = vec![0u8; row_stride];
    for row in 0..height {
        let y = height - 1 - row;
        for x in 0..width {
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
                raster.set_rgb_unchecked(x, y, (x * 17) as u8, (y * 31) as u8, ((x + y) * 7) as u8);
            }
        }
        raster
    }

    #[test]
    fn test_round_trip_aligned_width() {
        let raster = gradient(8, 5);
        let mut encoded = Vec::new();
        write_bmp(&raster, &mut encoded).unwrap();
        assert_eq!(read_bmp(Cursor::new(encoded)).unwrap(), raster);
    }

    #[test]
    fn test_round_trip_padded_width() {
        // Width 5 gives a 15-byte row padded to 16; padding must not leak.
        let raster = gradient(5, 7);
        let mut encoded = Vec::new();
        write_bmp(&raster, &mut encoded).unwrap();
        assert_eq!(read_bmp(Cursor::new(encoded)).unwrap(), raster);
    }

    #[test]
    fn test_rejects_bad_magic() {
        let data = b"XX rest of a non-bmp file".to_vec();
        assert!(read_bmp(Cursor::new(data)).is_err());
    }

    #[test]
    fn test_rejects_truncated_file() {
        let raster = gradient(8, 8);
        let mut encoded = Vec::new();
        write_bmp(&raster, &mut encoded).unwrap();
        encoded.truncate(encoded.len() / 2);
        assert!(read_bmp(Cursor::new(encoded)).is_err());
    }
}
