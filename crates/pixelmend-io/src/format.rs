//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.
//! TGA carries no magic number, so detection falls back to the file
//! extension for it.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Known image formats.
///
/// Only [`Png`](ImageFormat::Png), [`Jpeg`](ImageFormat::Jpeg),
/// [`Bmp`](ImageFormat::Bmp) and [`Tga`](ImageFormat::Tga) have decode and
/// encode support; the remaining formats are recognized so they can be
/// rejected with a precise error instead of a generic parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Bmp,
    Tga,
    Gif,
    Pnm,
    Psd,
    Pic,
}

impl ImageFormat {
    /// True if the format has both decode and encode support.
    pub fn is_supported(self) -> bool {
        matches!(
            self,
            ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp | ImageFormat::Tga
        )
    }

    /// Guess a format from a path extension (case-insensitive).
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "bmp" => Some(ImageFormat::Bmp),
            "tga" => Some(ImageFormat::Tga),
            "gif" => Some(ImageFormat::Gif),
            "pbm" | "pgm" | "ppm" | "pnm" => Some(ImageFormat::Pnm),
            "psd" => Some(ImageFormat::Psd),
            "pic" => Some(ImageFormat::Pic),
            _ => None,
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Bmp => "BMP",
            ImageFormat::Tga => "TGA",
            ImageFormat::Gif => "GIF",
            ImageFormat::Pnm => "PNM",
            ImageFormat::Psd => "PSD",
            ImageFormat::Pic => "PIC",
        };
        f.write_str(name)
    }
}

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    /// BMP: "BM"
    pub const BMP: &[u8] = b"BM";

    /// GIF87a / GIF89a
    pub const GIF87A: &[u8] = b"GIF87a";
    pub const GIF89A: &[u8] = b"GIF89a";

    /// PSD: "8BPS"
    pub const PSD: &[u8] = b"8BPS";

    /// Softimage PIC: 53 80 F6 34
    pub const PIC: &[u8] = &[0x53, 0x80, 0xF6, 0x34];
}

/// Detect image format from a file path.
///
/// Reads the header bytes and sniffs magic numbers; if none match, falls
/// back to the extension (required for TGA, which has no signature).
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path.as_ref())?;
    let mut header = [0u8; 12];
    let bytes_read = file.read(&mut header)?;

    match detect_format_from_bytes(&header[..bytes_read]) {
        Ok(format) => Ok(format),
        Err(e) => ImageFormat::from_extension(path).ok_or(e),
    }
}

/// Detect image format from header bytes.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.len() >= 8 && data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }

    if data.len() >= 3 && data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }

    if data.starts_with(magic::BMP) {
        return Ok(ImageFormat::Bmp);
    }

    if data.len() >= 6 && (data.starts_with(magic::GIF87A) || data.starts_with(magic::GIF89A)) {
        return Ok(ImageFormat::Gif);
    }

    if data.len() >= 4 && data.starts_with(magic::PSD) {
        return Ok(ImageFormat::Psd);
    }

    if data.len() >= 4 && data.starts_with(magic::PIC) {
        return Ok(ImageFormat::Pic);
    }

    // PNM: "P1".."P6"
    if data[0] == b'P' && (b'1'..=b'6').contains(&data[1]) {
        return Ok(ImageFormat::Pnm);
    }

    Err(IoError::UnsupportedFormat(
        "unrecognized image signature".to_string(),
    ))
}
