//! pixelmend-io - Image decode/encode boundary
//!
//! Everything behind the pipeline's two I/O contracts:
//!
//! - `decode file -> RGB raster` ([`read_image`])
//! - `RGB raster -> encoded file` ([`write_image`])
//!
//! Formats with full support: PNG, JPEG, BMP, TGA. GIF, PNM, PSD and PIC
//! are recognized by signature but rejected with
//! [`IoError::UnsupportedFormat`] on both read and write; rejection happens
//! before any pixel work so unsupported targets can never silently no-op.

pub mod bmp;
pub mod error;
pub mod format;
pub mod jpeg;
pub mod png;
pub mod tga;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use pixelmend_core::RasterRgb;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Decode an image file into an RGB raster.
///
/// The format is sniffed from the file's magic bytes (extension fallback
/// for TGA), then dispatched to the matching decoder.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RasterRgb> {
    let path = path.as_ref();
    let fmt = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);
    match fmt {
        ImageFormat::Png => png::read_png(reader),
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        ImageFormat::Bmp => bmp::read_bmp(reader),
        ImageFormat::Tga => tga::read_tga(reader),
        other => Err(IoError::UnsupportedFormat(format!(
            "no decode support for {}",
            other
        ))),
    }
}

/// Encode an RGB raster to a file, choosing the format from the target
/// extension.
pub fn write_image<P: AsRef<Path>>(raster: &RasterRgb, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let fmt = ImageFormat::from_extension(path).ok_or_else(|| {
        IoError::UnsupportedFormat(format!("unrecognized target extension: {}", path.display()))
    })?;
    write_image_format(raster, path, fmt)
}

/// Encode an RGB raster to a file in an explicit format.
pub fn write_image_format<P: AsRef<Path>>(
    raster: &RasterRgb,
    path: P,
    fmt: ImageFormat,
) -> IoResult<()> {
    // Fail fast before touching the filesystem.
    if !fmt.is_supported() {
        return Err(IoError::UnsupportedFormat(format!(
            "no encode support for {}",
            fmt
        )));
    }

    let writer = BufWriter::new(File::create(path.as_ref())?);
    match fmt {
        ImageFormat::Png => png::write_png(raster, writer),
        ImageFormat::Jpeg => jpeg::write_jpeg(raster, writer),
        ImageFormat::Bmp => bmp::write_bmp(raster, writer),
        ImageFormat::Tga => tga::write_tga(raster, writer),
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_unsupported_format_fails_fast() {
        let raster = RasterRgb::filled(4, 4, (1, 2, 3)).unwrap();
        // Target path does not exist afterwards: rejection precedes create.
        let target = std::env::temp_dir().join("pixelmend_reject_test.gif");
        let err = write_image_format(&raster, &target, ImageFormat::Gif).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(_)));
        assert!(!target.exists());
    }

    #[test]
    fn test_write_unknown_extension_fails() {
        let raster = RasterRgb::filled(4, 4, (1, 2, 3)).unwrap();
        let target = std::env::temp_dir().join("pixelmend_reject_test.xyz");
        assert!(write_image(&raster, &target).is_err());
    }

    #[test]
    fn test_file_round_trip_png() {
        let mut raster = RasterRgb::new(10, 10).unwrap();
        raster.set_rgb_unchecked(4, 7, 200, 100, 50);
        let target = std::env::temp_dir().join("pixelmend_roundtrip_test.png");
        write_image(&raster, &target).unwrap();
        let decoded = read_image(&target).unwrap();
        std::fs::remove_file(&target).ok();
        assert_eq!(decoded, raster);
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read_image("/nonexistent/path/image.png").is_err());
    }
}
