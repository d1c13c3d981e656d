//! pixelmend - Sensor hot/dead pixel detection and repair
//!
//! Facade crate re-exporting the pipeline pieces:
//!
//! - [`pixelmend_core`] - raster buffer and defect coordinate types
//! - [`pixelmend_defect`] - injection, detection, scoring, correction
//! - [`pixelmend_io`] - image decode/encode boundary
//!
//! # Example
//!
//! ```
//! use pixelmend::{RasterRgb, detect, correct};
//!
//! let mut raster = RasterRgb::filled(10, 10, (128, 128, 128)).unwrap();
//! raster.set_rgb_unchecked(5, 5, 255, 255, 255);
//!
//! let defects = detect(&raster);
//! assert_eq!(defects.hot.len(), 1);
//!
//! correct(&mut raster, &defects);
//! assert_eq!(raster.get_rgb_unchecked(5, 5), (128, 128, 128));
//! ```

pub use pixelmend_core::{Coord, CoreError, DefectSet, RasterRgb};
pub use pixelmend_defect::{
    CENTER_OFFSETS, ClassScore, CompareReport, DetectorParams, KernelStats, compare, correct,
    detect, detect_with_params, evaluate, inject, inject_seeded,
};
pub use pixelmend_io::{ImageFormat, IoError, detect_format, read_image, write_image};
