//! pixelmend-core - Data structures for the sensor-defect pipeline
//!
//! This crate provides the types shared by every stage of the pipeline:
//!
//! - [`RasterRgb`] - flat interleaved RGB byte buffer with dimensions
//! - [`Coord`] - integer pixel location
//! - [`DefectSet`] - hot/dead defect coordinate lists
//!
//! The buffer is created once per run (by the I/O layer or a test fixture)
//! and mutated in place by the injector and corrector; all other stages
//! read it through the accessor functions.

pub mod defects;
pub mod error;
pub mod raster;

pub use defects::{Coord, DefectSet};
pub use error::{CoreError, Result};
pub use raster::RasterRgb;
