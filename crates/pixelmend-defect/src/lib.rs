//! pixelmend-defect - Sensor defect analysis
//!
//! The algorithmic core of the pipeline:
//!
//! - [`kernel`] - 8-neighbor statistics (mean/min/max per channel)
//! - [`detect`] - hot/dead classification of every interior pixel
//! - [`inject`] - synthetic defect injection for ground truth
//! - [`correct`] - in-place neighbor-mean replacement
//! - [`compare`] - detection scoring against ground truth
//!
//! Everything here is a single deterministic pass over in-memory data;
//! there are no recoverable error conditions. Geometry preconditions are
//! enforced with debug assertions only.

pub mod compare;
pub mod correct;
pub mod detect;
pub mod inject;
pub mod kernel;
pub mod params;

pub use compare::{ClassScore, CompareReport, compare};
pub use correct::correct;
pub use detect::{detect, detect_with_params};
pub use inject::{DEAD_VALUE, HOT_VALUE, inject, inject_seeded};
pub use kernel::{CENTER_OFFSETS, KernelStats, evaluate};
pub use params::{
    DEAD_DELTA_DIVISOR, DetectorParams, HOT_DELTA_DIVISOR, NEAR_BLACK_CUTOFF, NEAR_WHITE_CUTOFF,
};
