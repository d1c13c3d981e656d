//! Hot/dead pixel detection
//!
//! Scans every interior pixel in raster order, evaluates the 8-neighbor
//! kernel statistics, and classifies the pixel as hot, dead, or healthy.
//!
//! Border pixels (`x == 0`, `y == 0`, `x == width-1`, `y == height-1`) are
//! skipped without classification: they can never appear in the output.
//! The primary detection signal is the summed per-channel deviation of the
//! center from its neighbor mean, gated by extremum checks (a dead pixel
//! must be at or below every neighbor minimum per channel, a hot pixel at
//! or above every neighbor maximum).

use crate::kernel::{CENTER_OFFSETS, evaluate};
use crate::params::DetectorParams;
use pixelmend_core::{Coord, DefectSet, RasterRgb};

/// Scan the raster with the default calibration.
///
/// Equivalent to `detect_with_params(raster, &DetectorParams::default())`.
pub fn detect(raster: &RasterRgb) -> DefectSet {
    detect_with_params(raster, &DetectorParams::default())
}

/// Scan the raster, classifying every interior pixel.
///
/// Coordinates are appended in raster-scan order: row-major, left to
/// right, top to bottom.
pub fn detect_with_params(raster: &RasterRgb, params: &DetectorParams) -> DefectSet {
    let mut defects = DefectSet::new();
    let width = raster.width();
    let height = raster.height();

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            match classify(raster, x, y, params) {
                Some(Class::Hot) => defects.hot.push(Coord::new(x, y)),
                Some(Class::Dead) => defects.dead.push(Coord::new(x, y)),
                None => {}
            }
        }
    }

    defects
}

enum Class {
    Hot,
    Dead,
}

/// Classify a single interior pixel.
fn classify(raster: &RasterRgb, x: u32, y: u32, params: &DetectorParams) -> Option<Class> {
    let stats = evaluate(raster, x, y, &CENTER_OFFSETS);
    let (r, g, b) = raster.get_rgb_unchecked(x, y);
    let center = [r as i32, g as i32, b as i32];

    let mut delta = 0i32;
    let mut low_margin = i32::MIN;
    let mut high_margin = i32::MAX;
    for c in 0..3 {
        delta += center[c] - stats.mean[c] as i32;
        low_margin = low_margin.max(center[c] - stats.min[c] as i32);
        high_margin = high_margin.min(center[c] - stats.max[c] as i32);
    }

    // A dead candidate must sit at or below every neighbor minimum, a hot
    // candidate at or above every neighbor maximum, in all three channels.
    let invalid_as_dead = low_margin > 0;
    let invalid_as_hot = high_margin < 0;

    let near_black = center.iter().all(|&c| c < params.near_black_cutoff as i32);
    let near_white = center.iter().all(|&c| c > params.near_white_cutoff as i32);

    if near_black && !invalid_as_dead && delta < params.dead_delta {
        Some(Class::Dead)
    } else if near_white && !invalid_as_hot && delta > params.hot_delta {
        Some(Class::Hot)
    } else {
        None
    }
}
