//! Detector calibration parameters
//!
//! All numeric tunables of the classifier live here as named constants so
//! that recalibration never means hunting for inline literals.

/// Channel value below which a pixel counts as near-black (exclusive).
pub const NEAR_BLACK_CUTOFF: u8 = 10;

/// Channel value above which a pixel counts as near-white (exclusive).
pub const NEAR_WHITE_CUTOFF: u8 = 245;

/// Divisor for the dead-pixel delta threshold: `round(-255 / 4.75) = -54`.
pub const DEAD_DELTA_DIVISOR: f64 = 4.75;

/// Divisor for the hot-pixel delta threshold: `round(255 / 1.75) = 146`.
///
/// The asymmetry against [`DEAD_DELTA_DIVISOR`] is intentional calibration:
/// dead-pixel deltas may be much smaller in magnitude before triggering.
pub const HOT_DELTA_DIVISOR: f64 = 1.75;

/// Tunable thresholds of the hot/dead classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorParams {
    /// Channel cutoff for the near-black test (all channels strictly below)
    pub near_black_cutoff: u8,
    /// Channel cutoff for the near-white test (all channels strictly above)
    pub near_white_cutoff: u8,
    /// Summed-deviation threshold for dead pixels (delta strictly below)
    pub dead_delta: i32,
    /// Summed-deviation threshold for hot pixels (delta strictly above)
    pub hot_delta: i32,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            near_black_cutoff: NEAR_BLACK_CUTOFF,
            near_white_cutoff: NEAR_WHITE_CUTOFF,
            dead_delta: (-255.0 / DEAD_DELTA_DIVISOR).round() as i32,
            hot_delta: (255.0 / HOT_DELTA_DIVISOR).round() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let params = DetectorParams::default();
        assert_eq!(params.dead_delta, -54);
        assert_eq!(params.hot_delta, 146);
        assert_eq!(params.near_black_cutoff, 10);
        assert_eq!(params.near_white_cutoff, 245);
    }
}
