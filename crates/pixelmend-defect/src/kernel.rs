//! Neighborhood kernel statistics
//!
//! Computes per-channel mean, min and max over a fixed set of relative
//! neighbor offsets around a pixel. This is the single hottest loop in the
//! pipeline: it runs once per interior pixel during the full-image scan and
//! again per defect site during correction.

use pixelmend_core::RasterRgb;

/// The canonical 8-neighbor offset table used for all interior pixels.
///
/// Static and shared; no per-call allocation. Dedicated edge and corner
/// tables are deliberately absent: border pixels are skipped outright by
/// the detector and corrector.
pub const CENTER_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Per-channel neighborhood statistics, all in `[0, 255]`.
///
/// Transient: the detector and corrector each recompute this for a site,
/// never sharing results across stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelStats {
    /// Per-channel neighbor mean (truncating integer division)
    pub mean: [u8; 3],
    /// Per-channel neighbor minimum
    pub min: [u8; 3],
    /// Per-channel neighbor maximum
    pub max: [u8; 3],
}

/// Evaluate neighborhood statistics at `(x, y)`.
///
/// Precondition: `(x, y)` plus every offset in `offsets` lies inside the
/// raster, and `offsets` is nonempty. Both are debug-asserted; callers are
/// expected to restrict themselves to interior pixels when using
/// [`CENTER_OFFSETS`].
pub fn evaluate(raster: &RasterRgb, x: u32, y: u32, offsets: &[(i32, i32)]) -> KernelStats {
    debug_assert!(!offsets.is_empty());

    let mut sum = [0u32; 3];
    let mut min = [255u8; 3];
    let mut max = [0u8; 3];

    for &(dx, dy) in offsets {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        debug_assert!(
            nx >= 0 && ny >= 0 && (nx as u32) < raster.width() && (ny as u32) < raster.height()
        );

        let (r, g, b) = raster.get_rgb_unchecked(nx as u32, ny as u32);
        for (c, v) in [r, g, b].into_iter().enumerate() {
            sum[c] += v as u32;
            if v < min[c] {
                min[c] = v;
            }
            if v > max[c] {
                max[c] = v;
            }
        }
    }

    let n = offsets.len() as u32;
    let mean = [
        (sum[0] / n) as u8,
        (sum[1] / n) as u8,
        (sum[2] / n) as u8,
    ];

    KernelStats { mean, min, max }
}
