//! Synthetic defect injection
//!
//! Manufactures ground truth for scoring the detector: draws random
//! coordinates, stamps them pure white or pure black, and records them.
//!
//! Coordinates are deliberately not deduplicated, neither within a class
//! nor across classes. A hot site may later be overwritten by a dead draw,
//! and a coordinate may repeat; the comparator tolerates this label noise.

use pixelmend_core::{Coord, DefectSet, RasterRgb};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

/// Pixel value stamped at hot injection sites.
pub const HOT_VALUE: (u8, u8, u8) = (255, 255, 255);

/// Pixel value stamped at dead injection sites.
pub const DEAD_VALUE: (u8, u8, u8) = (0, 0, 0);

/// Inject defects using an explicit random generator.
///
/// Draws `hot_count` coordinates uniformly over the full raster, stamping
/// each pure white, then `dead_count` coordinates stamped pure black.
/// Returns the injected coordinates in generation order.
pub fn inject<R: Rng>(
    raster: &mut RasterRgb,
    hot_count: usize,
    dead_count: usize,
    rng: &mut R,
) -> DefectSet {
    let width = raster.width();
    let height = raster.height();
    let mut truth = DefectSet::new();

    for _ in 0..hot_count {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        let (r, g, b) = HOT_VALUE;
        raster.set_rgb_unchecked(x, y, r, g, b);
        truth.hot.push(Coord::new(x, y));
    }

    for _ in 0..dead_count {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        let (r, g, b) = DEAD_VALUE;
        raster.set_rgb_unchecked(x, y, r, g, b);
        truth.dead.push(Coord::new(x, y));
    }

    truth
}

/// Inject defects from a seed.
///
/// The same seed on the same dimensions always reproduces the same draws.
pub fn inject_seeded(
    raster: &mut RasterRgb,
    hot_count: usize,
    dead_count: usize,
    seed: u64,
) -> DefectSet {
    let mut rng = StdRng::seed_from_u64(seed);
    inject(raster, hot_count, dead_count, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_stamped_values() {
        let mut raster = RasterRgb::filled(32, 24, (128, 128, 128)).unwrap();
        let truth = inject_seeded(&mut raster, 5, 7, 42);
        assert_eq!(truth.hot.len(), 5);
        assert_eq!(truth.dead.len(), 7);

        // Dead draws come after hot draws, so a dead stamp wins any overlap.
        for c in &truth.dead {
            assert_eq!(raster.get_rgb_unchecked(c.x, c.y), DEAD_VALUE);
        }
        for c in &truth.hot {
            if !truth.dead.contains(c) {
                assert_eq!(raster.get_rgb_unchecked(c.x, c.y), HOT_VALUE);
            }
        }
    }

    #[test]
    fn test_seed_determinism() {
        let mut a = RasterRgb::filled(64, 48, (90, 90, 90)).unwrap();
        let mut b = RasterRgb::filled(64, 48, (90, 90, 90)).unwrap();
        let truth_a = inject_seeded(&mut a, 20, 20, 1234);
        let truth_b = inject_seeded(&mut b, 20, 20, 1234);
        assert_eq!(truth_a, truth_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = RasterRgb::filled(64, 48, (90, 90, 90)).unwrap();
        let mut b = RasterRgb::filled(64, 48, (90, 90, 90)).unwrap();
        let truth_a = inject_seeded(&mut a, 20, 20, 1);
        let truth_b = inject_seeded(&mut b, 20, 20, 2);
        assert_ne!(truth_a, truth_b);
    }

    #[test]
    fn test_coordinates_in_bounds() {
        let mut raster = RasterRgb::filled(7, 5, (128, 128, 128)).unwrap();
        let truth = inject_seeded(&mut raster, 50, 50, 99);
        for c in truth.hot.iter().chain(truth.dead.iter()) {
            assert!(c.x < 7 && c.y < 5);
        }
    }

    #[test]
    fn test_zero_counts_leave_buffer_untouched() {
        let mut raster = RasterRgb::filled(10, 10, (128, 128, 128)).unwrap();
        let before = raster.clone();
        let truth = inject_seeded(&mut raster, 0, 0, 7);
        assert!(truth.is_empty());
        assert_eq!(raster, before);
    }
}
