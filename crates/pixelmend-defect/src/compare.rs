//! Detection-accuracy scoring against injected ground truth
//!
//! Reconciles the detected coordinate lists with the ground truth per
//! defect class, producing missed-detection and false-detection counts and
//! the surviving false-positive coordinates.
//!
//! Matching is multiset-based: each ground-truth coordinate can consume at
//! most one detected occurrence of the same coordinate, and which one it
//! consumes among duplicates is immaterial, so a coordinate-keyed
//! occurrence count gives the same scores as pairwise list scanning at
//! O(G+D) instead of O(G*D).

use pixelmend_core::{Coord, DefectSet};
use std::collections::HashMap;

/// Per-class detection score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassScore {
    /// Number of injected ground-truth coordinates
    pub ground_truth: usize,
    /// Number of detected coordinates
    pub detected: usize,
    /// Ground-truth coordinates with no matching detection (false negatives)
    pub missed: usize,
    /// Detected coordinates with no matching ground truth (false positives)
    pub false_positives: usize,
}

/// Full comparison result: per-class counts plus the false-positive set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareReport {
    pub hot: ClassScore,
    pub dead: ClassScore,
    /// Detected coordinates that match no ground-truth entry, in
    /// detected-list order.
    pub spurious: DefectSet,
}

/// Score the detected lists against the injected ground truth.
///
/// Never fails: empty or mismatched inputs simply yield larger miss and
/// false-positive counts.
pub fn compare(ground_truth: &DefectSet, detected: &DefectSet) -> CompareReport {
    let (hot, spurious_hot) = compare_class(&ground_truth.hot, &detected.hot);
    let (dead, spurious_dead) = compare_class(&ground_truth.dead, &detected.dead);
    CompareReport {
        hot,
        dead,
        spurious: DefectSet {
            hot: spurious_hot,
            dead: spurious_dead,
        },
    }
}

fn compare_class(truth: &[Coord], detected: &[Coord]) -> (ClassScore, Vec<Coord>) {
    let mut remaining: HashMap<Coord, usize> = HashMap::with_capacity(truth.len());
    for c in truth {
        *remaining.entry(*c).or_insert(0) += 1;
    }

    let mut spurious = Vec::new();
    for c in detected {
        match remaining.get_mut(c) {
            Some(count) if *count > 0 => *count -= 1,
            _ => spurious.push(*c),
        }
    }

    let missed: usize = remaining.values().sum();
    let score = ClassScore {
        ground_truth: truth.len(),
        detected: detected.len(),
        missed,
        false_positives: spurious.len(),
    };
    (score, spurious)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(pairs: &[(u32, u32)]) -> Vec<Coord> {
        pairs.iter().map(|&(x, y)| Coord::new(x, y)).collect()
    }

    #[test]
    fn test_self_comparison_is_perfect() {
        let truth = DefectSet {
            hot: coords(&[(1, 1), (4, 2), (7, 7)]),
            dead: coords(&[(2, 5), (3, 3)]),
        };
        let report = compare(&truth, &truth);
        assert_eq!(report.hot.missed, 0);
        assert_eq!(report.hot.false_positives, 0);
        assert_eq!(report.dead.missed, 0);
        assert_eq!(report.dead.false_positives, 0);
        assert!(report.spurious.is_empty());
    }

    #[test]
    fn test_missed_detection_counted() {
        let truth = DefectSet {
            hot: coords(&[(1, 1), (4, 2)]),
            dead: vec![],
        };
        let detected = DefectSet {
            hot: coords(&[(1, 1)]),
            dead: vec![],
        };
        let report = compare(&truth, &detected);
        assert_eq!(report.hot.missed, 1);
        assert_eq!(report.hot.false_positives, 0);
        assert_eq!(report.hot.ground_truth, 2);
        assert_eq!(report.hot.detected, 1);
    }

    #[test]
    fn test_false_positives_returned_in_order() {
        let truth = DefectSet {
            hot: coords(&[(4, 2)]),
            dead: vec![],
        };
        let detected = DefectSet {
            hot: coords(&[(9, 9), (4, 2), (1, 8)]),
            dead: vec![],
        };
        let report = compare(&truth, &detected);
        assert_eq!(report.hot.false_positives, 2);
        assert_eq!(report.spurious.hot, coords(&[(9, 9), (1, 8)]));
    }

    #[test]
    fn test_duplicate_truth_requires_duplicate_detection() {
        // A coordinate injected twice needs two detections to fully match;
        // the detector visits each site once, so one miss remains.
        let truth = DefectSet {
            dead: coords(&[(3, 3), (3, 3)]),
            hot: vec![],
        };
        let detected = DefectSet {
            dead: coords(&[(3, 3)]),
            hot: vec![],
        };
        let report = compare(&truth, &detected);
        assert_eq!(report.dead.missed, 1);
        assert_eq!(report.dead.false_positives, 0);
    }

    #[test]
    fn test_empty_inputs() {
        let empty = DefectSet::new();
        let detected = DefectSet {
            hot: coords(&[(2, 2)]),
            dead: vec![],
        };
        let report = compare(&empty, &detected);
        assert_eq!(report.hot.false_positives, 1);
        assert_eq!(report.hot.missed, 0);

        let report = compare(&detected, &empty);
        assert_eq!(report.hot.missed, 1);
        assert_eq!(report.hot.false_positives, 0);
    }

    #[test]
    fn test_classes_do_not_cross_match() {
        // A hot detection at a dead ground-truth site is still a false
        // positive for hot and a miss for dead.
        let truth = DefectSet {
            hot: vec![],
            dead: coords(&[(5, 5)]),
        };
        let detected = DefectSet {
            hot: coords(&[(5, 5)]),
            dead: vec![],
        };
        let report = compare(&truth, &detected);
        assert_eq!(report.hot.false_positives, 1);
        assert_eq!(report.dead.missed, 1);
    }
}
