//! Pipeline driver
//!
//! Sequences one full run: decode, inject, optional snapshot save, detect,
//! score, correct, encode. Thin orchestration; all decisions live in the
//! library crates.

use anyhow::{Context, Result};
use pixelmend_core::{DefectSet, RasterRgb};
use pixelmend_defect::{CompareReport, compare, correct, detect, inject_seeded};
use std::path::{Path, PathBuf};
use tracing::info;

/// One pipeline run's configuration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Hot defects to inject (0 disables injection of this class)
    pub hot_count: usize,
    /// Dead defects to inject
    pub dead_count: usize,
    pub seed: u64,
    /// Where to save the defect-injected intermediate image, if anywhere
    pub snapshot: Option<PathBuf>,
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub injected: DefectSet,
    pub detected: DefectSet,
    pub report: CompareReport,
}

/// Execute decode -> inject -> detect -> compare -> correct -> encode.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let mut raster = pixelmend_io::read_image(&config.input)
        .with_context(|| format!("failed to decode {}", config.input.display()))?;
    info!(
        width = raster.width(),
        height = raster.height(),
        "decoded {}",
        config.input.display()
    );

    let injected = inject_seeded(&mut raster, config.hot_count, config.dead_count, config.seed);
    if !injected.is_empty() {
        info!(
            hot = injected.hot.len(),
            dead = injected.dead.len(),
            seed = config.seed,
            "injected synthetic defects"
        );
    }

    if let Some(snapshot) = &config.snapshot {
        save(&raster, snapshot).context("failed to save defect snapshot")?;
        info!("saved defect snapshot to {}", snapshot.display());
    }

    let detected = detect(&raster);
    info!(
        hot = detected.hot.len(),
        dead = detected.dead.len(),
        "detection complete"
    );

    let report = compare(&injected, &detected);
    log_report(&report);

    correct(&mut raster, &detected);
    save(&raster, &config.output)
        .with_context(|| format!("failed to encode {}", config.output.display()))?;
    info!("wrote corrected image to {}", config.output.display());

    Ok(RunSummary {
        injected,
        detected,
        report,
    })
}

fn save(raster: &RasterRgb, path: &Path) -> Result<()> {
    pixelmend_io::write_image(raster, path)?;
    Ok(())
}

fn log_report(report: &CompareReport) {
    info!(
        ground_truth = report.hot.ground_truth,
        detected = report.hot.detected,
        missed = report.hot.missed,
        false_positives = report.hot.false_positives,
        "hot pixel score"
    );
    info!(
        ground_truth = report.dead.ground_truth,
        detected = report.dead.detected,
        missed = report.dead.missed,
        false_positives = report.dead.false_positives,
        "dead pixel score"
    );
}
