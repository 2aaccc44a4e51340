//! Batch generation
//!
//! Renders and writes catalog assets on the rayon pool. Each asset is an
//! independent task with its own seeded random source; a failed task is
//! recorded and the rest of the batch carries on.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use proc_audio::{write_wav, Synth, SAMPLE_RATE};
use rayon::prelude::*;
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::catalog::{Asset, Section};

/// Settings for one batch run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Root of the output tree
    pub output_dir: PathBuf,
    /// Base seed; every asset derives its own seed from this
    pub seed: u64,
}

/// A file that was rendered and written
#[derive(Debug, Clone)]
pub struct WrittenAsset {
    pub section: Section,
    pub rel_path: String,
    /// Full path of the written file
    pub path: PathBuf,
    /// Number of samples written
    pub samples: usize,
}

impl WrittenAsset {
    /// Length in seconds
    pub fn seconds(&self) -> f64 {
        self.samples as f64 / SAMPLE_RATE as f64
    }
}

/// A file that could not be produced
#[derive(Debug, Clone)]
pub struct FailedAsset {
    pub section: Section,
    pub rel_path: String,
    /// Full error chain
    pub error: String,
}

/// Outcome of a batch run, in catalog order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<WrittenAsset>,
    pub failed: Vec<FailedAsset>,
}

impl BatchReport {
    /// True when every asset was written
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of assets attempted
    pub fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }

    /// True if at least one file of `section` was written
    pub fn wrote(&self, section: Section) -> bool {
        self.written.iter().any(|w| w.section == section)
    }
}

/// Per-asset seed: the base seed mixed with a stable hash of the relative path
///
/// Independent of scheduling, so a seeded run is reproducible with any number
/// of workers.
pub fn task_seed(base: u64, rel_path: &str) -> u64 {
    xxh3_64_with_seed(rel_path.as_bytes(), base)
}

/// Render one asset and write it under `output_dir`
pub fn generate_asset(asset: &Asset, output_dir: &Path, seed: u64) -> Result<WrittenAsset> {
    tracing::debug!("{}: seed {:#018x}", asset.rel_path, seed);

    let started = Instant::now();
    let mut synth = Synth::seeded(seed);
    let samples = asset
        .render(&mut synth)
        .with_context(|| format!("Failed to render {}", asset.rel_path))?;
    tracing::debug!("{}: rendered in {:.2?}", asset.rel_path, started.elapsed());

    let path = output_dir.join(&asset.rel_path);
    write_wav(&path, &samples).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(WrittenAsset {
        section: asset.section,
        rel_path: asset.rel_path.clone(),
        path,
        samples: samples.len(),
    })
}

/// Generate every asset, collecting failures instead of stopping at the first
pub fn run(assets: &[Asset], options: &BatchOptions) -> BatchReport {
    tracing::info!(
        "Generating {} assets -> {}",
        assets.len(),
        options.output_dir.display()
    );

    let outcomes: Vec<(&Asset, Result<WrittenAsset>)> = assets
        .par_iter()
        .map(|asset| {
            let seed = task_seed(options.seed, &asset.rel_path);
            (asset, generate_asset(asset, &options.output_dir, seed))
        })
        .collect();

    let mut report = BatchReport::default();
    for (asset, outcome) in outcomes {
        match outcome {
            Ok(written) => {
                tracing::info!(
                    "  -> {} ({} samples, {:.2}s) - {}",
                    written.path.display(),
                    written.samples,
                    written.seconds(),
                    asset.description
                );
                report.written.push(written);
            }
            Err(e) => {
                let error = format!("{e:#}");
                tracing::warn!("  !! {}: {}", asset.rel_path, error);
                report.failed.push(FailedAsset {
                    section: asset.section,
                    rel_path: asset.rel_path.clone(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        "Wrote {}/{} assets ({} failed)",
        report.written.len(),
        report.total(),
        report.failed.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{assets, Section};

    #[test]
    fn test_task_seed_stable_and_distinct() {
        let path = "sfx/ship/ship_damage.wav";
        assert_eq!(task_seed(42, path), task_seed(42, path));
        assert_ne!(task_seed(42, path), task_seed(43, path));
        assert_ne!(task_seed(42, path), task_seed(42, "sfx/weapons/missile_explode.wav"));
    }

    #[test]
    fn test_generate_asset_writes_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let sfx = assets(&[Section::Sfx]);
        let click = sfx
            .iter()
            .find(|a| a.rel_path == "sfx/ui/ui_click.wav")
            .unwrap();

        let written = generate_asset(click, dir.path(), 1).unwrap();
        assert_eq!(written.samples, 2205);
        assert_eq!(written.path, dir.path().join("sfx/ui/ui_click.wav"));
        assert!((written.seconds() - 0.05).abs() < 1e-9);
        assert!(dir.path().join("sfx/ui/ui_click.wav").is_file());
    }

    #[test]
    fn test_report_counts() {
        let report = BatchReport {
            written: vec![WrittenAsset {
                section: Section::Sfx,
                rel_path: "sfx/ui/ui_tab.wav".into(),
                path: PathBuf::from("out/sfx/ui/ui_tab.wav"),
                samples: 2205,
            }],
            failed: vec![FailedAsset {
                section: Section::Music,
                rel_path: "music/menu/main_theme.wav".into(),
                error: "disk full".into(),
            }],
        };
        assert_eq!(report.total(), 2);
        assert!(!report.is_success());
        assert!(report.wrote(Section::Sfx));
        assert!(!report.wrote(Section::Music));
    }
}
