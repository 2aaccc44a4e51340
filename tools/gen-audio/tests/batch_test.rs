//! Integration tests for batch generation
//!
//! Renders catalog sections into a temp dir and checks the written tree.

use std::fs;
use std::path::Path;

use gen_audio::batch::{self, BatchOptions};
use gen_audio::catalog::{self, Section};
use proc_audio::{read_wav, sample_count, SAMPLE_RATE};
use tempfile::tempdir;

fn run_sfx(output_dir: &Path, seed: u64) -> gen_audio::BatchReport {
    let assets = catalog::assets(&[Section::Sfx, Section::Ambient]);
    batch::run(
        &assets,
        &BatchOptions {
            output_dir: output_dir.to_path_buf(),
            seed,
        },
    )
}

/// Test a full sfx + ambient run writes every file at the expected length
#[test]
fn test_sfx_batch_writes_tree() {
    let dir = tempdir().expect("Failed to create temp dir");
    let report = run_sfx(dir.path(), 42);

    assert!(report.is_success(), "failures: {:?}", report.failed);
    assert_eq!(report.written.len(), 53);
    assert!(report.wrote(Section::Sfx));
    assert!(report.wrote(Section::Ambient));
    assert!(!report.wrote(Section::Music));

    for asset in catalog::assets(&[Section::Sfx, Section::Ambient]) {
        let path = dir.path().join(&asset.rel_path);
        assert!(path.is_file(), "{} missing", asset.rel_path);
    }

    let expected = [
        ("sfx/ui/ui_click.wav", sample_count(0.05)),
        ("sfx/boarding/door_open.wav", sample_count(0.3)),
        ("sfx/explosions/ship_explode.wav", sample_count(1.2)),
        ("sfx/ui/ui_notification.wav", sample_count(0.1) + sample_count(0.15)),
        ("ambient/space_hum.wav", sample_count(10.0)),
        ("ambient/radio_static.wav", sample_count(5.0)),
        ("ambient/station_bustle.wav", 2 * sample_count(10.0)),
    ];
    for (rel_path, len) in expected {
        let buffer = read_wav(&dir.path().join(rel_path)).expect("Failed to decode WAV");
        assert_eq!(buffer.sample_rate, SAMPLE_RATE);
        assert_eq!(buffer.len(), len, "{rel_path}");
    }
}

/// Test a seeded run is byte-reproducible, and the seed only affects noise
#[test]
fn test_seeded_runs_are_reproducible() {
    let first = tempdir().expect("Failed to create temp dir");
    let second = tempdir().expect("Failed to create temp dir");
    let reseeded = tempdir().expect("Failed to create temp dir");

    assert!(run_sfx(first.path(), 7).is_success());
    assert!(run_sfx(second.path(), 7).is_success());
    assert!(run_sfx(reseeded.path(), 8).is_success());

    let read = |root: &Path, rel: &str| fs::read(root.join(rel)).expect("Failed to read output");

    for asset in catalog::assets(&[Section::Sfx, Section::Ambient]) {
        assert_eq!(
            read(first.path(), &asset.rel_path),
            read(second.path(), &asset.rel_path),
            "{} differs between identical seeds",
            asset.rel_path
        );
    }

    // Noise-bearing
    for rel in ["sfx/ship/ship_damage.wav", "ambient/ventilation.wav", "sfx/boarding/door_open.wav"] {
        assert_ne!(read(first.path(), rel), read(reseeded.path(), rel), "{rel}");
    }
    // Tone-only
    for rel in ["sfx/ui/ui_confirm.wav", "sfx/loot/loot_epic.wav", "ambient/space_hum.wav"] {
        assert_eq!(read(first.path(), rel), read(reseeded.path(), rel), "{rel}");
    }
}

/// Test one blocked category fails alone while the rest is still written
#[test]
fn test_failures_are_collected() {
    let dir = tempdir().expect("Failed to create temp dir");
    // A regular file where the ui directory should go
    fs::create_dir_all(dir.path().join("sfx")).unwrap();
    fs::write(dir.path().join("sfx/ui"), b"in the way").unwrap();

    let assets = catalog::assets(&[Section::Sfx]);
    let report = batch::run(
        &assets,
        &BatchOptions {
            output_dir: dir.path().to_path_buf(),
            seed: 1,
        },
    );

    assert!(!report.is_success());
    assert_eq!(report.total(), 46);
    assert_eq!(report.failed.len(), 10);
    assert_eq!(report.written.len(), 36);

    for failure in &report.failed {
        assert!(failure.rel_path.starts_with("sfx/ui/"), "{}", failure.rel_path);
        assert!(failure.error.contains("Failed to write"), "{}", failure.error);
    }
    assert!(dir.path().join("sfx/loot/loot_rare.wav").is_file());
    assert!(dir.path().join("sfx/achievements/level_up.wav").is_file());
}

/// Test a short music render through the catalog path layout
#[test]
fn test_music_track_layout() {
    let dir = tempdir().expect("Failed to create temp dir");
    let defeat: Vec<_> = catalog::assets(&[Section::Music])
        .into_iter()
        .filter(|a| a.rel_path == "music/cutscenes/defeat.wav")
        .collect();
    assert_eq!(defeat.len(), 1);

    let report = batch::run(
        &defeat,
        &BatchOptions {
            output_dir: dir.path().to_path_buf(),
            seed: 0,
        },
    );
    assert!(report.is_success());
    assert!(report.wrote(Section::Music));

    let buffer = read_wav(&dir.path().join("music/cutscenes/defeat.wav")).unwrap();
    assert_eq!(buffer.len(), sample_count(10.0));
}
