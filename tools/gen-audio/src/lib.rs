//! Cargo Escape audio asset generator
//!
//! Renders the game's sound effects, ambient beds and music tracks with
//! `proc-audio` and writes them as WAV files into a fixed directory tree.
//!
//! - [`catalog`] - every output path and the generator behind it
//! - [`batch`] - parallel rendering with per-asset failure collection
//! - [`config`] - `gen-audio.toml` loading and defaults

pub mod batch;
pub mod catalog;
pub mod config;

pub use batch::{BatchOptions, BatchReport, FailedAsset, WrittenAsset};
pub use catalog::{Asset, Section};
pub use config::GenConfig;

/// Extension the game's audio loader expects for music tracks
///
/// This generator only writes WAV, so music files need converting (or the
/// loader's track table updating) before they are picked up.
pub const MUSIC_LOADER_EXTENSION: &str = "ogg";
