//! Asset catalog
//!
//! The literal set of output paths and the generator behind each one. The
//! downstream asset loader resolves these exact relative paths, so the tables
//! in [`sfx`] and [`music`] are the contract.
//!
//! Layout under the output root:
//! - `sfx/{group}/{id}.wav`
//! - `ambient/{id}.wav`
//! - `music/{dir}/{id}.wav`

pub mod music;
pub mod sfx;

use std::fmt;

use anyhow::{Context, Result};
use proc_audio::music::Cue;
use proc_audio::Synth;
use rand::Rng;

/// File extension of every generated asset
pub const EXTENSION: &str = "wav";

/// Top-level output category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    /// Sound effects
    Sfx,
    /// Long ambient beds
    Ambient,
    /// Music tracks
    Music,
}

impl Section {
    /// Every section, in generation order
    pub const ALL: [Section; 3] = [Section::Sfx, Section::Ambient, Section::Music];

    /// Root directory name
    pub fn dir(self) -> &'static str {
        match self {
            Section::Sfx => "sfx",
            Section::Ambient => "ambient",
            Section::Music => "music",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir())
    }
}

#[derive(Debug, Clone, Copy)]
enum Source {
    Sound(&'static str),
    Ambient(&'static str),
    Track { cue: Cue, duration: f64 },
}

/// A single output file and the generator that produces it
#[derive(Debug, Clone)]
pub struct Asset {
    /// Output category
    pub section: Section,
    /// Path relative to the output root, `/`-separated
    pub rel_path: String,
    /// Human-readable description
    pub description: &'static str,
    source: Source,
}

impl Asset {
    /// Render the asset's samples
    ///
    /// Noise-bearing generators draw from `synth`; everything else ignores it.
    pub fn render<R: Rng>(&self, synth: &mut Synth<R>) -> Result<Vec<f64>> {
        match self.source {
            Source::Sound(id) => sfx::render_sound(synth, id),
            Source::Ambient(id) => sfx::render_ambient(synth, id),
            Source::Track { cue, duration } => cue
                .render(duration)
                .with_context(|| format!("Failed to compose {} ({}s)", cue.name(), duration)),
        }
    }
}

/// Catalog entries for the requested sections, in catalog order
pub fn assets(sections: &[Section]) -> Vec<Asset> {
    let mut assets = Vec::new();

    if sections.contains(&Section::Sfx) {
        assets.extend(sfx::SOUNDS.iter().map(|def| Asset {
            section: Section::Sfx,
            rel_path: format!("sfx/{}/{}.{EXTENSION}", def.group, def.id),
            description: def.name,
            source: Source::Sound(def.id),
        }));
    }

    if sections.contains(&Section::Ambient) {
        assets.extend(sfx::AMBIENT.iter().map(|def| Asset {
            section: Section::Ambient,
            rel_path: format!("ambient/{}.{EXTENSION}", def.id),
            description: def.name,
            source: Source::Ambient(def.id),
        }));
    }

    if sections.contains(&Section::Music) {
        assets.extend(music::TRACKS.iter().map(|def| Asset {
            section: Section::Music,
            rel_path: format!("music/{}/{}.{EXTENSION}", def.dir, def.id),
            description: def.cue.name(),
            source: Source::Track {
                cue: def.cue,
                duration: def.duration,
            },
        }));
    }

    assets
}

/// The whole catalog
pub fn all() -> Vec<Asset> {
    assets(&Section::ALL)
}
