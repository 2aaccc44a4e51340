//! Generator configuration (gen-audio.toml)
//!
//! Every field is optional; a missing file at the default location means
//! defaults. Command-line flags override whatever the file sets.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::Section;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "gen-audio.toml";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenConfig {
    /// Root of the output tree (default: assets/audio)
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Base seed for noise; absent means a fresh seed per run
    #[serde(default)]
    pub seed: Option<u64>,
    /// Worker threads; absent means one per core
    #[serde(default)]
    pub jobs: Option<usize>,
    /// Which sections to generate
    #[serde(default)]
    pub outputs: OutputsConfig,
}

/// Section toggles
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputsConfig {
    #[serde(default = "default_true")]
    pub sfx: bool,
    #[serde(default = "default_true")]
    pub ambient: bool,
    #[serde(default = "default_true")]
    pub music: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("assets/audio")
}
fn default_true() -> bool {
    true
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            seed: None,
            jobs: None,
            outputs: OutputsConfig::default(),
        }
    }
}

impl Default for OutputsConfig {
    fn default() -> Self {
        Self {
            sfx: default_true(),
            ambient: default_true(),
            music: default_true(),
        }
    }
}

impl OutputsConfig {
    /// Enabled sections, in catalog order
    pub fn sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| self.enabled(*section))
            .collect()
    }

    /// Whether `section` is switched on
    pub fn enabled(&self, section: Section) -> bool {
        match section {
            Section::Sfx => self.sfx,
            Section::Ambient => self.ambient,
            Section::Music => self.music,
        }
    }
}

impl GenConfig {
    /// Parse a config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid generator config")
    }

    /// Load a config file, failing if it is missing or malformed
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Load `explicit` if given; otherwise the default file if it exists,
    /// otherwise defaults
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            tracing::debug!("Using {}", default_path.display());
            Self::load(default_path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = GenConfig::parse("").unwrap();
        assert_eq!(config, GenConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("assets/audio"));
        assert_eq!(config.outputs.sections(), Section::ALL.to_vec());
    }

    #[test]
    fn test_partial_config() {
        let config = GenConfig::parse(
            r#"
            output_dir = "build/audio"
            seed = 1234

            [outputs]
            music = false
            "#,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("build/audio"));
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.jobs, None);
        assert_eq!(
            config.outputs.sections(),
            vec![Section::Sfx, Section::Ambient]
        );
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(GenConfig::parse("seed = \"abc\"").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("nope.toml");
        assert!(GenConfig::load_or_default(Some(&missing)).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("gen-audio.toml");
        fs::write(&path, "jobs = 2\n[outputs]\nsfx = false\nambient = false\n").unwrap();

        let config = GenConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.jobs, Some(2));
        assert_eq!(config.outputs.sections(), vec![Section::Music]);
    }
}
