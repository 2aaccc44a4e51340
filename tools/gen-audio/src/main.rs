//! gen-audio - Cargo Escape audio asset generator
//!
//! Renders procedural sound effects, ambient loops and music to 16-bit mono
//! WAV under the output directory:
//! - `sfx/{category}/{id}.wav`
//! - `ambient/{id}.wav`
//! - `music/{category}/{id}.wav`

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gen_audio::batch::{self, BatchOptions};
use gen_audio::catalog::{self, Section};
use gen_audio::{GenConfig, MUSIC_LOADER_EXTENSION};

#[derive(Parser)]
#[command(name = "gen-audio")]
#[command(about = "Generate procedural audio assets for Cargo Escape")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: ./gen-audio.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Base seed for noise-bearing sounds (overrides config)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Worker threads (overrides config)
    #[arg(short, long, global = true)]
    jobs: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate sound effects and ambient loops
    Sfx,
    /// Generate music tracks
    Music,
    /// Generate every section enabled in the config
    All,
    /// List catalog entries without rendering
    List,
    /// Print format, length and peak of a WAV file
    Inspect {
        /// WAV file to inspect
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.as_ref().unwrap_or(&Commands::All) {
        Commands::Sfx => generate(&load_config(&cli)?, &[Section::Sfx, Section::Ambient]),
        Commands::Music => generate(&load_config(&cli)?, &[Section::Music]),
        Commands::All => {
            let config = load_config(&cli)?;
            let sections = config.outputs.sections();
            if sections.is_empty() {
                tracing::warn!("Every section is disabled in the config; nothing to do");
                return Ok(());
            }
            generate(&config, &sections)
        }
        Commands::List => {
            list();
            Ok(())
        }
        Commands::Inspect { file } => inspect(file),
    }
}

/// Config file merged with command-line overrides
fn load_config(cli: &Cli) -> Result<GenConfig> {
    let mut config = GenConfig::load_or_default(cli.config.as_deref())?;
    if let Some(output) = &cli.output {
        config.output_dir = output.clone();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.jobs.is_some() {
        config.jobs = cli.jobs;
    }
    Ok(config)
}

fn generate(config: &GenConfig, sections: &[Section]) -> Result<()> {
    if let Some(jobs) = config.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("Failed to configure worker pool")?;
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!("Base seed {}", seed);

    let assets = catalog::assets(sections);
    let report = batch::run(
        &assets,
        &BatchOptions {
            output_dir: config.output_dir.clone(),
            seed,
        },
    );

    if report.wrote(Section::Music) {
        tracing::warn!(
            "Music was written as WAV; the game loader expects .{} music tracks. \
             Convert them or point the loader at the .wav files.",
            MUSIC_LOADER_EXTENSION
        );
    }

    if !report.is_success() {
        for failure in &report.failed {
            tracing::error!("{}: {}", failure.rel_path, failure.error);
        }
        bail!("{} of {} assets failed", report.failed.len(), report.total());
    }

    tracing::info!("Done!");
    Ok(())
}

fn list() {
    for section in Section::ALL {
        let assets = catalog::assets(&[section]);
        println!("{} ({} files)", section, assets.len());
        for asset in &assets {
            println!("  {:<42} {}", asset.rel_path, asset.description);
        }
    }
}

fn inspect(path: &Path) -> Result<()> {
    let buffer = proc_audio::read_wav(path)
        .with_context(|| format!("Failed to inspect {}", path.display()))?;

    println!("{}", path.display());
    println!("  format:   {} Hz, mono, 16-bit PCM", buffer.sample_rate);
    println!("  samples:  {}", buffer.len());
    println!("  duration: {:.3}s", buffer.duration());
    println!("  peak:     {:.4}", buffer.peak());
    Ok(())
}
