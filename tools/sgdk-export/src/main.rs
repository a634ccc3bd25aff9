//! sgdk-export - character sprite export tool
//!
//! Renders characters from JSON specs and writes SGDK resources
//! (`.c` palette/tile data, `.h` declarations, `.png` reference sheet).

use anyhow::{Context, Result};
use character_gen::{load_spec, random, render_frame, save_spec, PartPolicy};
use clap::{Parser, Subcommand};
use image::ImageFormat;
use std::path::PathBuf;

use sgdk_export::{export, manifest};

#[derive(Parser)]
#[command(name = "sgdk-export")]
#[command(about = "Character sprite export tool for SGDK")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export one character to .c/.h/.png
    Export {
        /// Character spec (JSON attribute map)
        spec: PathBuf,

        /// Output .c file (defaults to the spec path with a .c extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on unknown shape names instead of skipping the part
        #[arg(long)]
        strict: bool,
    },

    /// Render a single frame to PNG, without quantization
    Preview {
        /// Character spec (JSON attribute map)
        spec: PathBuf,

        /// Frame index within the walk cycle
        #[arg(short, long, default_value_t = 0)]
        frame: u32,

        /// Output .png file (defaults to the spec path with a .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on unknown shape names instead of skipping the part
        #[arg(long)]
        strict: bool,
    },

    /// Generate a random character spec
    Random {
        /// Seed for a reproducible character
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output .json file (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export every character listed in a manifest
    Build {
        /// Path to characters.toml manifest
        #[arg(default_value = "characters.toml")]
        manifest: PathBuf,

        /// Output directory (overrides manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate manifest without building
    Check {
        /// Path to characters.toml manifest
        #[arg(default_value = "characters.toml")]
        manifest: PathBuf,
    },
}

fn policy(strict: bool) -> PartPolicy {
    if strict {
        PartPolicy::Strict
    } else {
        PartPolicy::Lenient
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            spec,
            output,
            strict,
        } => {
            let output = output.unwrap_or_else(|| spec.with_extension("c"));
            tracing::info!("Exporting {:?} -> {:?}", spec, output);
            let character = load_spec(&spec, policy(strict))?;
            export::export_character(&character, &output)?;
            tracing::info!("Done!");
        }

        Commands::Preview {
            spec,
            frame,
            output,
            strict,
        } => {
            let output = output.unwrap_or_else(|| spec.with_extension("png"));
            let character = load_spec(&spec, policy(strict))?;
            let image = render_frame(&character, frame)?;
            image
                .save_with_format(&output, ImageFormat::Png)
                .with_context(|| format!("Failed to write preview: {:?}", output))?;
            tracing::info!("Preview of frame {} saved to {:?}", frame, output);
        }

        Commands::Random { seed, output } => {
            let seed = seed.unwrap_or_else(random::entropy_seed);
            let character = random::random_spec_seeded(seed);
            tracing::info!("Random character (seed {})", seed);
            match output {
                Some(path) => {
                    save_spec(&character, &path)?;
                    tracing::info!("Saved to {:?}", path);
                }
                None => println!("{}", character.to_json_pretty()?),
            }
        }

        Commands::Build { manifest, output } => {
            tracing::info!("Building characters from {:?}", manifest);
            let config = manifest::load_manifest(&manifest)?;
            let summaries = manifest::build_all(&config, output.as_deref())?;
            tracing::info!("Build complete! {} character(s) exported", summaries.len());
        }

        Commands::Check { manifest } => {
            tracing::info!("Checking manifest {:?}", manifest);
            let config = manifest::load_manifest(&manifest)?;
            manifest::validate(&config)?;
            tracing::info!("Manifest is valid!");
        }
    }

    Ok(())
}
