//! Folio content helper.
//!
//! Usage:
//!   folio types
//!   folio validate drafts/project.json --previous published/project.json
//!   folio image-url image-abc123-1200x800-jpg --width 600 --format webp
//!
//! Reads `studio.toml` from the working directory unless `--config` is given.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_cli::{ImageOptions, ValidationOutcome, build_registry, image_url, types_json, validate_document_file};
use folio_client::{ImageFormat, StudioConfig};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Validate Folio content and build image URLs")]
struct Args {
    /// Path to the studio config file
    #[arg(short, long, default_value = "studio.toml")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the registered document types as JSON
    Types,

    /// Validate a document and print it with defaults and slugs filled in
    Validate {
        /// Document JSON file
        document: PathBuf,

        /// Previously stored revision, for read-only checks
        #[arg(long)]
        previous: Option<PathBuf>,
    },

    /// Print the CDN URL for an image asset
    ImageUrl {
        /// Asset id, e.g. image-abc123-1200x800-jpg
        asset: String,

        #[arg(long)]
        width: Option<u32>,

        #[arg(long)]
        height: Option<u32>,

        /// jpg, png or webp
        #[arg(long)]
        format: Option<ImageFormat>,

        /// Dataset to read from instead of the configured one
        #[arg(long)]
        dataset: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = StudioConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    debug!(types = ?config.types, "Studio config ready");

    match args.command {
        Command::Types => {
            let registry = build_registry(&config)?;
            println!("{}", types_json(&registry)?);
        }
        Command::Validate { document, previous } => {
            let registry = build_registry(&config)?;
            match validate_document_file(&registry, &document, previous.as_deref())? {
                ValidationOutcome::Valid(doc) => {
                    println!("{}", serde_json::to_string_pretty(&doc)?);
                }
                ValidationOutcome::Invalid(errors) => {
                    for err in &errors {
                        println!("{err}");
                    }
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::ImageUrl {
            asset,
            width,
            height,
            format,
            dataset,
        } => {
            let options = ImageOptions {
                width,
                height,
                format,
                dataset,
            };
            println!("{}", image_url(&config, &asset, &options)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
