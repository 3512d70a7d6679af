//! Lumina - AI image generation CLI.

mod adapters;
mod cassette;
mod cli;
mod config;
mod context;
mod controller;
mod error;
mod output;
mod params;
mod ports;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::controller::{Controller, Submission};
use crate::error::LuminaError;
use crate::params::{AspectRatio, StyleTag};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), LuminaError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(LuminaError::Config)?;

    // Resolve prompt
    let prompt = cli.resolve_prompt().map_err(LuminaError::Io)?;

    // Resolve options: CLI flag wins, then config default
    let style: StyleTag = cli
        .style
        .as_deref()
        .unwrap_or(&config.defaults.style)
        .parse()
        .map_err(LuminaError::InvalidArgument)?;
    let aspect_ratio: AspectRatio = cli
        .aspect_ratio
        .as_deref()
        .unwrap_or(&config.defaults.aspect_ratio)
        .parse()
        .map_err(LuminaError::InvalidArgument)?;
    let model = cli.model.clone().unwrap_or_else(|| config.defaults.model.clone());

    if cli.verbose {
        eprintln!("Model: {model}");
        eprintln!("Style: {style}");
        eprintln!("Aspect ratio: {aspect_ratio}");
    }

    // Create context based on mode (live / recording / replaying)
    let replay_path = std::env::var("LUMINA_REPLAY").ok();
    let is_recording = std::env::var("LUMINA_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        if cli.verbose {
            eprintln!("Replaying from: {cassette_path}");
        }
        (ServiceContext::replaying(Path::new(cassette_path))?, None)
    } else if is_recording {
        if cli.verbose {
            eprintln!("Recording mode enabled");
        }
        let (ctx, session) = ServiceContext::recording(&config)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&config)?, None)
    };

    // Submit
    let controller = Controller::new(ctx.generator, model);
    match controller.submit(&prompt, style, aspect_ratio).await? {
        Submission::Skipped => {
            eprintln!("Prompt is empty; nothing to generate.");
        }
        Submission::Generated(image) => {
            if cli.verbose {
                eprintln!("Generated {} image ({} bytes)", image.mime_type, image.data.len());
            }
            let saved = match cli.output.as_deref() {
                Some(explicit) => {
                    let path = PathBuf::from(explicit);
                    output::save_image(&image.data, &path)?;
                    path
                }
                None => controller.download_to(Path::new("."))?.ok_or_else(|| {
                    LuminaError::Config("No image available to download.".into())
                })?,
            };
            eprintln!("Saved: {}", saved.display());
        }
    }

    // Release the adapter's recorder handle so the session can be finished
    drop(controller);

    // Finish recording if active
    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
        }
    }

    Ok(())
}
