//! Pokeicons - fetch official Pokémon artwork and render PWA icons.

mod adapters;
mod artwork;
mod cassette;
mod cli;
mod config;
mod context;
mod error;
mod icon;
mod output;
mod ports;

use std::path::Path;
use std::process;

use clap::Parser;

use crate::artwork::resolve_artwork_url;
use crate::cli::Cli;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::IconError;
use crate::icon::{compose_icon, decode_rgba, ICON_SIZES};
use crate::output::{icon_path, save_icon};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), IconError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(IconError::Config)?;

    let id = cli.resolve_id(&config);
    let dir = cli.resolve_dir(&config);
    let api_base = config.api_base();

    if cli.verbose {
        eprintln!("Config: {}", config_path.display());
        eprintln!("API: {api_base}");
        eprintln!("Pokémon ID: {id}");
    }

    // Create context based on mode (live / recording / replaying)
    let replay_path = std::env::var("POKEICONS_REPLAY").ok();
    let is_recording = std::env::var("POKEICONS_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        if cli.verbose {
            eprintln!("Replaying from: {cassette_path}");
        }
        (ServiceContext::replaying(Path::new(cassette_path), &api_base)?, None)
    } else if is_recording {
        if cli.verbose {
            eprintln!("Recording mode enabled");
        }
        let (ctx, session) = ServiceContext::recording(&api_base, id)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&api_base)?, None)
    };

    let result = render_icons(&ctx, id, &dir, cli.verbose).await;
    drop(ctx);

    // Failed runs are recorded too, so error responses can be replayed.
    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
        }
    }

    result
}

/// Fetch the artwork for `id` and write every icon size into `dir`.
///
/// Nothing touches the filesystem until the image has been fetched and decoded.
async fn render_icons(
    ctx: &ServiceContext,
    id: u32,
    dir: &Path,
    verbose: bool,
) -> Result<(), IconError> {
    let metadata = ctx.api.fetch_pokemon(id).await?;
    let url = resolve_artwork_url(id, &metadata)?;
    if verbose {
        eprintln!("Artwork: {url}");
    }

    let downloaded = ctx.api.download(&url).await?;
    let img = decode_rgba(&downloaded.data)?;
    if verbose {
        let content_type = downloaded.content_type.as_deref().unwrap_or("unknown type");
        eprintln!("Image: {}x{} ({content_type})", img.width(), img.height());
    }

    for size in ICON_SIZES {
        let canvas = compose_icon(&img, size);
        let path = icon_path(dir, size);
        save_icon(&canvas, &path)?;
        eprintln!("Saved: {}", path.display());
    }

    Ok(())
}
