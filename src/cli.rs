//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Fetch official Pokémon artwork and render 192px and 512px PWA icons.
#[derive(Parser, Debug)]
#[command(name = "pokeicons", version, about)]
pub struct Cli {
    /// Pokémon ID to fetch artwork for [default: 25].
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub id: Option<u32>,

    /// Output directory for the icons [default: icons].
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The identifier to fetch: the flag if given, otherwise the config default.
    #[must_use]
    pub fn resolve_id(&self, config: &Config) -> u32 {
        self.id.unwrap_or(config.defaults.id)
    }

    /// The output directory: the flag if given, otherwise the config default.
    #[must_use]
    pub fn resolve_dir(&self, config: &Config) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| config.defaults.dir.clone())
    }
}
