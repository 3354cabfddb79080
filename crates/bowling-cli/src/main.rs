mod cli;
mod commands;

use std::path::Path;

use anyhow::Result;
use bowling_core::Config;
use clap::Parser;
use cli::{Args, Command};
use commands::ScoreOptions;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bowling=warn,bowling_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&args.config);
    let options = ScoreOptions::resolve(&config, args.strict, args.lookahead, args.json);

    match args.command {
        Some(Command::Score { rolls }) => commands::score::run(&rolls, &options),
        Some(Command::Example) | None => commands::example::run(&options),
    }
}

/// Load config, falling back to defaults
fn load_config(path: &Path) -> Config {
    if !path.exists() {
        debug!("No config at {:?}, using defaults", path);
        return Config::default();
    }

    match Config::load(path) {
        Ok(config) => {
            info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    }
}
