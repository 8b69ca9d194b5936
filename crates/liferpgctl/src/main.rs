//! Life RPG CLI - command surface over the progression engine.
//!
//! Every invocation loads the profile (applying any pending decay), runs
//! one operation, and exits; the engine persists after each mutation. The
//! dashboard subcommand instead reads its own snapshot and never mutates.

mod cli;
mod commands;
mod dashboard;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use liferpg_common::{paths, Engine, ProfileStore, Settings};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load();
    let profile_path = cli
        .profile
        .clone()
        .or_else(|| settings.profile_path.clone())
        .unwrap_or_else(paths::profile_path);

    // The dashboard is a read-only consumer: it takes its own snapshot
    // rather than sharing a live engine.
    if matches!(cli.command, Commands::Dashboard) {
        return dashboard::run(ProfileStore::new(&profile_path), settings);
    }

    let store = ProfileStore::new(&profile_path);
    let mut engine = Engine::load(store, settings)?;

    if let Some(decay) = engine.decay_report() {
        output::print_decay(&decay);
    }

    commands::dispatch(&mut engine, cli.command)
}
