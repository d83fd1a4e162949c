#![deny(clippy::all, clippy::pedantic)]
//! # Foraging Runtime
//!
//! Headless driver for the foraging environment. Builds a [`ForagingEnv`]
//! from an optional JSON config, then plays episodes with the built-in
//! heuristic policy and logs how each one ended. With `--watch`, edits to the
//! parameter file are picked up at the next episode boundary.

mod app;
mod policy;
mod settings;
mod watcher;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use foraging::ForagingEnv;
use parking_lot::RwLock;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "runtime_main", about = "Play foraging episodes with a heuristic policy")]
struct Cli {
    /// JSON file with the environment configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file with per-episode parameter overrides.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Reload the parameter file whenever it changes.
    #[arg(long, requires = "params")]
    watch: bool,

    /// Number of episodes to play.
    #[arg(long, default_value_t = 3)]
    episodes: u64,

    /// Override the configured random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of food entities per episode.
    #[arg(long)]
    food_count: Option<usize>,

    /// Override the step cap. With 0 an episode only ends once all food is
    /// delivered.
    #[arg(long)]
    max_steps: Option<u32>,

    /// Pace ticks to wall-clock time.
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => settings::load_config(path)?,
        None => foraging::EnvConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(food_count) = cli.food_count {
        config.area.food_count = food_count;
    }
    if let Some(max_steps) = cli.max_steps {
        config.agent.max_episode_steps = max_steps;
    }

    let params = match &cli.params {
        Some(path) => settings::load_params(path)?,
        None => foraging::Params::default(),
    };
    let shared = Arc::new(RwLock::new(params));

    let _params_watcher = match (&cli.params, cli.watch) {
        (Some(path), true) => Some(watcher::start(path, Arc::clone(&shared))?),
        _ => None,
    };

    let seed = config.seed;
    let env = ForagingEnv::new(config, params).context("invalid environment configuration")?;
    tracing::info!(seed, episodes = cli.episodes, "starting foraging runtime");

    let summaries = app::run(
        env,
        &shared,
        &app::RunOptions {
            episodes: cli.episodes,
            realtime: cli.realtime,
            seed,
        },
    )?;

    let delivered = summaries.iter().filter(|s| s.all_delivered()).count();
    #[allow(clippy::cast_precision_loss)]
    let mean_reward =
        summaries.iter().map(|s| s.reward).sum::<f32>() / summaries.len().max(1) as f32;
    tracing::info!(
        episodes = summaries.len(),
        delivered,
        mean_reward = %format!("{mean_reward:.2}"),
        "runtime finished"
    );
    Ok(())
}
