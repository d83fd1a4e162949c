//! # Episode Driver
//!
//! Plays a fixed number of episodes against a [`ForagingEnv`]. Each decision
//! feeds the latest observation to the [`HeuristicPolicy`] and hands its
//! action to [`Env::step`]. Parameter overrides are copied out of the shared
//! store right before every reset, so a reload never lands mid-episode.

use std::time::{Duration, Instant};

use anyhow::Result;
use foraging::{Env, EpisodeEnd, ForagingEnv, Params, DECISION_INTERVAL};
use parking_lot::RwLock;

use crate::policy::HeuristicPolicy;

pub struct RunOptions {
    pub episodes: u64,
    /// Sleep so that each decision takes as long in wall-clock time as it
    /// does in simulated time.
    pub realtime: bool,
    /// Seeds the policy's own random turns.
    pub seed: u64,
}

/// How one episode went.
#[derive(Clone, Debug)]
pub struct EpisodeSummary {
    pub episode: u64,
    pub decisions: u64,
    pub steps: u32,
    pub reward: f32,
    pub end: Option<EpisodeEnd>,
}

impl EpisodeSummary {
    #[must_use]
    pub fn all_delivered(&self) -> bool {
        self.end == Some(EpisodeEnd::AllFoodDelivered)
    }
}

/// Run `options.episodes` episodes, the first of which `env` has already
/// started.
///
/// # Errors
///
/// Propagates any environment error. None occur during ordinary play.
pub fn run(
    mut env: ForagingEnv,
    params: &RwLock<Params>,
    options: &RunOptions,
) -> Result<Vec<EpisodeSummary>> {
    let mut policy = HeuristicPolicy::new(options.seed);
    #[allow(clippy::cast_precision_loss)]
    let decision_time =
        Duration::from_secs_f32(env.config().tick_seconds * DECISION_INTERVAL as f32);

    let mut summaries = Vec::new();
    for index in 0..options.episodes {
        let mut obs = if index == 0 {
            env.observe()?
        } else {
            env.set_params(*params.read());
            env.reset()?
        };

        let mut decisions = 0;
        let mut reward = 0.0;
        loop {
            let started = Instant::now();
            let action = policy.act(&obs);
            let (next, r, done) = env.step(&action)?;
            obs = next;
            reward += r;
            decisions += 1;
            if done {
                break;
            }
            if options.realtime {
                if let Some(rest) = decision_time.checked_sub(started.elapsed()) {
                    std::thread::sleep(rest);
                }
            }
        }

        let summary = EpisodeSummary {
            episode: env.episode(),
            decisions,
            steps: env.agent().step_count(),
            reward,
            end: env.episode_end(),
        };
        tracing::debug!(
            episode = summary.episode,
            decisions = summary.decisions,
            steps = summary.steps,
            "episode summary"
        );
        summaries.push(summary);
    }
    Ok(summaries)
}
