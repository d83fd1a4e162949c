//! # Foraging Environment
//!
//! [`ForagingEnv`] wires the arena, the agent and the physics world into the
//! gym-style [`Env`] contract. One call to [`Env::step`] covers one decision:
//! it runs physics ticks until the next decision tick or the end of the
//! episode and reports the reward summed over those ticks.
//!
//! A tick runs to completion before the next one starts:
//!
//! 1. the agent applies its action (a new one on decision ticks),
//! 2. every food entity swims,
//! 3. held food is delivered if the dependent is inside the feed radius,
//! 4. physics advances and every contact that began is handled at once,
//! 5. agents past the arena bound are pulled back onto it,
//! 6. expired feedback is dropped and the tick is counted.

use physics::PhysicsWorld;
use tracing::{debug, info};

use crate::action::Action;
use crate::agent::{EpisodeEnd, ForagerAgent};
use crate::area::Area;
use crate::config::{EnvConfig, Params};
use crate::error::EnvError;
use crate::feedback::FeedbackLog;
use crate::observation::observation_size;

/// Reinforcement learning environment trait.
///
/// Each call to [`step`](Env::step) advances the simulation by one action
/// and returns the new observation vector, a reward signal and whether the
/// episode has terminated.
pub trait Env {
    type Action;

    /// Advance the environment by one action.
    ///
    /// Returns `(obs, reward, done)`.
    ///
    /// # Errors
    ///
    /// Implementations fail on integration bugs, never on ordinary play.
    fn step(&mut self, action: &Self::Action) -> Result<(Vec<f32>, f32, bool), EnvError>;

    /// Reset the environment to a fresh episode and return the initial
    /// observation vector.
    ///
    /// # Errors
    ///
    /// Implementations fail on integration bugs, never on ordinary play.
    fn reset(&mut self) -> Result<Vec<f32>, EnvError>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action vector.
    fn action_size(&self) -> usize;
}

pub struct ForagingEnv {
    config: EnvConfig,
    params: Params,
    world: PhysicsWorld,
    area: Area,
    agent: ForagerAgent,
    feedback: FeedbackLog,
    rng: fastrand::Rng,
    clock: f32,
    episode: u64,
}

impl ForagingEnv {
    /// Build the arena and start the first episode.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Config`] if `config` or `params` does not validate.
    pub fn new(config: EnvConfig, params: Params) -> Result<Self, EnvError> {
        config.validate()?;

        let mut world = PhysicsWorld::new();
        let area = Area::new(&mut world, &config.area, &config.bodies);
        let agent = ForagerAgent::new(area.agent(), config.agent.clone());
        let rng = fastrand::Rng::with_seed(config.seed);

        let mut env = Self {
            config,
            params,
            world,
            area,
            agent,
            feedback: FeedbackLog::default(),
            rng,
            clock: 0.0,
            episode: 0,
        };
        env.begin_episode()?;
        Ok(env)
    }

    /// Replace the parameter overrides. They take effect, and are validated,
    /// at the next reset.
    pub fn set_params(&mut self, params: Params) {
        self.params = params;
    }

    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Queue `action` for the next decision tick, for drivers that call
    /// [`tick`](Self::tick) directly.
    pub fn request_action(&mut self, action: Action) {
        self.agent.request_action(action);
    }

    /// Advance one physics tick. Returns whether the episode has ended.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::EpisodeOver`] once the episode has ended, and
    /// propagates physics errors from entities that went missing.
    pub fn tick(&mut self) -> Result<bool, EnvError> {
        if self.agent.episode_end().is_some() {
            return Err(EnvError::EpisodeOver);
        }
        let dt = self.config.tick_seconds;
        let now = self.clock;

        self.agent.act(&mut self.world, dt)?;
        self.area.tick_food(&mut self.world, &mut self.rng, now, dt)?;
        self.agent
            .check_feed_radius(&self.world, &self.area, &mut self.feedback, now)?;

        let agent_body = self.agent.body();
        for event in self.world.step(dt)? {
            if let Some(other) = event.other(agent_body) {
                let kind = self.area.classify(other);
                self.agent
                    .on_contact(kind, &mut self.world, &mut self.area, &mut self.feedback, now)?;
            }
        }
        self.area.confine_agents(&mut self.world)?;

        self.feedback.expire(now);
        self.agent.end_tick();
        self.clock += dt;

        match self.agent.episode_end() {
            Some(end) => {
                info!(
                    episode = self.episode,
                    steps = self.agent.step_count(),
                    reward = %self.agent.cumulative_reward_text(),
                    ?end,
                    "episode finished"
                );
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Current observation vector.
    ///
    /// # Errors
    ///
    /// Propagates physics errors from entities that went missing.
    pub fn observe(&self) -> Result<Vec<f32>, EnvError> {
        Ok(self.agent.observe(&self.world, &self.area)?)
    }

    #[must_use]
    pub fn episode_end(&self) -> Option<EpisodeEnd> {
        self.agent.episode_end()
    }

    /// One-based index of the current episode.
    #[must_use]
    pub fn episode(&self) -> u64 {
        self.episode
    }

    /// Simulated seconds since the current episode started.
    #[must_use]
    pub fn clock(&self) -> f32 {
        self.clock
    }

    #[must_use]
    pub fn cumulative_reward_text(&self) -> String {
        self.agent.cumulative_reward_text()
    }

    #[must_use]
    pub fn agent(&self) -> &ForagerAgent {
        &self.agent
    }

    #[must_use]
    pub fn area(&self) -> &Area {
        &self.area
    }

    #[must_use]
    pub fn feedback(&self) -> &FeedbackLog {
        &self.feedback
    }

    #[must_use]
    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    /// Direct access for drivers that script body poses.
    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }

    fn begin_episode(&mut self) -> Result<(), EnvError> {
        self.params.validate()?;
        self.episode += 1;
        // Restarted per episode so f32 tick increments keep their precision.
        self.clock = 0.0;
        self.agent.begin_episode(&self.params);
        self.area
            .reset(&mut self.world, &mut self.rng, &self.params, self.clock)?;
        self.feedback.clear();
        debug!(
            episode = self.episode,
            food = self.area.remaining_food(),
            food_speed = self.area.food_speed(),
            feed_radius = self.agent.feed_radius(),
            "episode started"
        );
        Ok(())
    }
}

impl Env for ForagingEnv {
    type Action = Action;

    fn step(&mut self, action: &Action) -> Result<(Vec<f32>, f32, bool), EnvError> {
        self.request_action(*action);
        let done = loop {
            let done = self.tick()?;
            if done || self.agent.is_decision_tick() {
                break done;
            }
        };
        let reward = self.agent.take_reward();
        Ok((self.observe()?, reward, done))
    }

    fn reset(&mut self) -> Result<Vec<f32>, EnvError> {
        self.begin_episode()?;
        self.observe()
    }

    fn obs_size(&self) -> usize {
        observation_size(self.area.agent_count())
    }

    fn action_size(&self) -> usize {
        Action::SIZE
    }
}
