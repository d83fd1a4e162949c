//! # Forager Agent
//!
//! The trainable side of the arena. The agent turns actions into motion,
//! shapes rewards and decides when an episode is over.
//!
//! ## Rewards
//!
//! All rewards add to a running total that restarts at zero each episode:
//!
//! -   `-1 / max_episode_steps` every tick, when a step cap is configured.
//! -   `+1` for eating food while empty. Contacts with food while already
//!     holding some are ignored and leave the food in place.
//! -   `-2` for every new contact with another agent.
//! -   `+1` for delivering held food, either by touching the dependent or by
//!     being closer to it than the feed radius on any tick. Delivering the
//!     last food ends the episode.
//!
//! ## Decision cadence
//!
//! A fresh action is taken from the driver every [`DECISION_INTERVAL`] ticks.
//! The ticks in between repeat the last one.

use physics::{BodyHandle, PhysicsError, PhysicsWorld};
use tracing::debug;

use crate::action::Action;
use crate::area::Area;
use crate::config::{AgentConfig, Params};
use crate::contact::ContactKind;
use crate::feedback::FeedbackLog;
use crate::observation;

/// Ticks between two decisions.
pub const DECISION_INTERVAL: u32 = 5;
pub const EAT_REWARD: f32 = 1.0;
pub const DELIVERY_REWARD: f32 = 1.0;
pub const AGENT_CONTACT_PENALTY: f32 = -2.0;

/// Why an episode stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EpisodeEnd {
    /// The last food was delivered.
    AllFoodDelivered,
    /// The step cap was reached first.
    StepCap,
}

#[derive(Clone, Debug)]
pub struct ForagerAgent {
    body: BodyHandle,
    config: AgentConfig,
    is_fed: bool,
    feed_radius: f32,
    cumulative_reward: f32,
    unclaimed_reward: f32,
    step_count: u32,
    pending: Action,
    active: Action,
    end: Option<EpisodeEnd>,
}

impl ForagerAgent {
    #[must_use]
    pub fn new(body: BodyHandle, config: AgentConfig) -> Self {
        Self {
            body,
            config,
            is_fed: false,
            feed_radius: Params::default().feed_radius(),
            cumulative_reward: 0.0,
            unclaimed_reward: 0.0,
            step_count: 0,
            pending: Action::default(),
            active: Action::default(),
            end: None,
        }
    }

    /// Clear all per-episode state and pick up this episode's feed radius.
    pub fn begin_episode(&mut self, params: &Params) {
        self.is_fed = false;
        self.feed_radius = params.feed_radius();
        self.cumulative_reward = 0.0;
        self.unclaimed_reward = 0.0;
        self.step_count = 0;
        self.pending = Action::default();
        self.active = Action::default();
        self.end = None;
    }

    /// Whether the next tick will take the pending action.
    #[must_use]
    pub fn is_decision_tick(&self) -> bool {
        self.step_count % DECISION_INTERVAL == 0
    }

    /// Queue the action for the next decision tick.
    pub fn request_action(&mut self, action: Action) {
        self.pending = action;
    }

    /// Apply the current action to the body and charge the step penalty.
    ///
    /// # Errors
    ///
    /// Fails if the agent's body is missing from `world`.
    pub fn act(&mut self, world: &mut PhysicsWorld, dt: f32) -> Result<(), PhysicsError> {
        if self.is_decision_tick() {
            self.active = self.pending;
        }

        let body = world.body(self.body)?;
        let target = body.pos + body.forward() * (self.active.forward * self.config.move_speed * dt);
        world.move_position(self.body, target)?;
        world.rotate_yaw(
            self.body,
            self.active.turn.direction() * self.config.turn_speed * dt,
        )?;

        if self.config.max_episode_steps > 0 {
            #[allow(clippy::cast_precision_loss)]
            self.add_reward(-1.0 / self.config.max_episode_steps as f32);
        }
        Ok(())
    }

    /// Deliver held food if the dependent is inside the feed radius.
    ///
    /// # Errors
    ///
    /// Fails if the agent or the dependent is missing from `world`.
    pub fn check_feed_radius(
        &mut self,
        world: &PhysicsWorld,
        area: &Area,
        feedback: &mut FeedbackLog,
        now: f32,
    ) -> Result<(), PhysicsError> {
        let dependent = world.position(area.dependent())?;
        if world.position(self.body)?.distance(dependent) < self.feed_radius {
            self.deliver(world, area, feedback, now)?;
        }
        Ok(())
    }

    /// React to the start of a contact.
    ///
    /// # Errors
    ///
    /// Fails if the dependent is missing from `world` during a delivery.
    pub fn on_contact(
        &mut self,
        kind: ContactKind,
        world: &mut PhysicsWorld,
        area: &mut Area,
        feedback: &mut FeedbackLog,
        now: f32,
    ) -> Result<(), PhysicsError> {
        match kind {
            ContactKind::Food(food) => self.eat(world, area, food),
            ContactKind::OtherAgent(other) => {
                debug!(?other, "bumped into another agent");
                self.add_reward(AGENT_CONTACT_PENALTY);
            }
            ContactKind::Dependent => self.deliver(world, area, feedback, now)?,
            ContactKind::Unrecognized => {}
        }
        Ok(())
    }

    /// Close out a tick: count it and enforce the step cap.
    pub fn end_tick(&mut self) {
        self.step_count += 1;
        let cap = self.config.max_episode_steps;
        if self.end.is_none() && cap > 0 && self.step_count >= cap {
            self.end = Some(EpisodeEnd::StepCap);
        }
    }

    /// Current observation vector.
    ///
    /// # Errors
    ///
    /// Fails if any agent or the dependent is missing from `world`.
    pub fn observe(&self, world: &PhysicsWorld, area: &Area) -> Result<Vec<f32>, PhysicsError> {
        let me = world.body(self.body)?;
        let dependent = world.position(area.dependent())?;
        let others = area
            .agents()
            .filter(|&h| h != self.body)
            .map(|h| world.position(h))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(observation::build(self.is_fed, me.pos, me.forward(), dependent, others))
    }

    /// Reward earned since the last call.
    pub fn take_reward(&mut self) -> f32 {
        std::mem::take(&mut self.unclaimed_reward)
    }

    #[must_use]
    pub fn body(&self) -> BodyHandle {
        self.body
    }

    #[must_use]
    pub fn is_fed(&self) -> bool {
        self.is_fed
    }

    #[must_use]
    pub fn feed_radius(&self) -> f32 {
        self.feed_radius
    }

    #[must_use]
    pub fn cumulative_reward(&self) -> f32 {
        self.cumulative_reward
    }

    /// Cumulative reward with two decimals, for on-screen display.
    #[must_use]
    pub fn cumulative_reward_text(&self) -> String {
        format!("{:.2}", self.cumulative_reward)
    }

    #[must_use]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    #[must_use]
    pub fn active_action(&self) -> Action {
        self.active
    }

    #[must_use]
    pub fn episode_end(&self) -> Option<EpisodeEnd> {
        self.end
    }

    fn add_reward(&mut self, reward: f32) {
        self.cumulative_reward += reward;
        self.unclaimed_reward += reward;
    }

    fn eat(&mut self, world: &mut PhysicsWorld, area: &mut Area, food: BodyHandle) {
        if self.is_fed {
            return;
        }
        self.is_fed = true;
        area.remove_food(world, food);
        self.add_reward(EAT_REWARD);
        debug!(remaining = area.remaining_food(), "ate food");
    }

    fn deliver(
        &mut self,
        world: &PhysicsWorld,
        area: &Area,
        feedback: &mut FeedbackLog,
        now: f32,
    ) -> Result<(), PhysicsError> {
        if !self.is_fed {
            return Ok(());
        }
        self.is_fed = false;
        feedback.record_delivery(world.position(area.dependent())?, now);
        self.add_reward(DELIVERY_REWARD);

        let remaining = area.remaining_food();
        debug!(remaining, "delivered food");
        if remaining == 0 {
            self.end = Some(EpisodeEnd::AllFoodDelivered);
        }
        Ok(())
    }
}
