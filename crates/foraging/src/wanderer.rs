//! # Wandering Food
//!
//! Each food entity swims between random points on the far side of the
//! arena. Choosing and travelling share one update: once the clock reaches
//! the scheduled decision time a new destination is picked, otherwise the
//! entity advances toward the current one. Reaching the destination early
//! schedules the next decision for the current tick, so the following update
//! picks a new destination straight away.

use physics::transform::yaw_towards;
use physics::{BodyHandle, PhysicsError, PhysicsWorld, Vec3};

use crate::sampler::{sample, uniform, AnnulusSector, FOOD_SECTOR};

/// Where wanderers head, relative to the arena centre.
pub const WANDER_SECTOR: AnnulusSector = FOOD_SECTOR;
/// Seconds a freshly spawned wanderer waits before its first decision.
pub const FIRST_DECISION_DELAY: f32 = 1.0;
const SPEED_JITTER_MIN: f32 = 0.5;
const SPEED_JITTER_MAX: f32 = 1.5;

#[derive(Clone, Debug)]
pub struct Wanderer {
    body: BodyHandle,
    base_speed: f32,
    speed: f32,
    destination: Vec3,
    heading: Vec3,
    next_decision: f32,
}

impl Wanderer {
    #[must_use]
    pub fn new(body: BodyHandle, base_speed: f32, spawned_at: f32) -> Self {
        Self {
            body,
            base_speed,
            speed: 0.0,
            destination: Vec3::ZERO,
            heading: Vec3::FORWARD,
            next_decision: spawned_at + FIRST_DECISION_DELAY,
        }
    }

    #[must_use]
    pub fn body(&self) -> BodyHandle {
        self.body
    }

    #[must_use]
    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    #[must_use]
    pub fn destination(&self) -> Vec3 {
        self.destination
    }

    #[must_use]
    pub fn next_decision(&self) -> f32 {
        self.next_decision
    }

    /// Advance by one tick of `dt` seconds at clock time `now`. `center` is
    /// the point destinations are sampled around.
    ///
    /// # Errors
    ///
    /// Fails only if the wanderer's body is no longer in `world`.
    pub fn tick(
        &mut self,
        world: &mut PhysicsWorld,
        rng: &mut fastrand::Rng,
        center: Vec3,
        now: f32,
        dt: f32,
    ) -> Result<(), PhysicsError> {
        if self.base_speed <= 0.0 {
            return Ok(());
        }

        let pos = world.position(self.body)?;
        if now >= self.next_decision {
            self.choose(world, rng, center, pos, now)
        } else {
            self.travel(world, pos, now, dt)
        }
    }

    fn choose(
        &mut self,
        world: &mut PhysicsWorld,
        rng: &mut fastrand::Rng,
        center: Vec3,
        pos: Vec3,
        now: f32,
    ) -> Result<(), PhysicsError> {
        self.speed = self.base_speed * uniform(rng, SPEED_JITTER_MIN, SPEED_JITTER_MAX);
        self.destination = sample(rng, center, &WANDER_SECTOR);

        let offset = self.destination - pos;
        self.heading = offset.normalize();
        if let Some(yaw) = yaw_towards(offset) {
            world.body_mut(self.body)?.yaw = physics::transform::wrap_degrees(yaw);
        }

        let time_to_arrive = offset.length() / self.speed;
        self.next_decision = now + time_to_arrive;
        Ok(())
    }

    fn travel(
        &mut self,
        world: &mut PhysicsWorld,
        pos: Vec3,
        now: f32,
        dt: f32,
    ) -> Result<(), PhysicsError> {
        let step = self.heading * (self.speed * dt);
        if step.length() <= pos.distance(self.destination) {
            world.move_position(self.body, pos + step)
        } else {
            world.move_position(self.body, self.destination)?;
            self.next_decision = now;
            Ok(())
        }
    }
}
