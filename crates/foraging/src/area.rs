//! # Arena Lifecycle
//!
//! The [`Area`] owns every body in one arena: the trainable agent, any
//! passive agents, the dependent and the current batch of food. It is built
//! once and then re-randomized in place by [`Area::reset`] at the start of
//! each episode.
//!
//! Food bookkeeping is immediate. [`Area::remove_food`] despawns the body and
//! drops it from the tracked set in the same call, so a termination check
//! later in the same tick sees the updated count.

use physics::{BodyHandle, PhysicsError, PhysicsWorld, Vec3};
use tracing::debug;

use crate::config::{AreaConfig, BodyConfig, Params};
use crate::contact::ContactKind;
use crate::sampler::{sample, uniform, AGENT_SECTOR, DEPENDENT_SECTOR, FOOD_SECTOR};
use crate::wanderer::Wanderer;

/// Every placement is lifted this far above the arena centre.
pub const SPAWN_HEIGHT: f32 = 0.5;
/// The dependent always faces back toward the centre.
pub const DEPENDENT_YAW: f32 = 180.0;

pub struct Area {
    center: Vec3,
    config: AreaConfig,
    food_radius: f32,
    agent_radius: f32,
    agent: BodyHandle,
    passive_agents: Vec<BodyHandle>,
    dependent: BodyHandle,
    food: Vec<Wanderer>,
    food_speed: f32,
}

impl Area {
    /// Spawn the persistent bodies. Food appears only once [`reset`](Self::reset) runs.
    pub fn new(world: &mut PhysicsWorld, config: &AreaConfig, bodies: &BodyConfig) -> Self {
        let center = config.center();
        let ground = center + Vec3::UP * SPAWN_HEIGHT;

        let agent = world.add_dynamic_sphere(ground, 0.0, bodies.agent_radius);
        let passive_agents = (0..config.passive_agents)
            .map(|_| world.add_dynamic_sphere(ground, 0.0, bodies.agent_radius))
            .collect();
        let dependent = world.add_static_sphere(ground, DEPENDENT_YAW, bodies.dependent_radius);

        Self {
            center,
            config: config.clone(),
            food_radius: bodies.food_radius,
            agent_radius: bodies.agent_radius,
            agent,
            passive_agents,
            dependent,
            food: Vec::new(),
            food_speed: config.food_speed,
        }
    }

    /// Start a new episode: clear old food, re-place every agent and the
    /// dependent at rest, then spawn a fresh batch of food.
    ///
    /// # Errors
    ///
    /// Fails only if a persistent body was despawned from `world` behind the
    /// arena's back.
    pub fn reset(
        &mut self,
        world: &mut PhysicsWorld,
        rng: &mut fastrand::Rng,
        params: &Params,
        now: f32,
    ) -> Result<(), PhysicsError> {
        self.remove_all_food(world);

        for body in std::iter::once(self.agent).chain(self.passive_agents.iter().copied()) {
            self.place_agent(world, rng, body)?;
        }
        self.place_dependent(world, rng)?;

        self.food_speed = params.food_speed_or(self.config.food_speed);
        self.spawn_food(world, rng, self.config.food_count, now);
        world.forget_contacts();

        debug!(
            food = self.food.len(),
            food_speed = self.food_speed,
            "arena reset"
        );
        Ok(())
    }

    /// Stop tracking `body` and despawn it. Returns `false`, changing nothing,
    /// if `body` is not a tracked food entity.
    pub fn remove_food(&mut self, world: &mut PhysicsWorld, body: BodyHandle) -> bool {
        let Some(index) = self.food.iter().position(|w| w.body() == body) else {
            return false;
        };
        self.food.remove(index);
        world.despawn(body);
        true
    }

    #[must_use]
    pub fn remaining_food(&self) -> usize {
        self.food.len()
    }

    /// Resolve a contact partner into the arena's own vocabulary.
    #[must_use]
    pub fn classify(&self, body: BodyHandle) -> ContactKind {
        if body == self.dependent {
            ContactKind::Dependent
        } else if self.food.iter().any(|w| w.body() == body) {
            ContactKind::Food(body)
        } else if body == self.agent || self.passive_agents.contains(&body) {
            ContactKind::OtherAgent(body)
        } else {
            ContactKind::Unrecognized
        }
    }

    /// Advance every food entity by one tick.
    ///
    /// # Errors
    ///
    /// Fails if a tracked food body is missing from `world`.
    pub fn tick_food(
        &mut self,
        world: &mut PhysicsWorld,
        rng: &mut fastrand::Rng,
        now: f32,
        dt: f32,
    ) -> Result<(), PhysicsError> {
        let center = self.spawn_center();
        for wanderer in &mut self.food {
            wanderer.tick(world, rng, center, now, dt)?;
        }
        Ok(())
    }

    /// Pull every agent that strayed past the arena bound back onto it and
    /// drop the outward part of its velocity.
    ///
    /// # Errors
    ///
    /// Fails if an agent body is missing from `world`.
    pub fn confine_agents(&self, world: &mut PhysicsWorld) -> Result<(), PhysicsError> {
        let limit = self.config.bound_radius - self.agent_radius;
        for body in self.agents() {
            let sphere = world.body_mut(body)?;
            let offset = sphere.pos - self.center;
            let flat = Vec3::new(offset.x, 0.0, offset.z);
            let distance = flat.length();
            if distance <= limit {
                continue;
            }
            let normal = flat / distance;
            sphere.pos = self.center + normal * limit + Vec3::UP * offset.y;
            let outward = sphere.vel.dot(normal);
            if outward > 0.0 {
                sphere.vel -= normal * outward;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[must_use]
    pub fn agent(&self) -> BodyHandle {
        self.agent
    }

    #[must_use]
    pub fn dependent(&self) -> BodyHandle {
        self.dependent
    }

    /// Every agent in the arena, trainable one first, in a fixed order.
    pub fn agents(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        std::iter::once(self.agent).chain(self.passive_agents.iter().copied())
    }

    #[must_use]
    pub fn agent_count(&self) -> usize {
        1 + self.passive_agents.len()
    }

    pub fn food_bodies(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.food.iter().map(Wanderer::body)
    }

    #[must_use]
    pub fn food(&self) -> &[Wanderer] {
        &self.food
    }

    /// Base swim speed applied at the last reset.
    #[must_use]
    pub fn food_speed(&self) -> f32 {
        self.food_speed
    }

    fn spawn_center(&self) -> Vec3 {
        self.center + Vec3::UP * SPAWN_HEIGHT
    }

    fn remove_all_food(&mut self, world: &mut PhysicsWorld) {
        for wanderer in self.food.drain(..) {
            // Already gone if something else despawned it; nothing to do then.
            world.despawn(wanderer.body());
        }
    }

    fn place_agent(
        &self,
        world: &mut PhysicsWorld,
        rng: &mut fastrand::Rng,
        body: BodyHandle,
    ) -> Result<(), PhysicsError> {
        let pos = sample(rng, self.spawn_center(), &AGENT_SECTOR);
        let yaw = uniform(rng, 0.0, 360.0);
        world.set_pose(body, pos, yaw)
    }

    fn place_dependent(
        &self,
        world: &mut PhysicsWorld,
        rng: &mut fastrand::Rng,
    ) -> Result<(), PhysicsError> {
        let pos = sample(rng, self.spawn_center(), &DEPENDENT_SECTOR);
        world.set_pose(self.dependent, pos, DEPENDENT_YAW)
    }

    fn spawn_food(&mut self, world: &mut PhysicsWorld, rng: &mut fastrand::Rng, count: usize, now: f32) {
        let center = self.spawn_center();
        for _ in 0..count {
            let pos = sample(rng, center, &FOOD_SECTOR);
            let body = world.add_kinematic_sphere(pos, 0.0, self.food_radius);
            self.food.push(Wanderer::new(body, self.food_speed, now));
        }
    }
}
