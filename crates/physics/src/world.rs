//! # Physics World
//!
//! Owns every body in a generational arena and advances them one fixed step
//! at a time. A step integrates dynamic bodies, resolves overlapping pairs and
//! reports each pair that *started* touching during that step. Pairs that stay
//! in contact across steps are reported once.

use std::collections::HashSet;

use crate::collision::{
    detect_sphere_sphere_collision, potential_collision_pairs, resolve_sphere_sphere_collision,
    Contact,
};
use crate::error::PhysicsError;
use crate::integrator::integrate_sphere;
use crate::types::{PhysParams, Sphere, Vec3};

/// Stable reference to a body. A handle goes stale once its body is
/// despawned, even if the slot is later reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

impl BodyHandle {
    #[must_use]
    pub fn index(self) -> u32 {
        self.index
    }
}

/// Two bodies began touching during the last step. `a.index() < b.index()`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionEvent {
    pub a: BodyHandle,
    pub b: BodyHandle,
    pub contact: Contact,
}

impl CollisionEvent {
    #[must_use]
    pub fn involves(&self, body: BodyHandle) -> bool {
        self.a == body || self.b == body
    }

    /// The partner of `body` in this contact, if `body` takes part in it.
    #[must_use]
    pub fn other(&self, body: BodyHandle) -> Option<BodyHandle> {
        if self.a == body {
            Some(self.b)
        } else if self.b == body {
            Some(self.a)
        } else {
            None
        }
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    body: Option<Sphere>,
}

/// Main physics simulation container
#[derive(Debug, Default)]
pub struct PhysicsWorld {
    pub params: PhysParams,
    slots: Vec<Slot>,
    free: Vec<u32>,
    touching: HashSet<(BodyHandle, BodyHandle)>,
}

impl PhysicsWorld {
    /// Create a new empty world
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_params(params: PhysParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Insert a body and return its handle.
    pub fn spawn(&mut self, body: Sphere) -> BodyHandle {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.body = Some(body);
            return BodyHandle {
                index,
                generation: slot.generation,
            };
        }

        let index = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        self.slots.push(Slot {
            generation: 0,
            body: Some(body),
        });
        BodyHandle {
            index,
            generation: 0,
        }
    }

    /// Remove a body. Returns `false` if the handle was already stale.
    pub fn despawn(&mut self, handle: BodyHandle) -> bool {
        if !self.contains(handle) {
            return false;
        }
        let slot = &mut self.slots[handle.index as usize];
        slot.body = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.touching.retain(|&(a, b)| a != handle && b != handle);
        true
    }

    #[must_use]
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.slots
            .get(handle.index as usize)
            .is_some_and(|slot| slot.generation == handle.generation && slot.body.is_some())
    }

    /// Number of live bodies
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.body.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handles of all live bodies in slot order.
    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.body.as_ref().map(|_| BodyHandle {
                index: u32::try_from(i).unwrap_or(u32::MAX),
                generation: slot.generation,
            })
        })
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] for a stale handle.
    pub fn body(&self, handle: BodyHandle) -> Result<&Sphere, PhysicsError> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.body.as_ref())
            .ok_or(PhysicsError::UnknownBody(handle))
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] for a stale handle.
    pub fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut Sphere, PhysicsError> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.body.as_mut())
            .ok_or(PhysicsError::UnknownBody(handle))
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] for a stale handle.
    pub fn position(&self, handle: BodyHandle) -> Result<Vec3, PhysicsError> {
        Ok(self.body(handle)?.pos)
    }

    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] for a stale handle.
    pub fn forward(&self, handle: BodyHandle) -> Result<Vec3, PhysicsError> {
        Ok(self.body(handle)?.forward())
    }

    /// Move a body to `target` without going through integration. Contacts
    /// at the new position are picked up by the next [`step`](Self::step).
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] for a stale handle.
    pub fn move_position(&mut self, handle: BodyHandle, target: Vec3) -> Result<(), PhysicsError> {
        self.body_mut(handle)?.pos = target;
        Ok(())
    }

    /// Turn a body by `delta_deg` degrees around the up axis.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] for a stale handle.
    pub fn rotate_yaw(&mut self, handle: BodyHandle, delta_deg: f32) -> Result<(), PhysicsError> {
        let body = self.body_mut(handle)?;
        body.yaw = crate::transform::wrap_degrees(body.yaw + delta_deg);
        Ok(())
    }

    /// Place a body at rest with the given pose.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::UnknownBody`] for a stale handle.
    pub fn set_pose(&mut self, handle: BodyHandle, pos: Vec3, yaw: f32) -> Result<(), PhysicsError> {
        let body = self.body_mut(handle)?;
        body.pos = pos;
        body.yaw = crate::transform::wrap_degrees(yaw);
        body.vel = Vec3::ZERO;
        body.angular_vel = 0.0;
        Ok(())
    }

    /// Drop the record of which pairs are touching, so every overlap present
    /// at the next step is reported as a fresh contact.
    pub fn forget_contacts(&mut self) {
        self.touching.clear();
    }

    /// Advance the world by `dt` seconds and return the contacts that began
    /// during this step, ordered by body index.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidTimeStep`] if `dt` is not positive and finite.
    pub fn step(&mut self, dt: f32) -> Result<Vec<CollisionEvent>, PhysicsError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(PhysicsError::InvalidTimeStep(dt));
        }

        // 1. Integrate
        for body in self.slots.iter_mut().filter_map(|slot| slot.body.as_mut()) {
            integrate_sphere(body, &self.params, dt);
        }

        // 2. Broad and narrow phase over a packed copy of the live bodies
        let (handles, mut spheres): (Vec<BodyHandle>, Vec<Sphere>) = self
            .handles()
            .filter_map(|h| self.body(h).ok().map(|s| (h, *s)))
            .unzip();

        let mut touching = HashSet::new();
        let mut events = Vec::new();
        for (i, j) in potential_collision_pairs(&spheres) {
            let (head, tail) = spheres.split_at_mut(j);
            let (sphere_a, sphere_b) = (&mut head[i], &mut tail[0]);
            if let Some(contact) = detect_sphere_sphere_collision(sphere_a, sphere_b) {
                resolve_sphere_sphere_collision(sphere_a, sphere_b, &contact);
                let pair = (handles[i], handles[j]);
                if !self.touching.contains(&pair) {
                    events.push(CollisionEvent {
                        a: pair.0,
                        b: pair.1,
                        contact,
                    });
                }
                touching.insert(pair);
            }
        }

        // 3. Write back resolved state
        for (handle, sphere) in handles.into_iter().zip(spheres) {
            if let Ok(body) = self.body_mut(handle) {
                *body = sphere;
            }
        }
        self.touching = touching;

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn despawned_handle_goes_stale() {
        let mut world = PhysicsWorld::new();
        let a = world.add_dynamic_sphere(Vec3::ZERO, 0.0, 0.5);
        assert!(world.despawn(a));
        assert!(!world.despawn(a));

        let b = world.add_dynamic_sphere(Vec3::ZERO, 0.0, 0.5);
        assert_eq!(a.index(), b.index());
        assert!(!world.contains(a));
        assert!(world.contains(b));
        assert_eq!(world.body(a).unwrap_err(), PhysicsError::UnknownBody(a));
    }

    #[test]
    fn rejects_bad_time_step() {
        let mut world = PhysicsWorld::new();
        assert!(world.step(0.0).is_err());
        assert!(world.step(f32::NAN).is_err());
    }
}
