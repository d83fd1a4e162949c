#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Arena Physics
//!
//! A small rigid body layer for ground-plane arenas.
//!
//! Every body is a sphere with a yaw heading. The [`PhysicsWorld`] stores them
//! in a generational arena, so handles to despawned bodies are detected
//! rather than silently aliasing a newer body. Each call to
//! [`PhysicsWorld::step`] integrates dynamic bodies, pushes overlapping bodies
//! apart and returns a [`CollisionEvent`] for every pair that began touching
//! during that step.
//!
//! ## Key Components
//!
//! -   **Bodies:** [`Sphere`] with a [`Motion`] kind. Dynamic bodies are
//!     integrated and respond to contacts; kinematic and static bodies act as
//!     infinite mass and move only through explicit pose updates.
//! -   **World:** [`PhysicsWorld`] in the [`world`] module, plus the builder
//!     helpers in [`builder`].
//! -   **Headings:** yaw/forward conversions in [`transform`].
//!
//! ## Usage
//!
//! ```rust
//! use physics::{PhysicsWorld, Vec3};
//!
//! let mut world = PhysicsWorld::new();
//! let a = world.add_dynamic_sphere(Vec3::new(0.0, 0.5, 0.0), 0.0, 0.5);
//! let b = world.add_static_sphere(Vec3::new(0.8, 0.5, 0.0), 0.0, 0.5);
//!
//! let events = world.step(0.02).unwrap();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].other(a), Some(b));
//! ```

pub mod builder;
pub mod collision;
pub mod error;
pub mod integrator;
pub mod transform;
pub mod types;
pub mod world;

pub use collision::Contact;
pub use error::PhysicsError;
pub use types::{BoundingBox, Material, Motion, PhysParams, Sphere, Vec3};
pub use world::{BodyHandle, CollisionEvent, PhysicsWorld};
