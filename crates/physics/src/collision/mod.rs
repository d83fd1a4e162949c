//! # Collision Detection and Response
//!
//! Sphere–sphere contacts found through a sort-and-sweep broad phase and
//! resolved with impulses. Contact-begin bookkeeping lives in
//! [`crate::world`].

mod broad_phase;
mod sphere_sphere;

pub use broad_phase::*;
pub use sphere_sphere::*;

use crate::types::{Material, Vec3};

/// Contact information for collision response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Contact point in world space
    pub point: Vec3,
    /// Contact normal (from body A to body B)
    pub normal: Vec3,
    /// Penetration depth
    pub depth: f32,
    /// Combined restitution coefficient
    pub restitution: f32,
}

impl Contact {
    /// Create a new contact with material properties
    #[must_use]
    pub fn new(point: Vec3, normal: Vec3, depth: f32, mat_a: &Material, mat_b: &Material) -> Self {
        Self {
            point,
            normal,
            depth,
            restitution: combine_restitution(mat_a.restitution, mat_b.restitution),
        }
    }
}

/// Combine restitution coefficients using geometric mean
fn combine_restitution(r1: f32, r2: f32) -> f32 {
    (r1 * r2).sqrt()
}
