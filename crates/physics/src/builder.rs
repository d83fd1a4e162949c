//! # World Builder
//!
//! Convenience constructors for adding spheres of each motion kind.

use std::f32::consts::PI;

use crate::types::{Material, Motion, Sphere, Vec3};
use crate::world::{BodyHandle, PhysicsWorld};

/// Builder methods for adding rigid bodies to the world
impl PhysicsWorld {
    /// Add a sphere that is integrated and pushed by contacts
    pub fn add_dynamic_sphere(&mut self, pos: Vec3, yaw: f32, radius: f32) -> BodyHandle {
        self.add_sphere_with_material(pos, yaw, radius, Motion::Dynamic, Material::default())
    }

    /// Add a sphere that only moves through explicit pose updates
    pub fn add_kinematic_sphere(&mut self, pos: Vec3, yaw: f32, radius: f32) -> BodyHandle {
        self.add_sphere_with_material(pos, yaw, radius, Motion::Kinematic, Material::default())
    }

    /// Add an immovable sphere
    pub fn add_static_sphere(&mut self, pos: Vec3, yaw: f32, radius: f32) -> BodyHandle {
        self.add_sphere_with_material(pos, yaw, radius, Motion::Static, Material::default())
    }

    /// Add a sphere with custom material properties
    pub fn add_sphere_with_material(
        &mut self,
        pos: Vec3,
        yaw: f32,
        radius: f32,
        motion: Motion,
        material: Material,
    ) -> BodyHandle {
        let sphere = Sphere {
            pos,
            vel: Vec3::ZERO,
            yaw: crate::transform::wrap_degrees(yaw),
            angular_vel: 0.0,
            radius,
            mass: calculate_sphere_mass(radius, material.density),
            motion,
            material,
        };
        self.spawn(sphere)
    }
}

/// Calculate mass of a sphere given radius and density
#[must_use]
pub fn calculate_sphere_mass(radius: f32, density: f32) -> f32 {
    4.0 / 3.0 * PI * radius.powi(3) * density
}
