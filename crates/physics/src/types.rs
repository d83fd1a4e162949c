//! # Body and Vector Types
//!
//! Plain data types shared by every stage of the simulation. Bodies are
//! spheres; orientation is reduced to a yaw angle around the world up axis,
//! which is all a ground-plane arena needs.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// World up axis. Yaw rotates around it.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// Heading of a body with zero yaw.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction, or zero for a (near) zero vector.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 1e-6 {
            self / len
        } else {
            Self::ZERO
        }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl From<Vec3> for glam::Vec3 {
    fn from(v: Vec3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec3> for Vec3 {
    fn from(v: glam::Vec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// How a body takes part in integration and contact response.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Integrated every step and pushed around by contacts.
    Dynamic,
    /// Moved only by explicit calls; infinite mass in contacts.
    Kinematic,
    /// Never moves on its own; infinite mass in contacts.
    Static,
}

/// Surface properties
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub restitution: f32,
    pub density: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            restitution: 0.2,
            density: 1.0,
        }
    }
}

/// A spherical rigid body.
#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Heading in degrees around [`Vec3::UP`].
    pub yaw: f32,
    /// Yaw rate in degrees per second.
    pub angular_vel: f32,
    pub radius: f32,
    pub mass: f32,
    pub motion: Motion,
    pub material: Material,
}

impl Sphere {
    #[must_use]
    pub fn inverse_mass(&self) -> f32 {
        match self.motion {
            Motion::Dynamic if self.mass > 0.0 => 1.0 / self.mass,
            _ => 0.0,
        }
    }

    /// Unit heading derived from the current yaw.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        crate::transform::forward_from_yaw(self.yaw)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

/// Global simulation parameters
#[derive(Copy, Clone, Debug)]
pub struct PhysParams {
    pub gravity: Vec3,
    /// Per-step velocity retention factor.
    pub damping: f32,
}

impl Default for PhysParams {
    fn default() -> Self {
        // Ground-plane arena: bodies slide, nothing falls.
        Self {
            gravity: Vec3::ZERO,
            damping: 0.999,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }

    #[test]
    fn static_bodies_have_no_inverse_mass() {
        let s = Sphere {
            pos: Vec3::ZERO,
            vel: Vec3::ZERO,
            yaw: 0.0,
            angular_vel: 0.0,
            radius: 1.0,
            mass: 2.0,
            motion: Motion::Static,
            material: Material::default(),
        };
        assert_eq!(s.inverse_mass(), 0.0);
        let d = Sphere { motion: Motion::Dynamic, ..s };
        assert!((d.inverse_mass() - 0.5).abs() < 1e-6);
    }
}
