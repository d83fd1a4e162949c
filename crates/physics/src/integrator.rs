//! # Physics Integration
//!
//! Explicit Euler integration of linear and angular velocity. Only dynamic
//! bodies are integrated; kinematic and static bodies move solely through
//! explicit pose updates.

use crate::types::{Motion, PhysParams, Sphere};

/// Integrate one sphere over `dt` seconds.
pub fn integrate_sphere(sphere: &mut Sphere, params: &PhysParams, dt: f32) {
    if sphere.motion != Motion::Dynamic {
        return;
    }

    sphere.vel += params.gravity * dt;
    sphere.pos += sphere.vel * dt;
    sphere.yaw = crate::transform::wrap_degrees(sphere.yaw + sphere.angular_vel * dt);

    sphere.vel *= params.damping;
    sphere.angular_vel *= params.damping;
}
