//! Sphere-sphere collision detection and response

use crate::types::{Sphere, Vec3};
use super::Contact;

const POSITION_CORRECTION_PERCENT: f32 = 0.8;
const POSITION_CORRECTION_SLOP: f32 = 0.01;

/// Detect collision between two spheres
#[must_use]
pub fn detect_sphere_sphere_collision(
    sphere_a: &Sphere,
    sphere_b: &Sphere,
) -> Option<Contact> {
    let delta = sphere_b.pos - sphere_a.pos;
    let distance_squared = delta.dot(delta);
    let min_distance = sphere_a.radius + sphere_b.radius;

    if distance_squared < min_distance * min_distance {
        let distance = distance_squared.sqrt();

        // Handle case where spheres are at same position
        let normal = if distance > 0.0001 {
            delta / distance
        } else {
            Vec3::UP
        };

        let depth = min_distance - distance;
        let contact_point = sphere_a.pos + normal * sphere_a.radius;

        Some(Contact::new(
            contact_point,
            normal,
            depth,
            &sphere_a.material,
            &sphere_b.material,
        ))
    } else {
        None
    }
}

/// Apply impulse-based collision response between two spheres.
///
/// Bodies with zero inverse mass are left untouched; a pair where both are
/// immovable is not resolved at all.
pub fn resolve_sphere_sphere_collision(
    sphere_a: &mut Sphere,
    sphere_b: &mut Sphere,
    contact: &Contact,
) {
    let inv_a = sphere_a.inverse_mass();
    let inv_b = sphere_b.inverse_mass();
    let inv_mass_sum = inv_a + inv_b;
    if inv_mass_sum <= 0.0 {
        return;
    }

    // Position correction to resolve penetration
    let correction_magnitude = (contact.depth - POSITION_CORRECTION_SLOP).max(0.0)
        / inv_mass_sum * POSITION_CORRECTION_PERCENT;
    let correction = contact.normal * correction_magnitude;
    sphere_a.pos -= correction * inv_a;
    sphere_b.pos += correction * inv_b;

    let relative_velocity = sphere_b.vel - sphere_a.vel;
    let velocity_along_normal = relative_velocity.dot(contact.normal);

    // Don't apply an impulse if velocities are separating
    if velocity_along_normal > 0.0 {
        return;
    }

    let j = -(1.0 + contact.restitution) * velocity_along_normal / inv_mass_sum;
    let impulse = contact.normal * j;
    sphere_a.vel -= impulse * inv_a;
    sphere_b.vel += impulse * inv_b;
}
