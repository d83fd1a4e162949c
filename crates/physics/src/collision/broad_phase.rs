//! Broad-phase collision detection using sort-and-sweep along the x axis

use crate::types::{BoundingBox, Sphere, Vec3};

/// Calculate bounding box for a sphere
#[must_use]
pub fn sphere_bounding_box(sphere: &Sphere) -> BoundingBox {
    let radius_vec = Vec3::new(sphere.radius, sphere.radius, sphere.radius);
    BoundingBox {
        min: sphere.pos - radius_vec,
        max: sphere.pos + radius_vec,
    }
}

/// Check if two bounding boxes overlap
#[must_use]
pub fn boxes_overlap(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.min.x <= b.max.x && a.max.x >= b.min.x &&
    a.min.y <= b.max.y && a.max.y >= b.min.y &&
    a.min.z <= b.max.z && a.max.z >= b.min.z
}

/// Indices of sphere pairs whose bounding boxes overlap.
///
/// Each pair is reported once as `(i, j)` with `i < j`, in ascending order,
/// so callers see a stable sequence for a given scene.
#[must_use]
pub fn potential_collision_pairs(spheres: &[Sphere]) -> Vec<(usize, usize)> {
    let boxes: Vec<BoundingBox> = spheres.iter().map(sphere_bounding_box).collect();

    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by(|&a, &b| boxes[a].min.x.total_cmp(&boxes[b].min.x));

    let mut pairs = Vec::new();
    for (k, &a) in order.iter().enumerate() {
        for &b in &order[k + 1..] {
            if boxes[b].min.x > boxes[a].max.x {
                break;
            }
            if boxes_overlap(&boxes[a], &boxes[b]) {
                pairs.push((a.min(b), a.max(b)));
            }
        }
    }
    pairs.sort_unstable();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Material, Motion};

    fn ball(x: f32) -> Sphere {
        Sphere {
            pos: Vec3::new(x, 0.0, 0.0),
            vel: Vec3::ZERO,
            yaw: 0.0,
            angular_vel: 0.0,
            radius: 1.0,
            mass: 1.0,
            motion: Motion::Dynamic,
            material: Material::default(),
        }
    }

    #[test]
    fn finds_only_close_pairs() {
        let spheres = [ball(8.0), ball(0.0), ball(1.5)];
        assert_eq!(potential_collision_pairs(&spheres), vec![(1, 2)]);
    }
}
