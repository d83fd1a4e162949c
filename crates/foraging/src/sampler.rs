//! Random placement on annulus sectors.
//!
//! Every spawn and every wander destination is drawn here. Angles are degrees
//! of yaw around the up axis measured from `+Z`, so an angle of 90 points
//! along `+X`.

use physics::transform::rotate_about_up;
use physics::Vec3;

/// Region between two radii and two yaw angles around a centre.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnnulusSector {
    pub min_angle: f32,
    pub max_angle: f32,
    pub min_radius: f32,
    pub max_radius: f32,
}

impl AnnulusSector {
    #[must_use]
    pub const fn new(min_angle: f32, max_angle: f32, min_radius: f32, max_radius: f32) -> Self {
        Self { min_angle, max_angle, min_radius, max_radius }
    }
}

/// Anywhere within 9 units.
pub const AGENT_SECTOR: AnnulusSector = AnnulusSector::new(0.0, 360.0, 0.0, 9.0);
/// In front of the centre, 4 to 9 units out.
pub const DEPENDENT_SECTOR: AnnulusSector = AnnulusSector::new(-45.0, 45.0, 4.0, 9.0);
/// The far side of the arena. Used for food spawns and wander destinations.
pub const FOOD_SECTOR: AnnulusSector = AnnulusSector::new(100.0, 260.0, 2.0, 13.0);

/// Uniform draw from `[lo, hi)`. An empty or inverted range yields `lo`.
pub fn uniform(rng: &mut fastrand::Rng, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        lo + rng.f32() * (hi - lo)
    } else {
        lo
    }
}

/// Random point on `sector` around `center`, at the height of `center`.
pub fn sample(rng: &mut fastrand::Rng, center: Vec3, sector: &AnnulusSector) -> Vec3 {
    let radius = uniform(rng, sector.min_radius, sector.max_radius);
    let angle = uniform(rng, sector.min_angle, sector.max_angle);
    center + rotate_about_up(Vec3::FORWARD, angle) * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_collapses_to_lower_bound() {
        let mut rng = fastrand::Rng::with_seed(3);
        assert_eq!(uniform(&mut rng, 5.0, 1.0), 5.0);
        assert_eq!(uniform(&mut rng, 2.0, 2.0), 2.0);
    }

    #[test]
    fn fixed_angle_and_radius_is_deterministic() {
        let mut rng = fastrand::Rng::with_seed(3);
        let p = sample(&mut rng, Vec3::ZERO, &AnnulusSector::new(90.0, 90.0, 2.0, 2.0));
        assert!((p.x - 2.0).abs() < 1e-5);
        assert!(p.z.abs() < 1e-5);
    }
}
