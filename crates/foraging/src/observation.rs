//! Observation vector layout.
//!
//! `[fed, dist_dependent, dir_dependent(3), forward(3)]` followed by
//! `[dist, dir(3)]` for every other agent in arena order.

use physics::Vec3;

pub const BASE_SIZE: usize = 8;
pub const PER_OTHER_AGENT: usize = 4;

/// Observation length for an arena holding `agent_count` agents in total.
#[must_use]
pub fn observation_size(agent_count: usize) -> usize {
    BASE_SIZE + PER_OTHER_AGENT * agent_count.saturating_sub(1)
}

/// Assemble an observation from world-space positions.
#[must_use]
pub fn build(
    is_fed: bool,
    position: Vec3,
    forward: Vec3,
    dependent: Vec3,
    others: impl IntoIterator<Item = Vec3>,
) -> Vec<f32> {
    let mut obs = Vec::with_capacity(BASE_SIZE);
    obs.push(if is_fed { 1.0 } else { 0.0 });
    obs.push(position.distance(dependent));
    obs.extend_from_slice(bytemuck::cast_slice(&[(dependent - position).normalize(), forward]));
    for other in others {
        obs.push(position.distance(other));
        obs.extend_from_slice(bytemuck::cast_slice(&[(other - position).normalize()]));
    }
    obs
}
