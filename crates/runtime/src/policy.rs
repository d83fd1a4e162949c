//! Fallback policy used when no learned policy is attached.
//!
//! Carrying food, it steers toward the dependent. Otherwise it cruises forward
//! and now and then turns at random, which is enough to stumble into food.

use foraging::{Action, Turn};

// Offsets into the observation vector.
const FED: usize = 0;
const DEPENDENT_DIR: usize = 2;
const FORWARD: usize = 5;

/// Chance that a hungry decision turns instead of going straight.
const TURN_CHANCE: f32 = 0.3;
/// Headings closer than this (as the sine of the angle) count as on target.
const AIM_TOLERANCE: f32 = 0.05;

pub struct HeuristicPolicy {
    rng: fastrand::Rng,
}

impl HeuristicPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn act(&mut self, obs: &[f32]) -> Action {
        if obs.get(FED).is_some_and(|&fed| fed > 0.5) {
            Action::new(1.0, steer(obs))
        } else {
            let turn = if self.rng.f32() < TURN_CHANCE {
                if self.rng.bool() {
                    Turn::Left
                } else {
                    Turn::Right
                }
            } else {
                Turn::None
            };
            Action::new(1.0, turn)
        }
    }
}

/// Turn that brings the forward vector round toward the dependent.
fn steer(obs: &[f32]) -> Turn {
    let (Some(dir), Some(fwd)) = (
        obs.get(DEPENDENT_DIR..DEPENDENT_DIR + 3),
        obs.get(FORWARD..FORWARD + 3),
    ) else {
        return Turn::None;
    };
    // Up component of fwd x dir. Positive yaw turns +Z toward +X.
    let side = fwd[2] * dir[0] - fwd[0] * dir[2];
    let ahead = fwd[0] * dir[0] + fwd[2] * dir[2];
    if side > AIM_TOLERANCE {
        Turn::Right
    } else if side < -AIM_TOLERANCE || ahead < 0.0 {
        Turn::Left
    } else {
        Turn::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(fed: bool, dir: [f32; 3], fwd: [f32; 3]) -> Vec<f32> {
        let mut v = vec![if fed { 1.0 } else { 0.0 }, 5.0];
        v.extend_from_slice(&dir);
        v.extend_from_slice(&fwd);
        v
    }

    #[test]
    fn fed_agent_turns_toward_dependent() {
        let mut policy = HeuristicPolicy::new(1);
        let right = policy.act(&obs(true, [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]));
        assert_eq!(right, Action::new(1.0, Turn::Right));

        let left = policy.act(&obs(true, [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]));
        assert_eq!(left, Action::new(1.0, Turn::Left));

        let straight = policy.act(&obs(true, [0.0, 0.0, 1.0], [0.0, 0.0, 1.0]));
        assert_eq!(straight, Action::new(1.0, Turn::None));
    }

    #[test]
    fn dependent_straight_behind_still_turns() {
        let mut policy = HeuristicPolicy::new(1);
        let action = policy.act(&obs(true, [0.0, 0.0, -1.0], [0.0, 0.0, 1.0]));
        assert_ne!(action.turn, Turn::None);
    }

    #[test]
    fn hungry_agent_keeps_moving() {
        let mut policy = HeuristicPolicy::new(3);
        let actions: Vec<_> = (0..200)
            .map(|_| policy.act(&obs(false, [1.0, 0.0, 0.0], [0.0, 0.0, 1.0])))
            .collect();
        assert!(actions.iter().all(|a| a.forward == 1.0));
        assert!(actions.iter().any(|a| a.turn == Turn::None));
        assert!(actions.iter().any(|a| a.turn != Turn::None));
    }
}
