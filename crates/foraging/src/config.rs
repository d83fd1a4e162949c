//! # Environment Configuration
//!
//! Static construction parameters ([`EnvConfig`]) and the per-episode
//! parameter overrides ([`Params`]) that an external driver may change
//! between episodes. Both deserialize from JSON with every field optional.

use physics::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Feed radius used when [`Params::feed_radius`] is unset. With zero the
/// proximity path never fires and only direct contact delivers food.
pub const DEFAULT_FEED_RADIUS: f32 = 0.0;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AreaConfig {
    /// World-space centre of the arena.
    pub center: [f32; 3],
    /// Food entities spawned on every reset.
    pub food_count: usize,
    /// Base swim speed of food when no override is supplied.
    pub food_speed: f32,
    /// Non-trainable agents placed each reset. They only show up as
    /// observation context and collision partners.
    pub passive_agents: usize,
    /// Horizontal distance from the centre that no agent may pass.
    pub bound_radius: f32,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0, 0.0],
            food_count: 4,
            food_speed: 0.5,
            passive_agents: 0,
            bound_radius: 15.0,
        }
    }
}

impl AreaConfig {
    #[must_use]
    pub fn center(&self) -> Vec3 {
        let [x, y, z] = self.center;
        Vec3::new(x, y, z)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    /// Units per second at full forward action.
    pub move_speed: f32,
    /// Degrees per second at full turn action.
    pub turn_speed: f32,
    /// Episode step cap. Zero disables both the cap and the step penalty.
    pub max_episode_steps: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            turn_speed: 180.0,
            max_episode_steps: 5000,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
    pub agent_radius: f32,
    pub dependent_radius: f32,
    pub food_radius: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            agent_radius: 0.5,
            dependent_radius: 0.5,
            food_radius: 0.3,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EnvConfig {
    /// Seed for every random draw the environment makes.
    pub seed: u64,
    /// Fixed physics tick length in seconds.
    pub tick_seconds: f32,
    pub area: AreaConfig,
    pub agent: AgentConfig,
    pub bodies: BodyConfig,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            tick_seconds: 0.02,
            area: AreaConfig::default(),
            agent: AgentConfig::default(),
            bodies: BodyConfig::default(),
        }
    }
}

impl EnvConfig {
    /// Check every field an environment cannot run without.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("tick_seconds", self.tick_seconds)?;
        positive("bodies.agent_radius", self.bodies.agent_radius)?;
        positive("bodies.dependent_radius", self.bodies.dependent_radius)?;
        positive("bodies.food_radius", self.bodies.food_radius)?;
        non_negative("agent.move_speed", self.agent.move_speed)?;
        non_negative("agent.turn_speed", self.agent.turn_speed)?;
        non_negative("area.food_speed", self.area.food_speed)?;
        positive("area.bound_radius", self.area.bound_radius)?;
        if self.area.bound_radius <= self.bodies.agent_radius {
            return Err(ConfigError::BoundTooSmall {
                bound: self.area.bound_radius,
                agent: self.bodies.agent_radius,
            });
        }
        for value in self.area.center {
            finite("area.center", value)?;
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

/// Per-episode overrides, read at every reset.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Params {
    /// Replaces [`AreaConfig::food_speed`] when set.
    pub food_speed: Option<f32>,
    /// Distance to the dependent below which held food is delivered.
    pub feed_radius: Option<f32>,
}

impl Params {
    #[must_use]
    pub fn food_speed_or(&self, default: f32) -> f32 {
        self.food_speed.unwrap_or(default)
    }

    #[must_use]
    pub fn feed_radius(&self) -> f32 {
        self.feed_radius.unwrap_or(DEFAULT_FEED_RADIUS)
    }

    /// Reject overrides that would poison food motion or the feed check.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Negative`] for a set value that is negative or
    /// not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(speed) = self.food_speed {
            non_negative("params.food_speed", speed)?;
        }
        if let Some(radius) = self.feed_radius {
            non_negative("params.feed_radius", radius)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(EnvConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_radius() {
        let mut config = EnvConfig::default();
        config.bodies.food_radius = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "bodies.food_radius", value: 0.0 })
        );
    }

    #[test]
    fn rejects_bound_inside_agent() {
        let mut config = EnvConfig::default();
        config.area.bound_radius = 0.4;
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoundTooSmall { bound: 0.4, agent: 0.5 })
        );
    }

    #[test]
    fn rejects_negative_speed() {
        let mut config = EnvConfig::default();
        config.agent.move_speed = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Negative { .. })));
    }

    #[test]
    fn params_fall_back() {
        let params = Params::default();
        assert_eq!(params.food_speed_or(0.5), 0.5);
        assert_eq!(params.feed_radius(), DEFAULT_FEED_RADIUS);

        let params = Params { food_speed: Some(2.0), feed_radius: Some(1.5) };
        assert_eq!(params.food_speed_or(0.5), 2.0);
        assert_eq!(params.feed_radius(), 1.5);
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config: EnvConfig =
            serde_json::from_str(r#"{ "seed": 4, "bodies": { "food_radius": 0.2 } }"#).unwrap();
        assert_eq!(config.seed, 4);
        assert_eq!(config.bodies.food_radius, 0.2);
        assert_eq!(config.bodies.agent_radius, BodyConfig::default().agent_radius);
        assert_eq!(config.area, AreaConfig::default());

        let params: Params = serde_json::from_str("{}").unwrap();
        assert_eq!(params, Params::default());
    }

    #[test]
    fn params_reject_non_finite_overrides() {
        assert_eq!(Params::default().validate(), Ok(()));
        let nan_speed = Params { food_speed: Some(f32::NAN), feed_radius: None };
        assert!(matches!(
            nan_speed.validate(),
            Err(ConfigError::Negative { field: "params.food_speed", .. })
        ));
        let bad_radius = Params { food_speed: None, feed_radius: Some(-1.0) };
        assert!(bad_radius.validate().is_err());
        let inf_radius = Params { food_speed: None, feed_radius: Some(f32::INFINITY) };
        assert!(inf_radius.validate().is_err());
    }
}
