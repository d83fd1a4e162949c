use physics::PhysicsError;
use thiserror::Error;

/// Invalid construction parameters. Detected once, before the first tick.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("area.bound_radius {bound} leaves no room for an agent of radius {agent}")]
    BoundTooSmall { bound: f32, agent: f32 },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Physics(#[from] PhysicsError),
    #[error("action vector must have {expected} components, got {got}")]
    ActionSize { expected: usize, got: usize },
    #[error("turn code {0} is not one of 0 (none), 1 (left), 2 (right)")]
    TurnCode(f32),
    #[error("episode has ended; reset before stepping again")]
    EpisodeOver,
}
