use thiserror::Error;

use crate::world::BodyHandle;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    /// The handle was never issued by this world or its body has been despawned.
    #[error("unknown or despawned body {0:?}")]
    UnknownBody(BodyHandle),
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f32),
}
