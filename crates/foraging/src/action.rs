//! Agent action decoding.

use crate::error::EnvError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Turn {
    #[default]
    None,
    Left,
    Right,
}

impl Turn {
    /// Decode the integral turn code of a raw action vector.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::TurnCode`] for anything but 0, 1 or 2.
    pub fn from_code(code: f32) -> Result<Self, EnvError> {
        // NaN and infinities have a NaN fractional part.
        if code.fract() != 0.0 {
            return Err(EnvError::TurnCode(code));
        }
        #[allow(clippy::cast_possible_truncation)]
        match code as i64 {
            0 => Ok(Self::None),
            1 => Ok(Self::Left),
            2 => Ok(Self::Right),
            _ => Err(EnvError::TurnCode(code)),
        }
    }

    #[must_use]
    pub fn code(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Left => 1.0,
            Self::Right => 2.0,
        }
    }

    /// Signed yaw direction: left turns negative, right positive.
    #[must_use]
    pub fn direction(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// One decision: a continuous forward amount and a discrete turn.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Action {
    /// Scaled by the agent's move speed. Negative values reverse.
    pub forward: f32,
    pub turn: Turn,
}

impl Action {
    /// Length of a raw action vector.
    pub const SIZE: usize = 2;

    #[must_use]
    pub const fn new(forward: f32, turn: Turn) -> Self {
        Self { forward, turn }
    }

    /// Decode `[forward, turn_code]`.
    ///
    /// # Errors
    ///
    /// Fails on a vector of the wrong length or an unknown turn code.
    pub fn from_slice(raw: &[f32]) -> Result<Self, EnvError> {
        match *raw {
            [forward, turn] => Ok(Self {
                forward,
                turn: Turn::from_code(turn)?,
            }),
            _ => Err(EnvError::ActionSize {
                expected: Self::SIZE,
                got: raw.len(),
            }),
        }
    }

    #[must_use]
    pub fn to_vec(self) -> Vec<f32> {
        vec![self.forward, self.turn.code()]
    }
}
