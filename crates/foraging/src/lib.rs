#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Foraging Environment
//!
//! An episodic arena for training a single agent to catch wandering food and
//! carry it, one piece at a time, to a dependent elsewhere in the arena.
//!
//! ## Key Components
//!
//! -   **Placement:** [`sampler`] draws random points on annulus sectors
//!     around the arena centre. Every spawn goes through it.
//! -   **Food:** [`Wanderer`] moves each food entity between random
//!     destinations on the far side of the arena.
//! -   **Arena:** [`Area`] owns every body and the food bookkeeping, and
//!     re-randomizes everything on reset.
//! -   **Agent:** [`ForagerAgent`] decodes actions, shapes rewards, reacts to
//!     contacts and builds observations.
//! -   **Environment:** [`ForagingEnv`] drives fixed-rate ticks and exposes
//!     the [`Env`] contract to an external learner.
//!
//! ## Usage
//!
//! ```rust
//! use foraging::{Action, Env, EnvConfig, ForagingEnv, Params, Turn};
//!
//! let mut env = ForagingEnv::new(EnvConfig::default(), Params::default()).unwrap();
//! let obs = env.reset().unwrap();
//! assert_eq!(obs.len(), env.obs_size());
//!
//! let (obs, reward, done) = env.step(&Action::new(1.0, Turn::Left)).unwrap();
//! assert_eq!(obs.len(), 8);
//! assert!(reward.is_finite() && !done);
//! ```

pub mod action;
pub mod agent;
pub mod area;
pub mod config;
pub mod contact;
pub mod env;
pub mod error;
pub mod feedback;
pub mod observation;
pub mod sampler;
pub mod wanderer;

pub use action::{Action, Turn};
pub use agent::{EpisodeEnd, ForagerAgent, DECISION_INTERVAL};
pub use area::Area;
pub use config::{AgentConfig, AreaConfig, BodyConfig, EnvConfig, Params};
pub use contact::ContactKind;
pub use env::{Env, ForagingEnv};
pub use error::{ConfigError, EnvError};
pub use feedback::{Feedback, FeedbackKind, FeedbackLog};
pub use sampler::AnnulusSector;
pub use wanderer::Wanderer;
