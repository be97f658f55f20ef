//! `steer-behavior` — the steering-policy library.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`target`]   | `TargetSnapshot` — per-step frozen view of a target       |
//! | [`policies`] | One pure function per steering behavior                   |
//! | [`model`]    | `compute_steering` — total dispatch over `Behavior`       |
//!
//! Policies are pure: state in, [`SteeringCommand`] out.  The one exception
//! is Wander, which persists its heading drift on the agent and draws noise
//! from the agent's RNG.
//!
//! [`SteeringCommand`]: steer_core::SteeringCommand

pub mod error;
pub mod model;
pub mod policies;
pub mod target;


pub use error::{BehaviorError, BehaviorResult};
pub use model::compute_steering;
pub use target::TargetSnapshot;
