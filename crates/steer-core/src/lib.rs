//! `steer-core` — foundational types for the `rust_steer` steering engine.
//!
//! This crate is a dependency of every other `steer-*` crate.  It intentionally
//! has no `steer-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `AgentId`, `PathId`                                    |
//! | [`math`]     | `Vec2`, angle wrapping, projections, closest approach  |
//! | [`time`]     | `Tick`, `SimClock`, `SimConfig`, `Integrator`          |
//! | [`steering`] | `Behavior` tag, `TargetRef`, `SteeringCommand`         |
//! | [`rng`]      | `AgentRng` (per-agent deterministic RNG)               |
//! | [`error`]    | `SteerError`, `SteerResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public POD types.     |

pub mod error;
pub mod ids;
pub mod math;
pub mod rng;
pub mod steering;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SteerError, SteerResult};
pub use ids::{AgentId, PathId};
pub use math::{
    ClosestApproach, Vec2, closest_approach, closest_point_on_line, closest_point_on_segment,
    wrap_angle,
};
pub use rng::AgentRng;
pub use steering::{Behavior, SteeringCommand, TargetRef};
pub use time::{Integrator, SimClock, SimConfig, Tick};
