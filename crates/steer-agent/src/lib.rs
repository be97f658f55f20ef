//! `steer-agent` — per-agent kinematic state and the update rule.
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`state`]  | `AgentState`, `Limits`, `BehaviorParams`, `AgentBuilder`    |
//! | [`store`]  | `AgentStore` (agent records) and `AgentRngs` (per-agent RNG)|
//! | [`update`] | `apply_steering` — integration, clamping, jitter suppression|

pub mod state;
pub mod store;
pub mod update;


pub use state::{AgentBuilder, AgentState, BehaviorParams, Limits, SlowingControl};
pub use store::{AgentRngs, AgentStore};
pub use update::apply_steering;
