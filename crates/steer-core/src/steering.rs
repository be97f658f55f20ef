//! The shared steering vocabulary: behavior tags, target references, and the
//! steering command produced by every policy.
//!
//! These live in `steer-core` (rather than `steer-behavior`) because both the
//! agent update rule and the policy library speak them — the same reason the
//! teacher keeps cross-cutting enums at the bottom of the crate graph.

use std::fmt;
use std::str::FromStr;

use crate::error::SteerError;
use crate::ids::AgentId;
use crate::math::Vec2;

// ── Behavior ─────────────────────────────────────────────────────────────────

/// The steering behavior assigned to an agent.
///
/// Fixed for the agent's lifetime in normal use (the collision resolver is
/// the one place that reassigns it, forcing `Stop`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behavior {
    /// Re-emit the last linear/angular command unchanged.
    Continue,
    /// Brake to a standstill (default state).
    #[default]
    Stop,
    /// Match the target's orientation.
    Align,
    /// Accelerate straight toward the target.
    Seek,
    /// Accelerate straight away from the target.
    Flee,
    /// Seek the target, braking inside the slowing zone.
    Arrive,
    /// Seek the target's predicted future position.
    Pursue,
    /// Random walk: drift the heading, move at full acceleration.
    Wander,
    /// Follow a polyline path with a lookahead offset.
    FollowPath,
}

impl Behavior {
    /// Lowercase tag used in the trajectory log and scenario files.
    pub fn as_str(self) -> &'static str {
        match self {
            Behavior::Continue => "continue",
            Behavior::Stop => "stop",
            Behavior::Align => "align",
            Behavior::Seek => "seek",
            Behavior::Flee => "flee",
            Behavior::Arrive => "arrive",
            Behavior::Pursue => "pursue",
            Behavior::Wander => "wander",
            Behavior::FollowPath => "follow-path",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Behavior {
    type Err = SteerError;

    /// Parse a behavior tag.  An unrecognized tag is a configuration error —
    /// scenario loading must fail fast, never fall back to a silent no-op.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "continue" => Ok(Behavior::Continue),
            "stop" => Ok(Behavior::Stop),
            "align" => Ok(Behavior::Align),
            "seek" => Ok(Behavior::Seek),
            "flee" => Ok(Behavior::Flee),
            "arrive" => Ok(Behavior::Arrive),
            "pursue" => Ok(Behavior::Pursue),
            "wander" => Ok(Behavior::Wander),
            "follow-path" => Ok(Behavior::FollowPath),
            other => Err(SteerError::Parse(format!("unknown behavior tag {other:?}"))),
        }
    }
}

// ── TargetRef ─────────────────────────────────────────────────────────────────

/// What an agent steers relative to.  An agent never owns its target: agent
/// targets are held by ID and resolved to a snapshot at the start of each
/// step, so mid-step updates of the target never leak into this step.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetRef {
    /// No target (Continue, Stop, Wander, FollowPath).
    #[default]
    None,
    /// Another agent, by ID.
    Agent(AgentId),
    /// A fixed point in space (stationary target).
    Point(Vec2),
}

// ── SteeringCommand ───────────────────────────────────────────────────────────

/// The output of a steering policy: a desired linear acceleration and a
/// desired angular acceleration.
///
/// Transient — produced by a policy, consumed immediately by the agent
/// update, never stored beyond the agent's "last command" fields.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringCommand {
    /// Desired linear acceleration.
    pub linear: Vec2,
    /// Desired angular acceleration.
    pub angular: f64,
}

impl SteeringCommand {
    pub const ZERO: SteeringCommand = SteeringCommand {
        linear: Vec2::ZERO,
        angular: 0.0,
    };
}
