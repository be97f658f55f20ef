//! The per-agent kinematic record and its behavior parameters.
//!
//! The original formulation kept every tunable of every behavior in one big
//! loosely-typed record, with zeros standing in for "unused".  Here the
//! kinematic core is a fixed struct and the behavior tunables are a tagged
//! union keyed by the behavior, so a Seek agent simply has no arrival radius
//! to get wrong.

use steer_core::{AgentId, Behavior, PathId, TargetRef, Vec2};

// ── Limits ────────────────────────────────────────────────────────────────────

/// Per-agent kinematic limits, enforced by the update rule every step.
/// All non-negative.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Maximum speed (velocity magnitude).
    pub max_speed: f64,
    /// Maximum linear acceleration magnitude.
    pub max_linear: f64,
    /// Maximum rotation rate magnitude.
    pub max_rotation: f64,
    /// Maximum angular acceleration magnitude.
    pub max_angular: f64,
}

// ── Behavior parameters ───────────────────────────────────────────────────────

/// The radius / slowing-zone / time-constant trio shared by the behaviors
/// that brake toward a goal (Arrive on position, Align on orientation,
/// Wander's turn control).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlowingControl {
    /// Inside this radius the goal counts as reached.
    pub satisfaction_radius: f64,
    /// Inside this radius the desired rate scales down linearly.
    pub slow_radius: f64,
    /// Time constant dividing (desired − current) into an acceleration.
    pub time_to_target: f64,
}

/// Behavior-specific tunables, keyed by the assigned [`Behavior`].
///
/// The variant must agree with the agent's behavior tag; `SimBuilder`
/// validates the pairing at scenario setup.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorParams {
    /// Continue, Stop, Seek, and Flee need no tunables.
    #[default]
    None,
    Arrive(SlowingControl),
    Align(SlowingControl),
    Pursue {
        /// Upper bound on the lookahead time when extrapolating the target.
        max_prediction: f64,
    },
    Wander {
        /// Distance of the wander circle's center ahead of the agent.
        offset: f64,
        /// Radius of the wander circle.
        radius: f64,
        /// Maximum heading drift per step (radians, scaled by noise).
        rate: f64,
        /// Turn control used to align with the drifted heading.
        turn: SlowingControl,
    },
    FollowPath {
        /// The path to follow.
        path: PathId,
        /// Lookahead along the path, in normalized parameter units.
        offset: f64,
    },
}

impl BehaviorParams {
    /// `true` if this variant is the one `behavior` requires.
    pub fn matches(&self, behavior: Behavior) -> bool {
        matches!(
            (behavior, self),
            (
                Behavior::Continue | Behavior::Stop | Behavior::Seek | Behavior::Flee,
                BehaviorParams::None
            ) | (Behavior::Arrive, BehaviorParams::Arrive(_))
                | (Behavior::Align, BehaviorParams::Align(_))
                | (Behavior::Pursue, BehaviorParams::Pursue { .. })
                | (Behavior::Wander, BehaviorParams::Wander { .. })
                | (Behavior::FollowPath, BehaviorParams::FollowPath { .. })
        )
    }
}

// ── AgentState ────────────────────────────────────────────────────────────────

/// The full state of one simulated character.
///
/// Mutated in place once per time step for the run's duration; agents are
/// never created or destroyed mid-run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub id: AgentId,
    pub behavior: Behavior,

    // ── Kinematic state ───────────────────────────────────────────────────
    pub position: Vec2,
    pub velocity: Vec2,
    /// Heading in radians, kept in `[0, 2π)` by the update rule.
    pub orientation: f64,
    /// Rotation rate (radians per time unit).
    pub rotation: f64,
    /// Most recently applied linear acceleration.
    pub linear: Vec2,
    /// Most recently applied angular acceleration.
    pub angular: f64,

    pub limits: Limits,
    pub params: BehaviorParams,
    pub target: TargetRef,

    // ── Collision state ───────────────────────────────────────────────────
    /// Two agents collide when separation ≤ the sum of their radii.
    pub collision_radius: f64,
    /// Sticky: once set it stays set for the rest of the run.
    pub collided: bool,

    /// Wander's persisted heading drift.  Meaningful only for
    /// `Behavior::Wander`; zero otherwise.
    pub wander_orientation: f64,
}

impl AgentState {
    /// Start building an agent.  All fields default to zero / `None`; the
    /// behavior defaults to `Stop`.
    pub fn builder(id: AgentId) -> AgentBuilder {
        AgentBuilder::new(id)
    }

    /// Current speed (velocity magnitude).
    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}

// ── AgentBuilder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`AgentState`].
///
/// ```rust
/// use steer_agent::AgentState;
/// use steer_core::{AgentId, Behavior, TargetRef, Vec2};
///
/// let agent = AgentState::builder(AgentId(0))
///     .behavior(Behavior::Flee)
///     .position(Vec2::new(-30.0, -50.0))
///     .velocity(Vec2::new(2.0, 7.0))
///     .max_speed(8.0)
///     .max_linear(1.5)
///     .target(TargetRef::Point(Vec2::ZERO))
///     .build();
/// assert_eq!(agent.behavior, Behavior::Flee);
/// ```
pub struct AgentBuilder {
    agent: AgentState,
}

impl AgentBuilder {
    pub fn new(id: AgentId) -> Self {
        Self {
            agent: AgentState {
                id,
                behavior: Behavior::Stop,
                position: Vec2::ZERO,
                velocity: Vec2::ZERO,
                orientation: 0.0,
                rotation: 0.0,
                linear: Vec2::ZERO,
                angular: 0.0,
                limits: Limits::default(),
                params: BehaviorParams::None,
                target: TargetRef::None,
                collision_radius: 0.0,
                collided: false,
                wander_orientation: 0.0,
            },
        }
    }

    pub fn behavior(mut self, behavior: Behavior) -> Self {
        self.agent.behavior = behavior;
        self
    }

    pub fn position(mut self, position: Vec2) -> Self {
        self.agent.position = position;
        self
    }

    pub fn velocity(mut self, velocity: Vec2) -> Self {
        self.agent.velocity = velocity;
        self
    }

    pub fn orientation(mut self, orientation: f64) -> Self {
        self.agent.orientation = orientation;
        self
    }

    pub fn rotation(mut self, rotation: f64) -> Self {
        self.agent.rotation = rotation;
        self
    }

    pub fn max_speed(mut self, max_speed: f64) -> Self {
        self.agent.limits.max_speed = max_speed;
        self
    }

    pub fn max_linear(mut self, max_linear: f64) -> Self {
        self.agent.limits.max_linear = max_linear;
        self
    }

    pub fn max_rotation(mut self, max_rotation: f64) -> Self {
        self.agent.limits.max_rotation = max_rotation;
        self
    }

    pub fn max_angular(mut self, max_angular: f64) -> Self {
        self.agent.limits.max_angular = max_angular;
        self
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.agent.limits = limits;
        self
    }

    pub fn params(mut self, params: BehaviorParams) -> Self {
        self.agent.params = params;
        self
    }

    pub fn target(mut self, target: TargetRef) -> Self {
        self.agent.target = target;
        self
    }

    pub fn collision_radius(mut self, radius: f64) -> Self {
        self.agent.collision_radius = radius;
        self
    }

    pub fn build(self) -> AgentState {
        self.agent
    }
}
