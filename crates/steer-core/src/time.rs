//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter; the
//! continuous simulation time is derived:
//!
//!   time = tick * delta_time
//!
//! Using an integer tick as the canonical unit means step counting is exact —
//! no `while time < stop_time` float-accumulation drift — and the trajectory
//! log gets one unambiguous record set per tick, including tick 0.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Integrator ────────────────────────────────────────────────────────────────

/// The numeric integration scheme applied by the agent update rule.
///
/// Both schemes move position/orientation with the *pre-step* velocity and
/// rotation; they differ only in whether the incoming acceleration also
/// contributes a second-order term to this step's displacement.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Integrator {
    /// First-order: `position += velocity · Δt`.
    #[default]
    NewtonEuler1,
    /// Second-order: `position += velocity · Δt + ½ · linear · Δt²`.
    ConstantAcceleration,
}

impl Integrator {
    pub fn as_str(self) -> &'static str {
        match self {
            Integrator::NewtonEuler1 => "newton-euler-1",
            Integrator::ConstantAcceleration => "constant-acceleration",
        }
    }
}

impl fmt::Display for Integrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between the tick counter and continuous simulation time.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Duration of one step in simulation time units.
    pub delta_time: f64,
    /// The current tick — advanced by `SimClock::advance()` each step.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(delta_time: f64) -> Self {
        Self {
            delta_time,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Continuous simulation time at the current tick.
    #[inline]
    pub fn time(&self) -> f64 {
        self.current_tick.0 as f64 * self.delta_time
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t = {:.3})", self.current_tick, self.time())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration, supplied by the scenario.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Duration of one time step.  Must be > 0.
    pub delta_time: f64,

    /// Simulation time of the last step.  The loop runs
    /// `ceil(stop_time / delta_time)` steps after recording the initial state.
    pub stop_time: f64,

    /// Which integration scheme the agent update applies.
    pub integrator: Integrator,

    /// Whether the pairwise collision check runs after each step.
    pub check_collisions: bool,

    /// Speeds below this threshold are snapped to zero after integration to
    /// suppress stop jitter.
    pub stop_speed: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// Default stop-jitter threshold, in distance-units per time-unit.
    pub const DEFAULT_STOP_SPEED: f64 = 0.02;

    /// Number of steps the run executes after the initial record.
    #[inline]
    pub fn total_steps(&self) -> u64 {
        (self.stop_time / self.delta_time).ceil() as u64
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.delta_time)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            delta_time: 0.5,
            stop_time: 50.0,
            integrator: Integrator::NewtonEuler1,
            check_collisions: false,
            stop_speed: Self::DEFAULT_STOP_SPEED,
            seed: 0,
        }
    }
}
