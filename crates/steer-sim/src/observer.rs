//! Simulation observer trait for progress reporting and data collection.

use steer_agent::AgentStore;
use steer_core::{AgentId, Tick};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — collision counter
///
/// ```rust,ignore
/// struct CollisionCounter { count: usize }
///
/// impl SimObserver for CollisionCounter {
///     fn on_collision(&mut self, _time: f64, _a: AgentId, _b: AgentId) {
///         self.count += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each step, before any agent moves.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after all agents have moved and collisions are resolved.
    fn on_step_end(&mut self, _tick: Tick) {}

    /// Called once before the first step (time 0) and once after every step,
    /// with read-only access to the full agent state.  Output writers hang
    /// off this hook.
    fn on_record(&mut self, _time: f64, _agents: &AgentStore) {}

    /// Called once per colliding pair, after the pair has been frozen.
    fn on_collision(&mut self, _time: f64, _a: AgentId, _b: AgentId) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
