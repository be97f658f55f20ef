//! The `Sim` struct and its step loop.

use steer_agent::{apply_steering, AgentRngs, AgentStore};
use steer_behavior::{compute_steering, TargetSnapshot};
use steer_core::{AgentId, Behavior, SimClock, SimConfig, Vec2};
use steer_path::PathSet;

use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// Drives the per-step sequence:
///
/// 1. resolve every agent's target to a [`TargetSnapshot`] (frozen
///    start-of-step view, so results never depend on agent order);
/// 2. for each agent in ID order: dispatch its steering policy, apply the
///    command through the kinematic update;
/// 3. if `config.check_collisions`, resolve pairwise collisions;
/// 4. notify the observer and record all agents.
///
/// Create via [`SimBuilder`][crate::SimBuilder], which validates the
/// scenario so the loop itself never fails on a well-formed `Sim`.
#[derive(Debug)]
pub struct Sim {
    /// Global configuration (step size, duration, integrator, seed, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps to continuous time.
    pub clock: SimClock,

    /// All agent records, indexed by `AgentId`.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Paths available to path-following agents.
    pub paths: PathSet,
}

impl Sim {
    /// Run the simulation from the current tick through `config.stop_time`.
    ///
    /// Records the initial state at time 0 before the first step, then one
    /// record per step.  Use [`NoopObserver`][crate::NoopObserver] if you
    /// don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_record(self.clock.time(), &self.agents);

        for _ in 0..self.config.total_steps() {
            self.clock.advance();
            let now = self.clock.current_tick;

            observer.on_step_start(now);
            self.step(observer)?;
            observer.on_step_end(now);
            observer.on_record(self.clock.time(), &self.agents);
        }

        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Advance the simulation by exactly one step.
    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        // Freeze every target before anyone moves.
        let snapshots = TargetSnapshot::resolve_all(&self.agents)?;

        // Explicit field borrows so the borrow checker sees disjoint access.
        let agents = &mut self.agents;
        let rngs = &mut self.rngs;
        let paths = &self.paths;

        for (index, snapshot) in snapshots.iter().enumerate() {
            let id = AgentId(index as u32);
            let rng = rngs.get_mut(id);
            let agent = agents.get_mut(id)?;

            let command = compute_steering(agent, snapshot.as_ref(), paths, rng)?;
            apply_steering(
                agent,
                command,
                self.config.delta_time,
                self.config.integrator,
                self.config.stop_speed,
            );
        }

        if self.config.check_collisions {
            self.resolve_collisions(observer);
        }

        Ok(())
    }

    /// Freeze every newly colliding pair at its midpoint.
    ///
    /// Scans all unordered pairs in ascending `(i, j)` order.  Pairs whose
    /// members are both already collided are skipped; everything else is
    /// tested by separation against the sum of the pair's radii.  A hit
    /// freezes both members: midpoint position, zero rates, behavior forced
    /// to `Stop`, sticky `collided` flag.
    fn resolve_collisions<O: SimObserver>(&mut self, observer: &mut O) {
        let time = self.clock.time();
        let count = self.agents.len();

        for i in 0..count {
            for j in (i + 1)..count {
                let (a, b) = (AgentId(i as u32), AgentId(j as u32));
                let midpoint = {
                    let records = self.agents.as_slice();
                    let (ra, rb) = (&records[i], &records[j]);
                    if ra.collided && rb.collided {
                        continue;
                    }
                    let reach = ra.collision_radius + rb.collision_radius;
                    if ra.position.distance(rb.position) > reach {
                        continue;
                    }
                    (ra.position + rb.position) * 0.5
                };

                self.freeze(a, midpoint);
                self.freeze(b, midpoint);
                observer.on_collision(time, a, b);
            }
        }
    }

    fn freeze(&mut self, id: AgentId, at: Vec2) {
        // `id` comes from the pair scan over this same store.
        if let Ok(agent) = self.agents.get_mut(id) {
            agent.position = at;
            agent.velocity = Vec2::ZERO;
            agent.rotation = 0.0;
            agent.linear = Vec2::ZERO;
            agent.angular = 0.0;
            agent.behavior = Behavior::Stop;
            agent.collided = true;
        }
    }
}
