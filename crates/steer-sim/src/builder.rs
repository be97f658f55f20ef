//! Fluent builder for constructing a [`Sim`].

use steer_agent::{AgentRngs, AgentState, AgentStore, BehaviorParams};
use steer_core::{Behavior, SimConfig, TargetRef};
use steer_path::PathSet;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// `build()` validates the whole scenario up front: bad configuration is a
/// setup-time error, never a mid-run surprise.  Checks:
///
/// - `delta_time` positive; `stop_time` and `stop_speed` non-negative;
/// - every agent's parameter variant agrees with its behavior;
/// - behaviors that steer at a target have one, and agent targets resolve;
/// - referenced paths exist in the supplied [`PathSet`];
/// - limits and collision radii are non-negative and finite.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, AgentStore::new(agents)?)
///     .paths(paths)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    agents: AgentStore,
    paths:  Option<PathSet>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, agents: AgentStore) -> Self {
        Self {
            config,
            agents,
            paths: None,
        }
    }

    /// Supply the paths referenced by `FollowPath` agents.
    ///
    /// If not called, an empty set is used; any `FollowPath` agent then fails
    /// validation.
    pub fn paths(mut self, paths: PathSet) -> Self {
        self.paths = Some(paths);
        self
    }

    /// Validate the scenario and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        let paths = self.paths.unwrap_or_else(PathSet::empty);

        if !(config.delta_time > 0.0) {
            return Err(SimError::Config(format!(
                "delta_time must be positive, got {}",
                config.delta_time
            )));
        }
        if !(config.stop_time >= 0.0) {
            return Err(SimError::Config(format!(
                "stop_time must be non-negative, got {}",
                config.stop_time
            )));
        }
        if !(config.stop_speed >= 0.0) {
            return Err(SimError::Config(format!(
                "stop_speed must be non-negative, got {}",
                config.stop_speed
            )));
        }

        for agent in self.agents.iter() {
            validate_agent(agent, &self.agents, &paths)?;
        }

        let rngs = AgentRngs::new(self.agents.len(), config.seed);

        Ok(Sim {
            clock: config.make_clock(),
            config,
            agents: self.agents,
            rngs,
            paths,
        })
    }
}

fn validate_agent(agent: &AgentState, store: &AgentStore, paths: &PathSet) -> SimResult<()> {
    let id = agent.id;

    if !agent.params.matches(agent.behavior) {
        return Err(SimError::Config(format!(
            "agent {id}: behavior {} does not match its parameter variant",
            agent.behavior
        )));
    }

    for (name, value) in [
        ("max_speed", agent.limits.max_speed),
        ("max_linear", agent.limits.max_linear),
        ("max_rotation", agent.limits.max_rotation),
        ("max_angular", agent.limits.max_angular),
        ("collision_radius", agent.collision_radius),
    ] {
        if !(value >= 0.0) || !value.is_finite() {
            return Err(SimError::Config(format!(
                "agent {id}: {name} must be finite and non-negative, got {value}"
            )));
        }
    }

    let needs_target = matches!(
        agent.behavior,
        Behavior::Align | Behavior::Seek | Behavior::Flee | Behavior::Arrive | Behavior::Pursue
    );
    match agent.target {
        TargetRef::None if needs_target => {
            return Err(SimError::Config(format!(
                "agent {id}: behavior {} requires a target",
                agent.behavior
            )));
        }
        TargetRef::Agent(other) if store.get(other).is_err() => {
            return Err(SimError::Config(format!(
                "agent {id}: target references unknown agent {other}"
            )));
        }
        TargetRef::Agent(other) if other == id => {
            return Err(SimError::Config(format!("agent {id}: targets itself")));
        }
        _ => {}
    }

    if let BehaviorParams::FollowPath { path, .. } = agent.params {
        if !paths.contains(path) {
            return Err(SimError::Config(format!(
                "agent {id}: references unknown path {path}"
            )));
        }
    }

    Ok(())
}
