//! Target snapshots — the frozen view of a target an agent steers against.

use steer_agent::AgentStore;
use steer_core::{TargetRef, Vec2};

use crate::error::{BehaviorError, BehaviorResult};

/// The state of a target as observed at the start of a step.
///
/// Snapshots are resolved for every agent **before** any agent moves, so the
/// outcome of a step never depends on agent enumeration order: an agent
/// steering at a neighbor sees the neighbor's start-of-step state even if the
/// neighbor updates first.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TargetSnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    pub orientation: f64,
}

impl TargetSnapshot {
    /// A stationary snapshot at `position`.
    pub fn stationary(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            orientation: 0.0,
        }
    }

    /// Resolve one agent's target reference against the store.
    ///
    /// `TargetRef::None` resolves to `None` — whether that is acceptable
    /// depends on the behavior and is checked at dispatch.
    pub fn resolve(
        observer: steer_core::AgentId,
        target: TargetRef,
        store: &AgentStore,
    ) -> BehaviorResult<Option<TargetSnapshot>> {
        match target {
            TargetRef::None => Ok(None),
            TargetRef::Point(p) => Ok(Some(TargetSnapshot::stationary(p))),
            TargetRef::Agent(id) => {
                let other = store
                    .get(id)
                    .map_err(|_| BehaviorError::UnknownTarget(observer, id))?;
                Ok(Some(TargetSnapshot {
                    position: other.position,
                    velocity: other.velocity,
                    orientation: other.orientation,
                }))
            }
        }
    }

    /// Resolve every agent's target, in agent order.  Called once per step by
    /// the simulation loop before any state is mutated.
    pub fn resolve_all(store: &AgentStore) -> BehaviorResult<Vec<Option<TargetSnapshot>>> {
        store
            .iter()
            .map(|agent| TargetSnapshot::resolve(agent.id, agent.target, store))
            .collect()
    }
}
