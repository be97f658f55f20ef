//! Agent storage: `AgentStore` (the records) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The steering phase reads every agent's state while mutating one agent's
//! RNG (Wander draws noise per step).  Keeping the RNGs in a separate
//! `AgentRngs` struct lets the step loop hold `&AgentStore` and
//! `&mut AgentRngs` at the same time without fighting the borrow checker.

use steer_core::{AgentId, AgentRng, SteerError, SteerResult};

use crate::state::AgentState;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] so the
/// step loop can borrow both simultaneously.
#[derive(Debug)]
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// All agent records for one run, indexed by `AgentId`.
///
/// Agents are assigned IDs `0..count` in insertion order; the `AgentId` value
/// is the `Vec` index.  The population is fixed for the run's duration.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    agents: Vec<AgentState>,
}

impl AgentStore {
    /// Build a store from agent records.
    ///
    /// Each record's `id` must equal its position in the slice; out-of-order
    /// IDs would break the index contract and are rejected.
    pub fn new(agents: Vec<AgentState>) -> SteerResult<Self> {
        for (i, agent) in agents.iter().enumerate() {
            if agent.id.index() != i {
                return Err(SteerError::Config(format!(
                    "agent at index {i} carries id {}; ids must be dense and in order",
                    agent.id
                )));
            }
        }
        Ok(Self { agents })
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> SteerResult<&AgentState> {
        self.agents
            .get(agent.index())
            .ok_or(SteerError::AgentNotFound(agent))
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> SteerResult<&mut AgentState> {
        self.agents
            .get_mut(agent.index())
            .ok_or(SteerError::AgentNotFound(agent))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentState> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut AgentState> {
        self.agents.iter_mut()
    }

    /// Slice view of every record, in ID order.
    pub fn as_slice(&self) -> &[AgentState] {
        &self.agents
    }
}
