//! The trajectory log row type.

use steer_agent::AgentState;

/// One agent's state at one recorded time — one line of the trajectory log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRow {
    pub time:                f64,
    pub agent_id:            u32,
    pub position_x:          f64,
    pub position_y:          f64,
    pub velocity_x:          f64,
    pub velocity_y:          f64,
    pub linear_x:            f64,
    pub linear_y:            f64,
    pub orientation_radians: f64,
    pub behavior_tag:        &'static str,
    pub collided_flag:       bool,
}

impl TrajectoryRow {
    /// Snapshot one agent at `time`.
    pub fn from_agent(time: f64, agent: &AgentState) -> Self {
        Self {
            time,
            agent_id:            agent.id.0,
            position_x:          agent.position.x,
            position_y:          agent.position.y,
            velocity_x:          agent.velocity.x,
            velocity_y:          agent.velocity.y,
            linear_x:            agent.linear.x,
            linear_y:            agent.linear.y,
            orientation_radians: agent.orientation,
            behavior_tag:        agent.behavior.as_str(),
            collided_flag:       agent.collided,
        }
    }

    /// `true` if any numeric field is NaN.  Such rows are logged as a
    /// diagnostic but still written — the log must stay complete.
    pub fn has_nan(&self) -> bool {
        [
            self.position_x,
            self.position_y,
            self.velocity_x,
            self.velocity_y,
            self.linear_x,
            self.linear_y,
            self.orientation_radians,
        ]
        .iter()
        .any(|v| v.is_nan())
    }
}
