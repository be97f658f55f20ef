//! One function per steering behavior.
//!
//! Each policy reads the agent's start-of-step state (and a target snapshot
//! or path where the behavior calls for one) and produces the accelerations
//! it wants applied this step.  Policies clamp their own linear output to
//! `max_linear`; the update rule clamps again after integration, so a policy
//! that forgets costs correctness nothing — but a well-behaved policy never
//! requests more than the agent can do.

use steer_core::{wrap_angle, AgentRng, SteeringCommand, Vec2};
use steer_path::Path;

use steer_agent::{AgentState, SlowingControl};

/// Clamp a vector's magnitude to `max`, preserving direction.
fn clamp_magnitude(v: Vec2, max: f64) -> Vec2 {
    if v.magnitude() > max {
        v.normalized() * max
    } else {
        v
    }
}

/// Re-emit the last applied command unchanged.
pub fn continue_course(agent: &AgentState) -> SteeringCommand {
    SteeringCommand {
        linear: agent.linear,
        angular: agent.angular,
    }
}

/// Brake to a standstill.
///
/// The linear braking is clamped to `max_linear`; the angular braking is
/// deliberately left unclamped (the update rule's own angular clamp still
/// bounds what gets applied).
pub fn stop(agent: &AgentState) -> SteeringCommand {
    SteeringCommand {
        linear: clamp_magnitude(-agent.velocity, agent.limits.max_linear),
        angular: -agent.rotation,
    }
}

/// Rotate to match `target_orientation`, braking inside the slowing zone.
pub fn align(agent: &AgentState, target_orientation: f64, control: SlowingControl) -> SteeringCommand {
    let diff = wrap_angle(target_orientation - agent.orientation);
    let size = diff.abs();

    if size < control.satisfaction_radius {
        return SteeringCommand::ZERO;
    }

    let mut desired = if size > control.slow_radius {
        agent.limits.max_rotation
    } else {
        agent.limits.max_rotation * size / control.slow_radius
    };
    desired *= diff.signum();

    let mut angular = (desired - agent.rotation) / control.time_to_target;
    if angular.abs() > agent.limits.max_angular {
        angular = angular.signum() * agent.limits.max_angular;
    }

    SteeringCommand {
        linear: Vec2::ZERO,
        angular,
    }
}

/// Full acceleration straight toward `target`.
pub fn seek(agent: &AgentState, target: Vec2) -> SteeringCommand {
    SteeringCommand {
        linear: (target - agent.position).normalized() * agent.limits.max_linear,
        angular: 0.0,
    }
}

/// Full acceleration straight away from `target`.
pub fn flee(agent: &AgentState, target: Vec2) -> SteeringCommand {
    SteeringCommand {
        linear: (agent.position - target).normalized() * agent.limits.max_linear,
        angular: 0.0,
    }
}

/// Seek `target`, ramping the desired speed down inside the slowing zone and
/// to zero inside the satisfaction radius.
pub fn arrive(agent: &AgentState, target: Vec2, control: SlowingControl) -> SteeringCommand {
    let offset = target - agent.position;
    let distance = offset.magnitude();

    let desired_speed = if distance < control.satisfaction_radius {
        0.0
    } else if distance > control.slow_radius {
        agent.limits.max_speed
    } else {
        agent.limits.max_speed * distance / control.slow_radius
    };

    let desired_velocity = offset.normalized() * desired_speed;
    let linear = (desired_velocity - agent.velocity) * (1.0 / control.time_to_target);

    SteeringCommand {
        linear: clamp_magnitude(linear, agent.limits.max_linear),
        angular: 0.0,
    }
}

/// Seek the target's extrapolated future position.
///
/// The lookahead is `distance / speed` (the naive intercept time), capped at
/// `max_prediction` — a slow or stationary pursuer otherwise aims at where
/// the target will be in the far future.
pub fn pursue(
    agent: &AgentState,
    target_position: Vec2,
    target_velocity: Vec2,
    max_prediction: f64,
) -> SteeringCommand {
    let distance = (target_position - agent.position).magnitude();
    let speed = agent.speed();

    let prediction = if speed <= distance / max_prediction {
        max_prediction
    } else {
        distance / speed
    };

    seek(agent, target_position + target_velocity * prediction)
}

/// Random walk: drift the persisted wander heading by bounded noise, turn
/// toward a point on the wander circle, accelerate along the current heading.
pub fn wander(
    agent: &mut AgentState,
    rng: &mut AgentRng,
    offset: f64,
    radius: f64,
    rate: f64,
    turn: SlowingControl,
) -> SteeringCommand {
    agent.wander_orientation += rng.binomial() * rate;
    let target_orientation = agent.wander_orientation + agent.orientation;

    let center = agent.position + Vec2::from_angle(agent.orientation) * offset;
    let target = center + Vec2::from_angle(target_orientation) * radius;

    let to_target = target - agent.position;
    let heading = to_target.y.atan2(to_target.x);
    let angular = align(agent, heading, turn).angular;

    SteeringCommand {
        linear: Vec2::from_angle(agent.orientation) * agent.limits.max_linear,
        angular,
    }
}

/// Seek a point a fixed parameter offset ahead of the agent's closest point
/// on the path.  `position_at` clamps, so past the end this degrades to
/// plain Seek on the final waypoint.
pub fn follow_path(agent: &AgentState, path: &Path, offset: f64) -> SteeringCommand {
    let current = path.param_at_closest(agent.position);
    let target = path.position_at(current + offset);
    seek(agent, target)
}
