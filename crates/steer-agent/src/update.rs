//! The per-step update rule: integration, wrap, jitter suppression, clamps.

use std::f64::consts::TAU;

use steer_core::{Integrator, SteeringCommand, Vec2};

use crate::state::AgentState;

/// Apply one steering command to an agent for one time step.
///
/// The order is fixed and load-bearing:
///
/// 1. position and orientation advance using the **pre-step** velocity and
///    rotation (plus the `½·a·Δt²` terms under
///    [`Integrator::ConstantAcceleration`]);
/// 2. orientation wraps into `[0, 2π)`;
/// 3. velocity and rotation pick up the accelerations;
/// 4. the command is stored as the agent's last applied accelerations;
/// 5. speeds below `stop_speed` snap to zero (jitter suppression);
/// 6. speed, linear, rotation, and angular are each clamped to the agent's
///    limits, independently and direction-preservingly.
///
/// A triggered clamp is corrective, not an error: it logs a warning and the
/// step proceeds with the clamped value.
pub fn apply_steering(
    agent: &mut AgentState,
    command: SteeringCommand,
    delta_time: f64,
    integrator: Integrator,
    stop_speed: f64,
) {
    // 1. Advance pose from pre-step rates.
    agent.position += agent.velocity * delta_time;
    agent.orientation += agent.rotation * delta_time;
    if integrator == Integrator::ConstantAcceleration {
        let half_dt_sq = 0.5 * delta_time * delta_time;
        agent.position += command.linear * half_dt_sq;
        agent.orientation += command.angular * half_dt_sq;
    }

    // 2. Orientation lives in [0, 2π).
    agent.orientation = agent.orientation.rem_euclid(TAU);

    // 3. Rates pick up the accelerations.
    agent.velocity += command.linear * delta_time;
    agent.rotation += command.angular * delta_time;

    // 4. Remember what was applied (Continue re-emits it next step).
    agent.linear = command.linear;
    agent.angular = command.angular;

    // 5. Jitter suppression: crawling slower than stop_speed means stopped.
    if agent.velocity.magnitude() < stop_speed {
        agent.velocity = Vec2::ZERO;
    }

    // 6. Clamp each quantity to its limit, preserving direction.
    let speed = agent.velocity.magnitude();
    if speed > agent.limits.max_speed {
        log::warn!(
            "agent {}: speed {speed:.4} exceeds max {:.4}, clamping",
            agent.id,
            agent.limits.max_speed
        );
        agent.velocity = agent.velocity.normalized() * agent.limits.max_speed;
    }

    let linear = agent.linear.magnitude();
    if linear > agent.limits.max_linear {
        log::warn!(
            "agent {}: linear acceleration {linear:.4} exceeds max {:.4}, clamping",
            agent.id,
            agent.limits.max_linear
        );
        agent.linear = agent.linear.normalized() * agent.limits.max_linear;
    }

    if agent.rotation.abs() > agent.limits.max_rotation {
        log::warn!(
            "agent {}: rotation {:.4} exceeds max {:.4}, clamping",
            agent.id,
            agent.rotation,
            agent.limits.max_rotation
        );
        agent.rotation = agent.rotation.signum() * agent.limits.max_rotation;
    }

    if agent.angular.abs() > agent.limits.max_angular {
        log::warn!(
            "agent {}: angular acceleration {:.4} exceeds max {:.4}, clamping",
            agent.id,
            agent.angular,
            agent.limits.max_angular
        );
        agent.angular = agent.angular.signum() * agent.limits.max_angular;
    }
}
