//! Policy dispatch: behavior tag + parameters → steering command.

use steer_agent::{AgentState, BehaviorParams};
use steer_core::{AgentRng, Behavior, SteeringCommand};
use steer_path::PathSet;

use crate::error::{BehaviorError, BehaviorResult};
use crate::policies;
use crate::target::TargetSnapshot;

/// Compute the steering command for one agent.
///
/// `snapshot` is the agent's target as resolved at the start of the step
/// (`None` for untargeted behaviors).  The match is total over [`Behavior`];
/// a missing target, mismatched parameter variant, or unknown path is an
/// error rather than a silent zero command.
///
/// Takes `&mut AgentState` only because Wander persists its heading drift;
/// every other arm reads the agent immutably.
pub fn compute_steering(
    agent: &mut AgentState,
    snapshot: Option<&TargetSnapshot>,
    paths: &PathSet,
    rng: &mut AgentRng,
) -> BehaviorResult<SteeringCommand> {
    let (id, behavior) = (agent.id, agent.behavior);
    let mismatch = move || BehaviorError::ParamMismatch { agent: id, behavior };
    let need_target = snapshot.ok_or(BehaviorError::MissingTarget(id));

    match agent.behavior {
        Behavior::Continue => Ok(policies::continue_course(agent)),
        Behavior::Stop => Ok(policies::stop(agent)),
        Behavior::Align => {
            let target = need_target?;
            match agent.params {
                BehaviorParams::Align(control) => {
                    Ok(policies::align(agent, target.orientation, control))
                }
                _ => Err(mismatch()),
            }
        }
        Behavior::Seek => Ok(policies::seek(agent, need_target?.position)),
        Behavior::Flee => Ok(policies::flee(agent, need_target?.position)),
        Behavior::Arrive => {
            let target = need_target?;
            match agent.params {
                BehaviorParams::Arrive(control) => {
                    Ok(policies::arrive(agent, target.position, control))
                }
                _ => Err(mismatch()),
            }
        }
        Behavior::Pursue => {
            let target = need_target?;
            match agent.params {
                BehaviorParams::Pursue { max_prediction } => Ok(policies::pursue(
                    agent,
                    target.position,
                    target.velocity,
                    max_prediction,
                )),
                _ => Err(mismatch()),
            }
        }
        Behavior::Wander => match agent.params {
            BehaviorParams::Wander {
                offset,
                radius,
                rate,
                turn,
            } => Ok(policies::wander(agent, rng, offset, radius, rate, turn)),
            _ => Err(mismatch()),
        },
        Behavior::FollowPath => match agent.params {
            BehaviorParams::FollowPath { path, offset } => {
                let path = paths.get(path)?;
                Ok(policies::follow_path(agent, path, offset))
            }
            _ => Err(mismatch()),
        },
    }
}
