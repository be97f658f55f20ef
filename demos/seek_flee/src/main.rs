//! seek_flee — four-agent open-field steering demo.
//!
//! One agent per basic behavior (Continue, Flee, Seek, Arrive), all steering
//! relative to a stationary target at the origin.  Writes the trajectory log
//! to `output/seek_flee/trajectory.csv` for the external plotter.

use std::f64::consts::PI;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use steer_agent::{AgentState, AgentStore, BehaviorParams, SlowingControl};
use steer_core::{AgentId, Behavior, SimConfig, TargetRef, Vec2};
use steer_output::{CsvTrajectoryWriter, TrajectoryObserver};
use steer_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const DELTA_TIME: f64 = 0.5;
const STOP_TIME:  f64 = 50.0;
const SEED:       u64 = 42;

fn build_agents() -> Vec<AgentState> {
    let continuer = AgentState::builder(AgentId(0))
        .behavior(Behavior::Continue)
        .build();

    let fleer = AgentState::builder(AgentId(1))
        .behavior(Behavior::Flee)
        .position(Vec2::new(-30.0, -50.0))
        .velocity(Vec2::new(2.0, 7.0))
        .orientation(PI / 4.0)
        .max_speed(8.0)
        .max_linear(1.5)
        .target(TargetRef::Point(Vec2::ZERO))
        .build();

    let seeker = AgentState::builder(AgentId(2))
        .behavior(Behavior::Seek)
        .position(Vec2::new(-50.0, 40.0))
        .velocity(Vec2::new(0.0, 8.0))
        .orientation(3.0 * PI / 2.0)
        .max_speed(8.0)
        .max_linear(2.0)
        .target(TargetRef::Point(Vec2::ZERO))
        .build();

    let arriver = AgentState::builder(AgentId(3))
        .behavior(Behavior::Arrive)
        .position(Vec2::new(50.0, 75.0))
        .velocity(Vec2::new(-9.0, 4.0))
        .orientation(PI)
        .max_speed(10.0)
        .max_linear(2.0)
        .target(TargetRef::Point(Vec2::ZERO))
        .params(BehaviorParams::Arrive(SlowingControl {
            satisfaction_radius: 4.0,
            slow_radius:         32.0,
            time_to_target:      1.0,
        }))
        .build();

    vec![continuer, fleer, seeker, arriver]
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== seek_flee — rust_steer demo ===");
    println!("Agents: 4  |  dt: {DELTA_TIME}  |  stop: {STOP_TIME}  |  Seed: {SEED}");
    println!();

    let config = SimConfig {
        delta_time: DELTA_TIME,
        stop_time:  STOP_TIME,
        seed:       SEED,
        ..SimConfig::default()
    };

    let store = AgentStore::new(build_agents())?;
    let mut sim = SimBuilder::new(config, store).build()?;

    std::fs::create_dir_all("output/seek_flee")?;
    let writer = CsvTrajectoryWriter::create(Path::new("output/seek_flee/trajectory.csv"))?;
    let mut obs = TrajectoryObserver::new(writer);

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  trajectory.csv : {} records",
        (sim.config.total_steps() + 1) * sim.agents.len() as u64
    );
    println!();

    // Final state table.
    println!(
        "{:<8} {:<10} {:>10} {:>10} {:>8}",
        "Agent", "Behavior", "x", "y", "speed"
    );
    println!("{}", "-".repeat(50));
    for agent in sim.agents.iter() {
        println!(
            "{:<8} {:<10} {:>10.3} {:>10.3} {:>8.3}",
            agent.id.0,
            agent.behavior.to_string(),
            agent.position.x,
            agent.position.y,
            agent.speed()
        );
    }

    Ok(())
}
