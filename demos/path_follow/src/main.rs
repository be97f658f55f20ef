//! path_follow — single-agent path-following demo.
//!
//! One agent chases a lookahead point along an 8-waypoint zig-zag path from
//! the top of the field to the bottom.  Writes the trajectory log to
//! `output/path_follow/trajectory.csv` for the external plotter.

use std::path::Path as FsPath;
use std::time::Instant;

use anyhow::Result;

use steer_agent::{AgentState, AgentStore, BehaviorParams};
use steer_core::{AgentId, Behavior, PathId, SimConfig, Vec2};
use steer_output::{CsvTrajectoryWriter, TrajectoryObserver};
use steer_path::{Path, PathSet};
use steer_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const DELTA_TIME:  f64 = 0.5;
const STOP_TIME:   f64 = 125.0;
const SEED:        u64 = 42;
const PATH_OFFSET: f64 = 0.04;

const PATH_ID: PathId = PathId(1);
const PATH_X: [f64; 8] = [0.0, -20.0, 20.0, -40.0, 40.0, -60.0, 60.0, 0.0];
const PATH_Y: [f64; 8] = [90.0, 65.0, 40.0, 15.0, -10.0, -35.0, -60.0, -85.0];

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== path_follow — rust_steer demo ===");
    println!("Agents: 1  |  dt: {DELTA_TIME}  |  stop: {STOP_TIME}  |  offset: {PATH_OFFSET}");
    println!();

    let path = Path::from_coords(PATH_ID, &PATH_X, &PATH_Y)?;
    println!(
        "Path: {} waypoints, total length {:.2}",
        PATH_X.len(),
        path.length()
    );

    let follower = AgentState::builder(AgentId(0))
        .behavior(Behavior::FollowPath)
        .position(Vec2::new(20.0, 95.0))
        .max_speed(4.0)
        .max_linear(2.0)
        .params(BehaviorParams::FollowPath {
            path:   PATH_ID,
            offset: PATH_OFFSET,
        })
        .build();

    let config = SimConfig {
        delta_time: DELTA_TIME,
        stop_time:  STOP_TIME,
        seed:       SEED,
        ..SimConfig::default()
    };

    let store = AgentStore::new(vec![follower])?;
    let mut sim = SimBuilder::new(config, store)
        .paths(PathSet::new(vec![path]))
        .build()?;

    std::fs::create_dir_all("output/path_follow")?;
    let writer = CsvTrajectoryWriter::create(FsPath::new("output/path_follow/trajectory.csv"))?;
    let mut obs = TrajectoryObserver::new(writer);

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    let agent = sim.agents.get(AgentId(0))?;
    let end = Vec2::new(PATH_X[7], PATH_Y[7]);
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "Final position: ({:.3}, {:.3}), {:.2} from the path end",
        agent.position.x,
        agent.position.y,
        agent.position.distance(end)
    );

    Ok(())
}
