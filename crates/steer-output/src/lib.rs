//! `steer-output` — the trajectory log, the engine's one external interface.
//!
//! One headerless CSV record per (time, agent) pair:
//!
//! ```text
//! time, agent_id, position_x, position_y, velocity_x, velocity_y,
//! linear_x, linear_y, orientation_radians, behavior_tag, collided_flag
//! ```
//!
//! The log is append-only and never read back by the engine; the downstream
//! plotter consumes the raw stream.
//!
//! # Usage
//!
//! ```rust,ignore
//! use steer_output::{CsvTrajectoryWriter, TrajectoryObserver};
//!
//! let writer = CsvTrajectoryWriter::create(Path::new("trajectory.csv"))?;
//! let mut obs = TrajectoryObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvTrajectoryWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrajectoryObserver;
pub use row::TrajectoryRow;
pub use writer::OutputWriter;
