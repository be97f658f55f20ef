//! `TrajectoryObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use steer_agent::AgentStore;
use steer_core::Tick;
use steer_sim::SimObserver;

use crate::row::TrajectoryRow;
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that records every agent to an [`OutputWriter`] backend
/// at every `on_record` hook (time 0 plus once per step).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TrajectoryObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TrajectoryObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TrajectoryObserver<W> {
    fn on_record(&mut self, time: f64, agents: &AgentStore) {
        let rows: Vec<TrajectoryRow> = agents
            .iter()
            .map(|agent| TrajectoryRow::from_agent(time, agent))
            .collect();

        for row in &rows {
            if row.has_nan() {
                log::warn!(
                    "agent {}: NaN in trajectory record at time {time}; writing anyway",
                    row.agent_id
                );
            }
        }

        if !rows.is_empty() {
            let result = self.writer.write_rows(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
