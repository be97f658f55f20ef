//! CSV trajectory backend.
//!
//! Writes one headerless file: the downstream plotter consumes the raw
//! record stream and supplies its own column names.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::OutputWriter;
use crate::{OutputResult, TrajectoryRow};

/// Writes the trajectory log to a single CSV file, one record per
/// (time, agent) pair, in the order they are handed to [`write_rows`].
///
/// [`write_rows`]: OutputWriter::write_rows
pub struct CsvTrajectoryWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl CsvTrajectoryWriter {
    /// Create (or truncate) the log file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let rows = WriterBuilder::new().has_headers(false).from_path(path)?;
        Ok(Self {
            rows,
            finished: false,
        })
    }
}

impl OutputWriter for CsvTrajectoryWriter {
    fn write_rows(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        for row in rows {
            self.rows.write_record(&[
                row.time.to_string(),
                row.agent_id.to_string(),
                row.position_x.to_string(),
                row.position_y.to_string(),
                row.velocity_x.to_string(),
                row.velocity_y.to_string(),
                row.linear_x.to_string(),
                row.linear_y.to_string(),
                row.orientation_radians.to_string(),
                row.behavior_tag.to_string(),
                row.collided_flag.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
