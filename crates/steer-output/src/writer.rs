//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, TrajectoryRow};

/// Trait implemented by trajectory log backends.
///
/// From the observer's perspective writes are fire-and-forget — errors are
/// stored by [`TrajectoryObserver`][crate::TrajectoryObserver] and retrieved
/// with `take_error` after the run.
pub trait OutputWriter {
    /// Write a batch of trajectory rows.
    fn write_rows(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()>;

    /// Flush and close the underlying file handle.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
