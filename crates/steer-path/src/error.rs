//! Error types for steer-path.

use steer_core::PathId;
use thiserror::Error;

/// Errors raised while constructing or looking up paths.
///
/// All of these are configuration-time failures: a `Path` that constructs
/// successfully never fails a query afterwards.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("path needs at least 2 waypoints, got {got}")]
    TooFewWaypoints { got: usize },

    #[error("coordinate slices differ in length: {xs} x values vs {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("zero-length segment at index {index} (consecutive duplicate waypoints)")]
    ZeroLengthSegment { index: usize },

    #[error("path {0} not found")]
    UnknownPath(PathId),
}

/// Alias for `Result<T, PathError>`.
pub type PathResult<T> = Result<T, PathError>;
