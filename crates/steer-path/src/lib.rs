//! `steer-path` — arclength-parametrized polyline paths.
//!
//! | Module    | Contents                                            |
//! |-----------|-----------------------------------------------------|
//! | [`path`]  | `Path` — immutable polyline with parameter queries  |
//! | [`set`]   | `PathSet` — scenario path registry keyed by `PathId`|
//! | [`error`] | `PathError`, `PathResult<T>`                        |

pub mod error;
pub mod path;
pub mod set;

#[cfg(test)]
mod tests;

pub use error::{PathError, PathResult};
pub use path::Path;
pub use set::PathSet;
