//! `PathSet` — the scenario's immutable path registry.

use steer_core::PathId;

use crate::error::{PathError, PathResult};
use crate::path::Path;

/// All paths available to a simulation run, looked up by [`PathId`].
///
/// Built once at scenario setup and handed to the sim builder; scenarios
/// rarely hold more than a handful of paths, so lookup is a linear scan.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSet {
    paths: Vec<Path>,
}

impl PathSet {
    /// An empty set — for scenarios with no path-following agents.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    pub fn push(&mut self, path: Path) {
        self.paths.push(path);
    }

    /// Look up a path by its ID.
    pub fn get(&self, id: PathId) -> PathResult<&Path> {
        self.paths
            .iter()
            .find(|p| p.id() == id)
            .ok_or(PathError::UnknownPath(id))
    }

    pub fn contains(&self, id: PathId) -> bool {
        self.paths.iter().any(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter()
    }
}
