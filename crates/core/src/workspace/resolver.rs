use std::path::{Path, PathBuf};

use super::path::normalize;
use crate::config::{DEFAULT_MAX_WALK_DEPTH, DEFAULT_ROOT_MARKER, Settings};

/// Existence checks used while walking up the directory tree
pub trait PathProbe: Send + Sync {
    /// A failed check must report `false`, never error.
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or(false)
    }
}

/// Finds the innermost ancestor directory holding a workspace root marker
pub struct WorkspaceRootResolver<P: PathProbe = FsProbe> {
    probe: P,
    markers: Vec<String>,
    max_depth: usize,
}

impl WorkspaceRootResolver<FsProbe> {
    pub fn new() -> Self {
        Self::with_probe(FsProbe)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new()
            .with_markers(settings.root_markers.clone())
            .with_max_depth(settings.max_walk_depth)
    }
}

impl Default for WorkspaceRootResolver<FsProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PathProbe> WorkspaceRootResolver<P> {
    pub fn with_probe(probe: P) -> Self {
        Self {
            probe,
            markers: vec![DEFAULT_ROOT_MARKER.to_string()],
            max_depth: DEFAULT_MAX_WALK_DEPTH,
        }
    }

    pub fn with_markers(mut self, markers: Vec<String>) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Resolve the workspace root for an absolute file path.
    ///
    /// The search starts in the directory containing `file_path` and stops at
    /// the first directory with a marker, so nested workspaces win over outer
    /// ones. Returns `None` when the filesystem root (or the hop limit) is
    /// reached without a match. `.` and `..` are folded first so only real
    /// ancestors are visited.
    pub fn resolve(&self, file_path: &Path) -> Option<PathBuf> {
        let file_path = normalize(file_path);
        let mut current = file_path.parent()?;

        for _ in 0..=self.max_depth {
            tracing::debug!("Checking {:?} for workspace markers", current);
            if self.has_marker(current) {
                tracing::debug!("Workspace root found at {:?}", current);
                return Some(current.to_path_buf());
            }

            match current.parent() {
                Some(parent) if parent != current => current = parent,
                _ => {
                    tracing::debug!("Reached filesystem root without finding a workspace");
                    return None;
                }
            }
        }

        tracing::debug!(
            "Gave up after {} parent directories without finding a workspace",
            self.max_depth
        );
        None
    }

    fn has_marker(&self, dir: &Path) -> bool {
        self.markers
            .iter()
            .any(|marker| self.probe.exists(&dir.join(marker)))
    }
}
