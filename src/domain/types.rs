//! # Domain Types
//!
//! Data carried between the staging coordinator and its collaborators.

use serde::{Deserialize, Serialize};

use crate::domain::paths::ResourcePath;

/// Whether a resource can hold child resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    File,
    Folder,
}

/// A file or folder in the workspace, as seen by the selection source.
/// Owned by the IDE's project model; read-only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub name: String,
    pub location: ResourcePath,
    pub kind: ResourceKind,
}

impl Resource {
    pub fn is_container(&self) -> bool {
        matches!(self.kind, ResourceKind::Folder)
    }
}

/// Modified/untracked path sets for a project at a point in time.
///
/// Entries are project-relative with forward-slash separators. Snapshots
/// are fetched fresh per invocation and never cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub modified: Vec<String>,
    #[serde(default)]
    pub untracked: Vec<String>,
}

/// One staging call against the index. Built per confirmation, handed to
/// the stage executor exactly once, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageRequest {
    /// Project-relative paths; the empty path means the whole project.
    pub paths: Vec<ResourcePath>,
    /// Restrict the call to files the index already tracks.
    pub update_only: bool,
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Fail,
}

/// How a notification banner is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Regular placement in the notification area.
    Default,
    /// Floats above the current view so failures surface immediately.
    Float,
}
