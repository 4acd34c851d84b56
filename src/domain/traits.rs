//! # Domain Traits
//!
//! Abstract interfaces for the staging coordinator's collaborators.
//! Allows for pluggable implementations in the Infrastructure layer.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::paths::ResourcePath;
use crate::domain::types::{DisplayMode, Resource, Severity, StatusSnapshot};

/// Read side of the version-control service: current working-tree status.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the modified/untracked sets for the project at `project`.
    /// Fails with a generic error on any transport or service problem.
    async fn status(&self, project: &ResourcePath) -> Result<StatusSnapshot>;
}

/// Write side of the version-control service: stage paths into the index.
#[async_trait]
pub trait StageExecutor: Send + Sync {
    /// Stage `paths` (project-relative; the empty path means the whole
    /// project). `update_only` restricts the call to already-tracked files.
    async fn stage(
        &self,
        project: &ResourcePath,
        update_only: bool,
        paths: &[ResourcePath],
    ) -> Result<()>;
}

/// Append-only output console for one command invocation.
pub trait CommandConsole: Send + Sync {
    fn print(&self, line: &str);

    fn print_error(&self, line: &str);

    /// Label the console was created under.
    fn label(&self) -> String;
}

/// Creates a fresh console per command invocation.
pub trait ConsoleFactory: Send + Sync {
    fn create(&self, label: &str) -> Arc<dyn CommandConsole>;
}

/// The session's command-output registry (the processes panel).
pub trait ConsolePanel: Send + Sync {
    fn add_command_output(&self, console: Arc<dyn CommandConsole>);
}

/// Transient notification banner.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str, severity: Severity, mode: DisplayMode) -> Result<()>;
}

/// The IDE's current selection and active project, read-only.
pub trait SelectionSource: Send + Sync {
    /// Resources currently selected in the project tree.
    fn selected_resources(&self) -> Vec<Resource>;

    /// Location of the active project's root.
    fn project_root(&self) -> ResourcePath;
}
