//! # Staging Coordinator
//!
//! Orchestrates the add-to-index flow: fetches the current project status,
//! decides whether the selection has anything worth staging, and drives the
//! staging call once the user confirms. Collaborators are injected; the
//! coordinator owns no I/O of its own.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::reporter::OutcomeReporter;
use crate::domain::traits::{SelectionSource, StageExecutor, StatusSource};
use crate::domain::types::{Resource, StageRequest};
use crate::strings::messages;

/// Where an invocation of the staging flow currently stands.
///
/// `NothingToStage`, `Staged`, and `StageFailed` are terminal; cancellation
/// from the confirmation prompt falls back to `Idle` with no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagePhase {
    Idle,
    StatusFetched,
    NothingToStage,
    PendingConfirmation,
    Staging,
    Staged,
    StageFailed,
}

impl StagePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StagePhase::NothingToStage | StagePhase::Staged | StagePhase::StageFailed
        )
    }
}

/// Result of the pre-flight relevance check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagingDecision {
    /// The selection overlaps the working-tree changes; ask the user.
    Confirm(ConfirmPrompt),
    /// Nothing in the selection can be staged. Already reported through
    /// both channels; no prompt, no stage call.
    NothingToStage,
    /// The status fetch failed. Already reported through both channels.
    Failed,
}

impl StagingDecision {
    /// The phase this decision leaves the invocation in.
    pub fn phase(&self) -> StagePhase {
        match self {
            StagingDecision::Confirm(_) => StagePhase::PendingConfirmation,
            StagingDecision::NothingToStage => StagePhase::NothingToStage,
            StagingDecision::Failed => StagePhase::StageFailed,
        }
    }
}

/// What the confirmation dialog should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub message: String,
    /// Initial state of the "update tracked files only" toggle. Always
    /// reset to off when the prompt opens.
    pub update_only: bool,
}

/// Pure orchestration object for the add-to-index flow. Each entry point
/// is one self-contained invocation: status is fetched fresh, exactly one
/// stage request is issued per confirmation, and no state survives the
/// call.
pub struct StagingCoordinator {
    selection: Arc<dyn SelectionSource>,
    status_source: Arc<dyn StatusSource>,
    stage_executor: Arc<dyn StageExecutor>,
    reporter: OutcomeReporter,
}

impl StagingCoordinator {
    pub fn new(
        selection: Arc<dyn SelectionSource>,
        status_source: Arc<dyn StatusSource>,
        stage_executor: Arc<dyn StageExecutor>,
        reporter: OutcomeReporter,
    ) -> Self {
        Self {
            selection,
            status_source,
            stage_executor,
            reporter,
        }
    }

    /// Pre-flight half of the flow: fetch the status snapshot and decide
    /// whether staging is meaningful for the current selection.
    ///
    /// Returns the prompt to show, or a terminal decision that has already
    /// been reported through both channels. The relevance check is a pure
    /// read-side heuristic; the working tree may still change before the
    /// user confirms, and a stage call that then does nothing is accepted.
    pub async fn prepare(&self) -> StagingDecision {
        let resources = self.selection.selected_resources();
        assert!(
            !resources.is_empty(),
            "add to index invoked with an empty selection"
        );
        let project = self.selection.project_root();
        let report = self.reporter.begin(messages::ADD_TO_INDEX_LABEL);

        let status = match self.status_source.status(&project).await {
            Ok(status) => status,
            Err(err) => {
                warn!("status fetch failed: {err:#}");
                report.failure(messages::STATUS_FAILED).await;
                return StagingDecision::Failed;
            }
        };
        debug!(
            "reached {:?}: {} modified, {} untracked",
            StagePhase::StatusFetched,
            status.modified.len(),
            status.untracked.len()
        );

        let relatives: Vec<(&Resource, String)> = resources
            .iter()
            .map(|resource| (resource, resource.location.relative_to(&project).to_string()))
            .collect();

        // Modified entries scan before untracked ones; together with the
        // selection order below this decides which resource's name shows
        // up in a single-selection prompt.
        let mut entries = Vec::with_capacity(status.modified.len() + status.untracked.len());
        entries.extend(status.modified);
        entries.extend(status.untracked);

        for entry in &entries {
            for (resource, relative) in &relatives {
                if entry.starts_with(relative.as_str()) {
                    return StagingDecision::Confirm(ConfirmPrompt {
                        message: prompt_message(&resources, resource),
                        update_only: false,
                    });
                }
            }
        }

        let message = if resources.len() > 1 {
            messages::NOTHING_TO_ADD_MULTISELECT
        } else {
            messages::NOTHING_TO_ADD
        };
        report.info(message).await;
        StagingDecision::NothingToStage
    }

    /// Staging half of the flow, entered on confirmation or directly for
    /// unchecked staging.
    ///
    /// Issues exactly one stage request and always reaches a terminal
    /// phase: failures are reported through both channels, never
    /// propagated, and the flow never retries.
    pub async fn stage(&self, update_only: bool) -> StagePhase {
        let resources = self.selection.selected_resources();
        assert!(
            !resources.is_empty(),
            "add to index invoked with an empty selection"
        );
        let project = self.selection.project_root();
        let report = self.reporter.begin(messages::ADD_TO_INDEX_LABEL);

        let request = StageRequest {
            paths: resources
                .iter()
                .map(|resource| resource.location.relative_to(&project))
                .collect(),
            update_only,
        };
        debug!(
            "reached {:?}: {} path(s), update_only={}",
            StagePhase::Staging,
            request.paths.len(),
            request.update_only
        );

        match self
            .stage_executor
            .stage(&project, request.update_only, &request.paths)
            .await
        {
            Ok(()) => {
                report.info(messages::ADD_SUCCESS).await;
                StagePhase::Staged
            }
            Err(err) => {
                warn!("stage request failed: {err:#}");
                report.failure(messages::ADD_FAILED).await;
                StagePhase::StageFailed
            }
        }
    }

    /// Explicit cancellation from the confirmation prompt. No side
    /// effects, no reporting.
    pub fn cancel(&self) -> StagePhase {
        StagePhase::Idle
    }
}

fn prompt_message(resources: &[Resource], matched: &Resource) -> String {
    if resources.len() > 1 {
        messages::ADD_SELECTION_TO_INDEX.to_string()
    } else if matched.is_container() {
        messages::add_folder_to_index(&matched.name)
    } else {
        messages::add_file_to_index(&matched.name)
    }
}
