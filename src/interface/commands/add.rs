//! # Add Command
//!
//! Headless driver for the add-to-index flow: runs the pre-flight check,
//! asks for confirmation on the terminal, and hands the confirmed request
//! to the coordinator.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::application::coordinator::{StagePhase, StagingCoordinator, StagingDecision};

/// Runs the confirm flow. `assume_yes` is the direct-staging entry point:
/// no relevance check, no prompt.
pub async fn handle_add(
    coordinator: &StagingCoordinator,
    update_only: bool,
    assume_yes: bool,
) -> Result<StagePhase> {
    if assume_yes {
        return Ok(coordinator.stage(update_only).await);
    }

    let decision = coordinator.prepare().await;
    match decision {
        StagingDecision::Confirm(prompt) => {
            debug!("reached {:?}", StagePhase::PendingConfirmation);
            if confirm_on_terminal(&prompt.message)? {
                // The CLI flag plays the role of the dialog's toggle; the
                // prompt itself always starts with it off.
                let phase = coordinator.stage(update_only || prompt.update_only).await;
                debug_assert!(phase.is_terminal());
                Ok(phase)
            } else {
                Ok(coordinator.cancel())
            }
        }
        // Already reported through both channels; just end the flow.
        done => Ok(done.phase()),
    }
}

fn confirm_on_terminal(message: &str) -> Result<bool> {
    print!("{message} [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
