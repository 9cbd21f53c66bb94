//! use_comment_deletion hook - confirmation-gated comment deletion
//!
//! Returns a callback that asks for confirmation and then submits the
//! comment's hidden deletion form. Tracks the last outcome so a component can
//! surface a failure.

use dioxus::prelude::*;

use crate::services::confirmation_gate::{page_gate, GateOutcome};
use crate::stores::prompt_settings::PROMPT_SETTINGS;

/// State of the most recent deletion request
#[derive(Clone, Debug, PartialEq)]
pub enum DeletionState {
    /// No request made yet
    Idle,
    /// Prompt is showing
    Awaiting,
    /// Form submitted; the browser is navigating
    Submitted,
    /// User declined
    Cancelled,
    /// Prompt or form failed with error message
    Error(String),
}

pub struct UseCommentDeletion {
    pub state: Signal<DeletionState>,
    pub request: Callback<u64>,
}

pub fn use_comment_deletion() -> UseCommentDeletion {
    let mut state = use_signal(|| DeletionState::Idle);

    let request = use_callback(move |comment_id: u64| {
        let gate = page_gate(*PROMPT_SETTINGS.read());
        state.set(DeletionState::Awaiting);

        spawn(async move {
            match gate.confirm_deletion(comment_id).await {
                Ok(GateOutcome::Submitted { form_id }) => {
                    log::debug!("Comment {} deleted via {}", comment_id, form_id);
                    state.set(DeletionState::Submitted);
                }
                Ok(GateOutcome::Cancelled { reason }) => {
                    log::debug!("Comment {} kept ({:?})", comment_id, reason);
                    state.set(DeletionState::Cancelled);
                }
                Err(e) if e.is_prompt_failure() => {
                    log::warn!("No confirmation for comment {}: {}", comment_id, e);
                    state.set(DeletionState::Error(e.to_string()));
                }
                Err(e) => {
                    let form_id = e.form_id().unwrap_or_default();
                    log::error!("Deleting comment {} via '{}' failed: {}", comment_id, form_id, e);
                    state.set(DeletionState::Error(e.to_string()));
                }
            }
        });
    });

    UseCommentDeletion { state, request }
}
