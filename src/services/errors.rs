//! Confirmation gate error types
//!
//! Typed errors so callers can tell an unavailable prompt apart from a
//! missing deletion form.

use std::fmt;

/// Failures of the confirmation gate and the capabilities it drives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// No prompt capability is present (SweetAlert2 not loaded, no prompt host mounted)
    PromptUnavailable(String),
    /// The prompt capability failed while showing or resolving the prompt
    Prompt(String),
    /// The user confirmed but no submittable element carries the composed key
    MissingTarget { form_id: String },
    /// The element was found but refused to submit
    Submit { form_id: String, reason: String },
}

impl GateError {
    /// True when the failure happened before any prompt was shown
    pub fn is_prompt_failure(&self) -> bool {
        matches!(self, Self::PromptUnavailable(_) | Self::Prompt(_))
    }

    /// Key of the form involved, if the failure happened after confirmation
    pub fn form_id(&self) -> Option<&str> {
        match self {
            Self::MissingTarget { form_id } | Self::Submit { form_id, .. } => Some(form_id),
            _ => None,
        }
    }
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PromptUnavailable(what) => write!(f, "Confirmation prompt unavailable: {}", what),
            Self::Prompt(msg) => write!(f, "Confirmation prompt failed: {}", msg),
            Self::MissingTarget { form_id } => {
                write!(f, "No submittable form with id '{}'", form_id)
            }
            Self::Submit { form_id, reason } => {
                write!(f, "Failed to submit form '{}': {}", form_id, reason)
            }
        }
    }
}

impl std::error::Error for GateError {}
