//! Confirmation gate for comment deletion
//!
//! Asks the user to confirm and only then submits the comment's hidden
//! deletion form. The gate holds no state between calls: every invocation
//! shows its own prompt and resolves once.
//!
//! A confirmed deletion whose form cannot be found is reported as
//! [`GateError::MissingTarget`], never ignored.

use std::fmt::Display;
use std::rc::Rc;

use super::errors::GateError;
use super::prompt::{ConfirmationPrompt, Decision, DismissReason, Locale, PromptConfig};
use crate::stores::prompt_settings::{prompt_for, PromptSettings};
use crate::utils::delete_form::{delete_form_id, DomFormLookup, FormLookup};

/// Result of a resolved prompt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// The user confirmed and the form was submitted
    Submitted { form_id: String },
    /// The user declined or dismissed the prompt
    Cancelled { reason: Option<DismissReason> },
}

#[derive(Clone)]
pub struct ConfirmationGate {
    prompt: Rc<dyn ConfirmationPrompt>,
    forms: Rc<dyn FormLookup>,
    config: PromptConfig,
}

impl ConfirmationGate {
    pub fn new(
        prompt: Rc<dyn ConfirmationPrompt>,
        forms: Rc<dyn FormLookup>,
        locale: Locale,
    ) -> Self {
        Self {
            prompt,
            forms,
            config: PromptConfig::delete_comment(locale),
        }
    }

    /// Ask for confirmation, then submit `delete-form-<target_id>` if confirmed
    pub async fn confirm_deletion(
        &self,
        target_id: impl Display,
    ) -> Result<GateOutcome, GateError> {
        let form_id = delete_form_id(target_id);

        let result = self.prompt.confirm(&self.config).await?;

        match result.decision() {
            Decision::Cancelled(reason) => {
                log::debug!("Deletion of {} cancelled ({:?})", form_id, reason);
                Ok(GateOutcome::Cancelled { reason })
            }
            Decision::Confirmed => {
                let form = self
                    .forms
                    .find_submittable(&form_id)
                    .ok_or_else(|| GateError::MissingTarget { form_id: form_id.clone() })?;
                form.submit()?;
                log::info!("Submitted {}", form_id);
                Ok(GateOutcome::Submitted { form_id })
            }
        }
    }

    /// Start `confirm_deletion` on the browser event loop and return immediately.
    /// Failures are logged; there is nobody left to return them to.
    pub fn spawn_confirm_deletion(&self, target_id: impl Display) {
        let gate = self.clone();
        let target_id = target_id.to_string();

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = gate.confirm_deletion(&target_id).await {
                log::error!("Comment deletion for '{}' failed: {}", target_id, e);
            }
        });
    }
}

/// Gate wired to the current document and the configured prompt backend
pub fn page_gate(settings: PromptSettings) -> ConfirmationGate {
    ConfirmationGate::new(prompt_for(settings), Rc::new(DomFormLookup), settings.locale)
}
