//! Confirmation prompt model
//!
//! The options object and result shape follow SweetAlert2 so the same types
//! drive both the `Swal.fire` backend and the in-app modal.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::errors::GateError;

/// Severity icon shown in the prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptIcon {
    Warning,
    Error,
    Success,
    Info,
    Question,
}

/// Language of the fixed prompt copy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }
}

pub const CONFIRM_BUTTON_COLOR: &str = "#d33";
pub const CANCEL_BUTTON_COLOR: &str = "#000000";

/// Options passed to the prompt capability
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptConfig {
    pub title: String,
    pub icon: PromptIcon,
    pub show_cancel_button: bool,
    pub confirm_button_color: String,
    pub cancel_button_color: String,
    pub confirm_button_text: String,
    pub cancel_button_text: String,
}

impl PromptConfig {
    /// Fixed prompt asking whether a comment should be deleted.
    /// Identical for every comment; only the locale changes the copy.
    pub fn delete_comment(locale: Locale) -> Self {
        let (title, confirm, cancel) = match locale {
            Locale::Ru => ("Вы точно хотите удалить комментарий?", "Да!", "Нет"),
            Locale::En => ("Do you really want to delete this comment?", "Yes!", "No"),
        };

        Self {
            title: title.to_string(),
            icon: PromptIcon::Warning,
            show_cancel_button: true,
            confirm_button_color: CONFIRM_BUTTON_COLOR.to_string(),
            cancel_button_color: CANCEL_BUTTON_COLOR.to_string(),
            confirm_button_text: confirm.to_string(),
            cancel_button_text: cancel.to_string(),
        }
    }
}

/// Why a prompt was dismissed without confirmation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DismissReason {
    Cancel,
    Backdrop,
    Close,
    Esc,
    Timer,
}

/// Resolved value of a prompt
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptResult {
    #[serde(default)]
    pub is_confirmed: bool,
    #[serde(default)]
    pub is_denied: bool,
    #[serde(default)]
    pub is_dismissed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismiss: Option<DismissReason>,
}

impl PromptResult {
    pub fn confirmed() -> Self {
        Self { is_confirmed: true, ..Default::default() }
    }

    pub fn dismissed(reason: DismissReason) -> Self {
        Self { is_dismissed: true, dismiss: Some(reason), ..Default::default() }
    }

    /// Only an explicit confirmation counts; denial and every kind of dismissal cancel.
    pub fn decision(&self) -> Decision {
        if self.is_confirmed {
            Decision::Confirmed
        } else {
            Decision::Cancelled(self.dismiss)
        }
    }
}

/// Outcome of the user's choice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Cancelled(Option<DismissReason>),
}

/// Capability that asks the user a yes/no question and resolves once
#[async_trait(?Send)]
pub trait ConfirmationPrompt {
    async fn confirm(&self, config: &PromptConfig) -> Result<PromptResult, GateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_comment_options_match_sweetalert_shape() {
        let config = PromptConfig::delete_comment(Locale::Ru);
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["title"], "Вы точно хотите удалить комментарий?");
        assert_eq!(json["icon"], "warning");
        assert_eq!(json["showCancelButton"], true);
        assert_eq!(json["confirmButtonColor"], "#d33");
        assert_eq!(json["cancelButtonColor"], "#000000");
        assert_eq!(json["confirmButtonText"], "Да!");
        assert_eq!(json["cancelButtonText"], "Нет");
    }

    #[test]
    fn test_locales_share_icon_and_colors() {
        let ru = PromptConfig::delete_comment(Locale::Ru);
        let en = PromptConfig::delete_comment(Locale::En);

        assert_eq!(ru.icon, en.icon);
        assert_eq!(ru.confirm_button_color, en.confirm_button_color);
        assert_eq!(ru.cancel_button_color, en.cancel_button_color);
        assert_ne!(ru.title, en.title);
    }

    #[test]
    fn test_result_from_swal_payload() {
        let confirmed: PromptResult = serde_json::from_str(
            r#"{"isConfirmed":true,"isDenied":false,"isDismissed":false,"value":true}"#,
        )
        .unwrap();
        assert_eq!(confirmed.decision(), Decision::Confirmed);

        let esc: PromptResult = serde_json::from_str(
            r#"{"isConfirmed":false,"isDenied":false,"isDismissed":true,"dismiss":"esc"}"#,
        )
        .unwrap();
        assert_eq!(esc.decision(), Decision::Cancelled(Some(DismissReason::Esc)));
    }

    #[test]
    fn test_denied_is_not_a_confirmation() {
        let denied = PromptResult { is_denied: true, ..Default::default() };
        assert_eq!(denied.decision(), Decision::Cancelled(None));
    }

    #[test]
    fn test_locale_strings() {
        assert_eq!(Locale::Ru.as_str(), "ru");
        assert_eq!(Locale::En.as_str(), "en");
    }
}
