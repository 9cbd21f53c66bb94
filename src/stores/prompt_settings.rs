use std::rc::Rc;

use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::services::modal_prompt::InAppPrompt;
use crate::services::prompt::{ConfirmationPrompt, Locale};
use crate::services::sweetalert::SweetAlertPrompt;

/// Which prompt implementation asks for confirmation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptBackend {
    /// `Swal.fire` from the host page
    #[default]
    SweetAlert,
    /// `ConfirmPromptHost` rendered by this app
    InApp,
}

impl PromptBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptBackend::SweetAlert => "sweetalert",
            PromptBackend::InApp => "in-app",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSettings {
    pub backend: PromptBackend,
    pub locale: Locale,
}

/// Global prompt settings
pub static PROMPT_SETTINGS: GlobalSignal<PromptSettings> = Signal::global(PromptSettings::default);

const STORAGE_KEY: &str = "comment_gate_prompt_settings";

/// Read persisted settings without touching the global signal.
/// Usable outside the Dioxus runtime (e.g. from the JS bridge).
pub fn load_settings() -> PromptSettings {
    LocalStorage::get::<PromptSettings>(STORAGE_KEY).unwrap_or_default()
}

/// Load settings from localStorage, falling back to defaults
pub fn init_settings() {
    let settings = load_settings();
    *PROMPT_SETTINGS.write() = settings;
    log::info!("Prompt settings: {:?}", settings);
}

/// Update and persist settings
pub fn set_settings(settings: PromptSettings) {
    if *PROMPT_SETTINGS.read() == settings {
        return;
    }

    *PROMPT_SETTINGS.write() = settings;
    if let Err(e) = LocalStorage::set(STORAGE_KEY, settings) {
        log::warn!("Failed to persist prompt settings: {}", e);
    }
    log::info!("Prompt settings changed to: {:?}", settings);
}

/// Get current settings
pub fn get_settings() -> PromptSettings {
    *PROMPT_SETTINGS.read()
}

/// Prompt implementation selected by `settings`
pub fn prompt_for(settings: PromptSettings) -> Rc<dyn ConfirmationPrompt> {
    match settings.backend {
        PromptBackend::SweetAlert => Rc::new(SweetAlertPrompt),
        PromptBackend::InApp => Rc::new(InAppPrompt::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_strings() {
        assert_eq!(PromptBackend::SweetAlert.as_str(), "sweetalert");
        assert_eq!(PromptBackend::InApp.as_str(), "in-app");
    }

    #[test]
    fn test_settings_json_round_trip() {
        let settings = PromptSettings { backend: PromptBackend::InApp, locale: Locale::En };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(serde_json::from_str::<PromptSettings>(&json).unwrap(), settings);
    }

    #[test]
    fn test_defaults() {
        let settings = PromptSettings::default();
        assert_eq!(settings.backend, PromptBackend::SweetAlert);
        assert_eq!(settings.locale, Locale::Ru);
    }
}
