//! SweetAlert2 confirmation prompt
//!
//! Drives the page-global `Swal.fire` loaded by the host page.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use super::errors::GateError;
use super::prompt::{ConfirmationPrompt, PromptConfig, PromptResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Swal, js_name = fire)]
    fn swal_fire(options: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

/// Whether the host page loaded SweetAlert2
pub fn is_sweetalert_available() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::window;
        if let Some(window) = window() {
            return js_sys::Reflect::has(&window, &JsValue::from_str("Swal")).unwrap_or(false);
        }
    }
    false
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SweetAlertPrompt;

#[async_trait(?Send)]
impl ConfirmationPrompt for SweetAlertPrompt {
    async fn confirm(&self, config: &PromptConfig) -> Result<PromptResult, GateError> {
        if !is_sweetalert_available() {
            return Err(GateError::PromptUnavailable("window.Swal is not defined".to_string()));
        }

        let options = serde_wasm_bindgen::to_value(config)
            .map_err(|e| GateError::Prompt(format!("Failed to build Swal options: {}", e)))?;
        let promise = swal_fire(&options)
            .map_err(|e| GateError::Prompt(format!("Swal.fire threw: {:?}", e)))?;

        let value = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| GateError::Prompt(format!("Swal.fire rejected: {:?}", e)))?;

        serde_wasm_bindgen::from_value(value)
            .map_err(|e| GateError::Prompt(format!("Unexpected Swal result: {}", e)))
    }
}
