#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::prompt_settings;

// Modules
mod components;
mod hooks;
mod routes;
mod services;
mod stores;
mod utils;

use components::ConfirmPromptHost;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting comment gate");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Initialize stores on mount
    use_effect(move || {
        prompt_settings::init_settings();

        // Server-rendered delete buttons call window.showConfirmationModal
        if let Err(e) = utils::js_bridge::install_confirmation_bridge() {
            log::error!("Failed to install confirmation bridge: {:#}", e);
        }
    });

    rsx! {
        ConfirmPromptHost {}
        Router::<routes::Route> {}
    }
}
