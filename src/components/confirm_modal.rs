use dioxus::prelude::*;

use crate::components::icons::{PromptIconView, XIcon};
use crate::services::prompt::{DismissReason, PromptConfig, PromptResult};

/// Confirmation modal rendering a [`PromptConfig`].
/// Every way of leaving the dialog resolves it exactly once through `on_resolve`.
#[component]
pub fn ConfirmModal(config: PromptConfig, on_resolve: EventHandler<PromptResult>) -> Element {
    let dismiss = move |reason: DismissReason| on_resolve.call(PromptResult::dismissed(reason));

    rsx! {
        // Modal overlay - clicking outside dismisses
        div {
            class: "fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4",
            onclick: move |_| dismiss(DismissReason::Backdrop),
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    dismiss(DismissReason::Esc);
                }
            },

            // Modal content
            div {
                class: "relative bg-card border border-border rounded-xl max-w-sm w-full p-6 shadow-xl text-center",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "modal-title",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "absolute top-3 right-3 p-1 rounded hover:bg-accent transition",
                    aria_label: "Close",
                    onclick: move |_| dismiss(DismissReason::Close),
                    XIcon { class: "w-4 h-4" }
                }

                div {
                    class: "flex justify-center mb-4",
                    PromptIconView { icon: config.icon }
                }

                h2 {
                    class: "text-lg font-bold mb-6",
                    id: "modal-title",
                    "{config.title}"
                }

                div {
                    class: "flex gap-3 justify-center",

                    // Confirm button (destructive style)
                    button {
                        class: "px-4 py-2 text-white rounded-lg hover:opacity-90 transition",
                        style: "background-color: {config.confirm_button_color}",
                        // Focus so Escape reaches the overlay's key handler
                        onmounted: move |evt| {
                            spawn(async move {
                                if let Err(e) = evt.set_focus(true).await {
                                    log::debug!("Could not focus confirm button: {:?}", e);
                                }
                            });
                        },
                        onclick: move |_| on_resolve.call(PromptResult::confirmed()),
                        "{config.confirm_button_text}"
                    }

                    if config.show_cancel_button {
                        button {
                            class: "px-4 py-2 text-white rounded-lg hover:opacity-90 transition",
                            style: "background-color: {config.cancel_button_color}",
                            onclick: move |_| dismiss(DismissReason::Cancel),
                            "{config.cancel_button_text}"
                        }
                    }
                }
            }
        }
    }
}
