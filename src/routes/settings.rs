use dioxus::prelude::*;

use crate::services::prompt::Locale;
use crate::stores::prompt_settings::{
    get_settings, set_settings, PromptBackend, PromptSettings, PROMPT_SETTINGS,
};

#[component]
pub fn Settings() -> Element {
    let current = *PROMPT_SETTINGS.read();

    let option_class = |active: bool| {
        if active {
            "px-4 py-2 rounded-lg bg-blue-500 text-white"
        } else {
            "px-4 py-2 rounded-lg border border-border hover:bg-accent transition"
        }
    };

    rsx! {
        div {
            class: "space-y-8",

            section {
                h2 { class: "text-lg font-semibold mb-3", "Confirmation dialog" }
                div {
                    class: "flex gap-3",
                    for backend in [PromptBackend::SweetAlert, PromptBackend::InApp] {
                        button {
                            key: "{backend.as_str()}",
                            class: option_class(current.backend == backend),
                            onclick: move |_| {
                                set_settings(PromptSettings { backend, ..get_settings() })
                            },
                            "{backend_label(backend)}"
                        }
                    }
                }
            }

            section {
                h2 { class: "text-lg font-semibold mb-3", "Language" }
                div {
                    class: "flex gap-3",
                    for locale in [Locale::Ru, Locale::En] {
                        button {
                            key: "{locale.as_str()}",
                            class: option_class(current.locale == locale),
                            onclick: move |_| {
                                set_settings(PromptSettings { locale, ..get_settings() })
                            },
                            "{locale_label(locale)}"
                        }
                    }
                }
            }
        }
    }
}

fn backend_label(backend: PromptBackend) -> &'static str {
    match backend {
        PromptBackend::SweetAlert => "SweetAlert2",
        PromptBackend::InApp => "Built-in",
    }
}

fn locale_label(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "Русский",
        Locale::En => "English",
    }
}
