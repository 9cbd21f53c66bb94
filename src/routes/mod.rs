use dioxus::prelude::*;

pub mod post_detail;
pub mod settings;

use post_detail::PostDetail;
use settings::Settings;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/posts/:post_id")]
        PostDetail { post_id: u64 },

        #[route("/settings/prompt")]
        Settings {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-background transition-colors",
            main {
                class: "max-w-2xl mx-auto px-4 py-6",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    log::warn!("No route for /{}", path);

    rsx! {
        div {
            class: "text-center py-12 text-muted-foreground",
            "Nothing to show at /{path}"
        }
    }
}
