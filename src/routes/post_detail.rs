use dioxus::prelude::*;

use crate::components::CommentList;
use crate::utils::page_data::{read_page_data, PageData};
use crate::utils::DataState;

#[component]
pub fn PostDetail(post_id: u64) -> Element {
    let mut page = use_signal(|| DataState::<PageData>::Pending);

    // The data is already in the document, so reading it is synchronous
    use_effect(move || {
        let loaded = read_page_data();
        if let Err(e) = &loaded {
            log::error!("Failed to read comments for post {}: {:#}", post_id, e);
        }
        page.set(loaded.into());
    });

    let state = page.read();

    rsx! {
        section {
            h2 {
                class: "text-xl font-bold mb-4",
                "Comments"
            }

            if let Some(data) = state.data() {
                CommentList {
                    comments: data.comments.clone(),
                    csrf_token: data.csrf_token.clone(),
                }
            } else if let Some(msg) = state.error() {
                div {
                    class: "text-destructive text-sm",
                    "Could not load comments: {msg}"
                }
            }
        }
    }
}
