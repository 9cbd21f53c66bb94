use dioxus::prelude::*;

use crate::components::icons::TrashIcon;
use crate::hooks::{use_comment_deletion, DeletionState};
use crate::utils::delete_form::delete_form_id;
use crate::utils::page_data::CommentView;

#[component]
pub fn CommentList(comments: Vec<CommentView>, csrf_token: Option<String>) -> Element {
    let deletion = use_comment_deletion();
    let state = deletion.state.read().clone();

    rsx! {
        div {
            class: "space-y-3",

            if let DeletionState::Error(msg) = state {
                div {
                    class: "px-4 py-2 rounded-lg bg-destructive/10 text-destructive text-sm",
                    "{msg}"
                }
            }

            if comments.is_empty() {
                p {
                    class: "text-muted-foreground text-sm",
                    "No comments yet"
                }
            }

            for comment in comments.iter() {
                CommentItem {
                    key: "{comment.id}",
                    comment: comment.clone(),
                    csrf_token: csrf_token.clone(),
                    on_delete: deletion.request,
                }
            }
        }
    }
}

/// A single comment. Deletable comments carry a hidden POST form whose id
/// is the key the confirmation gate submits.
#[component]
pub fn CommentItem(
    comment: CommentView,
    csrf_token: Option<String>,
    on_delete: Callback<u64>,
) -> Element {
    let created = comment.created.format("%d.%m.%Y %H:%M").to_string();
    let form_id = delete_form_id(comment.id);
    let comment_id = comment.id;

    rsx! {
        div {
            class: "p-4 border border-border rounded-lg",

            div {
                class: "flex items-center justify-between mb-2",
                div {
                    span { class: "font-semibold", "{comment.author}" }
                    span { class: "ml-2 text-xs text-muted-foreground", "{created}" }
                }

                if comment.can_delete {
                    button {
                        class: "p-1 rounded hover:bg-destructive/10 text-destructive transition",
                        title: "Delete",
                        onclick: move |_| on_delete.call(comment_id),
                        TrashIcon { class: "w-4 h-4" }
                    }
                }
            }

            p { class: "whitespace-pre-wrap", "{comment.text}" }

            if comment.can_delete {
                form {
                    id: "{form_id}",
                    class: "hidden",
                    method: "post",
                    action: "{comment.delete_url}",
                    if let Some(token) = csrf_token {
                        input { r#type: "hidden", name: "csrfmiddlewaretoken", value: "{token}" }
                    }
                }
            }
        }
    }
}
