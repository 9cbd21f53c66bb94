use dioxus::prelude::*;
use dioxus::core::schedule_update;

use crate::components::ConfirmModal;
use crate::stores::prompt_queue::prompt_queue;

/// Renders queued in-app prompts, one at a time.
/// While mounted, the in-app prompt backend is available.
#[component]
pub fn ConfirmPromptHost() -> Element {
    let queue = use_hook(prompt_queue);

    use_hook({
        let queue = queue.clone();
        move || {
            let rerender = schedule_update();
            queue.subscribe(move || rerender());
        }
    });

    use_drop({
        let queue = queue.clone();
        move || queue.unsubscribe()
    });

    let Some((id, config)) = queue.front() else {
        return rsx! {};
    };

    rsx! {
        ConfirmModal {
            key: "{id}",
            config,
            on_resolve: move |result| {
                if !queue.resolve(id, result) {
                    log::warn!("Prompt {} was already resolved", id);
                }
            },
        }
    }
}
