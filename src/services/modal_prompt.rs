//! In-app confirmation prompt rendered by `ConfirmPromptHost`

use async_trait::async_trait;

use super::errors::GateError;
use super::prompt::{ConfirmationPrompt, DismissReason, PromptConfig, PromptResult};
use crate::stores::prompt_queue::{prompt_queue, PromptQueueHandle};

pub struct InAppPrompt {
    queue: PromptQueueHandle,
}

impl InAppPrompt {
    /// Prompt backed by the page-wide queue
    pub fn new() -> Self {
        Self::with_queue(prompt_queue())
    }

    pub fn with_queue(queue: PromptQueueHandle) -> Self {
        Self { queue }
    }
}

impl Default for InAppPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ConfirmationPrompt for InAppPrompt {
    async fn confirm(&self, config: &PromptConfig) -> Result<PromptResult, GateError> {
        if !self.queue.has_host() {
            return Err(GateError::PromptUnavailable("no prompt host is mounted".to_string()));
        }

        let (id, receiver) = self.queue.push(config.clone());
        log::debug!("Queued in-app prompt {} ({} pending)", id, self.queue.pending());

        match receiver.await {
            Ok(result) => Ok(result),
            Err(_) => {
                log::debug!("In-app prompt {} dropped before an answer", id);
                Ok(PromptResult::dismissed(DismissReason::Close))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::prompt::{Decision, Locale};
    use futures::executor::block_on;
    use futures::future::join;

    #[test]
    fn test_unavailable_without_host() {
        let prompt = InAppPrompt::with_queue(PromptQueueHandle::new());
        let result = block_on(prompt.confirm(&PromptConfig::delete_comment(Locale::Ru)));
        assert!(matches!(result, Err(GateError::PromptUnavailable(_))));
    }

    #[test]
    fn test_host_answer_reaches_caller() {
        let queue = PromptQueueHandle::new();
        let host = queue.clone();
        // Answer as soon as the prompt shows up, like a user clicking "confirm"
        queue.subscribe(move || {
            if let Some((id, _)) = host.front() {
                host.resolve(id, PromptResult::confirmed());
            }
        });

        let prompt = InAppPrompt::with_queue(queue);
        let result = block_on(prompt.confirm(&PromptConfig::delete_comment(Locale::Ru))).unwrap();
        assert_eq!(result.decision(), Decision::Confirmed);
    }

    #[test]
    fn test_host_unmount_dismisses() {
        let queue = PromptQueueHandle::new();
        queue.subscribe(|| {});
        let prompt = InAppPrompt::with_queue(queue.clone());

        let config = PromptConfig::delete_comment(Locale::Ru);
        let (result, _) = block_on(join(prompt.confirm(&config), async {
            queue.unsubscribe();
        }));

        assert_eq!(
            result.unwrap().decision(),
            Decision::Cancelled(Some(DismissReason::Close))
        );
    }
}
