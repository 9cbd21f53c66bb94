//! Prompt Queue Store - pending in-app confirmation prompts
//!
//! Requests are answered in FIFO order by the mounted prompt host. Each
//! request owns a one-shot responder, so it resolves exactly once; dropping
//! the request (host unmounted, queue cleared) closes the channel.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tokio::sync::oneshot;

use crate::services::prompt::{PromptConfig, PromptResult};

/// A prompt waiting for the user
pub struct PendingPrompt {
    pub id: u64,
    pub config: PromptConfig,
    responder: oneshot::Sender<PromptResult>,
}

#[derive(Default)]
pub struct PromptQueue {
    next_id: u64,
    pending: VecDeque<PendingPrompt>,
}

impl PromptQueue {
    /// Enqueue a prompt and get the receiver for its result
    pub fn push(&mut self, config: PromptConfig) -> (u64, oneshot::Receiver<PromptResult>) {
        let (responder, receiver) = oneshot::channel();
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push_back(PendingPrompt { id, config, responder });
        (id, receiver)
    }

    /// Prompt currently presented to the user
    pub fn front(&self) -> Option<&PendingPrompt> {
        self.pending.front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Answer a prompt. Returns false if it was already resolved or never existed.
    pub fn resolve(&mut self, id: u64, result: PromptResult) -> bool {
        let Some(pos) = self.pending.iter().position(|p| p.id == id) else {
            return false;
        };
        if let Some(prompt) = self.pending.remove(pos) {
            // The caller may have stopped waiting; nothing to do then
            let _ = prompt.responder.send(result);
        }
        true
    }

    /// Drop every pending prompt, closing their channels
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

type Listener = Box<dyn Fn()>;

/// Shared handle to the queue plus the host's change listener
#[derive(Clone, Default)]
pub struct PromptQueueHandle {
    queue: Rc<RefCell<PromptQueue>>,
    listener: Rc<RefCell<Option<Listener>>>,
}

impl PromptQueueHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the host's re-render callback. Only one host is active at a time.
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        if self.listener.borrow().is_some() {
            log::warn!("Replacing an already mounted prompt host");
        }
        *self.listener.borrow_mut() = Some(Box::new(listener));
    }

    /// Detach the host. Prompts it never answered are dismissed.
    pub fn unsubscribe(&self) {
        self.listener.borrow_mut().take();
        let mut queue = self.queue.borrow_mut();
        if !queue.is_empty() {
            log::debug!("Dismissing {} unanswered prompts", queue.len());
            queue.clear();
        }
    }

    pub fn has_host(&self) -> bool {
        self.listener.borrow().is_some()
    }

    pub fn push(&self, config: PromptConfig) -> (u64, oneshot::Receiver<PromptResult>) {
        let pushed = self.queue.borrow_mut().push(config);
        self.notify();
        pushed
    }

    pub fn resolve(&self, id: u64, result: PromptResult) -> bool {
        let found = self.queue.borrow_mut().resolve(id, result);
        if found {
            self.notify();
        }
        found
    }

    /// Snapshot of the front prompt for rendering
    pub fn front(&self) -> Option<(u64, PromptConfig)> {
        self.queue.borrow().front().map(|p| (p.id, p.config.clone()))
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    fn notify(&self) {
        if let Some(listener) = self.listener.borrow().as_ref() {
            listener();
        }
    }
}

thread_local! {
    static PROMPT_QUEUE: PromptQueueHandle = PromptQueueHandle::new();
}

/// Page-wide prompt queue shared by the host component and the in-app prompt
pub fn prompt_queue() -> PromptQueueHandle {
    PROMPT_QUEUE.with(|q| q.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::prompt::{DismissReason, Locale};
    use std::cell::Cell;

    fn config() -> PromptConfig {
        PromptConfig::delete_comment(Locale::Ru)
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = PromptQueue::default();
        let (first, _rx1) = queue.push(config());
        let (second, _rx2) = queue.push(config());

        assert_ne!(first, second);
        assert_eq!(queue.front().map(|p| p.id), Some(first));

        assert!(queue.resolve(first, PromptResult::confirmed()));
        assert_eq!(queue.front().map(|p| p.id), Some(second));
    }

    #[test]
    fn test_resolves_exactly_once() {
        let mut queue = PromptQueue::default();
        let (id, mut rx) = queue.push(config());

        assert!(queue.resolve(id, PromptResult::confirmed()));
        assert!(!queue.resolve(id, PromptResult::dismissed(DismissReason::Cancel)));
        assert_eq!(rx.try_recv().unwrap(), PromptResult::confirmed());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_resolve_out_of_order() {
        let mut queue = PromptQueue::default();
        let (first, mut rx1) = queue.push(config());
        let (second, mut rx2) = queue.push(config());

        assert!(queue.resolve(second, PromptResult::dismissed(DismissReason::Esc)));
        assert!(queue.resolve(first, PromptResult::confirmed()));

        assert!(rx1.try_recv().unwrap().is_confirmed);
        assert_eq!(rx2.try_recv().unwrap().dismiss, Some(DismissReason::Esc));
    }

    #[test]
    fn test_clear_closes_channels() {
        let mut queue = PromptQueue::default();
        let (_, mut rx) = queue.push(config());
        queue.clear();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_handle_notifies_host() {
        let handle = PromptQueueHandle::new();
        let renders = Rc::new(Cell::new(0));
        let counter = renders.clone();

        assert!(!handle.has_host());
        handle.subscribe(move || counter.set(counter.get() + 1));
        assert!(handle.has_host());

        let (id, _rx) = handle.push(config());
        assert_eq!(renders.get(), 1);
        assert_eq!(handle.front().map(|(front, _)| front), Some(id));

        handle.resolve(id, PromptResult::confirmed());
        assert_eq!(renders.get(), 2);
        assert_eq!(handle.pending(), 0);
    }

    #[test]
    fn test_unsubscribe_dismisses_pending() {
        let handle = PromptQueueHandle::new();
        handle.subscribe(|| {});
        let (_, mut rx) = handle.push(config());

        handle.unsubscribe();
        assert!(!handle.has_host());
        assert!(rx.try_recv().is_err());
    }
}
