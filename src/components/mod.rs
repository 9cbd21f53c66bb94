// UI Components
// This module contains all reusable UI components

pub mod icons;
pub mod confirm_modal;
pub mod prompt_host;
pub mod comment_list;

pub use confirm_modal::ConfirmModal;
pub use prompt_host::ConfirmPromptHost;
pub use comment_list::CommentList;
