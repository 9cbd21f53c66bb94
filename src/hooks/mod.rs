pub mod use_comment_deletion;

pub use use_comment_deletion::{use_comment_deletion, DeletionState};
