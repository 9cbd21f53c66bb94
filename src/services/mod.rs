// Services
// Prompt backends and the confirmation gate they feed

pub mod errors;
pub mod prompt;
pub mod sweetalert;
pub mod modal_prompt;
pub mod confirmation_gate;
