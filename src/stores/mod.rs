// Global state management
// Stores provide shared state across the application

pub mod prompt_queue;
pub mod prompt_settings;
