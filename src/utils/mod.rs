// Utility functions
// Helper functions for common operations

pub mod data_state;
pub mod delete_form;
pub mod page_data;
pub mod js_bridge;

pub use data_state::DataState;
