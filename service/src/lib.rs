pub mod cascade_deletion;
pub mod change_listener;
pub mod error;
