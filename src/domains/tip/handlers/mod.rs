// Tip domain handlers
pub mod tip_handler;

pub use tip_handler::*;
