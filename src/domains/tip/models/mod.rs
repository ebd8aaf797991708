// Tip domain models
pub mod tip;

pub use tip::*;
