// Tip domain services
pub mod state;
pub mod tip_service;
pub mod transfer_service;

pub use state::*;
pub use tip_service::*;
pub use transfer_service::*;
