// Shared errors
pub mod tip_error;
pub mod wallet_error;

pub use tip_error::*;
pub use wallet_error::*;
