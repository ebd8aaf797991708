// Wallet domain services
pub mod state;
pub mod verifier;
pub mod wallet_service;

pub use state::*;
pub use verifier::*;
pub use wallet_service::*;
