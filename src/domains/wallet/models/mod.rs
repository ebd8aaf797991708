// Wallet domain models
pub mod account;
pub mod transfer;
pub mod wallet;

pub use account::*;
pub use transfer::*;
pub use wallet::*;
