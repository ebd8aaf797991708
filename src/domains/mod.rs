// Domain modules
pub mod tip;
pub mod wallet;
