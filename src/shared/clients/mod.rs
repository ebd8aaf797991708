// Shared clients (outbound HTTP + ports)
pub mod identity;
pub mod memory;
pub mod mirror_node;

pub use identity::*;
pub use memory::*;
pub use mirror_node::*;
