// Wallet domain module
pub mod handlers;
pub mod models;
pub mod provider;
pub mod routes;
pub mod services;

pub use handlers::*;
pub use models::*;
pub use provider::*;
pub use routes::*;
pub use services::*;
