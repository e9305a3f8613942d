// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod query;
pub mod router;
pub mod state;

pub use router::{create_router, with_static_assets};
pub use state::AppState;
