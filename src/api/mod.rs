//! API layer - HTTP endpoints and routing

pub mod health;
pub mod router;
pub mod state;
pub mod types;
pub mod users;

pub use router::create_router;
pub use state::AppState;
