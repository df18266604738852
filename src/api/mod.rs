//! API layer - HTTP endpoints

pub mod checkins;
pub mod health;
pub mod router;
pub mod state;
pub mod types;

pub use router::{create_router, create_router_with_ui};
pub use state::AppState;
