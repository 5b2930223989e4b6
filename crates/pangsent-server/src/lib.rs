//! pangsent Server
//!
//! HTTP surface for the feedback sentiment resolver: `POST /analyze`,
//! `GET /health` and `GET /metrics`.

pub mod config;
pub mod routes;
pub mod state;

pub use config::{ConfigOverrides, ServerConfig};
pub use routes::create_router;
pub use state::AppState;
