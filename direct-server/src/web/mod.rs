//! Web layer for the direct bus route service.
//!
//! Exposes the connectivity query over HTTP. All the interesting logic
//! lives in [`crate::index`]; this layer only converts between the wire
//! shapes and the domain types.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
