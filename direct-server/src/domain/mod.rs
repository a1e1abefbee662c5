//! Domain types for the bus route service.
//!
//! Station and route identifiers are plain integers in the dataset, but
//! they live in independent numeric spaces; the newtypes here keep the
//! two from being mixed up.

mod ids;
mod station;

pub use ids::{RouteId, StationId};
pub use station::Station;
