//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Query parameters of the direct-route endpoint.
///
/// Both parameters are taken as raw strings so that a malformed value
/// degrades to a "no connection" answer instead of a rejected request.
#[derive(Debug, Deserialize)]
pub struct DirectRequest {
    /// Departure station ID.
    pub dep_sid: Option<String>,

    /// Arrival station ID.
    pub arr_sid: Option<String>,
}

/// Response of the direct-route endpoint.
///
/// The three field names are the wire contract and must not change.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DirectResponse {
    /// Departure station ID as understood by the server; `null` when the
    /// parameter was missing or not an integer.
    pub dep_sid: Option<i64>,

    /// Arrival station ID, same convention.
    pub arr_sid: Option<i64>,

    /// Whether at least one bus route serves both stations.
    pub direct_bus_route: bool,
}
