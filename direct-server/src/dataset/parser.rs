//! Parsing of individual route entry lines.

use std::num::ParseIntError;
use std::str::FromStr;

use crate::domain::{RouteId, StationId};

use super::error::InvalidRoute;

/// One successfully parsed entry line: a route and the stations it calls
/// at, in file order.
///
/// Station order is not used by the connectivity query but is preserved
/// so entries can be echoed faithfully when debugging a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub route: RouteId,
    pub stations: Vec<StationId>,
}

/// Parse a single route entry line.
///
/// The format is `ROUTE_ID SID SID [SID ...]`: whitespace-separated
/// integer tokens, the first being the route ID, followed by at least two
/// station IDs.
pub fn parse_route_line(line: &str) -> Result<RouteEntry, InvalidRoute> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    // A route ID plus at least two stations.
    if tokens.len() < 3 {
        return Err(InvalidRoute::TooFewStations);
    }

    let route = parse_token(tokens[0])?;
    let stations = tokens[1..]
        .iter()
        .map(|t| parse_token(t))
        .collect::<Result<Vec<StationId>, _>>()?;

    Ok(RouteEntry { route, stations })
}

fn parse_token<T>(token: &str) -> Result<T, InvalidRoute>
where
    T: FromStr<Err = ParseIntError>,
{
    token.parse().map_err(|_| InvalidRoute::BadToken {
        token: token.to_string(),
    })
}
