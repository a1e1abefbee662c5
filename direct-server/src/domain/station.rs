//! A bus station and the routes that serve it.

use std::collections::HashSet;

use super::{RouteId, StationId};

/// A bus station together with the set of routes calling at it.
///
/// Stations are created by the dataset loader on first mention and gain a
/// route ID for every entry line that lists them, so a station produced
/// by parsing always has at least one route. The set is read-only once
/// loading finishes.
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    route_ids: HashSet<RouteId>,
}

impl Station {
    pub(crate) fn new(id: StationId) -> Self {
        Self {
            id,
            route_ids: HashSet::new(),
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    /// The routes calling at this station.
    pub fn route_ids(&self) -> &HashSet<RouteId> {
        &self.route_ids
    }

    /// Record that `route` calls at this station. Returns `false` if the
    /// route was already known.
    pub(crate) fn add_route(&mut self, route: RouteId) -> bool {
        self.route_ids.insert(route)
    }

    /// True if at least one route calls at both stations.
    ///
    /// Probes the larger set with each member of the smaller one and
    /// stops at the first shared route, so the cost is bounded by the
    /// smaller set; the intersection itself is never materialized.
    pub fn shares_route_with(&self, other: &Station) -> bool {
        let (small, large) = if self.route_ids.len() <= other.route_ids.len() {
            (&self.route_ids, &other.route_ids)
        } else {
            (&other.route_ids, &self.route_ids)
        };
        small.iter().any(|route| large.contains(route))
    }
}
