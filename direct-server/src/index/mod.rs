//! The station-to-routes inverted index and the connectivity query.

use std::collections::HashMap;

use crate::dataset::RouteEntry;
use crate::domain::{Station, StationId};

/// Inverted index from station ID to the routes calling at that station.
///
/// Built once by the dataset loader and read-only afterwards, so any
/// number of threads can query it without locking. There is no ambient
/// shared state; tests build as many independent indices as they like.
#[derive(Debug)]
pub struct RouteIndex {
    stations: HashMap<StationId, Station>,
}

impl RouteIndex {
    pub(crate) fn new() -> Self {
        Self {
            stations: HashMap::new(),
        }
    }

    /// Record every station on an entry line, creating stations on first
    /// mention.
    pub(crate) fn add_entry(&mut self, entry: &RouteEntry) {
        for &sid in &entry.stations {
            self.stations
                .entry(sid)
                .or_insert_with(|| Station::new(sid))
                .add_route(entry.route);
        }
    }

    /// Look up a station by ID.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    /// Number of distinct stations in the index.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// True if at least one route calls at both stations.
    ///
    /// A station ID the index has never seen has no connections, and
    /// `dep == arr` answers `true` whenever the station has any route at
    /// all; "shares a route" does not special-case identical stations.
    pub fn has_connection(&self, dep: StationId, arr: StationId) -> bool {
        let Some(dep) = self.stations.get(&dep) else {
            return false;
        };
        let Some(arr) = self.stations.get(&arr) else {
            return false;
        };
        dep.shares_route_with(arr)
    }
}
