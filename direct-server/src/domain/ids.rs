//! Identifier newtypes.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A bus station identifier (SID).
///
/// Observed datasets only use non-negative values, but nothing here
/// relies on a bound.
///
/// # Examples
///
/// ```
/// use direct_server::domain::StationId;
///
/// let sid: StationId = "42".parse().unwrap();
/// assert_eq!(sid, StationId(42));
///
/// // Anything non-integer is rejected
/// assert!("4x2".parse::<StationId>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub i64);

/// A bus route identifier.
///
/// A route is never stored as a standalone entity; its ID only exists
/// inside the route sets of the stations it passes through.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub i64);

impl FromStr for StationId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(StationId)
    }
}

impl FromStr for RouteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(RouteId)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
