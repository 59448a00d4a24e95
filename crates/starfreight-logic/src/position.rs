//! 2-D map coordinates and movement destinations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::report;

/// 2-D map coordinate.
///
/// Co-location checks use exact equality on both axes; there is no distance
/// model, so "close enough" does not exist — a vessel is either on a planet
/// or it is not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Position {
    fn from(p: [f64; 2]) -> Self {
        Self { x: p[0], y: p[1] }
    }
}

impl fmt::Display for Position {
    /// Renders as `x,y`, matching the report-line coordinate format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", report::tons(self.x), report::tons(self.y))
    }
}

/// Movement target for [`crate::vessel::Vessel::fly_to`].
///
/// The two cases — a raw coordinate and "wherever that body is" — are
/// explicit variants rather than a polymorphic argument, so a caller can see
/// at the call site which one it is passing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Destination {
    /// A raw map coordinate.
    Point(Position),
    /// The position of a named body, captured when the destination is built.
    Body(Position),
}

impl Destination {
    /// Coordinate the vessel ends up at.
    pub fn position(self) -> Position {
        match self {
            Self::Point(p) | Self::Body(p) => p,
        }
    }
}

impl From<Position> for Destination {
    fn from(p: Position) -> Self {
        Self::Point(p)
    }
}

impl From<[f64; 2]> for Destination {
    fn from(p: [f64; 2]) -> Self {
        Self::Point(p.into())
    }
}
