#![forbid(unsafe_code)]

//! Navigation directions and their coordinate transforms.
//!
//! Each direction owns a rotation that maps absolute `(x, y)` into a
//! direction-relative `(fwd, ort)` frame. Scoring code only ever looks at
//! `fwd`/`ort`, so one algorithm serves all four directions.
//!
//! | direction | `(fwd, ort)` |
//! |-----------|--------------|
//! | left      | `(-x, -y)`   |
//! | right     | `( x,  y)`   |
//! | up        | `(-y,  x)`   |
//! | down      | `( y, -x)`   |
//!
//! The transforms are sign flips and axis swaps only, so
//! `from_unified(to_unified(p)) == p` holds exactly for every finite `p`.

use std::fmt;
use std::str::FromStr;

use crate::geometry::{Bounds, DirectedBounds, Point, UnifiedPoint};

/// A cardinal navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Lowercase token for this direction (`"left"`, `"right"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Map an absolute point into this direction's frame.
    #[inline]
    #[must_use]
    pub fn to_unified(self, p: Point) -> UnifiedPoint {
        match self {
            Direction::Left => UnifiedPoint::new(-p.x, -p.y),
            Direction::Right => UnifiedPoint::new(p.x, p.y),
            Direction::Up => UnifiedPoint::new(-p.y, p.x),
            Direction::Down => UnifiedPoint::new(p.y, -p.x),
        }
    }

    /// Map a direction-relative point back into absolute coordinates.
    #[inline]
    #[must_use]
    pub fn from_unified(self, u: UnifiedPoint) -> Point {
        match self {
            Direction::Left => Point::new(-u.fwd, -u.ort),
            Direction::Right => Point::new(u.fwd, u.ort),
            Direction::Up => Point::new(u.ort, -u.fwd),
            Direction::Down => Point::new(-u.ort, u.fwd),
        }
    }

    /// Re-express `bounds` in this direction's frame.
    ///
    /// Both corners are transformed and then re-sorted per axis, because the
    /// transform may flip which corner is the minimum.
    #[must_use]
    pub fn directed_bounds(self, bounds: &Bounds) -> DirectedBounds {
        let a = self.to_unified(Point::new(bounds.x1, bounds.y1));
        let b = self.to_unified(Point::new(bounds.x2, bounds.y2));
        DirectedBounds::from_corners(a, b)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A direction token that is not one of `left`, `right`, `up`, `down`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    /// The rejected token, as given.
    pub token: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction {:?}", self.token)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(ParseDirectionError {
                token: s.to_owned(),
            }),
        }
    }
}
