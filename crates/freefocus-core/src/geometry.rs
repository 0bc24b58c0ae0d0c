#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Absolute coordinates use a top-left origin: `x` grows to the right and
//! `y` grows downwards. All values are `f64` so that fractional layouts
//! (sub-pixel boxes, half-width centers) stay exact through the direction
//! transforms.

/// A point in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point expressed in a direction's frame.
///
/// `fwd` grows in the direction of travel, `ort` runs across it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnifiedPoint {
    pub fwd: f64,
    pub ort: f64,
}

impl UnifiedPoint {
    /// Create a new direction-relative point.
    #[inline]
    pub const fn new(fwd: f64, ort: f64) -> Self {
        Self { fwd, ort }
    }
}

/// An axis-aligned box given by its two corners.
///
/// Invariant: `x1 <= x2` and `y1 <= y2`. [`Bounds::new`] normalizes the
/// corner order so the invariant holds for any input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Left edge.
    pub x1: f64,
    /// Top edge.
    pub y1: f64,
    /// Right edge.
    pub x2: f64,
    /// Bottom edge.
    pub y2: f64,
}

impl Bounds {
    /// Create bounds from two corners in any order.
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// Create bounds from an origin and a size.
    ///
    /// Negative sizes are clamped to zero.
    #[inline]
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width.max(0.0),
            y2: y + height.max(0.0),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Top-left corner.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Offset of the geometric center from the top-left corner.
    #[inline]
    pub fn center_offset(&self) -> Point {
        Point::new(self.width() / 2.0, self.height() / 2.0)
    }

    /// Translate a box-local offset into absolute coordinates.
    #[inline]
    pub fn to_absolute(&self, local: Point) -> Point {
        Point::new(local.x + self.x1, local.y + self.y1)
    }

    /// Translate an absolute point into an offset from the top-left corner.
    #[inline]
    pub fn to_local(&self, absolute: Point) -> Point {
        Point::new(absolute.x - self.x1, absolute.y - self.y1)
    }

    /// Position and size in the `{left, top, width, height}` shape.
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            left: self.x1,
            top: self.y1,
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Position and size of an element, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A box re-expressed in a direction's frame.
///
/// Invariant: `fwd1 <= fwd2` and `ort1 <= ort2`. `fwd1` is the edge met
/// first when travelling in the direction, `fwd2` the edge left last.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DirectedBounds {
    pub fwd1: f64,
    pub ort1: f64,
    pub fwd2: f64,
    pub ort2: f64,
}

impl DirectedBounds {
    /// Build normalized directed bounds from two transformed corners.
    #[inline]
    pub fn from_corners(a: UnifiedPoint, b: UnifiedPoint) -> Self {
        Self {
            fwd1: a.fwd.min(b.fwd),
            ort1: a.ort.min(b.ort),
            fwd2: a.fwd.max(b.fwd),
            ort2: a.ort.max(b.ort),
        }
    }

    /// Clamp an orthogonal coordinate into `[ort1, ort2]`.
    #[inline]
    pub fn clamp_ort(&self, ort: f64) -> f64 {
        ort.max(self.ort1).min(self.ort2)
    }

    /// Length of the intersection of the two orthogonal spans, never negative.
    ///
    /// The span starts from `self`'s bounds and is narrowed by `other`; the
    /// resulting length is the same either way round.
    pub fn overlap(&self, other: &DirectedBounds) -> f64 {
        let mut ort1 = self.ort1;
        let mut ort2 = self.ort2;
        if other.ort1 > ort1 {
            ort1 = other.ort1;
        }
        if other.ort2 < ort2 {
            ort2 = other.ort2;
        }
        (ort2 - ort1).max(0.0)
    }
}
