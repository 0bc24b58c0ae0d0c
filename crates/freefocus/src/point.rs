#![forbid(unsafe_code)]

//! Focus point tracking.
//!
//! The focus point is the engine's only memory across moves: a position
//! inside the most recently focused element that says where navigation is
//! coming from. It is what keeps repeated `down` presses in one column
//! instead of snapping to each element's center.
//!
//! # Transitions
//!
//! - [`FocusPoint::enter`] runs on the element a move starts from. If that
//!   element is not the one the point is anchored to (focus got there some
//!   other way, e.g. a click), the point resets to the element's center.
//!   The direction-relative position is then recomputed with `fwd` pushed
//!   to the trailing edge (`fwd2`) of the source box.
//! - [`FocusPoint::arrive`] runs on the chosen target. The point lands on
//!   the target's leading edge (`fwd1`), keeping the previous `ort` as far
//!   as the target's orthogonal span allows.
//!
//! Both transitions are idempotent for equal inputs.

use freefocus_core::{Bounds, Direction, Point, UnifiedPoint};

use crate::id::ElementId;

/// Tracked navigation origin.
///
/// Callers hold one value per navigation surface and thread it through
/// successive moves; [`Navigator::navigate`](crate::Navigator::navigate)
/// returns the successor alongside the chosen target.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusPoint {
    owner: Option<ElementId>,
    local_offset: Point,
    directed: Option<UnifiedPoint>,
}

impl FocusPoint {
    /// A point anchored to nothing. The first move anchors it.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            owner: None,
            local_offset: Point::new(0.0, 0.0),
            directed: None,
        }
    }

    /// Element the point is anchored to.
    #[must_use]
    pub const fn owner(&self) -> Option<ElementId> {
        self.owner
    }

    /// Position relative to the owner's top-left corner, in absolute axes.
    #[must_use]
    pub const fn local_offset(&self) -> Point {
        self.local_offset
    }

    /// Direction-relative position computed by the last [`enter`](Self::enter).
    #[must_use]
    pub const fn directed(&self) -> Option<UnifiedPoint> {
        self.directed
    }

    /// Absolute position of the point given its owner's current box.
    #[must_use]
    pub fn absolute(&self, owner_bounds: &Bounds) -> Point {
        owner_bounds.to_absolute(self.local_offset)
    }

    /// Prepare the point for a move leaving `id` (measured as `bounds`) in
    /// `direction`. Returns the direction-relative origin for scoring.
    pub fn enter(&mut self, id: ElementId, bounds: &Bounds, direction: Direction) -> UnifiedPoint {
        if self.owner != Some(id) {
            self.owner = Some(id);
            self.local_offset = bounds.center_offset();
        }
        let mut directed = direction.to_unified(bounds.to_absolute(self.local_offset));
        directed.fwd = direction.directed_bounds(bounds).fwd2;
        self.directed = Some(directed);
        directed
    }

    /// Move the point onto the target `id` (measured as `bounds`) after a
    /// successful move in `direction`.
    ///
    /// Without a prior [`enter`](Self::enter) the target's own center `ort`
    /// is used.
    pub fn arrive(&mut self, id: ElementId, bounds: &Bounds, direction: Direction) {
        self.owner = Some(id);
        let target = direction.directed_bounds(bounds);
        let prior_ort = self
            .directed
            .map_or_else(|| (target.ort1 + target.ort2) / 2.0, |p| p.ort);
        let landed = UnifiedPoint::new(target.fwd1, target.clamp_ort(prior_ort));
        self.local_offset = bounds.to_local(direction.from_unified(landed));
    }
}
