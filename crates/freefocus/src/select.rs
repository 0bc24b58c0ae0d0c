#![forbid(unsafe_code)]

//! Nearest-target selection.
//!
//! # Algorithm
//!
//! 1. Skip the origin itself.
//! 2. Skip candidates whose leading edge lies behind the origin's trailing
//!    edge (`candidate.fwd1 < origin.fwd2`). A candidate starting exactly at
//!    the trailing edge is eligible.
//! 3. Score the rest (see [`score`](crate::score::score)).
//! 4. Keep the lowest score that is also strictly below `max_distance`.
//!
//! # Invariants
//!
//! - Ties keep the first candidate in input order.
//! - A NaN score never wins.
//! - If nothing qualifies, `None` is returned.

use freefocus_core::{DirectedBounds, UnifiedPoint};

use crate::score::{Score, score};

/// The winning candidate of a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Pick<E> {
    pub target: E,
    pub score: Score,
}

/// Whether `candidate` lies ahead of `origin` in the direction of travel.
#[inline]
#[must_use]
// Negated so a NaN edge stays eligible; its NaN score never wins.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn is_ahead(origin: &DirectedBounds, candidate: &DirectedBounds) -> bool {
    !(candidate.fwd1 < origin.fwd2)
}

/// Pick the best candidate for a move leaving `origin` from `from_point`.
///
/// `bounds_of` reports each candidate's box in the move's direction frame.
pub fn nearest_target<E, I, F>(
    origin: &E,
    origin_bounds: &DirectedBounds,
    from_point: UnifiedPoint,
    candidates: I,
    max_distance: f64,
    mut bounds_of: F,
) -> Option<Pick<E>>
where
    E: PartialEq,
    I: IntoIterator<Item = E>,
    F: FnMut(&E) -> DirectedBounds,
{
    let mut best: Option<Pick<E>> = None;
    let mut min_total = max_distance;

    for candidate in candidates {
        if candidate == *origin {
            continue;
        }

        let to = bounds_of(&candidate);
        if !is_ahead(origin_bounds, &to) {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                fwd1 = to.fwd1,
                origin_fwd2 = origin_bounds.fwd2,
                "candidate behind origin"
            );
            continue;
        }

        let s = score(from_point, origin_bounds, &to);
        if s.total < min_total {
            min_total = s.total;
            best = Some(Pick {
                target: candidate,
                score: s,
            });
        }
    }

    best
}
