#![forbid(unsafe_code)]

//! Candidate scoring.
//!
//! ```text
//! to     = (candidate.fwd1, clamp(from.ort, candidate.ort1, candidate.ort2))
//! fwd    = |to.fwd - from.fwd|
//! ort    = |to.ort - from.ort|
//! dot    = 0 if to.ort == from.ort else sqrt(fwd² + ort²)
//! total  = dot + fwd + 2·ort - sqrt(overlap(origin, candidate))
//! ```
//!
//! Lower is better. The weights are empirical. `dot` collapses to zero for
//! straight-ahead candidates, so they beat diagonal ones at equal distance.

use freefocus_core::{DirectedBounds, UnifiedPoint};

/// Weight applied to the orthogonal distance.
pub const ORT_WEIGHT: f64 = 2.0;

/// A candidate's ranking with its components.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    /// Euclidean distance, or 0 when the candidate is straight ahead.
    pub dot: f64,
    /// Distance along the direction of travel.
    pub fwd: f64,
    /// Distance across the direction of travel (unweighted).
    pub ort: f64,
    /// Orthogonal overlap between origin and candidate.
    pub overlap: f64,
    /// The ranking value. Lower is better.
    pub total: f64,
}

/// Score `candidate` for a move from `from_point`, which sits on `origin`.
#[must_use]
pub fn score(
    from_point: UnifiedPoint,
    origin: &DirectedBounds,
    candidate: &DirectedBounds,
) -> Score {
    let to_point = UnifiedPoint::new(candidate.fwd1, candidate.clamp_ort(from_point.ort));

    let fwd = (to_point.fwd - from_point.fwd).abs();
    let ort = (to_point.ort - from_point.ort).abs();

    #[allow(clippy::float_cmp)]
    let dot = if to_point.ort == from_point.ort {
        0.0
    } else {
        fwd.hypot(ort)
    };

    let overlap = origin.overlap(candidate);
    let total = dot + fwd + ORT_WEIGHT * ort - overlap.sqrt();

    Score {
        dot,
        fwd,
        ort,
        overlap,
        total,
    }
}
