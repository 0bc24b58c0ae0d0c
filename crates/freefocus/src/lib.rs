#![forbid(unsafe_code)]

//! Directional focus navigation over on-screen rectangles.
//!
//! Given the focused element and a direction, [`Navigator::navigate`] picks
//! the element that should receive focus next. The choice is geometric
//! (see [`score`]) unless an author hint overrides it (see [`hint`]).
//!
//! A [`FocusPoint`] carries a position inside the focused element from one
//! move to the next, so repeated moves in one direction stay in a lane
//! instead of drifting to each element's center.
//!
//! # Example
//!
//! ```
//! use freefocus::{Bounds, Direction, FocusPoint, Navigator};
//!
//! let layout = |id: &u32| match id {
//!     1 => Bounds::from_xywh(0.0, 0.0, 100.0, 50.0),
//!     2 => Bounds::from_xywh(200.0, 0.0, 100.0, 50.0),
//!     _ => Bounds::from_xywh(0.0, 200.0, 100.0, 50.0),
//! };
//! let mut nav = Navigator::new(layout);
//! let point = FocusPoint::new();
//!
//! let step = nav
//!     .navigate(&point, &[1], Direction::Right, |_| vec![1, 2, 3])
//!     .unwrap();
//! assert_eq!(step.target, Some(2));
//!
//! // Thread the successor point into the next move.
//! let point = step.point;
//! let step = nav
//!     .navigate(&point, &[2], Direction::Left, |_| vec![1, 2, 3])
//!     .unwrap();
//! assert_eq!(step.target, Some(1));
//! ```
//!
//! # Feature flags
//!
//! - `tracing`: spans and events for each move.
//! - `serde`: serialization for configuration, points and scores.

pub mod cache;
pub mod config;
pub mod error;
pub mod hint;
pub mod id;
pub mod navigator;
pub mod point;
pub mod score;
pub mod select;

pub use cache::{BoundsCache, Measure, MemoryBoundsCache};
pub use config::NavConfig;
pub use error::{NavError, NavWarning};
pub use hint::{AttributeHints, HintResult, HintSlot, HintSource, StyleHints, parse_style_string};
pub use id::{ElementId, ElementIds};
pub use navigator::{Move, Navigator};
pub use point::FocusPoint;
pub use score::Score;
pub use select::{Pick, nearest_target};

pub use freefocus_core::{
    Bounds, Dimensions, DirectedBounds, Direction, KeyMap, ParseDirectionError, Point,
    UnifiedPoint,
};
