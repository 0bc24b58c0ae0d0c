#![forbid(unsafe_code)]

//! Core: geometry and direction transforms for spatial focus navigation.
//!
//! # Role in freefocus
//! `freefocus-core` is the leaf layer. It owns the absolute box type, the
//! four cardinal directions with their `(fwd, ort)` rotations, and the
//! key-code table. The engine crate (`freefocus`) builds its focus-point
//! tracking and candidate scoring on top of these types and never touches
//! raw `x`/`y` axes itself.

pub mod direction;
pub mod geometry;
pub mod keymap;

pub use direction::{Direction, ParseDirectionError};
pub use geometry::{Bounds, Dimensions, DirectedBounds, Point, UnifiedPoint};
pub use keymap::KeyMap;
