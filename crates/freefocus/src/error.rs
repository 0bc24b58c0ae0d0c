#![forbid(unsafe_code)]

//! Error and diagnostic types for navigation.
//!
//! Errors abort a move before any state is touched. Warnings describe a
//! move that went ahead with a caveat. "Nothing to move to" is neither: it
//! is a move whose target is `None`.

use std::fmt;

use freefocus_core::ParseDirectionError;

/// A move that could not be attempted.
#[derive(Debug, Clone, PartialEq)]
pub enum NavError {
    /// The direction token was not `left`, `right`, `up` or `down`.
    UnknownDirection(ParseDirectionError),
    /// No origin element was supplied.
    MissingOrigin,
    /// The configured maximum distance is NaN or negative.
    InvalidMaxDistance(f64),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDirection(err) => write!(f, "cannot move: {err}"),
            Self::MissingOrigin => f.write_str("cannot move from nothing: no origin element"),
            Self::InvalidMaxDistance(d) => write!(f, "invalid max distance {d}"),
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownDirection(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseDirectionError> for NavError {
    fn from(err: ParseDirectionError) -> Self {
        Self::UnknownDirection(err)
    }
}

/// A caveat attached to a move that still ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavWarning {
    /// More than one element was presented as the origin; the first was used.
    AmbiguousOrigin { count: usize },
}

impl fmt::Display for NavWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousOrigin { count } => {
                write!(f, "{count} origin elements given, moving from the first")
            }
        }
    }
}
