#![forbid(unsafe_code)]

//! Author-declared navigation hints.
//!
//! A hint overrides the geometric search for one element and direction. It
//! is read from an ordered list of [`HintSource`]s; the first non-blank
//! answer wins.
//!
//! # Hint grammar
//!
//! - `none`: do not move ([`HintResult::Blocked`]).
//! - `sel1; sel2; ...`: selectors tried in order. The first one for which
//!   the candidate lookup returns a non-empty set becomes
//!   [`HintResult::Candidates`]. Empty pieces (e.g. a trailing `;`) are
//!   skipped. If every selector comes back empty the hint is ignored
//!   ([`HintResult::NoHint`]).
//!
//! Before parsing, a hint of the form `name ''` is rewritten to `#name`.
//! Some set-top-box browsers mangle `#id` values in inline styles into that
//! shape.

use std::borrow::Cow;
use std::hash::Hash;

use ahash::AHashMap;
use freefocus_core::Direction;

/// Hint value that blocks movement.
pub const BLOCKED_HINT: &str = "none";

/// A probe that may know a hint for an element and direction.
pub trait HintSource<E> {
    fn hint(&self, element: &E, direction: Direction) -> Option<String>;
}

impl<E, F> HintSource<E> for F
where
    F: Fn(&E, Direction) -> Option<String>,
{
    #[inline]
    fn hint(&self, element: &E, direction: Direction) -> Option<String> {
        self(element, direction)
    }
}

/// One entry of a navigator's ordered hint source list.
///
/// The navigator's own [`AttributeHints`] store takes part in the order as
/// [`HintSlot::Attributes`]; hosts may move or drop that entry like any
/// other.
pub enum HintSlot<E> {
    /// The navigator's attribute store.
    Attributes,
    /// A host-supplied source.
    Source(Box<dyn HintSource<E>>),
}

impl<E> HintSlot<E> {
    /// Wrap a host-supplied source.
    pub fn source(source: impl HintSource<E> + 'static) -> Self {
        Self::Source(Box::new(source))
    }

    /// Whether this slot stands for the attribute store.
    #[must_use]
    pub fn is_attributes(&self) -> bool {
        matches!(self, Self::Attributes)
    }
}

/// Outcome of hint resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintResult<E> {
    /// No usable hint; fall through to geometric search.
    NoHint,
    /// The hint forbids moving in this direction.
    Blocked,
    /// Elements named by the hint, in lookup order. Never empty.
    Candidates(Vec<E>),
}

/// First non-blank hint for `element` in `direction`, trimmed.
pub fn find_hint<'a, E, I>(sources: I, element: &E, direction: Direction) -> Option<String>
where
    E: 'a,
    I: IntoIterator<Item = &'a dyn HintSource<E>>,
{
    sources.into_iter().find_map(|source| {
        let raw = source.hint(element, direction)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}

/// Undo the `name ''` mangling back into `#name`.
#[must_use]
pub fn normalize_hint(hint: &str) -> Cow<'_, str> {
    match hint.strip_suffix(" ''") {
        Some(name) if !name.is_empty() && !name.starts_with('#') => {
            Cow::Owned(format!("#{name}"))
        }
        _ => Cow::Borrowed(hint),
    }
}

/// Split a hint into its non-empty selectors, trimming each.
pub fn hint_selectors(hint: &str) -> impl Iterator<Item = &str> {
    hint.split(';').map(str::trim).filter(|s| !s.is_empty())
}

/// Resolve the hint for `element` in `direction`.
///
/// `lookup` is called with each hinted selector and must return the
/// matching navigation targets (possibly none).
pub fn resolve_hint<'a, E, I, L>(
    sources: I,
    element: &E,
    direction: Direction,
    mut lookup: L,
) -> HintResult<E>
where
    E: 'a,
    I: IntoIterator<Item = &'a dyn HintSource<E>>,
    L: FnMut(&str) -> Vec<E>,
{
    let Some(hint) = find_hint(sources, element, direction) else {
        return HintResult::NoHint;
    };

    if hint == BLOCKED_HINT {
        #[cfg(feature = "tracing")]
        tracing::trace!(%direction, "hint blocks movement");
        return HintResult::Blocked;
    }

    let hint = normalize_hint(&hint);
    for selector in hint_selectors(&hint) {
        let found = lookup(selector);
        if !found.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::trace!(selector, count = found.len(), "hint selector matched");
            return HintResult::Candidates(found);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(selector, "hint selector matched nothing");
    }

    HintResult::NoHint
}

// ---------------------------------------------------------------------------
// Built-in sources
// ---------------------------------------------------------------------------

/// In-memory per-element hints, the equivalent of `data-nav-<direction>`
/// attributes.
#[derive(Debug, Clone)]
pub struct AttributeHints<E> {
    hints: AHashMap<(E, Direction), String>,
}

impl<E> Default for AttributeHints<E> {
    fn default() -> Self {
        Self {
            hints: AHashMap::new(),
        }
    }
}

impl<E: Eq + Hash + Clone> AttributeHints<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one or more directional hints on `element`.
    ///
    /// Directions not mentioned keep their current hint.
    pub fn set_hint<I, S>(&mut self, element: &E, hints: I)
    where
        I: IntoIterator<Item = (Direction, S)>,
        S: Into<String>,
    {
        for (direction, value) in hints {
            self.hints
                .insert((element.clone(), direction), value.into());
        }
    }

    /// Remove every directional hint from `element`.
    pub fn clear_hint(&mut self, element: &E) {
        for direction in Direction::ALL {
            self.hints.remove(&(element.clone(), direction));
        }
    }

    #[must_use]
    pub fn get(&self, element: &E, direction: Direction) -> Option<&str> {
        self.hints
            .get(&(element.clone(), direction))
            .map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

impl<E: Eq + Hash + Clone> HintSource<E> for AttributeHints<E> {
    fn hint(&self, element: &E, direction: Direction) -> Option<String> {
        self.get(element, direction).map(str::to_owned)
    }
}

/// Reads `nav-<direction>` out of an element's inline style string.
pub struct StyleHints<F> {
    style_of: F,
}

impl<F> StyleHints<F> {
    /// `style_of` returns the raw inline style of an element, if any.
    pub fn new(style_of: F) -> Self {
        Self { style_of }
    }
}

impl<E, F> HintSource<E> for StyleHints<F>
where
    F: Fn(&E) -> Option<String>,
{
    fn hint(&self, element: &E, direction: Direction) -> Option<String> {
        let style = (self.style_of)(element)?;
        let key = format!("nav-{direction}");
        parse_style_string(&style).remove(key.as_str())
    }
}

/// Parse `key: value; key: value` into a map.
///
/// Each rule splits on its first `:`; both sides are trimmed. Rules with a
/// missing or empty value are dropped. Later rules override earlier ones.
#[must_use]
pub fn parse_style_string(style: &str) -> AHashMap<&str, String> {
    let mut result = AHashMap::new();
    for rule in style.split(';') {
        let Some((key, value)) = rule.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        result.insert(key.trim(), value.to_owned());
    }
    result
}
