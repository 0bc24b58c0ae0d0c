#![forbid(unsafe_code)]

//! Surrogate identities for element handles.
//!
//! The focus point remembers which element it is anchored to by an
//! [`ElementId`], not by holding the handle. Ids are minted lazily on first
//! contact and never reused for another handle.

use std::fmt;
use std::hash::Hash;

use ahash::AHashMap;

/// Engine-assigned identity of an element. The first id handed out is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(u64);

impl ElementId {
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// Allocator mapping element handles to [`ElementId`]s.
#[derive(Debug, Clone)]
pub struct ElementIds<E> {
    ids: AHashMap<E, ElementId>,
    last: u64,
}

impl<E> Default for ElementIds<E> {
    fn default() -> Self {
        Self {
            ids: AHashMap::new(),
            last: 0,
        }
    }
}

impl<E: Eq + Hash + Clone> ElementIds<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `element`, minting a fresh one on first sight.
    pub fn assign(&mut self, element: &E) -> ElementId {
        if let Some(&id) = self.ids.get(element) {
            return id;
        }
        self.last += 1;
        let id = ElementId(self.last);
        self.ids.insert(element.clone(), id);
        id
    }

    /// Id of `element` if one was already assigned.
    #[must_use]
    pub fn get(&self, element: &E) -> Option<ElementId> {
        self.ids.get(element).copied()
    }

    /// Drop the mapping for `element`.
    ///
    /// A later [`assign`](Self::assign) mints a new id; the old one is
    /// never handed out again.
    pub fn forget(&mut self, element: &E) -> Option<ElementId> {
        self.ids.remove(element)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
