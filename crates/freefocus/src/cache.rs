#![forbid(unsafe_code)]

//! Box measurement and the optional bounds memo.
//!
//! The engine never measures an element itself. It asks a [`Measure`]
//! capability and, when caching is enabled, routes the answer through a
//! [`BoundsCache`]. The cache is a plain memo: a stale entry makes a move
//! visually inaccurate but never changes whether a move terminates.
//!
//! # Invalidation
//!
//! Entries live until [`BoundsCache::invalidate`] or [`BoundsCache::clear`].
//! Hosts invalidate every element they move or resize.

use std::hash::Hash;

use ahash::AHashMap;
use freefocus_core::Bounds;

/// Capability that reports an element's absolute box.
///
/// All boxes handed to one navigator must share one coordinate space
/// (viewport-relative is enough).
pub trait Measure<E> {
    fn measure(&self, element: &E) -> Bounds;
}

impl<E, F> Measure<E> for F
where
    F: Fn(&E) -> Bounds,
{
    #[inline]
    fn measure(&self, element: &E) -> Bounds {
        self(element)
    }
}

/// Read/write memo of measured boxes keyed by element identity.
pub trait BoundsCache<E> {
    fn get(&self, element: &E) -> Option<Bounds>;
    fn set(&mut self, element: &E, bounds: Bounds);
    fn invalidate(&mut self, element: &E);
    fn clear(&mut self);
}

/// Hash-map backed [`BoundsCache`].
#[derive(Debug, Clone)]
pub struct MemoryBoundsCache<E> {
    entries: AHashMap<E, Bounds>,
}

impl<E> Default for MemoryBoundsCache<E> {
    fn default() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }
}

impl<E: Eq + Hash + Clone> MemoryBoundsCache<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: Eq + Hash + Clone> BoundsCache<E> for MemoryBoundsCache<E> {
    fn get(&self, element: &E) -> Option<Bounds> {
        self.entries.get(element).copied()
    }

    fn set(&mut self, element: &E, bounds: Bounds) {
        self.entries.insert(element.clone(), bounds);
    }

    fn invalidate(&mut self, element: &E) {
        self.entries.remove(element);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Measure `element`, optionally reading from and writing to `cache`.
pub fn element_bounds<E, M>(
    measure: &M,
    cache: &mut dyn BoundsCache<E>,
    element: &E,
    read_cache: bool,
    write_cache: bool,
) -> Bounds
where
    M: Measure<E> + ?Sized,
{
    let cached = if read_cache { cache.get(element) } else { None };
    let bounds = cached.unwrap_or_else(|| measure.measure(element));
    if write_cache {
        cache.set(element, bounds);
    }
    bounds
}
