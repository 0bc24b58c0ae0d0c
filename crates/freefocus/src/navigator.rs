#![forbid(unsafe_code)]

//! Move orchestration.
//!
//! A move runs in four steps:
//!
//! 1. **Enter**: the focus point is prepared on the origin element.
//! 2. **Hints**: the hint sources are consulted in slot order (by default
//!    the attribute store, then every pushed [`HintSource`]). `none` ends the move; a single hinted element is taken
//!    as-is; several hinted elements are ranked geometrically.
//! 3. **Select**: without a usable hint the full candidate set is ranked.
//! 4. **Arrive**: on success the focus point moves onto the target.
//!
//! # Invariants
//!
//! - Moves are transactional. [`Navigator::navigate`] reads the caller's
//!   [`FocusPoint`] and returns its successor in [`Move::point`]; when no
//!   target is chosen, or an error is returned, the successor is unchanged.
//! - The engine never mutates elements. Dispatching focus to the returned
//!   target is the caller's job.
//! - The navigator holds a clone of every handle it has measured, hinted or
//!   identified until [`Navigator::forget`] releases it.

use std::hash::Hash;

use freefocus_core::{Bounds, Dimensions, DirectedBounds, Direction, UnifiedPoint};

use crate::cache::{BoundsCache, Measure, MemoryBoundsCache, element_bounds};
use crate::config::NavConfig;
use crate::error::{NavError, NavWarning};
use crate::hint::{AttributeHints, HintResult, HintSlot, HintSource, resolve_hint};
use crate::id::{ElementId, ElementIds};
use crate::point::FocusPoint;
use crate::score::Score;
use crate::select::nearest_target;

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq)]
pub struct Move<E> {
    /// Element to focus next, if any.
    pub target: Option<E>,
    /// Focus point to pass into the next move.
    pub point: FocusPoint,
    /// Ranking of the target. `None` when a hint named it directly.
    pub score: Option<Score>,
    /// Caveats raised while moving.
    pub warnings: Vec<NavWarning>,
}

impl<E> Move<E> {
    /// Whether a target was chosen.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.target.is_some()
    }
}

/// Spatial navigator over elements of type `E`.
///
/// `E` is any cheap handle with identity (an index, an id, an `Rc`). The
/// navigator owns the measure capability, hint sources, the element id
/// allocator and the bounds cache; the focus point is owned by the caller.
pub struct Navigator<E, M> {
    measure: M,
    config: NavConfig,
    attributes: AttributeHints<E>,
    sources: Vec<HintSlot<E>>,
    ids: ElementIds<E>,
    cache: Box<dyn BoundsCache<E>>,
}

impl<E, M> Navigator<E, M>
where
    E: Eq + Hash + Clone + 'static,
    M: Measure<E>,
{
    /// Create a navigator with the default configuration and an in-memory
    /// bounds cache.
    pub fn new(measure: M) -> Self {
        Self {
            measure,
            config: NavConfig::default(),
            attributes: AttributeHints::new(),
            sources: vec![HintSlot::Attributes],
            ids: ElementIds::new(),
            cache: Box::new(MemoryBoundsCache::new()),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: NavConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the bounds cache.
    #[must_use]
    pub fn with_cache(mut self, cache: impl BoundsCache<E> + 'static) -> Self {
        self.cache = Box::new(cache);
        self
    }

    /// Append a hint source. Sources are consulted in slot order; a fresh
    /// navigator starts with only [`HintSlot::Attributes`].
    #[must_use]
    pub fn with_hint_source(mut self, source: impl HintSource<E> + 'static) -> Self {
        self.push_hint_source(source);
        self
    }

    pub fn push_hint_source(&mut self, source: impl HintSource<E> + 'static) {
        self.sources.push(HintSlot::source(source));
    }

    /// Replace the ordered hint source list.
    ///
    /// Leaving out [`HintSlot::Attributes`] disables attribute hints without
    /// discarding them.
    #[must_use]
    pub fn with_hint_sources(mut self, slots: impl IntoIterator<Item = HintSlot<E>>) -> Self {
        self.sources = slots.into_iter().collect();
        self
    }

    #[must_use]
    pub fn hint_sources(&self) -> &[HintSlot<E>] {
        &self.sources
    }

    /// The ordered hint source list, for reordering or removal.
    pub fn hint_sources_mut(&mut self) -> &mut Vec<HintSlot<E>> {
        &mut self.sources
    }

    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut NavConfig {
        &mut self.config
    }

    /// Attribute hints consulted before any pushed source.
    #[must_use]
    pub fn hints(&self) -> &AttributeHints<E> {
        &self.attributes
    }

    pub fn hints_mut(&mut self) -> &mut AttributeHints<E> {
        &mut self.attributes
    }

    /// Set directional hints on `element`.
    pub fn set_hint<I, S>(&mut self, element: &E, hints: I)
    where
        I: IntoIterator<Item = (Direction, S)>,
        S: Into<String>,
    {
        self.attributes.set_hint(element, hints);
    }

    /// Remove all directional hints from `element`.
    pub fn clear_hint(&mut self, element: &E) {
        self.attributes.clear_hint(element);
    }

    /// Identity assigned to `element`, minting one on first contact.
    pub fn element_id(&mut self, element: &E) -> ElementId {
        self.ids.assign(element)
    }

    /// Position and size of `element`, served from the cache when present.
    ///
    /// Never writes the cache.
    pub fn dimensions(&self, element: &E) -> Dimensions {
        self.cache
            .get(element)
            .unwrap_or_else(|| self.measure.measure(element))
            .dimensions()
    }

    /// Store the box of `element` in the cache, measuring it only if it is
    /// not cached yet.
    pub fn populate_cache(&mut self, element: &E) {
        element_bounds(&self.measure, self.cache.as_mut(), element, true, true);
    }

    /// Drop the cached box of `element`. Call after it moved or resized.
    pub fn invalidate(&mut self, element: &E) {
        self.cache.invalidate(element);
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Release everything held for `element`: its id, cached box and
    /// attribute hints. Call when the element leaves the page.
    ///
    /// A later contact mints a new id, so a [`FocusPoint`] still anchored to
    /// the old one re-anchors at the element's center.
    pub fn forget(&mut self, element: &E) {
        self.ids.forget(element);
        self.cache.invalidate(element);
        self.attributes.clear_hint(element);
    }

    /// Number of elements that currently hold an id.
    #[must_use]
    pub fn tracked_elements(&self) -> usize {
        self.ids.len()
    }

    /// Move from `origins` in the direction named by `direction`.
    ///
    /// An unknown token is rejected before anything else happens.
    pub fn navigate_str<C>(
        &mut self,
        point: &FocusPoint,
        origins: &[E],
        direction: &str,
        candidates: C,
    ) -> Result<Move<E>, NavError>
    where
        C: FnMut(Option<&str>) -> Vec<E>,
    {
        let direction: Direction = direction.parse()?;
        self.navigate(point, origins, direction, candidates)
    }

    /// Move from `origins` in `direction`.
    ///
    /// `origins` should hold exactly one element, the one currently focused.
    /// With more than one, the first is used and
    /// [`NavWarning::AmbiguousOrigin`] is reported.
    ///
    /// `candidates` enumerates navigation targets. It is called with `None`
    /// for the full set and with `Some(selector)` for each selector named by
    /// a hint; it owns all enablement and visibility filtering.
    pub fn navigate<C>(
        &mut self,
        point: &FocusPoint,
        origins: &[E],
        direction: Direction,
        mut candidates: C,
    ) -> Result<Move<E>, NavError>
    where
        C: FnMut(Option<&str>) -> Vec<E>,
    {
        self.config.validate()?;
        let Some(origin) = origins.first() else {
            return Err(NavError::MissingOrigin);
        };

        let mut warnings = Vec::new();
        if origins.len() > 1 {
            let warning = NavWarning::AmbiguousOrigin {
                count: origins.len(),
            };
            #[cfg(feature = "tracing")]
            tracing::warn!(%warning, "ambiguous origin");
            warnings.push(warning);
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("freefocus.move", %direction).entered();

        let use_cache = self.config.cache;
        let origin_bounds = self.bounds(origin, use_cache);
        let origin_id = self.ids.assign(origin);
        let origin_directed = direction.directed_bounds(&origin_bounds);

        let mut next = *point;
        let from_point = next.enter(origin_id, &origin_bounds, direction);

        let attributes = &self.attributes;
        let sources = self
            .sources
            .iter()
            .map(|slot| slot_source(slot, attributes));
        let hinted = resolve_hint(sources, origin, direction, |selector| {
            candidates(Some(selector))
        });

        let picked = match hinted {
            HintResult::Blocked => None,
            HintResult::Candidates(mut found) if found.len() == 1 => {
                found.pop().map(|target| (target, None))
            }
            HintResult::Candidates(found) => {
                self.select(origin, &origin_directed, from_point, direction, found)
            }
            HintResult::NoHint => {
                let all = candidates(None);
                self.select(origin, &origin_directed, from_point, direction, all)
            }
        };

        let Some((target, score)) = picked else {
            #[cfg(feature = "tracing")]
            tracing::debug!("no target");
            return Ok(Move {
                target: None,
                point: *point,
                score: None,
                warnings,
            });
        };

        let target_bounds = self.bounds(&target, use_cache);
        let target_id = self.ids.assign(&target);
        next.arrive(target_id, &target_bounds, direction);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            from = %origin_id,
            to = %target_id,
            score = score.map(|s| s.total),
            "moved"
        );

        Ok(Move {
            target: Some(target),
            point: next,
            score,
            warnings,
        })
    }

    fn bounds(&mut self, element: &E, use_cache: bool) -> Bounds {
        element_bounds(
            &self.measure,
            self.cache.as_mut(),
            element,
            use_cache,
            use_cache,
        )
    }

    fn select(
        &mut self,
        origin: &E,
        origin_directed: &DirectedBounds,
        from_point: UnifiedPoint,
        direction: Direction,
        candidates: Vec<E>,
    ) -> Option<(E, Option<Score>)> {
        let use_cache = self.config.cache;
        let max_distance = self.config.max_distance;
        let measure = &self.measure;
        let cache = self.cache.as_mut();
        nearest_target(
            origin,
            origin_directed,
            from_point,
            candidates,
            max_distance,
            |candidate| {
                let b = element_bounds(measure, &mut *cache, candidate, use_cache, use_cache);
                direction.directed_bounds(&b)
            },
        )
        .map(|pick| (pick.target, Some(pick.score)))
    }
}

fn slot_source<'a, E>(
    slot: &'a HintSlot<E>,
    attributes: &'a AttributeHints<E>,
) -> &'a dyn HintSource<E>
where
    E: Eq + Hash + Clone + 'static,
{
    match slot {
        HintSlot::Attributes => attributes,
        HintSlot::Source(source) => source.as_ref(),
    }
}
