#![forbid(unsafe_code)]

//! End-to-end navigation scenarios.
//!
//! These tests drive [`Navigator`] the way a host page would: elements are
//! addressed by small integer handles, boxes come from a layout table, and
//! hint selectors are resolved against `#name` / `.class` lookups.
//!
//! # Behaviours covered
//!
//! 1. Basic geometric moves in all four directions.
//! 2. Lane tracking across repeated moves.
//! 3. Re-anchoring after focus moved by other means.
//! 4. Hint blocking, direct targets and selector fallback chains.
//! 5. Bounds cache staleness and invalidation.
//! 6. Releasing handles of elements that left the page.
//! 7. Key-code driven moves and error reporting.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use freefocus::{
    Bounds, Direction, FocusPoint, KeyMap, NavConfig, NavError, NavWarning, Navigator, Point,
    StyleHints,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Element {
    name: &'static str,
    class: &'static str,
    bounds: Bounds,
    style: Option<&'static str>,
}

/// A flat page of elements, addressed by index.
#[derive(Debug, Clone, Default)]
struct Page {
    elements: Vec<Element>,
}

impl Page {
    fn add(&mut self, name: &'static str, class: &'static str, x: f64, y: f64, w: f64, h: f64) -> usize {
        self.elements.push(Element {
            name,
            class,
            bounds: Bounds::from_xywh(x, y, w, h),
            style: None,
        });
        self.elements.len() - 1
    }

    fn id(&self, name: &str) -> usize {
        self.elements
            .iter()
            .position(|e| e.name == name)
            .unwrap_or_else(|| panic!("no element {name}"))
    }

    fn bounds(&self, id: usize) -> Bounds {
        self.elements[id].bounds
    }

    fn name(&self, id: Option<usize>) -> Option<&'static str> {
        id.map(|i| self.elements[i].name)
    }

    /// Candidate lookup: everything, or elements matching `#name` / `.class`.
    fn lookup(&self, selector: Option<&str>) -> Vec<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| match selector {
                None => true,
                Some(sel) => match sel.split_at(1) {
                    ("#", name) => e.name == name,
                    (".", class) => e.class == class,
                    _ => false,
                },
            })
            .map(|(i, _)| i)
            .collect()
    }
}

/// Basic layout: A, B to its right, C below it.
fn abc() -> Page {
    let mut p = Page::default();
    p.add("a", "tile", 0.0, 0.0, 100.0, 50.0);
    p.add("b", "tile", 200.0, 0.0, 100.0, 50.0);
    p.add("c", "tile", 0.0, 200.0, 100.0, 50.0);
    p
}

fn navigator(page: &Page) -> Navigator<usize, impl Fn(&usize) -> Bounds + '_> {
    Navigator::new(move |id: &usize| page.bounds(*id))
}

fn step(
    nav: &mut Navigator<usize, impl Fn(&usize) -> Bounds>,
    page: &Page,
    point: &mut FocusPoint,
    from: &str,
    dir: Direction,
) -> Option<&'static str> {
    let m = nav
        .navigate(point, &[page.id(from)], dir, |sel| page.lookup(sel))
        .unwrap();
    *point = m.point;
    page.name(m.target)
}

// ===========================================================================
// Geometric moves
// ===========================================================================

#[test]
fn right_from_a_selects_b() {
    let page = abc();
    let mut nav = navigator(&page);
    let mut fp = FocusPoint::new();
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Right), Some("b"));
}

#[test]
fn down_from_a_selects_c() {
    let page = abc();
    let mut nav = navigator(&page);
    let mut fp = FocusPoint::new();
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Down), Some("c"));
}

#[test]
fn round_trip_returns_home() {
    let page = abc();
    let mut nav = navigator(&page);
    let mut fp = FocusPoint::new();
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Right), Some("b"));
    assert_eq!(step(&mut nav, &page, &mut fp, "b", Direction::Left), Some("a"));
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Down), Some("c"));
    assert_eq!(step(&mut nav, &page, &mut fp, "c", Direction::Up), Some("a"));
}

#[test]
fn nowhere_to_go_is_a_silent_no_op() {
    let page = abc();
    let mut nav = navigator(&page);
    let mut fp = FocusPoint::new();
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Up), None);
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Left), None);
    assert_eq!(fp, FocusPoint::new());
}

#[test]
fn max_distance_limits_reach() {
    let page = abc();
    let mut nav = navigator(&page).with_config(NavConfig::new().with_max_distance(50.0));
    let mut fp = FocusPoint::new();
    // a -> b scores 100 - sqrt(50).
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Right), None);
    nav.config_mut().max_distance = 95.0;
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Right), Some("b"));
}

// ===========================================================================
// Lane tracking
// ===========================================================================

/// ```text
///   [top]
///   [wide.......................]
///   [left]       [right]
/// ```
fn column_stack() -> Page {
    let mut p = Page::default();
    p.add("top", "row1", 0.0, 0.0, 100.0, 50.0);
    p.add("wide", "row2", 0.0, 100.0, 400.0, 50.0);
    p.add("left", "row3", 0.0, 200.0, 100.0, 50.0);
    p.add("right", "row3", 150.0, 190.0, 100.0, 50.0);
    p
}

#[test]
fn repeated_down_stays_in_column() {
    let page = column_stack();
    let mut nav = navigator(&page);
    let mut fp = FocusPoint::new();

    assert_eq!(step(&mut nav, &page, &mut fp, "top", Direction::Down), Some("wide"));
    // The point entered `wide` at the column of `top`'s center.
    assert_eq!(fp.absolute(&page.bounds(page.id("wide"))), Point::new(50.0, 100.0));

    assert_eq!(step(&mut nav, &page, &mut fp, "wide", Direction::Down), Some("left"));
    assert_eq!(fp.absolute(&page.bounds(page.id("left"))), Point::new(50.0, 200.0));
}

#[test]
fn fresh_point_uses_center_of_wide_row() {
    let page = column_stack();
    let mut nav = navigator(&page);
    let mut fp = FocusPoint::new();
    // Without history, `wide`'s center column (x = 200) favours `right`.
    assert_eq!(step(&mut nav, &page, &mut fp, "wide", Direction::Down), Some("right"));
}

#[test]
fn focus_moved_elsewhere_reanchors_at_center() {
    let page = column_stack();
    let mut nav = navigator(&page);
    let mut fp = FocusPoint::new();
    assert_eq!(step(&mut nav, &page, &mut fp, "top", Direction::Down), Some("wide"));
    // Focus jumps to `right` by a click; the next move starts from its center.
    assert_eq!(step(&mut nav, &page, &mut fp, "right", Direction::Up), Some("wide"));
    assert_eq!(fp.absolute(&page.bounds(page.id("wide"))), Point::new(200.0, 150.0));
}

#[test]
fn horizontal_lane_in_a_row() {
    let mut page = Page::default();
    page.add("a", "", 0.0, 250.0, 50.0, 50.0);
    page.add("b", "", 100.0, 0.0, 50.0, 300.0);
    page.add("c", "", 200.0, 0.0, 50.0, 300.0);
    page.add("d", "", 200.0, 400.0, 50.0, 50.0);
    let mut nav = navigator(&page);
    let mut fp = FocusPoint::new();
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Right), Some("b"));
    assert_eq!(fp.absolute(&page.bounds(page.id("b"))), Point::new(100.0, 275.0));
    assert_eq!(step(&mut nav, &page, &mut fp, "b", Direction::Right), Some("c"));
    // Row y = 275 is kept inside the tall `c` instead of its center.
    assert_eq!(fp.absolute(&page.bounds(page.id("c"))), Point::new(200.0, 275.0));
}

// ===========================================================================
// Hints
// ===========================================================================

#[test]
fn none_hint_blocks_despite_candidates() {
    let page = abc();
    let mut nav = navigator(&page);
    nav.set_hint(&page.id("a"), [(Direction::Right, "none")]);
    let mut fp = FocusPoint::new();
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Right), None);
    assert_eq!(fp, FocusPoint::new());
    // Other directions are unaffected.
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Down), Some("c"));
}

#[test]
fn cleared_hint_restores_geometry() {
    let page = abc();
    let mut nav = navigator(&page);
    let a = page.id("a");
    nav.set_hint(&a, [(Direction::Right, "none")]);
    nav.clear_hint(&a);
    let mut fp = FocusPoint::new();
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Right), Some("b"));
}

#[test]
fn single_hinted_target_is_taken_directly() {
    let page = abc();
    let mut nav = navigator(&page);
    nav.set_hint(&page.id("a"), [(Direction::Right, "#c")]);
    let fp = FocusPoint::new();
    let m = nav
        .navigate(&fp, &[page.id("a")], Direction::Right, |sel| page.lookup(sel))
        .unwrap();
    assert_eq!(page.name(m.target), Some("c"));
    assert!(m.score.is_none());
}

#[test]
fn fallback_chain_ranks_matching_subset() {
    let mut page = Page::default();
    page.add("origin", "", 0.0, 0.0, 100.0, 50.0);
    page.add("near", "", 110.0, 0.0, 50.0, 50.0);
    page.add("far", "fallback", 400.0, 0.0, 50.0, 50.0);
    page.add("mid", "fallback", 250.0, 0.0, 50.0, 50.0);
    let mut nav = navigator(&page);
    nav.set_hint(&page.id("origin"), [(Direction::Right, "#a; .fallback")]);
    let fp = FocusPoint::new();
    let m = nav
        .navigate(&fp, &[page.id("origin")], Direction::Right, |sel| page.lookup(sel))
        .unwrap();
    // `near` is geometrically best but not in the hinted subset.
    assert_eq!(page.name(m.target), Some("mid"));
    assert!(m.score.is_some());
}

#[test]
fn hint_with_no_matches_degrades_to_geometry() {
    let page = abc();
    let mut nav = navigator(&page);
    nav.set_hint(&page.id("a"), [(Direction::Right, "#ghost; .phantom;")]);
    let mut fp = FocusPoint::new();
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Right), Some("b"));
}

#[test]
fn hinted_subset_with_nothing_ahead_does_not_move() {
    let page = abc();
    let mut nav = navigator(&page);
    nav.set_hint(&page.id("b"), [(Direction::Right, ".tile")]);
    let mut fp = FocusPoint::new();
    assert_eq!(step(&mut nav, &page, &mut fp, "b", Direction::Right), None);
}

#[test]
fn style_hints_follow_attribute_hints() {
    let mut page = abc();
    let a = page.id("a");
    page.elements[a].style = Some("color: red; nav-right: #c; nav-down: none");
    let styles = page.clone();
    let mut nav = navigator(&page).with_hint_source(StyleHints::new(move |id: &usize| {
        styles.elements[*id].style.map(str::to_owned)
    }));
    let mut fp = FocusPoint::new();
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Right), Some("c"));
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Down), None);

    // The attribute hint is consulted first.
    nav.set_hint(&a, [(Direction::Right, "#b")]);
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Right), Some("b"));
}

#[test]
fn mangled_style_hint_is_restored() {
    let page = abc();
    let mut nav = navigator(&page).with_hint_source(|id: &usize, dir: Direction| {
        (*id == 0 && dir == Direction::Right).then(|| "c ''".to_owned())
    });
    let mut fp = FocusPoint::new();
    assert_eq!(step(&mut nav, &page, &mut fp, "a", Direction::Right), Some("c"));
}

// ===========================================================================
// Cache
// ===========================================================================

#[test]
fn cached_boxes_stay_until_invalidated() {
    let layout = RefCell::new(abc());
    let mut nav = Navigator::new(|id: &usize| layout.borrow().bounds(*id))
        .with_config(NavConfig::new().with_cache(true));
    let lookup = |sel: Option<&str>| layout.borrow().lookup(sel);
    let fp = FocusPoint::new();

    let m = nav.navigate(&fp, &[0], Direction::Right, lookup).unwrap();
    assert_eq!(m.target, Some(1));

    // Move `b` below `a`; the cached box still says it is to the right.
    layout.borrow_mut().elements[1].bounds = Bounds::from_xywh(0.0, 400.0, 100.0, 50.0);
    let m = nav.navigate(&fp, &[0], Direction::Right, lookup).unwrap();
    assert_eq!(m.target, Some(1));
    assert_eq!(nav.dimensions(&1).left, 200.0);

    nav.invalidate(&1);
    let m = nav.navigate(&fp, &[0], Direction::Right, lookup).unwrap();
    assert_eq!(m.target, None);
    assert_eq!(nav.dimensions(&1).top, 400.0);
}

#[test]
fn uncached_navigation_sees_layout_changes() {
    let layout = RefCell::new(abc());
    let mut nav = Navigator::new(|id: &usize| layout.borrow().bounds(*id));
    let lookup = |sel: Option<&str>| layout.borrow().lookup(sel);
    let fp = FocusPoint::new();

    layout.borrow_mut().elements[1].bounds = Bounds::from_xywh(0.0, 400.0, 100.0, 50.0);
    let m = nav.navigate(&fp, &[0], Direction::Right, lookup).unwrap();
    assert_eq!(m.target, None);
}

// ===========================================================================
// Element lifecycle
// ===========================================================================

#[test]
fn rerendered_elements_are_released() {
    let mut nav = Navigator::new(|h: &Rc<u32>| {
        Bounds::from_xywh(f64::from(**h) * 200.0, 0.0, 100.0, 50.0)
    })
    .with_config(NavConfig::new().with_cache(true));
    let mut fp = FocusPoint::new();
    let mut released: Vec<Weak<u32>> = Vec::new();

    for _ in 0..100 {
        // Each render produces fresh handles for the same two elements.
        let a = Rc::new(0);
        let b = Rc::new(1);
        nav.set_hint(&a, [(Direction::Up, "none")]);
        let m = nav
            .navigate(&fp, &[a.clone()], Direction::Right, |_| vec![a.clone(), b.clone()])
            .unwrap();
        assert_eq!(m.target.as_deref(), Some(&1));
        fp = m.point;

        nav.forget(&a);
        nav.forget(&b);
        released.push(Rc::downgrade(&a));
        released.push(Rc::downgrade(&b));
    }

    assert_eq!(nav.tracked_elements(), 0);
    assert!(nav.hints().is_empty());
    assert!(released.iter().all(|w| w.upgrade().is_none()));
}

// ===========================================================================
// Input and errors
// ===========================================================================

#[test]
fn key_codes_drive_moves() {
    let page = abc();
    let mut nav = navigator(&page);
    let keys = KeyMap::new();
    let mut fp = FocusPoint::new();
    let dir = keys.direction(39).unwrap();
    assert_eq!(step(&mut nav, &page, &mut fp, "a", dir), Some("b"));
    assert_eq!(keys.direction(13), None);
}

#[test]
fn unknown_direction_token_changes_nothing() {
    let page = abc();
    let mut nav = navigator(&page);
    let fp = FocusPoint::new();
    let err = nav
        .navigate_str(&fp, &[0], "northeast", |sel| page.lookup(sel))
        .unwrap_err();
    assert!(matches!(err, NavError::UnknownDirection(ref e) if e.token == "northeast"));
    let m = nav
        .navigate_str(&fp, &[0], "right", |sel| page.lookup(sel))
        .unwrap();
    assert_eq!(m.target, Some(1));
}

#[test]
fn missing_origin_reported() {
    let page = abc();
    let mut nav = navigator(&page);
    let err = nav
        .navigate(&FocusPoint::new(), &[], Direction::Down, |sel| page.lookup(sel))
        .unwrap_err();
    assert_eq!(err, NavError::MissingOrigin);
}

#[test]
fn ambiguous_origin_moves_from_first() {
    let page = abc();
    let mut nav = navigator(&page);
    let m = nav
        .navigate(&FocusPoint::new(), &[0, 1], Direction::Down, |sel| page.lookup(sel))
        .unwrap();
    assert_eq!(page.name(m.target), Some("c"));
    assert_eq!(m.warnings, [NavWarning::AmbiguousOrigin { count: 2 }]);
}

#[test]
fn deterministic_paths() {
    let page = column_stack();
    let walk = || {
        let mut nav = navigator(&page);
        let mut path = Vec::new();
        for from in ["top", "wide", "left", "right"] {
            for dir in Direction::ALL {
                let mut fp = FocusPoint::new();
                path.push(step(&mut nav, &page, &mut fp, from, dir));
            }
        }
        path
    };
    let first = walk();
    for _ in 0..20 {
        assert_eq!(walk(), first);
    }
}
