#![no_main]

use freefocus::hint::{HintResult, hint_selectors, normalize_hint, resolve_hint};
use freefocus::{AttributeHints, Direction, HintSource, parse_style_string};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(hint) = std::str::from_utf8(data) else {
        return;
    };

    // Style parsing never yields blank values.
    for value in parse_style_string(hint).values() {
        assert!(!value.is_empty());
    }

    let normalized = normalize_hint(hint.trim());
    for selector in hint_selectors(&normalized) {
        assert!(!selector.is_empty());
        assert!(!selector.contains(';'));
    }

    let mut attributes = AttributeHints::new();
    attributes.set_hint(&0u8, [(Direction::Right, hint)]);
    let sources = [&attributes as &dyn HintSource<u8>];
    // Every selector matches one element named after its length.
    let result = resolve_hint(sources, &0u8, Direction::Right, |selector| {
        vec![selector.len().min(255) as u8]
    });

    match result {
        HintResult::Blocked => assert_eq!(hint.trim(), "none"),
        HintResult::Candidates(found) => assert_eq!(found.len(), 1),
        HintResult::NoHint => assert!(hint_selectors(&normalized).next().is_none()),
    }
});
