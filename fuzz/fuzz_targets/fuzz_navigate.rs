#![no_main]

use arbitrary::Arbitrary;
use freefocus::{Bounds, Direction, FocusPoint, NavConfig, Navigator};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Cell {
    x: i16,
    y: i16,
    w: u8,
    h: u8,
}

#[derive(Debug, Arbitrary)]
struct Input {
    cells: Vec<Cell>,
    moves: Vec<u8>,
    cached: bool,
    max_distance: Option<u16>,
}

fuzz_target!(|input: Input| {
    if input.cells.is_empty() || input.cells.len() > 64 {
        return;
    }
    let boxes: Vec<Bounds> = input
        .cells
        .iter()
        .map(|c| {
            Bounds::from_xywh(
                f64::from(c.x),
                f64::from(c.y),
                f64::from(c.w),
                f64::from(c.h),
            )
        })
        .collect();

    let mut config = NavConfig::new().with_cache(input.cached);
    if let Some(d) = input.max_distance {
        config = config.with_max_distance(f64::from(d));
    }
    let mut nav = Navigator::new(|i: &usize| boxes[*i]).with_config(config);

    let mut point = FocusPoint::new();
    let mut at = 0usize;
    for m in input.moves.iter().take(256) {
        let dir = Direction::ALL[usize::from(*m % 4)];
        let Ok(step) = nav.navigate(&point, &[at], dir, |_| (0..boxes.len()).collect()) else {
            panic!("valid navigation request failed");
        };
        match step.target {
            Some(t) => {
                assert_ne!(t, at);
                let from = dir.directed_bounds(&boxes[at]);
                let to = dir.directed_bounds(&boxes[t]);
                assert!(to.fwd1 >= from.fwd2);
                at = t;
            }
            None => assert_eq!(step.point, point),
        }
        point = step.point;
    }
});
