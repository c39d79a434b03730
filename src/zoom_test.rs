#![allow(clippy::float_cmp)]

use super::*;

// --- Construction ---

#[test]
fn default_range_has_sixteen_levels() {
    let table = ZoomTable::new(0.5, 2.0, 0.1).expect("valid range");
    assert_eq!(table.len(), 16);
}

#[test]
fn first_and_last_levels_match_bounds() {
    let table = ZoomTable::new(0.5, 2.0, 0.1).expect("valid range");
    assert_eq!(table.value(0), 0.5);
    assert_eq!(table.value(table.len() - 1), 2.0);
}

#[test]
fn levels_are_strictly_ascending() {
    let table = ZoomTable::new(0.5, 2.0, 0.1).expect("valid range");
    for index in 1..table.len() {
        assert!(table.value(index) > table.value(index - 1));
    }
}

#[test]
fn adjacent_levels_differ_by_exactly_one_increment() {
    // Scaled-integer storage means no cumulative drift: every gap converts
    // back to exactly the same f64.
    let table = ZoomTable::new(0.5, 2.0, 0.1).expect("valid range");
    for index in 1..table.len() {
        let gap = table.value(index) - table.value(index - 1);
        assert!((gap - 0.1).abs() < 1e-12, "uneven gap at {index}: {gap}");
    }
}

#[test]
fn range_not_divisible_by_increment_stops_below_max() {
    let table = ZoomTable::new(0.5, 1.95, 0.1).expect("valid range");
    assert_eq!(table.len(), 15);
    assert_eq!(table.value(table.len() - 1), 1.9);
}

#[test]
fn coarse_increment_builds_whole_number_levels() {
    let table = ZoomTable::new(1.0, 4.0, 1.0).expect("valid range");
    assert_eq!(table.len(), 4);
    assert_eq!(table.value(0), 1.0);
    assert_eq!(table.value(3), 4.0);
}

#[test]
fn single_level_range() {
    let table = ZoomTable::new(1.0, 1.0, 0.1).expect("valid range");
    assert_eq!(table.len(), 1);
    assert_eq!(table.value(0), 1.0);
}

#[test]
fn rejects_zero_increment() {
    assert!(ZoomTable::new(0.5, 2.0, 0.0).is_none());
}

#[test]
fn rejects_negative_increment() {
    assert!(ZoomTable::new(0.5, 2.0, -0.1).is_none());
}

#[test]
fn rejects_inverted_range() {
    assert!(ZoomTable::new(2.0, 0.5, 0.1).is_none());
}

#[test]
fn rejects_absurdly_large_tables() {
    assert!(ZoomTable::new(0.0, 1.0e9, 0.1).is_none());
}

#[test]
fn rejects_nan() {
    assert!(ZoomTable::new(f64::NAN, 2.0, 0.1).is_none());
    assert!(ZoomTable::new(0.5, f64::NAN, 0.1).is_none());
    assert!(ZoomTable::new(0.5, 2.0, f64::NAN).is_none());
}

#[test]
fn default_table_uses_builtin_constants() {
    let table = ZoomTable::default();
    assert_eq!(table.len(), 16);
    assert_eq!(table.value(table.default_index()), 1.0);
}

// --- Default index ---

#[test]
fn default_index_resolves_to_scale_one() {
    let table = ZoomTable::new(0.5, 2.0, 0.1).expect("valid range");
    assert_eq!(table.default_index(), 5);
    assert_eq!(table.value(5), 1.0);
}

#[test]
fn default_index_falls_back_to_middle_when_one_is_absent() {
    // 0.2, 0.7, 1.2, 1.7 — no representable 1.0.
    let table = ZoomTable::new(0.2, 1.7, 0.5).expect("valid range");
    assert_eq!(table.len(), 4);
    assert_eq!(table.default_index(), 2);
}

#[test]
fn bounds_are_rounded_to_the_increment_precision() {
    // A min finer than the increment's precision snaps to it, the same way
    // the level formula itself rounds.
    let table = ZoomTable::new(0.25, 1.75, 0.5).expect("valid range");
    assert_eq!(table.len(), 4);
    assert_eq!(table.value(0), 0.3);
    assert_eq!(table.value(3), 1.8);
}

// --- Stepping ---

#[test]
fn step_in_advances_by_one() {
    let table = ZoomTable::new(0.5, 2.0, 0.1).expect("valid range");
    assert_eq!(table.step(5, ZoomDirection::In), Some(6));
}

#[test]
fn step_out_retreats_by_one() {
    let table = ZoomTable::new(0.5, 2.0, 0.1).expect("valid range");
    assert_eq!(table.step(5, ZoomDirection::Out), Some(4));
}

#[test]
fn step_in_at_top_is_clamped() {
    let table = ZoomTable::new(0.5, 2.0, 0.1).expect("valid range");
    assert_eq!(table.step(table.len() - 1, ZoomDirection::In), None);
}

#[test]
fn step_out_at_bottom_is_clamped() {
    let table = ZoomTable::new(0.5, 2.0, 0.1).expect("valid range");
    assert_eq!(table.step(0, ZoomDirection::Out), None);
}

#[test]
fn repeated_steps_never_leave_bounds() {
    let table = ZoomTable::new(0.5, 2.0, 0.1).expect("valid range");
    let mut index = table.default_index();
    for _ in 0..100 {
        if let Some(next) = table.step(index, ZoomDirection::In) {
            index = next;
        }
        assert!(index < table.len());
    }
    assert_eq!(index, table.len() - 1);
    for _ in 0..100 {
        if let Some(next) = table.step(index, ZoomDirection::Out) {
            index = next;
        }
    }
    assert_eq!(index, 0);
}

#[test]
fn two_steps_in_from_default_reach_one_point_two() {
    let table = ZoomTable::new(0.5, 2.0, 0.1).expect("valid range");
    let mut index = table.default_index();
    index = table.step(index, ZoomDirection::In).expect("room to zoom in");
    index = table.step(index, ZoomDirection::In).expect("room to zoom in");
    assert_eq!(table.value(index), 1.2);
}
