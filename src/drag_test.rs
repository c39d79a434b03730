#![allow(clippy::float_cmp)]

use super::*;

fn pressed_at(x: f64, y: f64) -> DragState {
    let mut drag = DragState::default();
    drag.press(Point::new(x, y), Point::new(0.0, 0.0));
    drag
}

// --- Press ---

#[test]
fn default_is_idle() {
    let drag = DragState::default();
    assert!(!drag.is_active());
    assert!(!drag.is_panning());
}

#[test]
fn press_activates_without_panning() {
    let drag = pressed_at(100.0, 100.0);
    assert!(drag.is_active());
    assert!(!drag.is_panning());
}

#[test]
fn press_while_active_is_ignored() {
    let mut drag = pressed_at(100.0, 100.0);
    drag.press(Point::new(500.0, 500.0), Point::new(9.0, 9.0));
    // Still anchored at the first origin: a move near it stays under threshold.
    assert_eq!(drag.motion(Point::new(101.0, 101.0)), None);
}

// --- Threshold ---

#[test]
fn motion_below_threshold_returns_none() {
    let mut drag = pressed_at(100.0, 100.0);
    assert_eq!(drag.motion(Point::new(103.0, 100.0)), None);
    assert_eq!(drag.motion(Point::new(100.0, 97.0)), None);
    assert!(!drag.is_panning());
}

#[test]
fn motion_exactly_at_threshold_returns_none() {
    // The threshold is strict: exactly 3 px is still a click.
    let mut drag = pressed_at(100.0, 100.0);
    assert_eq!(drag.motion(Point::new(103.0, 103.0)), None);
    assert!(!drag.is_panning());
}

#[test]
fn motion_past_threshold_starts_pan() {
    let mut drag = pressed_at(100.0, 100.0);
    let translation = drag.motion(Point::new(104.0, 100.0));
    assert_eq!(translation, Some(Point::new(4.0, 0.0)));
    assert!(drag.is_panning());
}

#[test]
fn vertical_displacement_alone_starts_pan() {
    let mut drag = pressed_at(100.0, 100.0);
    assert!(drag.motion(Point::new(100.0, 95.0)).is_some());
    assert!(drag.is_panning());
}

#[test]
fn once_panning_every_move_reports_translation() {
    let mut drag = pressed_at(100.0, 100.0);
    drag.motion(Point::new(110.0, 100.0));
    // Back inside the threshold radius — still panning.
    let translation = drag.motion(Point::new(101.0, 101.0));
    assert_eq!(translation, Some(Point::new(1.0, 1.0)));
    assert!(drag.is_panning());
}

#[test]
fn translation_is_relative_to_base() {
    let mut drag = DragState::default();
    drag.press(Point::new(10.0, 20.0), Point::new(-30.0, 40.0));
    let translation = drag.motion(Point::new(25.0, 20.0));
    assert_eq!(translation, Some(Point::new(-15.0, 40.0)));
}

#[test]
fn motion_while_idle_returns_none() {
    let mut drag = DragState::default();
    assert_eq!(drag.motion(Point::new(500.0, 500.0)), None);
}

// --- Release ---

#[test]
fn release_without_movement_reports_no_pan() {
    let mut drag = pressed_at(100.0, 100.0);
    assert_eq!(drag.motion(Point::new(101.0, 101.0)), None);
    assert!(!drag.release());
    assert!(!drag.is_active());
}

#[test]
fn release_after_pan_reports_started() {
    let mut drag = pressed_at(100.0, 100.0);
    drag.motion(Point::new(120.0, 100.0));
    assert!(drag.release());
    assert!(!drag.is_active());
}

#[test]
fn release_while_idle_is_harmless() {
    let mut drag = DragState::default();
    assert!(!drag.release());
}

#[test]
fn session_can_restart_after_release() {
    let mut drag = pressed_at(100.0, 100.0);
    drag.motion(Point::new(120.0, 100.0));
    drag.release();
    drag.press(Point::new(0.0, 0.0), Point::new(20.0, 0.0));
    let translation = drag.motion(Point::new(10.0, 0.0));
    assert_eq!(translation, Some(Point::new(30.0, 0.0)));
}

// --- Cancel ---

#[test]
fn cancel_ends_an_active_pan() {
    let mut drag = pressed_at(100.0, 100.0);
    drag.motion(Point::new(120.0, 100.0));
    drag.cancel();
    assert!(!drag.is_active());
    assert_eq!(drag.motion(Point::new(300.0, 300.0)), None);
}

#[test]
fn cancel_while_pressed_discards_the_session() {
    let mut drag = pressed_at(100.0, 100.0);
    drag.cancel();
    assert!(!drag.is_active());
    assert!(!drag.release());
}
