#![allow(clippy::float_cmp)]

use super::*;

fn core() -> ViewerCore {
    ViewerCore::new(ZoomTable::default())
}

fn viewport() -> Rect {
    Rect::new(0.0, 0.0, 800.0, 600.0)
}

fn unlocked_core() -> ViewerCore {
    let mut core = core();
    core.set_interaction(true);
    core
}

// --- Construction ---

#[test]
fn starts_at_default_scale() {
    let core = core();
    assert_eq!(core.scale(), 1.0);
    assert_eq!(core.zoom_index(), 5);
}

#[test]
fn starts_locked_with_no_graphic() {
    let core = core();
    assert!(!core.interaction_enabled());
    assert_eq!(core.graphic(), None);
    assert_eq!(core.transform.x, 0.0);
    assert_eq!(core.transform.y, 0.0);
}

#[test]
fn custom_table_without_default_scale_starts_mid_table() {
    let table = ZoomTable::new(0.2, 1.7, 0.5).expect("valid range");
    let core = ViewerCore::new(table);
    assert_eq!(core.zoom_index(), 2);
    assert_eq!(core.scale(), 1.2);
}

// --- Zoom stepping ---

#[test]
fn two_steps_in_at_center_reach_one_point_two() {
    let mut core = core();
    let anchor = viewport().center();
    assert!(core.step_zoom(ZoomDirection::In, anchor, viewport()));
    assert!(core.step_zoom(ZoomDirection::In, anchor, viewport()));
    assert_eq!(core.scale(), 1.2);
}

#[test]
fn zoom_index_never_leaves_bounds() {
    let mut core = core();
    let anchor = viewport().center();
    for _ in 0..50 {
        core.step_zoom(ZoomDirection::In, anchor, viewport());
        assert!(core.zoom_index() <= 15);
    }
    assert_eq!(core.scale(), 2.0);
    for _ in 0..50 {
        core.step_zoom(ZoomDirection::Out, anchor, viewport());
    }
    assert_eq!(core.zoom_index(), 0);
    assert_eq!(core.scale(), 0.5);
}

#[test]
fn out_of_range_step_leaves_transform_untouched() {
    let mut core = core();
    let anchor = viewport().center();
    for _ in 0..20 {
        core.step_zoom(ZoomDirection::In, anchor, viewport());
    }
    let before = core.transform;
    assert!(!core.step_zoom(ZoomDirection::In, anchor, viewport()));
    assert_eq!(core.transform, before);
}

#[test]
fn zoom_keeps_the_anchor_point_fixed() {
    let mut core = core();
    core.transform.x = 25.0;
    core.transform.y = -10.0;
    let anchor = Point::new(240.0, 180.0);
    let pinned = core.transform.client_to_content(anchor, viewport().origin());
    core.step_zoom(ZoomDirection::In, anchor, viewport());
    let after = core.transform.client_to_content(anchor, viewport().origin());
    assert!((after.x - pinned.x).abs() < 1e-9);
    assert!((after.y - pinned.y).abs() < 1e-9);
}

#[test]
fn zoom_works_before_render_completes() {
    // No graphic yet: the stored transform still advances and is picked up
    // once the graphic appears.
    let mut core = core();
    assert!(core.step_zoom(ZoomDirection::In, viewport().center(), viewport()));
    assert_eq!(core.scale(), 1.1);
}

// --- Reset ---

#[test]
fn reset_returns_to_default_level() {
    let mut core = core();
    let anchor = viewport().center();
    core.step_zoom(ZoomDirection::In, anchor, viewport());
    core.step_zoom(ZoomDirection::In, anchor, viewport());
    core.reset_scale();
    assert_eq!(core.scale(), 1.0);
    assert_eq!(core.zoom_index(), 5);
}

#[test]
fn reset_leaves_translation_for_centering() {
    let mut core = core();
    core.transform.x = 40.0;
    core.transform.y = 20.0;
    core.reset_scale();
    assert_eq!(core.transform.x, 40.0);
    assert_eq!(core.transform.y, 20.0);
}

// --- Centering ---

#[test]
fn center_without_graphic_is_a_no_op() {
    let mut core = core();
    core.transform.x = 33.0;
    assert!(!core.center(viewport().size()));
    assert_eq!(core.transform.x, 33.0);
}

#[test]
fn center_splits_spare_space() {
    let mut core = core();
    core.set_graphic(Size::new(400.0, 200.0));
    assert!(core.center(viewport().size()));
    assert_eq!(core.transform.x, 200.0);
    assert_eq!(core.transform.y, 200.0);
}

#[test]
fn center_never_produces_negative_offsets() {
    let mut core = core();
    core.set_graphic(Size::new(4000.0, 3000.0));
    assert!(core.center(viewport().size()));
    assert!(core.transform.x >= 0.0);
    assert!(core.transform.y >= 0.0);
}

#[test]
fn center_respects_initial_offset() {
    let mut core = core();
    core.set_graphic(Size::new(400.0, 200.0));
    core.initial_offset = Point::new(50.0, 30.0);
    core.center(viewport().size());
    assert_eq!(core.transform.x, 150.0);
    assert_eq!(core.transform.y, 170.0);
}

// --- Drag panning ---

#[test]
fn pointer_down_is_refused_while_locked() {
    let mut core = core();
    assert!(!core.pointer_down(Point::new(100.0, 100.0)));
    assert!(!core.drag().is_active());
}

#[test]
fn click_without_movement_leaves_translation_unchanged() {
    let mut core = unlocked_core();
    core.transform.x = 12.0;
    core.transform.y = 34.0;
    assert!(core.pointer_down(Point::new(100.0, 100.0)));
    assert!(!core.pointer_move(Point::new(102.0, 101.0)));
    assert!(!core.pointer_up());
    assert_eq!(core.transform.x, 12.0);
    assert_eq!(core.transform.y, 34.0);
}

#[test]
fn drag_past_threshold_moves_translation() {
    let mut core = unlocked_core();
    core.pointer_down(Point::new(100.0, 100.0));
    assert!(core.pointer_move(Point::new(130.0, 90.0)));
    assert_eq!(core.transform.x, 30.0);
    assert_eq!(core.transform.y, -10.0);
}

#[test]
fn release_outside_viewport_still_ends_the_drag() {
    let mut core = unlocked_core();
    core.pointer_down(Point::new(100.0, 100.0));
    core.pointer_move(Point::new(200.0, 200.0));
    // Release lands far outside viewport bounds — the window-level handler
    // feeds it through all the same.
    assert!(core.pointer_up());
    assert!(!core.drag().is_active());
    assert!(!core.pointer_move(Point::new(900.0, 900.0)));
}

#[test]
fn disabling_interaction_cancels_an_active_drag() {
    let mut core = unlocked_core();
    core.pointer_down(Point::new(100.0, 100.0));
    core.pointer_move(Point::new(150.0, 100.0));
    core.set_interaction(false);
    assert!(!core.drag().is_active());
    let before = core.transform;
    assert!(!core.pointer_move(Point::new(400.0, 400.0)));
    assert_eq!(core.transform, before);
}

#[test]
fn moves_after_release_mutate_nothing() {
    let mut core = unlocked_core();
    core.pointer_down(Point::new(100.0, 100.0));
    core.pointer_move(Point::new(150.0, 150.0));
    core.pointer_up();
    let before = core.transform;
    assert!(!core.pointer_move(Point::new(500.0, 500.0)));
    assert!(!core.pointer_up());
    assert_eq!(core.transform, before);
}

// --- Interaction lock vs. button zoom ---

#[test]
fn button_zoom_works_while_locked() {
    let mut core = core();
    assert!(!core.interaction_enabled());
    assert!(core.step_zoom(ZoomDirection::In, viewport().center(), viewport()));
    assert_eq!(core.scale(), 1.1);
}

// --- Render failure path ---

#[test]
fn transforms_stay_no_ops_when_render_never_happened() {
    // Render failed: no graphic was ever recorded. Zoom and pan still keep
    // consistent state and centering stays a no-op.
    let mut core = unlocked_core();
    assert!(core.step_zoom(ZoomDirection::Out, viewport().center(), viewport()));
    core.pointer_down(Point::new(10.0, 10.0));
    core.pointer_move(Point::new(50.0, 50.0));
    core.pointer_up();
    assert!(!core.center(viewport().size()));
    assert_eq!(core.graphic(), None);
}
