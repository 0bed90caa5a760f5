#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Engine with a phone-sized container over the 2000×2000 wall.
fn core() -> EngineCore {
    let mut core = EngineCore::new();
    core.set_container(400.0, 700.0, 2.0);
    core
}

fn has_viewport_changed(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::ViewportChanged(_)))
}

fn has_frame_request(actions: &[Action]) -> bool {
    actions.contains(&Action::AnimationFrameNeeded)
}

fn run_animation(core: &mut EngineCore, start_ms: f64) {
    let mut now = start_ms;
    while core.phase() == Phase::Animating {
        now += 16.0;
        core.tick(now);
    }
}

// =============================================================
// Defaults and data inputs
// =============================================================

#[test]
fn core_default_viewport_is_identity() {
    let core = EngineCore::new();
    assert_eq!(core.viewport(), ViewportState::default());
    assert_eq!(core.phase(), Phase::Idle);
}

#[test]
fn core_default_surface_is_wall() {
    let core = EngineCore::new();
    assert_eq!(core.surface, Size::new(2000.0, 2000.0));
}

#[test]
fn set_container_stores_dimensions() {
    let core = core();
    assert_eq!(core.container, Size::new(400.0, 700.0));
    assert_eq!(core.dpr, 2.0);
}

#[test]
fn set_container_rejects_non_positive_dpr() {
    let mut core = EngineCore::new();
    core.set_container(10.0, 10.0, 0.0);
    assert_eq!(core.dpr, 1.0);
}

#[test]
fn load_scene_grows_surface() {
    let mut core = core();
    core.load_scene(vec![Sprite {
        id: "p".to_owned(),
        label: "a".to_owned(),
        likes: 0,
        x: 2500.0,
        y: 10.0,
        width: 150.0,
        height: 150.0,
    }]);
    assert_eq!(core.surface, Size::new(2650.0, 2000.0));
    assert_eq!(core.scene.sprites().len(), 1);
}

// =============================================================
// Mouse drag
// =============================================================

#[test]
fn pointer_down_starts_drag_with_grabbing_cursor() {
    let mut core = core();
    let actions = core.on_pointer_down(pt(100.0, 100.0));
    assert_eq!(core.phase(), Phase::Dragging);
    assert_eq!(actions, vec![Action::SetCursor(Cursor::Grabbing)]);
}

#[test]
fn drag_pans_twice_the_pointer_delta() {
    let mut core = core();
    core.viewport = core.viewport.scrolled_to(pt(500.0, 500.0));
    core.on_pointer_down(pt(200.0, 300.0));
    let actions = core.on_pointer_move(pt(150.0, 260.0));
    assert!(has_viewport_changed(&actions));
    assert_eq!(core.viewport().scroll(), pt(600.0, 580.0));
}

#[test]
fn drag_is_resolved_against_origin_not_last_move() {
    let mut core = core();
    core.viewport = core.viewport.scrolled_to(pt(500.0, 500.0));
    core.on_pointer_down(pt(200.0, 200.0));
    core.on_pointer_move(pt(190.0, 190.0));
    core.on_pointer_move(pt(180.0, 180.0));
    assert_eq!(core.viewport().scroll(), pt(540.0, 540.0));
}

#[test]
fn drag_scroll_is_clamped_to_surface() {
    let mut core = core();
    core.on_pointer_down(pt(0.0, 0.0));
    core.on_pointer_move(pt(50.0, 50.0));
    assert_eq!(core.viewport().scroll(), pt(0.0, 0.0));

    core.on_pointer_move(pt(-5000.0, -5000.0));
    assert_eq!(core.viewport().scroll(), pt(1600.0, 1300.0));
}

#[test]
fn move_without_press_does_nothing() {
    let mut core = core();
    assert!(core.on_pointer_move(pt(10.0, 10.0)).is_empty());
    assert_eq!(core.viewport(), ViewportState::default());
}

#[test]
fn pointer_up_ends_drag() {
    let mut core = core();
    core.on_pointer_down(pt(0.0, 0.0));
    let actions = core.on_pointer_up();
    assert_eq!(core.phase(), Phase::Idle);
    assert_eq!(actions, vec![Action::SetCursor(Cursor::Default)]);
}

#[test]
fn pointer_leave_ends_drag() {
    let mut core = core();
    core.on_pointer_down(pt(0.0, 0.0));
    core.on_pointer_leave();
    assert_eq!(core.phase(), Phase::Idle);
    assert!(core.on_pointer_move(pt(-100.0, -100.0)).is_empty());
}

#[test]
fn pointer_up_when_idle_is_noop() {
    let mut core = core();
    assert!(core.on_pointer_up().is_empty());
}

#[test]
fn release_cursor_reflects_zoom() {
    let mut core = core();
    core.viewport.scale = 2.0;
    core.on_pointer_down(pt(0.0, 0.0));
    assert_eq!(core.on_pointer_up(), vec![Action::SetCursor(Cursor::Grab)]);
}

// =============================================================
// Touch drag and pinch
// =============================================================

#[test]
fn one_finger_touch_drags() {
    let mut core = core();
    core.viewport = core.viewport.scrolled_to(pt(300.0, 300.0));
    core.on_touch_start(&[pt(100.0, 100.0)]);
    core.on_touch_move(&[pt(110.0, 90.0)]);
    assert_eq!(core.viewport().scroll(), pt(280.0, 320.0));
}

#[test]
fn two_finger_touch_starts_pinch() {
    let mut core = core();
    core.on_touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    assert!(matches!(
        core.input,
        InputState::Pinching { initial_distance, start_scale } if initial_distance == 100.0 && start_scale == 1.0
    ));
}

#[test]
fn second_finger_turns_drag_into_pinch() {
    let mut core = core();
    core.on_touch_start(&[pt(0.0, 0.0)]);
    core.on_touch_start(&[pt(0.0, 0.0), pt(0.0, 60.0)]);
    assert_eq!(core.phase(), Phase::Pinching);
}

#[test]
fn pinch_spread_zooms_in_from_start_scale() {
    let mut core = core();
    core.on_touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    core.on_touch_move(&[pt(0.0, 0.0), pt(300.0, 0.0)]);
    assert!((core.viewport().scale - 1.2).abs() < 1e-12);
    core.on_touch_move(&[pt(0.0, 0.0), pt(200.0, 0.0)]);
    assert!((core.viewport().scale - 1.1).abs() < 1e-12);
}

#[test]
fn pinch_scale_always_within_gesture_bounds() {
    for delta in [-1.0e9, -50_000.0, -2_000.0, -700.0, -1.0, 0.0, 1.0, 700.0, 1_999.0, 2_000.0, 50_000.0, 1.0e9] {
        for start in [0.3, 1.0, 2.9, 3.0] {
            let mut core = core();
            core.viewport.scale = start;
            core.on_touch_start(&[pt(0.0, 0.0), pt(1000.0, 0.0)]);
            let far = (1000.0_f64 + delta).max(0.0);
            core.on_touch_move(&[pt(0.0, 0.0), pt(far, 0.0)]);
            let scale = core.viewport().scale;
            assert!((0.3..=3.0).contains(&scale), "delta {delta} start {start} gave {scale}");
        }
    }
}

#[test]
fn pinch_ignores_single_finger_moves() {
    let mut core = core();
    core.on_touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    assert!(core.on_touch_move(&[pt(500.0, 500.0)]).is_empty());
    assert_eq!(core.viewport(), ViewportState::default());
}

#[test]
fn touch_end_ends_pinch_and_drag() {
    let mut core = core();
    core.on_touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    core.on_touch_end();
    assert_eq!(core.phase(), Phase::Idle);

    core.on_touch_start(&[pt(0.0, 0.0)]);
    core.on_touch_end();
    assert_eq!(core.phase(), Phase::Idle);
}

#[test]
fn empty_touch_start_is_noop() {
    let mut core = core();
    assert!(core.on_touch_start(&[]).is_empty());
    assert_eq!(core.phase(), Phase::Idle);
}

// =============================================================
// Wheel
// =============================================================

#[test]
fn wheel_up_zooms_in() {
    let mut core = core();
    core.on_wheel(WheelDelta { dx: 0.0, dy: -100.0 });
    assert!((core.viewport().scale - 1.2).abs() < 1e-12);
}

#[test]
fn wheel_down_zooms_out_and_clamps() {
    let mut core = core();
    core.on_wheel(WheelDelta { dx: 0.0, dy: 10_000.0 });
    assert_eq!(core.viewport().scale, 0.3);
    core.on_wheel(WheelDelta { dx: 0.0, dy: -10_000.0 });
    assert_eq!(core.viewport().scale, 3.0);
}

#[test]
fn wheel_sets_idle_cursor() {
    let mut core = core();
    let actions = core.on_wheel(WheelDelta { dx: 0.0, dy: -100.0 });
    assert!(actions.contains(&Action::SetCursor(Cursor::Grab)));
}

#[test]
fn wheel_cancels_animation() {
    let mut core = core();
    core.zoom(ZoomCommand::In, 0.0);
    core.on_wheel(WheelDelta { dx: 0.0, dy: 0.0 });
    assert_eq!(core.phase(), Phase::Idle);
}

// =============================================================
// Discrete zoom
// =============================================================

#[test]
fn zoom_command_enters_animating_and_requests_frame() {
    let mut core = core();
    let actions = core.zoom(ZoomCommand::In, 0.0);
    assert_eq!(core.phase(), Phase::Animating);
    assert!(has_frame_request(&actions));
}

#[test]
fn zoom_in_animates_monotonically_to_target() {
    let mut core = core();
    core.zoom(ZoomCommand::In, 1000.0);
    let mut prev = core.viewport().scale;
    let mut now = 1000.0;
    while core.phase() == Phase::Animating {
        now += 16.0;
        core.tick(now);
        let scale = core.viewport().scale;
        assert!(scale > prev, "scale did not increase at {now}ms");
        prev = scale;
    }
    assert_eq!(core.viewport().scale, 1.2);
    assert!(now >= 1300.0);
}

#[test]
fn zoom_timed_by_frame_timestamps_lands_on_target() {
    // High-resolution frame stamps with uneven spacing.
    let mut core = core();
    core.zoom(ZoomCommand::In, 5123.456);
    let frames = [5123.456, 5140.1, 5190.75, 5260.0, 5333.3, 5423.457];
    let mut prev = core.viewport().scale;
    for (i, stamp) in frames.iter().enumerate() {
        core.tick(*stamp);
        let scale = core.viewport().scale;
        if i > 0 {
            assert!(scale >= prev, "scale went backwards at {stamp}");
        }
        prev = scale;
    }
    assert_eq!(core.phase(), Phase::Idle);
    assert_eq!(core.viewport().scale, 1.2);
}

#[test]
fn frame_stamp_before_start_holds_scale_and_keeps_animating() {
    let mut core = core();
    core.zoom(ZoomCommand::In, 1000.0);
    let actions = core.tick(990.0);
    assert_eq!(core.viewport().scale, 1.0);
    assert!(has_frame_request(&actions));
    assert_eq!(core.phase(), Phase::Animating);
}

#[test]
fn zoom_out_animates_monotonically_to_target() {
    let mut core = core();
    core.viewport.scale = 2.0;
    core.zoom(ZoomCommand::Out, 0.0);
    let mut prev = core.viewport().scale;
    for step in 1..=18 {
        core.tick(f64::from(step) * 16.0);
        let scale = core.viewport().scale;
        assert!(scale < prev);
        prev = scale;
    }
    core.tick(300.0);
    assert_eq!(core.viewport().scale, 1.8);
    assert_eq!(core.phase(), Phase::Idle);
}

#[test]
fn zoom_in_caps_at_max() {
    let mut core = core();
    core.viewport.scale = 2.9;
    core.zoom(ZoomCommand::In, 0.0);
    core.tick(300.0);
    assert_eq!(core.viewport().scale, 3.0);
}

#[test]
fn zoom_out_floors_at_gesture_min() {
    let mut core = core();
    core.viewport.scale = 0.4;
    core.zoom(ZoomCommand::Out, 0.0);
    core.tick(300.0);
    assert_eq!(core.viewport().scale, 0.3);
}

#[test]
fn tick_requests_frames_until_finished() {
    let mut core = core();
    core.zoom(ZoomCommand::In, 0.0);
    assert!(has_frame_request(&core.tick(100.0)));
    let last = core.tick(300.0);
    assert!(!has_frame_request(&last));
    assert!(last.iter().any(|a| matches!(a, Action::SetCursor(_))));
}

#[test]
fn tick_when_idle_is_noop() {
    let mut core = core();
    assert!(core.tick(1000.0).is_empty());
}

#[test]
fn reset_returns_to_natural_scale_and_default_scroll() {
    let mut core = core();
    core.viewport = ViewportState { scale: 2.4, scroll_x: 40.0, scroll_y: 1700.0 };
    core.zoom(ZoomCommand::Reset, 0.0);
    core.tick(150.0);
    assert_ne!(core.viewport().scroll(), pt(500.0, 500.0));
    core.tick(300.0);
    assert_eq!(core.viewport(), ViewportState { scale: 1.0, scroll_x: 500.0, scroll_y: 500.0 });
}

#[test]
fn fit_to_view_targets_formula_and_centers() {
    let mut core = EngineCore::new();
    core.set_container(1000.0, 600.0, 1.0);
    core.zoom(ZoomCommand::FitToView, 0.0);
    run_animation(&mut core, 0.0);

    let expected = (1000.0_f64 / 2000.0).min(600.0 / 2000.0) * 0.9;
    let v = core.viewport();
    assert!((v.scale - expected).abs() < 1e-12);
    // Scaled wall is 540 wide: smaller than the container, so scroll pins to 0.
    assert_eq!(v.scroll(), pt(0.0, 0.0));
}

#[test]
fn fit_to_view_centers_when_floor_makes_wall_overflow() {
    let mut core = EngineCore::new();
    core.set_container(100.0, 150.0, 1.0);
    core.zoom(ZoomCommand::FitToView, 0.0);
    run_animation(&mut core, 0.0);

    // 0.1 floor: the wall is 200×200 on screen, larger than the container.
    assert_eq!(core.viewport().scale, 0.1);
    assert!((core.viewport().scroll_x - 50.0).abs() < 1e-9);
    assert!((core.viewport().scroll_y - 25.0).abs() < 1e-9);
}

#[test]
fn fit_to_view_floors_at_point_one() {
    let mut core = EngineCore::new();
    core.set_container(50.0, 50.0, 1.0);
    core.zoom(ZoomCommand::FitToView, 0.0);
    run_animation(&mut core, 0.0);
    assert_eq!(core.viewport().scale, 0.1);
}

// =============================================================
// Animation guard
// =============================================================

#[test]
fn drag_cancels_animation_and_keeps_interpolated_scale() {
    let mut core = core();
    core.zoom(ZoomCommand::In, 0.0);
    core.tick(100.0);
    let mid = core.viewport().scale;
    assert!(mid > 1.0 && mid < 1.2);

    core.on_pointer_down(pt(10.0, 10.0));
    assert_eq!(core.phase(), Phase::Dragging);
    assert!(core.tick(300.0).is_empty());
    assert_eq!(core.viewport().scale, mid);
}

#[test]
fn pinch_cancels_animation() {
    let mut core = core();
    core.zoom(ZoomCommand::Reset, 0.0);
    core.on_touch_start(&[pt(0.0, 0.0), pt(50.0, 50.0)]);
    assert_eq!(core.phase(), Phase::Pinching);
    assert!(core.tick(300.0).is_empty());
}

#[test]
fn touch_end_does_not_cancel_animation() {
    let mut core = core();
    core.zoom(ZoomCommand::In, 0.0);
    assert!(core.on_touch_end().is_empty());
    assert_eq!(core.phase(), Phase::Animating);
}

#[test]
fn new_command_supersedes_running_animation() {
    let mut core = core();
    core.zoom(ZoomCommand::In, 0.0);
    core.tick(150.0);
    core.zoom(ZoomCommand::Out, 150.0);
    run_animation(&mut core, 150.0);
    assert!(core.viewport().scale < 1.2);
}

// =============================================================
// Native scroll
// =============================================================

#[test]
fn native_scroll_is_adopted_when_idle() {
    let mut core = core();
    let actions = core.on_native_scroll(pt(300.0, 200.0));
    assert!(has_viewport_changed(&actions));
    assert_eq!(core.viewport().scroll(), pt(300.0, 200.0));
}

#[test]
fn native_scroll_is_clamped() {
    let mut core = core();
    core.on_native_scroll(pt(5000.0, -10.0));
    assert_eq!(core.viewport().scroll(), pt(1600.0, 0.0));
}

#[test]
fn native_scroll_is_ignored_during_drag() {
    let mut core = core();
    core.on_pointer_down(pt(100.0, 100.0));
    assert!(core.on_native_scroll(pt(300.0, 300.0)).is_empty());
    assert_eq!(core.viewport().scroll(), pt(0.0, 0.0));
}

#[test]
fn native_scroll_is_ignored_during_animation() {
    let mut core = core();
    core.zoom(ZoomCommand::In, 0.0);
    assert!(core.on_native_scroll(pt(300.0, 300.0)).is_empty());
    assert_eq!(core.phase(), Phase::Animating);
}
