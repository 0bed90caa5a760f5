#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn wall_view_state_defaults_are_neutral() {
    let state = WallViewState::default();
    assert_eq!(state.viewport, ViewportState::default());
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.container_width, 0.0);
    assert_eq!(state.container_height, 0.0);
}

#[test]
fn zoom_label_rounds_to_whole_percent() {
    let mut state = WallViewState::default();
    assert_eq!(state.zoom_label(), "100%");
    state.viewport.scale = 0.3;
    assert_eq!(state.zoom_label(), "30%");
    state.viewport.scale = 1.2345;
    assert_eq!(state.zoom_label(), "123%");
}

#[test]
fn from_core_snapshots_viewport_and_phase() {
    let mut core = EngineCore::new();
    core.set_container(320.0, 480.0, 1.0);
    core.zoom(ZoomCommand::In, 0.0);
    let state = WallViewState::from_core(&core);
    assert_eq!(state.phase, Phase::Animating);
    assert_eq!(state.container_width, 320.0);
    assert_eq!(state.container_height, 480.0);
    assert_eq!(state.viewport, core.viewport());
}

#[test]
fn zoom_request_starts_empty() {
    let request = ZoomRequest::default();
    assert_eq!(request.newer_than(0), None);
}

#[test]
fn repeated_commands_get_distinct_sequence_numbers() {
    let mut request = ZoomRequest::default();
    request.issue(ZoomCommand::In);
    let first = request.seq;
    assert_eq!(request.newer_than(0), Some(ZoomCommand::In));

    request.issue(ZoomCommand::In);
    assert_eq!(request.newer_than(first), Some(ZoomCommand::In));
    assert_eq!(request.newer_than(request.seq), None);
}
