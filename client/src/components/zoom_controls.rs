//! Discrete zoom buttons shared by both wall renderers.

use canvas::input::ZoomCommand;
use leptos::prelude::*;

use crate::state::wall_view::{WallViewState, ZoomRequest};

#[component]
pub fn ZoomControls() -> impl IntoView {
    let view_state = expect_context::<RwSignal<WallViewState>>();
    let zoom = expect_context::<RwSignal<ZoomRequest>>();
    let issue = move |command: ZoomCommand| zoom.update(|z| z.issue(command));

    view! {
        <div class="zoom-controls">
            <button class="zoom-btn" title="Zoom in" on:click=move |_| issue(ZoomCommand::In)>
                "+"
            </button>
            <span class="zoom-controls__level">{move || view_state.with(WallViewState::zoom_label)}</span>
            <button class="zoom-btn" title="Zoom out" on:click=move |_| issue(ZoomCommand::Out)>
                "−"
            </button>
            <button class="zoom-btn" title="Reset zoom" on:click=move |_| issue(ZoomCommand::Reset)>
                "1:1"
            </button>
            <button class="zoom-btn" title="Show the whole wall" on:click=move |_| issue(ZoomCommand::FitToView)>
                "⛶"
            </button>
        </div>
    }
}
