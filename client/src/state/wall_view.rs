//! Viewport telemetry used by chrome outside the wall surface.
//!
//! ARCHITECTURE
//! ============
//! The wall and canvas hosts own the authoritative `EngineCore`. After each
//! batch of engine actions they publish a snapshot here so the zoom controls
//! can render without reaching into the engine.

#[cfg(test)]
#[path = "wall_view_test.rs"]
mod wall_view_test;

use canvas::camera::ViewportState;
use canvas::engine::EngineCore;
use canvas::input::{Phase, ZoomCommand};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WallViewState {
    pub viewport: ViewportState,
    pub phase: Phase,
    pub container_width: f64,
    pub container_height: f64,
}

impl WallViewState {
    /// Snapshot the engine after a batch of actions.
    #[must_use]
    pub fn from_core(core: &EngineCore) -> Self {
        Self {
            viewport: core.viewport(),
            phase: core.phase(),
            container_width: core.container.width,
            container_height: core.container.height,
        }
    }

    /// Current scale as a whole percentage, e.g. `"120%"`.
    #[must_use]
    pub fn zoom_label(&self) -> String {
        format!("{:.0}%", self.viewport.scale * 100.0)
    }
}

/// Latest discrete zoom asked of the active wall host.
///
/// Hosts remember the last `seq` they handled, so issuing the same command
/// twice still runs it twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZoomRequest {
    pub seq: u64,
    pub command: Option<ZoomCommand>,
}

impl ZoomRequest {
    pub fn issue(&mut self, command: ZoomCommand) {
        self.seq += 1;
        self.command = Some(command);
    }

    /// The command to run if it is newer than `last_seen`.
    #[must_use]
    pub fn newer_than(&self, last_seen: u64) -> Option<ZoomCommand> {
        if self.seq > last_seen { self.command } else { None }
    }
}
