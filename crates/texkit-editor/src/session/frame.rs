//! The per-refresh frame tick.
//!
//! At most one logical input-processing pass runs per display refresh: the
//! tick consumes the pointer record's dirty flag, resolves drag versus
//! placement, and forwards a confirmed click to the dispatcher. The pointer
//! is consumed before dispatch, so dispatch failures never replay input.

use texkit_core::Result;

use crate::drag::{self, DragStep};
use crate::engine::SceneEngine;
use crate::session::EditorSession;
use crate::tools::ToolMode;

/// What a frame tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No unconsumed pointer update this refresh.
    NoInput,
    /// The update was consumed by grab/drag/release handling.
    Dragged,
    /// A confirmed click was routed to this tool.
    Dispatched(ToolMode),
    /// The update was consumed but required no action.
    Idle,
    /// The driving frame loop has been stopped.
    Stopped,
}

impl EditorSession {
    /// Processes at most one pointer update against the session state.
    ///
    /// Recoverable rejections (pending plane, missing calibration, click
    /// outside all planes) are returned as errors and recorded in the
    /// status message; the session is immediately ready for the next click.
    pub fn tick(&mut self, engine: &mut dyn SceneEngine) -> Result<TickOutcome> {
        if !self.pointer.dirty {
            return Ok(TickOutcome::NoInput);
        }

        let pointer = self.pointer;
        let step = drag::resolve(&pointer, &mut self.extraction_points, &mut self.drag);
        self.pointer.consume();

        match step {
            DragStep::Drag => Ok(TickOutcome::Dragged),
            DragStep::Idle => Ok(TickOutcome::Idle),
            DragStep::Click(at) => {
                self.last_message = None;
                self.dispatch_click(at, engine).map_err(|err| {
                    tracing::warn!(%err, ?at, "click rejected");
                    self.last_message = Some(err.to_string());
                    err
                })
            }
        }
    }
}
