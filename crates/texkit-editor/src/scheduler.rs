//! Frame scheduling: one processing pass per display refresh, with an
//! explicit stop.
//!
//! The host calls [`FrameLoop::tick`] once per refresh. The loop never
//! re-registers itself; re-registration is the host's concern. Unlike the
//! implicit animation-frame loop this replaces, the loop carries a control
//! flag so a session can be shut down in an orderly way.

use texkit_core::Result;

use crate::engine::SceneEngine;
use crate::session::{EditorSession, TickOutcome};

/// Drives an [`EditorSession`] at the display refresh rate.
#[derive(Debug)]
pub struct FrameLoop {
    running: bool,
    frames: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    /// Creates a running frame loop.
    pub fn new() -> Self {
        Self {
            running: true,
            frames: 0,
        }
    }

    /// Whether ticks are still processed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of refreshes processed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Stops the loop; every subsequent tick is a no-op.
    pub fn stop(&mut self) {
        tracing::info!(frames = self.frames, "frame loop stopped");
        self.running = false;
    }

    /// Runs one refresh: at most one input-processing pass on the session.
    pub fn tick(
        &mut self,
        session: &mut EditorSession,
        engine: &mut dyn SceneEngine,
    ) -> Result<TickOutcome> {
        if !self.running {
            return Ok(TickOutcome::Stopped);
        }
        self.frames += 1;
        session.tick(engine)
    }
}
