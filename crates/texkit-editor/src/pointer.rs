//! Pointer sampling: raw host events into one surface-space pointer record.
//!
//! The sampler only converts coordinates and overwrites state; no tool logic
//! runs here. Interpretation happens once per display refresh in the frame
//! tick, however many raw events arrived in between.

use serde::{Deserialize, Serialize};
use texkit_core::Vec2;

/// Phase of a raw pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Up,
    Move,
}

/// Placement of the drawing surface within the host's page coordinates.
///
/// `origin` is the surface's top-left corner in page space; `scroll` is the
/// host viewport's current scroll offset. Both are subtracted when a raw
/// event is sampled.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceFrame {
    pub origin: Vec2,
    pub scroll: Vec2,
}

impl SurfaceFrame {
    /// Creates a surface frame from its page-space origin and scroll offset.
    pub fn new(origin: Vec2, scroll: Vec2) -> Self {
        Self { origin, scroll }
    }

    /// Converts a page-space position to surface-space.
    pub fn to_surface(&self, page: Vec2) -> Vec2 {
        page - self.origin - self.scroll
    }
}

/// The single current-pointer record.
///
/// Overwritten on every raw event; consumed at most once per frame tick.
/// `previous_position` always holds the position as of the prior consumed
/// frame, never one from the same frame as `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub previous_position: Vec2,
    pub phase: PointerPhase,
    pub is_down: bool,
    pub dirty: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vec2::default(),
            previous_position: Vec2::default(),
            phase: PointerPhase::Move,
            is_down: false,
            dirty: false,
        }
    }
}

impl PointerState {
    /// Records a raw event already converted to surface-space.
    pub fn record(&mut self, position: Vec2, phase: PointerPhase) {
        self.position = position;
        self.phase = phase;
        match phase {
            PointerPhase::Down => self.is_down = true,
            PointerPhase::Up => self.is_down = false,
            PointerPhase::Move => {}
        }
        self.dirty = true;
    }

    /// Displacement since the last consumed frame.
    pub fn frame_displacement(&self) -> Vec2 {
        self.position - self.previous_position
    }

    /// Marks the record consumed and rolls `position` into
    /// `previous_position` for the next frame.
    pub fn consume(&mut self) {
        self.dirty = false;
        self.previous_position = self.position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_frame_conversion() {
        let frame = SurfaceFrame::new(Vec2::new(100.0, 50.0), Vec2::new(0.0, 20.0));
        let surface = frame.to_surface(Vec2::new(110.0, 90.0));
        assert_eq!(surface, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_record_tracks_button_state_across_moves() {
        let mut pointer = PointerState::default();
        pointer.record(Vec2::new(1.0, 1.0), PointerPhase::Down);
        assert!(pointer.is_down);
        pointer.record(Vec2::new(2.0, 2.0), PointerPhase::Move);
        assert!(pointer.is_down);
        pointer.record(Vec2::new(2.0, 2.0), PointerPhase::Up);
        assert!(!pointer.is_down);
    }

    #[test]
    fn test_previous_position_lags_by_one_consumed_frame() {
        let mut pointer = PointerState::default();
        pointer.record(Vec2::new(5.0, 5.0), PointerPhase::Move);
        // Two raw events in one frame: only the last one survives.
        pointer.record(Vec2::new(6.0, 5.0), PointerPhase::Move);
        pointer.consume();

        pointer.record(Vec2::new(9.0, 5.0), PointerPhase::Move);
        assert_eq!(pointer.frame_displacement(), Vec2::new(3.0, 0.0));
    }
}
