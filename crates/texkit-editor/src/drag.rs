//! Drag/placement resolution: grab, constrained drag, release, or click.
//!
//! A two-state machine (idle / dragging) decides, once per frame, whether
//! the pointer update grabs an existing extraction point, slides a grabbed
//! point along the segment axis, releases it, or confirms a fresh click for
//! the dispatcher.

use texkit_core::Vec2;

use crate::pointer::{PointerPhase, PointerState};
use crate::state::{DragSession, ExtractionPoints};

/// Maximum distance, in surface units, at which a press grabs an
/// extraction point.
pub const PICK_RADIUS: f64 = 6.0;

/// Outcome of resolving one pointer update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragStep {
    /// Consumed by grab/drag handling; no click is dispatched.
    Drag,
    /// A confirmed press that grabbed nothing: a placement click.
    Click(Vec2),
    /// Nothing to act on (move or release while idle).
    Idle,
}

/// Index of the extraction point a press at `at` would grab, if any.
///
/// Points are scanned in index order and the first within [`PICK_RADIUS`]
/// wins, so index 0 takes priority when both are in range.
pub fn find_grab_target(points: &ExtractionPoints, at: Vec2) -> Option<usize> {
    points
        .iter()
        .take(2)
        .position(|point| point.distance_to(at) < PICK_RADIUS)
}

/// Resolves one consumed pointer update against the extraction points.
///
/// While dragging, the pointer's frame-to-frame displacement is projected
/// onto the axis through the other extraction point, so the dragged point
/// only slides along the segment's line and the segment keeps its
/// direction. With fewer than two points the axis is degenerate and the
/// grabbed point stays put.
pub fn resolve(
    pointer: &PointerState,
    points: &mut ExtractionPoints,
    drag: &mut DragSession,
) -> DragStep {
    if pointer.phase == PointerPhase::Down && !drag.active {
        if let Some(index) = find_grab_target(points, pointer.position) {
            drag.active = true;
            drag.point_index = index;
            tracing::debug!(index, "extraction point grabbed");
        }
    }

    let mut dragged = false;
    if drag.active && pointer.phase == PointerPhase::Move {
        let index = drag.point_index;
        let anchor = if points.len() == 2 {
            points[(index + 1) % 2]
        } else {
            points[index]
        };
        let axis = anchor - points[index];
        points[index] = points[index] + pointer.frame_displacement().project_onto(axis);
        dragged = true;
    }

    if !pointer.is_down {
        drag.active = false;
    }

    if drag.active || dragged {
        DragStep::Drag
    } else if pointer.phase == PointerPhase::Down {
        DragStep::Click(pointer.position)
    } else {
        DragStep::Idle
    }
}
