//! View-swap state and the status snapshot rendered by the view layer.

use serde::{Deserialize, Serialize};
use texkit_core::{EditorError, Result};

use crate::state::CalibrationStatus;
use crate::tools::{PlaneOrientation, ToolMode};

/// Which rendering surface is attached to the display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// The flat source image with the point overlay.
    #[default]
    Flat,
    /// The engine-rendered reconstruction.
    Rendered,
}

/// Cursor the view layer should show over the drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorStyle {
    #[default]
    Crosshair,
    Move,
}

impl CursorStyle {
    /// CSS cursor keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            CursorStyle::Crosshair => "crosshair",
            CursorStyle::Move => "move",
        }
    }
}

/// Two-state toggle between the flat and rendered views.
///
/// Swapping is purely a view-ownership handoff; it never touches
/// calibration or extraction data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewSwap {
    mode: ViewMode,
}

impl ViewSwap {
    /// Creates the swap state showing the flat view.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently displayed view.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Toggles between the flat and rendered views.
    ///
    /// The rendered view only exists once the camera is calibrated, so the
    /// toggle is rejected while `calibration` is `NotComputed` and the mode
    /// stays in place.
    pub fn toggle(&mut self, calibration: CalibrationStatus) -> Result<ViewMode> {
        if !calibration.is_computed() {
            return Err(EditorError::CalibrationRequired);
        }
        self.mode = match self.mode {
            ViewMode::Flat => ViewMode::Rendered,
            ViewMode::Rendered => ViewMode::Flat,
        };
        Ok(self.mode)
    }

    /// Forces the flat view (used when session state is cleared).
    pub fn reset(&mut self) {
        self.mode = ViewMode::Flat;
    }
}

/// Snapshot of editor state for the view layer to render.
///
/// Produced after a frame has been processed; everything the original
/// interface rendered into its status elements, as one serializable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSnapshot {
    pub tool: ToolMode,
    pub plane_orientation: Option<PlaneOrientation>,
    /// Guide-point counts in X/Y/Z order.
    pub guide_counts: [usize; 3],
    pub extraction_points: usize,
    /// Corners placed so far on an unfinished plane boundary.
    pub pending_corners: usize,
    pub planes: usize,
    pub calibration: CalibrationStatus,
    pub view: ViewMode,
    pub cursor: CursorStyle,
    /// User-visible message from the last rejected action, if any.
    pub message: Option<String>,
}
