//! The editor session: one owned context object holding the full state
//! bundle of the point editor.
//!
//! Hosts feed raw input through [`EditorSession::on_pointer_event`] and
//! drive processing with a per-refresh tick (usually via
//! [`crate::scheduler::FrameLoop`]). All mutation of pointer, point stores,
//! tool mode, and drag state happens inside the tick, never concurrently
//! with itself.
//!
//! This module is split into submodules:
//! - `frame`: the per-refresh tick consuming the pointer record
//! - `dispatch`: routing a confirmed click to the active tool

mod dispatch;
mod frame;

pub use frame::TickOutcome;

use texkit_core::{Result, Vec2};

use crate::engine::PlaneBoundary;
use crate::fit::{fit_image, ImageFit};
use crate::pointer::{PointerPhase, PointerState, SurfaceFrame};
use crate::state::{
    BoundaryInProgress, CalibrationStatus, DragSession, ExtractionPoints, GuidePointSet,
};
use crate::tools::{PlaneOrientation, ToolMode, ToolRegistry};
use crate::view::{CursorStyle, StatusSnapshot, ViewMode, ViewSwap};

/// Owned state bundle for one editing session on one image.
#[derive(Debug, Default)]
pub struct EditorSession {
    pub(crate) pointer: PointerState,
    pub(crate) surface: SurfaceFrame,
    pub(crate) tools: ToolRegistry,
    pub(crate) guide_points: GuidePointSet,
    pub(crate) extraction_points: ExtractionPoints,
    pub(crate) boundary: BoundaryInProgress,
    pub(crate) planes: Vec<PlaneBoundary>,
    pub(crate) drag: DragSession,
    pub(crate) calibration: CalibrationStatus,
    pub(crate) view: ViewSwap,
    pub(crate) selected_plane: Option<usize>,
    pub(crate) fit: Option<ImageFit>,
    pub(crate) last_message: Option<String>,
}

impl EditorSession {
    /// Creates an empty session with no image loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the drawing surface's placement in page coordinates.
    pub fn set_surface_frame(&mut self, surface: SurfaceFrame) {
        self.surface = surface;
    }

    /// Samples a raw pointer event given in page coordinates.
    ///
    /// Only converts coordinates and overwrites the pointer record; no tool
    /// logic runs until the next tick.
    pub fn on_pointer_event(&mut self, page_position: Vec2, phase: PointerPhase) {
        let position = self.surface.to_surface(page_position);
        self.pointer.record(position, phase);
    }

    /// Selects the active click tool.
    pub fn set_tool_mode(&mut self, tool: ToolMode) {
        tracing::debug!(?tool, "tool selected");
        self.tools.set_tool(tool);
    }

    /// The active click tool.
    pub fn tool_mode(&self) -> ToolMode {
        self.tools.tool()
    }

    /// Selects the active plane orientation.
    pub fn set_plane_orientation(&mut self, orientation: PlaneOrientation) {
        self.tools.set_plane_orientation(orientation);
    }

    /// The active plane orientation, if any.
    pub fn plane_orientation(&self) -> Option<PlaneOrientation> {
        self.tools.plane_orientation()
    }

    /// Cursor the view layer should show this frame.
    pub fn cursor_style(&self) -> CursorStyle {
        if self.drag.active {
            CursorStyle::Move
        } else {
            CursorStyle::Crosshair
        }
    }

    /// Current calibration status.
    pub fn calibration_status(&self) -> CalibrationStatus {
        self.calibration
    }

    /// Records the status produced by the external calibration engine.
    pub fn set_calibration_status(&mut self, status: CalibrationStatus) {
        tracing::info!(?status, "calibration status updated");
        self.calibration = status;
    }

    /// Guide points accumulated so far, for the calibration engine.
    pub fn guide_points(&self) -> &GuidePointSet {
        &self.guide_points
    }

    /// The extraction segment's anchor points.
    pub fn extraction_points(&self) -> &[Vec2] {
        &self.extraction_points
    }

    /// Replaces the extraction segment with the two given anchors.
    ///
    /// Called by the host when the engine starts a new measurement or
    /// extraction segment.
    pub fn set_extraction_segment(&mut self, a: Vec2, b: Vec2) {
        self.extraction_points.clear();
        self.extraction_points.push(a);
        self.extraction_points.push(b);
    }

    /// Corners placed so far on an unfinished plane boundary.
    pub fn pending_boundary(&self) -> &[Vec2] {
        &self.boundary
    }

    /// Reconstructed planes known to the session.
    pub fn planes(&self) -> &[PlaneBoundary] {
        &self.planes
    }

    /// Index of the plane selected by the last plane-texture click.
    pub fn selected_plane(&self) -> Option<usize> {
        self.selected_plane
    }

    /// Current view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.view.mode()
    }

    /// Toggles between the flat and rendered views.
    ///
    /// Rejected while the camera is uncalibrated; the mode stays in place
    /// and the failure is recorded for the status snapshot.
    pub fn toggle_view(&mut self) -> Result<ViewMode> {
        match self.view.toggle(self.calibration) {
            Ok(mode) => {
                tracing::info!(?mode, "view swapped");
                self.last_message = None;
                Ok(mode)
            }
            Err(err) => {
                tracing::warn!(%err, "view swap rejected");
                self.last_message = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Loads a new image: clears all session state and computes the
    /// letterbox placement of the image on the surface.
    pub fn load_image(&mut self, image_w: f64, image_h: f64, canvas_w: f64, canvas_h: f64) -> ImageFit {
        self.clear_all();
        let fit = fit_image(image_w, image_h, canvas_w, canvas_h);
        tracing::info!(image_w, image_h, fit.scale, "image loaded");
        self.fit = Some(fit);
        fit
    }

    /// Placement of the currently loaded image, if one is loaded.
    pub fn image_fit(&self) -> Option<ImageFit> {
        self.fit
    }

    /// Message from the last rejected action, if any.
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Clears everything derived from user input on the current image.
    pub fn clear_all(&mut self) {
        self.clear_calibration();
        self.drag = DragSession::default();
        self.last_message = None;
    }

    /// Discards the existing calibration and everything derived from it:
    /// guide points, extraction points, pending boundary corners, planes,
    /// and the rendered view. Tool selection and the loaded image stay.
    ///
    /// Used when an axis tool is clicked over an existing calibration,
    /// which implicitly starts a new one.
    pub(crate) fn clear_calibration(&mut self) {
        self.guide_points.clear();
        self.extraction_points.clear();
        self.boundary.clear();
        self.planes.clear();
        self.selected_plane = None;
        self.calibration = CalibrationStatus::NotComputed;
        self.view.reset();
    }

    /// Snapshot of the session for the view layer to render.
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            tool: self.tools.tool(),
            plane_orientation: self.tools.plane_orientation(),
            guide_counts: self.guide_points.counts(),
            extraction_points: self.extraction_points.len(),
            pending_corners: self.boundary.len(),
            planes: self.planes.len(),
            calibration: self.calibration,
            view: self.view.mode(),
            cursor: self.cursor_style(),
            message: self.last_message.clone(),
        }
    }
}
