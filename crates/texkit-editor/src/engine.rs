//! The seam between the editor and the external plane/texture engine.
//!
//! The editor never performs calibration math or texture rectification; it
//! forwards confirmed clicks through [`SceneEngine`] and keeps read-only
//! [`PlaneBoundary`] records for hit-testing. Engine calls are synchronous
//! and fire-and-forget: all of their state effects are visible before the
//! next frame's resolver runs.

use texkit_core::Vec2;
use uuid::Uuid;

/// A reconstructed planar surface in image space.
///
/// Four corner points in consistent winding order plus an opaque handle to
/// the texture the engine rendered for this plane. The editor reads but
/// never mutates these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneBoundary {
    pub corners: [Vec2; 4],
    pub texture: Uuid,
}

/// External plane/texture engine invoked by the click dispatcher.
pub trait SceneEngine {
    /// Builds a plane from a completed 4-corner boundary and returns its
    /// record, including the handle of the texture rendered for it.
    fn create_plane(&mut self, corners: [Vec2; 4]) -> PlaneBoundary;

    /// Extracts a texture sample at the clicked point.
    fn extract_texture(&mut self, at: Vec2);

    /// Starts scale calibration from the clicked point.
    fn set_scale(&mut self, at: Vec2);

    /// Measures physical size from the clicked point.
    fn measure_size(&mut self, at: Vec2);

    /// Displays the texture of an already-reconstructed plane.
    fn show_plane_texture(&mut self, texture: Uuid);
}

/// Engine that logs every call and does nothing else.
///
/// Useful for headless sessions and as a stand-in while the real engine is
/// unavailable.
#[derive(Debug, Default)]
pub struct NoOpEngine;

impl SceneEngine for NoOpEngine {
    fn create_plane(&mut self, corners: [Vec2; 4]) -> PlaneBoundary {
        let texture = Uuid::new_v4();
        tracing::debug!(?corners, %texture, "create_plane (no-op)");
        PlaneBoundary { corners, texture }
    }

    fn extract_texture(&mut self, at: Vec2) {
        tracing::debug!(?at, "extract_texture (no-op)");
    }

    fn set_scale(&mut self, at: Vec2) {
        tracing::debug!(?at, "set_scale (no-op)");
    }

    fn measure_size(&mut self, at: Vec2) {
        tracing::debug!(?at, "measure_size (no-op)");
    }

    fn show_plane_texture(&mut self, texture: Uuid) {
        tracing::debug!(%texture, "show_plane_texture (no-op)");
    }
}
