//! Click dispatch: exactly one action per confirmed click, chosen by the
//! active tool.

use texkit_core::{EditorError, Result, Vec2};

use crate::engine::SceneEngine;
use crate::hit_test::hit_test_planes;
use crate::session::{EditorSession, TickOutcome};
use crate::state::BOUNDARY_CORNERS;
use crate::tools::{Axis, ToolMode};

impl EditorSession {
    /// Routes a confirmed, non-drag click to the active tool.
    ///
    /// Sequencing rules, in order:
    /// 1. An axis tool clicked over an existing calibration discards the
    ///    old calibration and everything derived from it before any other
    ///    rule runs, then places the new point.
    /// 2. An unfinished plane boundary blocks every tool except `NewPlane`;
    ///    the click is rejected with no state mutation.
    pub(crate) fn dispatch_click(
        &mut self,
        at: Vec2,
        engine: &mut dyn SceneEngine,
    ) -> Result<TickOutcome> {
        let tool = self.tools.tool();

        if tool.axis().is_some() && self.calibration.is_computed() {
            tracing::info!("axis tool over an existing calibration; starting over");
            self.clear_calibration();
        }

        if !self.boundary.is_empty() && tool != ToolMode::NewPlane {
            return Err(EditorError::PlaneInProgress);
        }

        match tool {
            ToolMode::None => Ok(TickOutcome::Idle),
            ToolMode::AxisX => Ok(self.place_guide(Axis::X, at)),
            ToolMode::AxisY => Ok(self.place_guide(Axis::Y, at)),
            ToolMode::AxisZ => Ok(self.place_guide(Axis::Z, at)),
            ToolMode::NewPlane => {
                self.boundary.push(at);
                tracing::debug!(corner = self.boundary.len(), ?at, "plane corner placed");
                if self.boundary.len() == BOUNDARY_CORNERS {
                    let corners = [
                        self.boundary[0],
                        self.boundary[1],
                        self.boundary[2],
                        self.boundary[3],
                    ];
                    let plane = engine.create_plane(corners);
                    tracing::info!(texture = %plane.texture, "plane boundary completed");
                    self.planes.push(plane);
                    self.boundary.clear();
                }
                Ok(TickOutcome::Dispatched(tool))
            }
            ToolMode::ExtractTexture => {
                engine.extract_texture(at);
                Ok(TickOutcome::Dispatched(tool))
            }
            ToolMode::NewScale => {
                engine.set_scale(at);
                Ok(TickOutcome::Dispatched(tool))
            }
            ToolMode::MeasureSize => {
                engine.measure_size(at);
                Ok(TickOutcome::Dispatched(tool))
            }
            ToolMode::PlaneTexture => {
                if !self.calibration.is_computed() {
                    return Err(EditorError::CalibrationRequired);
                }
                match hit_test_planes(at, &self.planes) {
                    Some(index) => {
                        self.selected_plane = Some(index);
                        engine.show_plane_texture(self.planes[index].texture);
                        Ok(TickOutcome::Dispatched(tool))
                    }
                    None => Err(EditorError::OutsideAllPlanes),
                }
            }
        }
    }

    fn place_guide(&mut self, axis: Axis, at: Vec2) -> TickOutcome {
        self.guide_points.push(axis, at);
        tracing::debug!(?axis, ?at, "guide point placed");
        TickOutcome::Dispatched(self.tools.tool())
    }
}
