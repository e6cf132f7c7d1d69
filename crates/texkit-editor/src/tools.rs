//! Tool mode registry: which tool a confirmed click will trigger.
//!
//! Pure state. Legality of what a tool may do on click is enforced by the
//! dispatcher, not here.

use serde::{Deserialize, Serialize};

/// A calibration guide axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index into per-axis storage.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// The currently selected interactive tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolMode {
    /// No tool selected; confirmed clicks are ignored.
    #[default]
    None,
    AxisX,
    AxisY,
    AxisZ,
    NewPlane,
    PlaneTexture,
    ExtractTexture,
    NewScale,
    MeasureSize,
}

impl ToolMode {
    /// The guide axis this tool places points on, if it is an axis tool.
    pub fn axis(self) -> Option<Axis> {
        match self {
            ToolMode::AxisX => Some(Axis::X),
            ToolMode::AxisY => Some(Axis::Y),
            ToolMode::AxisZ => Some(Axis::Z),
            _ => None,
        }
    }
}

/// Orientation of the plane a plane-relative tool works against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaneOrientation {
    YZ,
    XZ,
    XY,
}

/// Holds the active tool and the active plane orientation.
///
/// The two fields are independent: selecting a plane orientation does not
/// deselect the click tool, matching the two separate button rows of the
/// original interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolRegistry {
    tool: ToolMode,
    plane_orientation: Option<PlaneOrientation>,
}

impl ToolRegistry {
    /// Creates a registry with no tool selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active click tool.
    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    /// Selects the active click tool.
    pub fn set_tool(&mut self, tool: ToolMode) {
        self.tool = tool;
    }

    /// The active plane orientation, if one has been selected.
    pub fn plane_orientation(&self) -> Option<PlaneOrientation> {
        self.plane_orientation
    }

    /// Selects the active plane orientation.
    pub fn set_plane_orientation(&mut self, orientation: PlaneOrientation) {
        self.plane_orientation = Some(orientation);
    }
}
