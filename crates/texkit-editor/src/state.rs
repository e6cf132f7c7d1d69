//! Point stores and transient editing state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use texkit_core::Vec2;

use crate::tools::Axis;

/// The two anchor points of the measurement/extraction segment.
pub type ExtractionPoints = SmallVec<[Vec2; 2]>;

/// Corners accumulated while defining a new plane's boundary.
pub type BoundaryInProgress = SmallVec<[Vec2; 4]>;

/// Number of corners that complete a plane boundary.
pub const BOUNDARY_CORNERS: usize = 4;

/// Whether the external calibration engine has produced camera parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalibrationStatus {
    #[default]
    NotComputed,
    Computed,
    Loaded,
}

impl CalibrationStatus {
    /// `true` when camera parameters exist, whether computed or loaded.
    pub fn is_computed(self) -> bool {
        !matches!(self, CalibrationStatus::NotComputed)
    }
}

/// Guide points accumulated per calibration axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuidePointSet {
    axes: [Vec<Vec2>; 3],
}

impl GuidePointSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a guide point to one axis.
    pub fn push(&mut self, axis: Axis, point: Vec2) {
        self.axes[axis.index()].push(point);
    }

    /// The points placed on one axis, in placement order.
    pub fn axis(&self, axis: Axis) -> &[Vec2] {
        &self.axes[axis.index()]
    }

    /// Per-axis point counts, X/Y/Z order.
    pub fn counts(&self) -> [usize; 3] {
        [self.axes[0].len(), self.axes[1].len(), self.axes[2].len()]
    }

    /// Total number of guide points across all axes.
    pub fn len(&self) -> usize {
        self.axes.iter().map(Vec::len).sum()
    }

    /// `true` when no axis holds any point.
    pub fn is_empty(&self) -> bool {
        self.axes.iter().all(Vec::is_empty)
    }

    /// Removes every point from every axis.
    pub fn clear(&mut self) {
        for axis in &mut self.axes {
            axis.clear();
        }
    }
}

/// Transient drag state spanning one press-move-release cycle on an
/// extraction point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSession {
    pub active: bool,
    pub point_index: usize,
}
