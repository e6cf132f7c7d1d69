//! # TexKit Editor
//!
//! The pointer-driven point-editing and tool-dispatch state machine behind
//! TexKit's calibration workflow. The editor interprets raw pointer input,
//! decides whether the user is dragging an existing extraction point or
//! placing a new one, constrains drags along the measurement-segment axis,
//! routes confirmed clicks to the currently selected tool, and hit-tests
//! clicks against reconstructed plane boundaries.
//!
//! Everything outside that loop (image decoding, calibration math, texture
//! rectification, rendering) lives behind the [`SceneEngine`] trait and the
//! host-facing methods of [`EditorSession`].
//!
//! ## Architecture
//!
//! Data flows one direction per frame:
//!
//! ```text
//! pointer sampler -> frame tick -> drag/placement resolver
//!     -> click dispatcher -> scene engine -> status snapshot
//! ```
//!
//! The whole state bundle is owned by one [`EditorSession`]; hosts drive it
//! with [`EditorSession::on_pointer_event`] and a per-refresh
//! [`FrameLoop::tick`]. All mutation happens inside the tick, so the
//! press/drag/dispatch sequence is atomic from the host's point of view.

pub mod drag;
pub mod engine;
pub mod fit;
pub mod hit_test;
pub mod pointer;
pub mod scheduler;
pub mod session;
pub mod state;
pub mod tools;
pub mod view;

pub use drag::{DragStep, PICK_RADIUS};
pub use engine::{NoOpEngine, PlaneBoundary, SceneEngine};
pub use fit::{fit_image, ImageFit};
pub use hit_test::hit_test_planes;
pub use pointer::{PointerPhase, PointerState, SurfaceFrame};
pub use scheduler::FrameLoop;
pub use session::{EditorSession, TickOutcome};
pub use state::{
    BoundaryInProgress, CalibrationStatus, DragSession, ExtractionPoints, GuidePointSet,
};
pub use tools::{Axis, PlaneOrientation, ToolMode, ToolRegistry};
pub use view::{CursorStyle, StatusSnapshot, ViewMode, ViewSwap};

pub use texkit_core::{EditorError, Result, Vec2};
