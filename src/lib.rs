//! # TexKit
//!
//! An interactive toolkit for single-image camera calibration and
//! plane-texture extraction: place guide points along scene axes, let an
//! external engine compute camera parameters, outline planar surfaces, and
//! extract or measure their textures.
//!
//! ## Architecture
//!
//! TexKit is organized as a workspace with multiple crates:
//!
//! 1. **texkit-core** - Geometry primitives, error taxonomy, shared-state aliases
//! 2. **texkit-editor** - Pointer sampling, frame scheduling, drag/placement
//!    resolution, tool dispatch, plane hit-testing, view swapping
//! 3. **texkit** - Main binary wiring logging and a host loop around the editor
//!
//! The editor is host-agnostic: any surface that can deliver pointer events
//! and a per-refresh tick can drive it. Calibration math and texture
//! rectification stay behind the [`SceneEngine`] trait.

pub use texkit_core::{point_in_quad, thread_safe, EditorError, Result, ThreadSafe, Vec2};

pub use texkit_editor::{
    fit_image, hit_test_planes, Axis, CalibrationStatus, CursorStyle, DragStep, EditorSession,
    FrameLoop, ImageFit, NoOpEngine, PlaneBoundary, PlaneOrientation, PointerPhase, PointerState,
    SceneEngine, StatusSnapshot, SurfaceFrame, TickOutcome, ToolMode, ToolRegistry, ViewMode,
    PICK_RADIUS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
