//! Integration tests for plane creation, hit-testing, and plane-texture
//! dispatch, using an engine double that records every call.

use texkit_editor::{
    CalibrationStatus, EditorError, EditorSession, FrameLoop, PlaneBoundary, PointerPhase,
    SceneEngine, TickOutcome, ToolMode, Vec2,
};
use uuid::Uuid;

#[derive(Debug, Default)]
struct RecordingEngine {
    created: Vec<[Vec2; 4]>,
    extracted: Vec<Vec2>,
    scaled: Vec<Vec2>,
    measured: Vec<Vec2>,
    shown: Vec<Uuid>,
}

impl SceneEngine for RecordingEngine {
    fn create_plane(&mut self, corners: [Vec2; 4]) -> PlaneBoundary {
        self.created.push(corners);
        PlaneBoundary {
            corners,
            texture: Uuid::new_v4(),
        }
    }

    fn extract_texture(&mut self, at: Vec2) {
        self.extracted.push(at);
    }

    fn set_scale(&mut self, at: Vec2) {
        self.scaled.push(at);
    }

    fn measure_size(&mut self, at: Vec2) {
        self.measured.push(at);
    }

    fn show_plane_texture(&mut self, texture: Uuid) {
        self.shown.push(texture);
    }
}

fn click(
    session: &mut EditorSession,
    frame_loop: &mut FrameLoop,
    engine: &mut RecordingEngine,
    at: Vec2,
) -> Result<TickOutcome, EditorError> {
    session.on_pointer_event(at, PointerPhase::Down);
    let outcome = frame_loop.tick(session, engine);
    session.on_pointer_event(at, PointerPhase::Up);
    frame_loop.tick(session, engine).unwrap();
    outcome
}

/// Places a 10x10 square plane with corners at (x, y).
fn place_square_plane(
    session: &mut EditorSession,
    frame_loop: &mut FrameLoop,
    engine: &mut RecordingEngine,
    x: f64,
    y: f64,
) {
    session.set_tool_mode(ToolMode::NewPlane);
    for corner in [
        Vec2::new(x, y),
        Vec2::new(x + 10.0, y),
        Vec2::new(x + 10.0, y + 10.0),
        Vec2::new(x, y + 10.0),
    ] {
        click(session, frame_loop, engine, corner).unwrap();
    }
}

#[test]
fn test_fourth_corner_completes_the_plane() {
    let mut session = EditorSession::new();
    let mut frame_loop = FrameLoop::new();
    let mut engine = RecordingEngine::default();

    place_square_plane(&mut session, &mut frame_loop, &mut engine, 0.0, 0.0);

    assert_eq!(engine.created.len(), 1);
    assert_eq!(engine.created[0][2], Vec2::new(10.0, 10.0));
    assert_eq!(session.planes().len(), 1);
    assert!(session.pending_boundary().is_empty());
}

#[test]
fn test_plane_texture_requires_calibration() {
    let mut session = EditorSession::new();
    let mut frame_loop = FrameLoop::new();
    let mut engine = RecordingEngine::default();

    place_square_plane(&mut session, &mut frame_loop, &mut engine, 0.0, 0.0);

    // Uncalibrated: rejected before any hit-testing happens, even though
    // the click is well inside the plane.
    session.set_tool_mode(ToolMode::PlaneTexture);
    let result = click(&mut session, &mut frame_loop, &mut engine, Vec2::new(5.0, 5.0));
    assert_eq!(result, Err(EditorError::CalibrationRequired));
    assert!(engine.shown.is_empty());
    assert_eq!(session.selected_plane(), None);
}

#[test]
fn test_plane_texture_resolves_plane_and_shows_texture() {
    let mut session = EditorSession::new();
    let mut frame_loop = FrameLoop::new();
    let mut engine = RecordingEngine::default();

    place_square_plane(&mut session, &mut frame_loop, &mut engine, 0.0, 0.0);
    place_square_plane(&mut session, &mut frame_loop, &mut engine, 20.0, 0.0);
    session.set_calibration_status(CalibrationStatus::Computed);

    session.set_tool_mode(ToolMode::PlaneTexture);
    let outcome = click(&mut session, &mut frame_loop, &mut engine, Vec2::new(25.0, 5.0));
    assert_eq!(outcome, Ok(TickOutcome::Dispatched(ToolMode::PlaneTexture)));
    assert_eq!(session.selected_plane(), Some(1));
    assert_eq!(engine.shown, vec![session.planes()[1].texture]);
}

#[test]
fn test_plane_texture_outside_every_plane_is_rejected() {
    let mut session = EditorSession::new();
    let mut frame_loop = FrameLoop::new();
    let mut engine = RecordingEngine::default();

    place_square_plane(&mut session, &mut frame_loop, &mut engine, 0.0, 0.0);
    session.set_calibration_status(CalibrationStatus::Computed);

    session.set_tool_mode(ToolMode::PlaneTexture);
    let result = click(&mut session, &mut frame_loop, &mut engine, Vec2::new(50.0, 50.0));
    assert_eq!(result, Err(EditorError::OutsideAllPlanes));
    assert!(engine.shown.is_empty());
    assert_eq!(session.selected_plane(), None);
    assert_eq!(
        session.last_message(),
        Some("click a point inside a plane")
    );
}

#[test]
fn test_point_tools_forward_to_the_engine() {
    let mut session = EditorSession::new();
    let mut frame_loop = FrameLoop::new();
    let mut engine = RecordingEngine::default();

    session.set_tool_mode(ToolMode::ExtractTexture);
    click(&mut session, &mut frame_loop, &mut engine, Vec2::new(1.0, 1.0)).unwrap();
    session.set_tool_mode(ToolMode::NewScale);
    click(&mut session, &mut frame_loop, &mut engine, Vec2::new(2.0, 2.0)).unwrap();
    session.set_tool_mode(ToolMode::MeasureSize);
    click(&mut session, &mut frame_loop, &mut engine, Vec2::new(3.0, 3.0)).unwrap();

    assert_eq!(engine.extracted, vec![Vec2::new(1.0, 1.0)]);
    assert_eq!(engine.scaled, vec![Vec2::new(2.0, 2.0)]);
    assert_eq!(engine.measured, vec![Vec2::new(3.0, 3.0)]);
}

#[test]
fn test_exactly_one_action_per_confirmed_click() {
    let mut session = EditorSession::new();
    let mut frame_loop = FrameLoop::new();
    let mut engine = RecordingEngine::default();

    session.set_tool_mode(ToolMode::ExtractTexture);
    // One press, then a burst of moves before the next refresh.
    session.on_pointer_event(Vec2::new(4.0, 4.0), PointerPhase::Down);
    frame_loop.tick(&mut session, &mut engine).unwrap();
    session.on_pointer_event(Vec2::new(5.0, 4.0), PointerPhase::Move);
    session.on_pointer_event(Vec2::new(6.0, 4.0), PointerPhase::Move);
    frame_loop.tick(&mut session, &mut engine).unwrap();

    assert_eq!(engine.extracted.len(), 1);
}
