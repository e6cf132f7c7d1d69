//! Headless demo host: replays a scripted editing session against the
//! no-op engine and prints the resulting status snapshot.
//!
//! A real host wires `on_pointer_event` to its input layer and `tick` to
//! its display refresh; this binary stands in for both.

use texkit::{
    init_logging, CalibrationStatus, EditorSession, FrameLoop, NoOpEngine, PointerPhase,
    SurfaceFrame, ToolMode, Vec2,
};

fn click(
    session: &mut EditorSession,
    frame_loop: &mut FrameLoop,
    engine: &mut NoOpEngine,
    at: Vec2,
) -> anyhow::Result<()> {
    session.on_pointer_event(at, PointerPhase::Down);
    if let Err(err) = frame_loop.tick(session, engine) {
        tracing::warn!(%err, ?at, "click rejected");
    }
    session.on_pointer_event(at, PointerPhase::Up);
    frame_loop.tick(session, engine)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut session = EditorSession::new();
    let mut frame_loop = FrameLoop::new();
    let mut engine = NoOpEngine;

    session.set_surface_frame(SurfaceFrame::default());
    let fit = session.load_image(1280.0, 960.0, 800.0, 600.0);
    tracing::info!(?fit, "image placed on surface");

    // Guide points along two scene axes.
    session.set_tool_mode(ToolMode::AxisX);
    for at in [Vec2::new(100.0, 400.0), Vec2::new(300.0, 380.0)] {
        click(&mut session, &mut frame_loop, &mut engine, at)?;
    }
    session.set_tool_mode(ToolMode::AxisY);
    for at in [Vec2::new(120.0, 420.0), Vec2::new(140.0, 520.0)] {
        click(&mut session, &mut frame_loop, &mut engine, at)?;
    }

    // The external calibration engine would consume session.guide_points()
    // here; stand in for its result.
    session.set_calibration_status(CalibrationStatus::Computed);

    // Outline one planar surface.
    session.set_tool_mode(ToolMode::NewPlane);
    for at in [
        Vec2::new(200.0, 200.0),
        Vec2::new(400.0, 210.0),
        Vec2::new(390.0, 350.0),
        Vec2::new(210.0, 340.0),
    ] {
        click(&mut session, &mut frame_loop, &mut engine, at)?;
    }

    // Show its texture.
    session.set_tool_mode(ToolMode::PlaneTexture);
    click(&mut session, &mut frame_loop, &mut engine, Vec2::new(300.0, 280.0))?;

    println!("{}", serde_json::to_string_pretty(&session.status())?);

    frame_loop.stop();
    Ok(())
}
