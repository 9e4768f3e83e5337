//! Breakout Remix entry point
//!
//! Headless driver: loads settings and the level, then runs the frame loop
//! against a CPU vertex batch until the frame budget is spent.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::{Context, bail};
    use breakout_remix::Settings;
    use breakout_remix::consts::SIM_DT;
    use breakout_remix::renderer::{VertexBatch, render_frame};
    use breakout_remix::sim::{GameEvent, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Breakout Remix (headless) starting...");

    let settings = Settings::load().context("failed to load settings")?;
    let problems = settings.validate();
    for problem in &problems {
        log::error!("Invalid setting: {}", problem);
    }
    if !problems.is_empty() {
        bail!("{} invalid setting(s), refusing to start", problems.len());
    }

    let mut state = GameState::new(&settings);
    let mut renderer = VertexBatch::new();
    let input = TickInput {
        idle_mode: settings.idle_mode,
        ..Default::default()
    };

    log::info!(
        "Window {}x{}, {} bricks, running {} frames",
        settings.window_width,
        settings.window_height,
        state.level().remaining(),
        settings.frame_budget
    );

    let mut bricks_broken = 0usize;
    let mut balls_lost = 0usize;
    for _ in 0..settings.frame_budget {
        tick(&mut state, &input, SIM_DT);
        for event in &state.events {
            match event {
                GameEvent::BrickDestroyed { .. } => bricks_broken += 1,
                GameEvent::BallLost { .. } => balls_lost += 1,
                _ => {}
            }
        }
        render_frame(&state, &mut renderer);
    }

    let counts = state.ball_counts();
    log::info!(
        "Done after {} ticks: {} bricks broken, {} remaining, {} balls lost, {} round resets",
        state.time_ticks,
        bricks_broken,
        state.level().remaining(),
        balls_lost,
        state.rounds_reset
    );
    log::info!(
        "Balls: {} idle, {} held, {} launched, {} destroyed",
        counts.idle,
        counts.held,
        counts.launched,
        counts.destroyed
    );
    log::info!(
        "Last frame: {} rectangles, {} bytes of vertex data",
        renderer.rect_count(),
        renderer.as_bytes().len()
    );

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No windowing backend on this target
}
