//! Rendering collaborator
//!
//! The simulation only needs two operations from a graphics backend: draw a
//! colored rectangle and present the finished frame. `render_frame` issues
//! them for a game state; `VertexBatch` is a CPU-side backend that turns the
//! rectangles into vertex data.

pub mod batch;
pub mod shapes;
pub mod vertex;

pub use batch::VertexBatch;
pub use vertex::Vertex;

use glam::{Vec2, Vec3};

use crate::sim::GameState;

/// A graphics backend able to draw rectangles
pub trait Renderer {
    fn draw_rectangle(&mut self, pos: Vec2, size: Vec2, color: Vec3);

    /// Finish the frame (buffer swap)
    fn present(&mut self);
}

/// Draw one frame: visible bricks, then the paddle, then held and launched
/// balls, then present.
pub fn render_frame<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    for brick in state.level().visible_bricks() {
        let body = &brick.body;
        renderer.draw_rectangle(body.pos, body.size, body.color);
    }

    let paddle = &state.paddle.body;
    renderer.draw_rectangle(paddle.pos, paddle.size, paddle.color);

    for ball in state.balls.iter().filter(|b| b.is_visible()) {
        renderer.draw_rectangle(ball.body.pos, ball.body.size, ball.body.color);
    }

    renderer.present();
}
