//! CPU vertex batch renderer
//!
//! Accumulates rectangles as triangles while a frame is drawn; `present`
//! publishes the batch as the last completed frame, ready for upload.

use glam::{Vec2, Vec3};

use super::Renderer;
use super::shapes::rectangle;
use super::vertex::{Vertex, rgba};

#[derive(Debug, Default)]
pub struct VertexBatch {
    /// Frame being drawn
    pending: Vec<Vertex>,
    /// Last presented frame
    frame: Vec<Vertex>,
    frames_presented: u64,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices of the last presented frame
    pub fn last_frame(&self) -> &[Vertex] {
        &self.frame
    }

    /// Last presented frame as raw bytes for a vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.frame)
    }

    /// Rectangles in the last presented frame
    pub fn rect_count(&self) -> usize {
        self.frame.len() / 6
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Renderer for VertexBatch {
    fn draw_rectangle(&mut self, pos: Vec2, size: Vec2, color: Vec3) {
        self.pending.extend_from_slice(&rectangle(pos, size, rgba(color)));
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.pending, &mut self.frame);
        self.pending.clear();
        self.frames_presented += 1;
    }
}
