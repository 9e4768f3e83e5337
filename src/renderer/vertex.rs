//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Opaque RGBA from an entity's RGB color
#[inline]
pub fn rgba(color: Vec3) -> [f32; 4] {
    color.extend(1.0).to_array()
}

