//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;

/// Two triangles covering the unit square, top-left origin
const UNIT_QUAD: [[f32; 2]; 6] = [
    [0.0, 1.0],
    [1.0, 0.0],
    [0.0, 0.0],
    [0.0, 1.0],
    [1.0, 1.0],
    [1.0, 0.0],
];

/// Generate vertices for a filled axis-aligned rectangle
pub fn rectangle(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    UNIT_QUAD.map(|[u, v]| Vertex::new(pos.x + u * size.x, pos.y + v * size.y, color))
}
