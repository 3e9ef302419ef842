//! CPU-side quad batch drawn as a single triangle strip.
//!
//! Each quad contributes six vertices: the four corners in strip order, with the
//! first and last duplicated. The duplicates produce zero-area triangles that
//! stitch consecutive quads together, so the whole batch is one
//! `TriangleStrip` draw with no index buffer.

use glam::Vec2;

use crate::sprite::{SpriteRegion, Tint, OPAQUE_WHITE};
use crate::vertex::SpriteVertex;

pub const VERTICES_PER_QUAD: usize = 6;

#[derive(Debug, Default, Clone)]
pub struct QuadBatch {
    vertices: Vec<SpriteVertex>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quad_capacity(quads: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(quads * VERTICES_PER_QUAD),
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn draw_quad(&mut self, region: &SpriteRegion, center: Vec2, size: Vec2) {
        self.draw_quad_ex(region, center, size, OPAQUE_WHITE, 0.0);
    }

    pub fn draw_quad_ex(
        &mut self,
        region: &SpriteRegion,
        center: Vec2,
        size: Vec2,
        tint: Tint,
        rotation: f32,
    ) {
        let min_uv = region.min_uv;
        let max_uv = region.max_uv;
        let right = Vec2::new(rotation.cos(), rotation.sin());
        let up = right.perp();
        let half_w = size.x / 2.0;
        let half_h = size.y / 2.0;

        let vertex = |position: Vec2, u: f32, v: f32| SpriteVertex {
            position: position.to_array(),
            tex_coords: [u, v],
            color: tint,
        };

        let bottom_left = vertex(
            center + right * -half_w + up * -half_h,
            min_uv.x,
            min_uv.y,
        );
        let top_left = vertex(center + right * -half_w + up * half_h, min_uv.x, max_uv.y);
        let bottom_right = vertex(center + right * half_w + up * -half_h, max_uv.x, min_uv.y);
        let top_right = vertex(center + right * half_w + up * half_h, max_uv.x, max_uv.y);

        self.vertices.extend_from_slice(&[
            bottom_left,
            bottom_left,
            top_left,
            bottom_right,
            top_right,
            top_right,
        ]);
    }

    pub fn vertices(&self) -> &[SpriteVertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_QUAD
    }
}
