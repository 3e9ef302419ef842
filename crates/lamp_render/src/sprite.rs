use glam::Vec2;

/// Normalized rectangle into the shared atlas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteRegion {
    pub min_uv: Vec2,
    pub max_uv: Vec2,
}

impl SpriteRegion {
    pub const fn new(min_uv: Vec2, max_uv: Vec2) -> Self {
        Self { min_uv, max_uv }
    }

    /// Square region with both corners on the atlas diagonal.
    pub const fn diagonal(min: f32, max: f32) -> Self {
        Self {
            min_uv: Vec2::splat(min),
            max_uv: Vec2::splat(max),
        }
    }
}

/// Per-vertex color multiplied against the sampled texel.
pub type Tint = [u8; 4];

pub const OPAQUE_WHITE: Tint = [0xff, 0xff, 0xff, 0xff];
