use glam::{Mat4, Vec2, Vec4};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub mvp: [[f32; 4]; 4],
}

/// Centered orthographic view. `size` is the full extent of the view in world
/// units; its width is derived from the height once, at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    pub position: Vec2,
    pub size: Vec2,
}

impl Camera2D {
    pub fn new(position: Vec2, view_height: f32, aspect_ratio: f32) -> Self {
        Self {
            position,
            size: Vec2::new(view_height * aspect_ratio, view_height),
        }
    }

    /// Returns `(scale, offset)` such that `clip = world * scale + offset`.
    pub fn view_transform(&self) -> (Vec2, Vec2) {
        let scale = 2.0 / self.size;
        let offset = -self.position * scale;
        (scale, offset)
    }

    pub fn mvp(&self) -> Mat4 {
        let (scale, offset) = self.view_transform();
        Mat4::from_cols(
            Vec4::new(scale.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(offset.x, offset.y, 0.0, 1.0),
        )
    }

    pub fn build_uniform(&self) -> CameraUniform {
        CameraUniform {
            mvp: self.mvp().to_cols_array_2d(),
        }
    }

    /// Inverse of the view transform for a point in normalized device coordinates.
    pub fn ndc_to_world(&self, ndc: Vec2) -> Vec2 {
        self.position + ndc * self.size / 2.0
    }
}
