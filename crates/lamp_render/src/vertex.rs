#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
    pub color: [u8; 4],
}

const _: () = assert!(std::mem::size_of::<SpriteVertex>() == 20);

impl SpriteVertex {
    /// Buffer layout for the given shader input locations
    /// (`Position`, `TexCoord`, `Color`, in that order).
    pub fn attributes(locations: [u32; 3]) -> [wgpu::VertexAttribute; 3] {
        [
            // position
            wgpu::VertexAttribute {
                offset: std::mem::offset_of!(SpriteVertex, position) as wgpu::BufferAddress,
                shader_location: locations[0],
                format: wgpu::VertexFormat::Float32x2,
            },
            // tex_coords
            wgpu::VertexAttribute {
                offset: std::mem::offset_of!(SpriteVertex, tex_coords) as wgpu::BufferAddress,
                shader_location: locations[1],
                format: wgpu::VertexFormat::Float32x2,
            },
            // color, normalized from 0..255
            wgpu::VertexAttribute {
                offset: std::mem::offset_of!(SpriteVertex, color) as wgpu::BufferAddress,
                shader_location: locations[2],
                format: wgpu::VertexFormat::Unorm8x4,
            },
        ]
    }

    pub fn layout(attributes: &[wgpu::VertexAttribute]) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        }
    }
}
