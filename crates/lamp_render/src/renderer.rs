use wgpu::util::DeviceExt;

use crate::batch::QuadBatch;
use crate::camera::Camera2D;
use crate::error::RenderError;
use crate::gpu_context::GpuContext;
use crate::sprite_pipeline::SpritePipeline;
use crate::texture::{AtlasImage, Texture};
use crate::vertex::SpriteVertex;

const INITIAL_VERTEX_CAPACITY: usize = 64;

/// One atlas, one dynamic vertex buffer, one draw call per frame.
pub struct Renderer {
    pipeline: SpritePipeline,
    atlas: Texture,
    atlas_bind_group: wgpu::BindGroup,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    batch: QuadBatch,
}

impl Renderer {
    pub fn new(gpu: &GpuContext, atlas_image: &AtlasImage) -> Result<Self, RenderError> {
        let pipeline = SpritePipeline::new(&gpu.device, gpu.surface_format)?;
        let atlas = Texture::from_atlas(&gpu.device, &gpu.queue, atlas_image, "atlas");
        let atlas_bind_group = pipeline.create_texture_bind_group(&gpu.device, &atlas);

        let camera_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Uniform Buffer"),
                contents: bytemuck::cast_slice(&[glam::Mat4::IDENTITY.to_cols_array_2d()]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let camera_bind_group = pipeline.create_camera_bind_group(&gpu.device, &camera_buffer);

        Ok(Self {
            pipeline,
            atlas,
            atlas_bind_group,
            camera_buffer,
            camera_bind_group,
            vertex_buffer: create_vertex_buffer(&gpu.device, INITIAL_VERTEX_CAPACITY),
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            batch: QuadBatch::with_quad_capacity(INITIAL_VERTEX_CAPACITY / 6),
        })
    }

    pub fn atlas_size(&self) -> (u32, u32) {
        self.atlas.size
    }

    /// Starts a new frame. The previous frame's vertices are discarded.
    pub fn begin_frame(&mut self) -> &mut QuadBatch {
        self.batch.clear();
        &mut self.batch
    }

    /// Uploads the batch, clears to transparent black and issues one
    /// triangle-strip draw over every queued quad, then presents.
    pub fn submit(&mut self, gpu: &GpuContext, camera: &Camera2D) {
        self.ensure_vertex_capacity(&gpu.device, self.batch.len());
        if !self.batch.is_empty() {
            gpu.queue.write_buffer(
                &self.vertex_buffer,
                0,
                bytemuck::cast_slice(self.batch.vertices()),
            );
        }
        gpu.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[camera.build_uniform()]),
        );

        let Some((output, view)) = gpu.begin_frame() else {
            return;
        };

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Sprite Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            if !self.batch.is_empty() {
                let interface = &self.pipeline.interface;
                render_pass.set_pipeline(&self.pipeline.render_pipeline);
                render_pass.set_bind_group(interface.mvp.group, &self.camera_bind_group, &[]);
                render_pass.set_bind_group(interface.tex.group, &self.atlas_bind_group, &[]);
                let byte_len = (self.batch.len() * std::mem::size_of::<SpriteVertex>()) as u64;
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..byte_len));
                render_pass.draw(0..self.batch.len() as u32, 0..1);
            }
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }

    fn ensure_vertex_capacity(&mut self, device: &wgpu::Device, vertex_count: usize) {
        let needed = vertex_count.max(1);
        if needed > self.vertex_capacity {
            self.vertex_capacity = needed.next_power_of_two();
            self.vertex_buffer = create_vertex_buffer(device, self.vertex_capacity);
            log::debug!("Vertex buffer grown to {} vertices", self.vertex_capacity);
        }
    }
}

fn create_vertex_buffer(device: &wgpu::Device, vertex_capacity: usize) -> wgpu::Buffer {
    let byte_len = (vertex_capacity * std::mem::size_of::<SpriteVertex>()).max(1) as u64;
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Sprite Vertex Buffer"),
        size: byte_len,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
