pub mod batch;
pub mod camera;
pub mod error;
pub mod gpu_context;
pub mod renderer;
pub mod shader;
pub mod sprite;
pub mod sprite_pipeline;
pub mod texture;
pub mod vertex;

pub use batch::QuadBatch;
pub use camera::{Camera2D, CameraUniform};
pub use error::RenderError;
pub use gpu_context::GpuContext;
pub use renderer::Renderer;
pub use sprite::{SpriteRegion, Tint, OPAQUE_WHITE};
pub use sprite_pipeline::SpritePipeline;
pub use texture::{AtlasImage, Texture};
pub use vertex::SpriteVertex;
