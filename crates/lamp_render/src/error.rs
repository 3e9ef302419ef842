use std::fmt;
use std::path::PathBuf;

/// Shader pipeline stage that rejected the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Parse,
    Validate,
    Link,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Parse => "compile (parse)",
            Self::Validate => "compile (validate)",
            Self::Link => "link",
        })
    }
}

/// Renderer bootstrap failures. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,

    #[error("failed to read texture {path}: {source}")]
    TextureRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode texture {label}: {source}")]
    TextureDecode {
        label: String,
        source: image::ImageError,
    },

    #[error("shader {stage} failed:\n{log}")]
    Shader { stage: ShaderStage, log: String },

    #[error("shader has no vertex entry point")]
    NoVertexEntryPoint,

    #[error("no attribute named {0}")]
    MissingAttribute(&'static str),

    #[error("no uniform named {0}")]
    MissingUniform(&'static str),
}
