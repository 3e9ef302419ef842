use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use crate::error::PlatformError;

/// Window title and pixel size, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            title: "Lamplight".to_string(),
            width: 1200,
            height: 700,
        }
    }
}

impl PlatformConfig {
    /// Loads the config file at `path`, or the defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, PlatformError> {
        if !path.exists() {
            log::info!(
                "No window config at '{}', using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| PlatformError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|err| match err {
            PlatformError::ConfigParse { source, .. } => PlatformError::ConfigParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, PlatformError> {
        let config: PlatformConfig =
            serde_json::from_str(raw).map_err(|source| PlatformError::ConfigParse {
                path: Default::default(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    fn validate(&self) -> Result<(), PlatformError> {
        if self.width == 0 || self.height == 0 {
            return Err(PlatformError::ConfigInvalid(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

pub fn create_window(
    event_loop: &ActiveEventLoop,
    config: &PlatformConfig,
) -> Result<Arc<Window>, PlatformError> {
    // Sizes are physical pixels: the pointer mapping normalizes against them.
    let attrs = WindowAttributes::default()
        .with_title(&config.title)
        .with_inner_size(winit::dpi::PhysicalSize::new(config.width, config.height))
        .with_resizable(false);

    let window = event_loop.create_window(attrs)?;
    Ok(Arc::new(window))
}
