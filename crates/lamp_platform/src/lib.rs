pub mod error;
pub mod window;

pub use error::PlatformError;
pub use window::{create_window, PlatformConfig};
