//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window management and pointer-to-message mapping

pub mod app;

pub use app::App;
