//! slotdock - a horizontal dock strip with animated drag-to-reorder
//!
//! The crate is a pure core plus an Elm-style message layer. Hosts forward
//! pointer events and frame ticks as [`Msg`]s, read slot displacements back
//! from the [`Dock`], and draw the visuals their render function produced.

pub mod animation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dock;
pub mod error;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod offset;
pub mod snapshot;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DockConfig;
pub use dock::{Dock, DockBuilder, SlotView};
pub use error::DockError;
pub use messages::Msg;
pub use model::DockModel;
