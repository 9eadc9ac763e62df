//! UI module housing the shot-list caption overlay.
pub mod plugin;
pub mod systems;

pub use plugin::CaptionPlugin;
