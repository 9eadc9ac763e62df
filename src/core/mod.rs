//! Core module housing the scene clock and display settings.
pub mod plugin;
pub mod settings;

pub use plugin::CorePlugin;
pub use settings::DisplaySettings;
