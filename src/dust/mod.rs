//! Dust module housing the drifting particle field.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::DustPlugin;
