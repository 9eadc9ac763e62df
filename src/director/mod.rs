//! Director module housing the scripted camera choreography.
pub mod components;
pub mod plugin;
pub mod segment;
pub mod systems;

pub use plugin::DirectorPlugin;
