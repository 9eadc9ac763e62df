//! World module housing dune terrain generation and scene lighting.
pub mod components;
pub mod plugin;
pub mod systems;
pub mod terrain;

pub use plugin::WorldPlugin;
