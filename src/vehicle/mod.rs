//! Vehicle module housing the static off-road convoy.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::VehiclePlugin;
