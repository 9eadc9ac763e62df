//! Components used by the world module.
use bevy::prelude::*;

/// Marker component for the dune terrain mesh entity.
#[derive(Component, Default)]
pub struct DuneTerrain;

/// Marker component identifying the main directional light (the "sun").
#[derive(Component, Default)]
pub struct PrimarySun;

/// Marker component for the warm secondary light opposite the sun.
#[derive(Component, Default)]
pub struct RimLight;
