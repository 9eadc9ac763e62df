//! Components used by the director module.
use bevy::prelude::*;

/// Marker component for the scripted cinematic camera.
#[derive(Component, Default)]
pub struct CinematicCamera;
