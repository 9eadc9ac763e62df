//! WorldPlugin coordinates terrain construction and global lighting.
use bevy::light::DirectionalLightShadowMap;
use bevy::prelude::*;

use crate::world::systems::{spawn_environment, HAZE_COLOR};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(HAZE_COLOR))
            // Sky and sand bounce light fold into a single tinted ambient term.
            .insert_resource(AmbientLight {
                color: Color::srgb(0.85, 0.82, 0.76),
                brightness: 350.0,
                ..default()
            })
            .insert_resource(DirectionalLightShadowMap { size: 2048 })
            .add_systems(Startup, spawn_environment);
    }
}
