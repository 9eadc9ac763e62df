//! DirectorPlugin installs the scripted camera and its per-frame drive.
use bevy::prelude::*;

use crate::core::plugin::update_scene_clock;
use crate::director::systems::{drive_camera, spawn_camera};

pub struct DirectorPlugin;

impl Plugin for DirectorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, drive_camera.after(update_scene_clock));
    }
}
