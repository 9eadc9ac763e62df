//! CaptionPlugin spawns the shot-list overlay at startup.
use bevy::prelude::*;

use crate::ui::systems::spawn_caption;

pub struct CaptionPlugin;

impl Plugin for CaptionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_caption);
    }
}
