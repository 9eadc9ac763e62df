//! DustPlugin spawns the particle field and advances it each frame.
use bevy::prelude::*;

use crate::dust::systems::{advance_dust, spawn_dust};

pub struct DustPlugin;

impl Plugin for DustPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_dust)
            .add_systems(Update, advance_dust);
    }
}
