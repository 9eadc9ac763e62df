//! VehiclePlugin spawns the static convoy at startup.
use bevy::prelude::*;

use crate::vehicle::systems::spawn_convoy;

pub struct VehiclePlugin;

impl Plugin for VehiclePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_convoy);
    }
}
