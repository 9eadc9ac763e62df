use bevy::prelude::*;

mod core;
mod director;
mod dust;
mod ui;
mod vehicle;
mod world;

use crate::{
    core::{CorePlugin, DisplaySettings},
    director::DirectorPlugin,
    dust::DustPlugin,
    ui::CaptionPlugin,
    vehicle::VehiclePlugin,
    world::WorldPlugin,
};

fn main() {
    let display = DisplaySettings::load_or_default();

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: display.window_title.clone(),
                    resolution: (display.window_width, display.window_height).into(),
                    ..default()
                }),
                ..default()
            }),
            CorePlugin,
            WorldPlugin,
            VehiclePlugin,
            DustPlugin,
            DirectorPlugin,
            CaptionPlugin,
        ))
        .insert_resource(display)
        .run();
}
