// src/ui/systems.rs
//
// Spawns the static caption overlay describing the shot sequence.

use bevy::prelude::*;

use crate::core::settings::DisplaySettings;

// Visual constants
const BACKGROUND_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);
const TEXT_COLOR: Color = Color::WHITE;

const TITLE: &str = "Desert Rally — Cinematic Shot Sequence";
const SHOT_LIST: &str = "0-3s orbit of the lead truck | 3-6s low side pass | 6-9s chassis sweep & climb\n9-11s steep ascent | 11-13s high hover | 13-15s drift into the panorama";

/// Spawns the caption panel pinned to the bottom center of the screen.
pub fn spawn_caption(mut commands: Commands, settings: Res<DisplaySettings>) {
    if !settings.show_caption {
        return;
    }

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(30.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Name::new("Caption overlay"),
        ))
        .with_children(|root| {
            root.spawn((
                Node {
                    padding: UiRect::axes(Val::Px(30.0), Val::Px(15.0)),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(8.0),
                    ..default()
                },
                BackgroundColor(BACKGROUND_COLOR),
                BorderRadius::all(Val::Px(8.0)),
            ))
            .with_children(|panel| {
                panel.spawn((
                    Text::new(TITLE),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(TEXT_COLOR),
                ));
                panel.spawn((
                    Text::new(SHOT_LIST),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(TEXT_COLOR),
                ));
            });
        });
}
