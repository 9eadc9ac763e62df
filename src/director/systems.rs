//! Systems spawning and driving the cinematic camera.
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

use crate::core::plugin::SceneClock;
use crate::director::components::CinematicCamera;
use crate::director::segment::pose_at;
use crate::world::systems::{FOG_END, FOG_START, HAZE_COLOR};

/// Spawns the scripted camera at the opening pose, with the desert haze fog
/// attached.
pub fn spawn_camera(mut commands: Commands) {
    let pose = pose_at(0.0);

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_translation(pose.position).looking_at(pose.look_at, Vec3::Y),
        DistanceFog {
            color: HAZE_COLOR,
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
        CinematicCamera,
        Name::new("Cinematic camera"),
    ));
}

/// Re-evaluates the camera pose from the scene clock every frame.
pub fn drive_camera(
    clock: Res<SceneClock>,
    mut query: Query<&mut Transform, With<CinematicCamera>>,
) {
    let pose = pose_at(clock.elapsed_secs());

    if let Ok(mut transform) = query.single_mut() {
        transform.translation = pose.position;
        transform.look_at(pose.look_at, Vec3::Y);
    }
}
