//! Systems for the world module.
use bevy::prelude::*;

use crate::world::components::{DuneTerrain, PrimarySun, RimLight};
use crate::world::terrain::build_terrain_mesh;

/// Haze color shared by the distance fog and the clear color.
pub const HAZE_COLOR: Color = Color::srgb(0.910, 0.835, 0.769);
/// Distance fog starts here (world units from the camera).
pub const FOG_START: f32 = 50.0;
/// Distance fog saturates here.
pub const FOG_END: f32 = 200.0;

const SUN_ILLUMINANCE: f32 = 25_000.0;
const RIM_ILLUMINANCE: f32 = 8_000.0;
const SUN_POSITION: Vec3 = Vec3::new(50.0, 80.0, 50.0);
const RIM_POSITION: Vec3 = Vec3::new(-30.0, 40.0, -30.0);

/// Spawns the static environment: dune terrain, key sun, and warm rim light.
pub fn spawn_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let terrain = build_terrain_mesh();
    info!(
        "Dune terrain built: {} vertices over a 500x500 patch",
        terrain.count_vertices()
    );

    commands.spawn((
        Mesh3d(meshes.add(terrain)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(212, 165, 116),
            perceptual_roughness: 0.95,
            metallic: 0.05,
            ..default()
        })),
        Transform::IDENTITY,
        DuneTerrain,
        Name::new("Dune terrain"),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        PrimarySun,
        Name::new("Key sun"),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: RIM_ILLUMINANCE,
            color: Color::srgb_u8(255, 165, 102),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(RIM_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        RimLight,
        Name::new("Rim light"),
    ));
}
