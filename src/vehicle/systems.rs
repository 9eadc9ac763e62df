//! Systems spawning the vehicle convoy.
use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::vehicle::components::{Vehicle, CONVOY_PLACEMENTS};

const WHEEL_OFFSETS: [Vec3; 4] = [
    Vec3::new(-1.1, 0.4, 1.8),
    Vec3::new(1.1, 0.4, 1.8),
    Vec3::new(-1.1, 0.4, -1.8),
    Vec3::new(1.1, 0.4, -1.8),
];

/// Spawns the three-vehicle convoy. Each vehicle is a rigid parent transform
/// with seven static child meshes; mesh and material handles are shared
/// across instances.
pub fn spawn_convoy(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let body_mesh = meshes.add(Cuboid::new(2.2, 1.0, 4.5));
    let cabin_mesh = meshes.add(Cuboid::new(2.0, 0.9, 2.5));
    let windshield_mesh = meshes.add(Cuboid::new(1.8, 0.7, 0.1));
    let wheel_mesh = meshes.add(Cylinder::new(0.5, 0.6));
    let roll_cage_mesh = meshes.add(Cuboid::new(2.2, 0.1, 2.6));
    let hood_accent_mesh = meshes.add(Cuboid::new(1.8, 0.05, 1.0));

    let body_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(26, 26, 26),
        metallic: 0.8,
        perceptual_roughness: 0.2,
        ..default()
    });
    let cabin_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(10, 10, 10),
        metallic: 0.9,
        perceptual_roughness: 0.1,
        ..default()
    });
    let windshield_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(74, 144, 226).with_alpha(0.3),
        alpha_mode: AlphaMode::Blend,
        metallic: 1.0,
        perceptual_roughness: 0.0,
        ..default()
    });
    let wheel_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(42, 42, 42),
        perceptual_roughness: 0.9,
        ..default()
    });
    let roll_cage_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(255, 69, 0),
        metallic: 0.9,
        perceptual_roughness: 0.3,
        ..default()
    });
    let hood_accent_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(255, 102, 0),
        metallic: 0.8,
        perceptual_roughness: 0.4,
        ..default()
    });

    for (index, placement) in CONVOY_PLACEMENTS.iter().enumerate() {
        commands
            .spawn((
                Transform::from_translation(placement.position)
                    .with_rotation(Quat::from_rotation_y(placement.yaw)),
                Visibility::default(),
                Vehicle,
                Name::new(format!("Convoy vehicle {}", index + 1)),
            ))
            .with_children(|vehicle| {
                vehicle.spawn((
                    Mesh3d(body_mesh.clone()),
                    MeshMaterial3d(body_material.clone()),
                    Transform::from_xyz(0.0, 0.6, 0.0),
                ));
                vehicle.spawn((
                    Mesh3d(cabin_mesh.clone()),
                    MeshMaterial3d(cabin_material.clone()),
                    Transform::from_xyz(0.0, 1.4, -0.3),
                ));
                vehicle.spawn((
                    Mesh3d(windshield_mesh.clone()),
                    MeshMaterial3d(windshield_material.clone()),
                    Transform::from_xyz(0.0, 1.5, 0.8)
                        .with_rotation(Quat::from_rotation_x(-0.2)),
                ));
                for offset in WHEEL_OFFSETS {
                    vehicle.spawn((
                        Mesh3d(wheel_mesh.clone()),
                        MeshMaterial3d(wheel_material.clone()),
                        Transform::from_translation(offset)
                            .with_rotation(Quat::from_rotation_z(FRAC_PI_2)),
                    ));
                }
                vehicle.spawn((
                    Mesh3d(roll_cage_mesh.clone()),
                    MeshMaterial3d(roll_cage_material.clone()),
                    Transform::from_xyz(0.0, 1.9, -0.3),
                ));
                vehicle.spawn((
                    Mesh3d(hood_accent_mesh.clone()),
                    MeshMaterial3d(hood_accent_material.clone()),
                    Transform::from_xyz(0.0, 0.8, 1.5),
                ));
            });
    }

    info!("Convoy spawned: {} vehicles", CONVOY_PLACEMENTS.len());
}
