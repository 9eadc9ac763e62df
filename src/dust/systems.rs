//! Systems spawning and advancing the dust field.
use bevy::light::NotShadowCaster;
use bevy::prelude::*;
use rand::Rng;

use crate::dust::components::{
    advance_particle, DustParticle, INITIAL_BAND, PARTICLE_COUNT, SPAWN_EXTENT,
};

/// Spawns the full particle field once; the entities live for the whole run
/// and only their transforms mutate afterwards.
pub fn spawn_dust(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::thread_rng();

    let mote_mesh = meshes.add(Sphere::new(0.15));
    let mote_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(212, 165, 116).with_alpha(0.6),
        alpha_mode: AlphaMode::Add,
        unlit: true,
        ..default()
    });

    for _ in 0..PARTICLE_COUNT {
        let position = Vec3::new(
            rng.gen_range(-SPAWN_EXTENT..SPAWN_EXTENT),
            rng.gen_range(0.0..INITIAL_BAND),
            rng.gen_range(-SPAWN_EXTENT..SPAWN_EXTENT),
        );
        let velocity = Vec3::new(
            rng.gen_range(-0.25..0.25),
            rng.gen_range(0.0..0.2),
            rng.gen_range(-0.25..0.25),
        );

        commands.spawn((
            Mesh3d(mote_mesh.clone()),
            MeshMaterial3d(mote_material.clone()),
            Transform::from_translation(position),
            DustParticle { velocity },
            NotShadowCaster,
        ));
    }

    info!("Dust field spawned: {} particles", PARTICLE_COUNT);
}

/// Advances every particle by one tick, recycling risers back to the ground.
pub fn advance_dust(mut query: Query<(&DustParticle, &mut Transform)>) {
    let mut rng = rand::thread_rng();

    for (particle, mut transform) in query.iter_mut() {
        advance_particle(&mut transform.translation, particle.velocity, || {
            Vec2::new(
                rng.gen_range(-SPAWN_EXTENT..SPAWN_EXTENT),
                rng.gen_range(-SPAWN_EXTENT..SPAWN_EXTENT),
            )
        });
    }
}
