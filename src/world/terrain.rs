//! Procedural dune height field and terrain mesh construction.
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::mesh::{Indices, PrimitiveTopology};

/// Side length of the square terrain patch in world units.
pub const TERRAIN_SIZE: f32 = 500.0;
/// Subdivisions per axis (129 vertex samples per axis).
pub const TERRAIN_SUBDIVISIONS: u32 = 128;

/// Dune height at planar sheet coordinates, three superimposed waves.
///
/// The sheet is authored in a vertical plane and laid flat onto the ground,
/// which maps sheet (x, y) to world (x, h, -y); sample via [`height_at`] for
/// world-space queries.
pub fn dune_height(x: f32, y: f32) -> f32 {
    let wave1 = (x * 0.02).sin() * (y * 0.02).cos() * 4.0;
    let wave2 = (x * 0.05 + y * 0.05).sin() * 2.0;
    let wave3 = (x * 0.01).sin() * (y * 0.01).sin() * 6.0;
    wave1 + wave2 + wave3
}

/// Terrain height at world-space (x, z).
pub fn height_at(x: f32, z: f32) -> f32 {
    dune_height(x, -z)
}

/// Builds the immutable terrain mesh: a 129x129 height-displaced grid with
/// finite-difference normals, indexed counter-clockwise from +Y.
pub fn build_terrain_mesh() -> Mesh {
    let samples = TERRAIN_SUBDIVISIONS + 1;
    let half = TERRAIN_SIZE / 2.0;
    let step = TERRAIN_SIZE / TERRAIN_SUBDIVISIONS as f32;

    let vertex_count = (samples * samples) as usize;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    for iz in 0..samples {
        for ix in 0..samples {
            let x = -half + ix as f32 * step;
            let z = -half + iz as f32 * step;
            positions.push([x, height_at(x, z), z]);
            normals.push(surface_normal(x, z, step).to_array());
            uvs.push([
                ix as f32 / TERRAIN_SUBDIVISIONS as f32,
                iz as f32 / TERRAIN_SUBDIVISIONS as f32,
            ]);
        }
    }

    let mut indices = Vec::with_capacity((TERRAIN_SUBDIVISIONS * TERRAIN_SUBDIVISIONS * 6) as usize);
    for iz in 0..TERRAIN_SUBDIVISIONS {
        for ix in 0..TERRAIN_SUBDIVISIONS {
            let i0 = iz * samples + ix;
            let i1 = i0 + 1;
            let i2 = i0 + samples;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Surface normal from central differences of the height function.
fn surface_normal(x: f32, z: f32, step: f32) -> Vec3 {
    let dx = (height_at(x + step, z) - height_at(x - step, z)) / (2.0 * step);
    let dz = (height_at(x, z + step) - height_at(x, z - step)) / (2.0 * step);
    Vec3::new(-dx, 1.0, -dz).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_is_deterministic() {
        let a = dune_height(12.375, -44.25);
        let b = dune_height(12.375, -44.25);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn height_is_flat_at_origin() {
        assert_eq!(dune_height(0.0, 0.0), 0.0);
    }

    #[test]
    fn world_sampling_flips_the_sheet_axis() {
        let x = 37.5;
        let z = -81.25;
        assert_eq!(height_at(x, z).to_bits(), dune_height(x, -z).to_bits());
    }

    #[test]
    fn mesh_has_full_grid_resolution() {
        let mesh = build_terrain_mesh();
        assert_eq!(mesh.count_vertices(), 129 * 129);
        let indices = mesh.indices().expect("terrain mesh is indexed");
        assert_eq!(indices.len(), 128 * 128 * 6);
    }

    #[test]
    fn mesh_vertices_follow_the_height_function() {
        let mesh = build_terrain_mesh();
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|attr| attr.as_float3())
            .expect("terrain mesh has float3 positions");

        for [x, y, z] in positions.iter().step_by(1000) {
            assert_eq!(y.to_bits(), height_at(*x, *z).to_bits());
        }
    }

    #[test]
    fn normals_point_upward() {
        let mesh = build_terrain_mesh();
        let normals = mesh
            .attribute(Mesh::ATTRIBUTE_NORMAL)
            .and_then(|attr| attr.as_float3())
            .expect("terrain mesh has float3 normals");

        for [_, ny, _] in normals {
            assert!(*ny > 0.0);
        }
    }
}
