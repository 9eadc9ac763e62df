//! Components and placement data for the vehicle convoy.
use bevy::prelude::*;

/// Marker component for a convoy vehicle root entity.
#[derive(Component, Default)]
pub struct Vehicle;

/// World placement of one vehicle; fixed for the whole sequence.
#[derive(Debug, Clone, Copy)]
pub struct VehiclePlacement {
    pub position: Vec3,
    pub yaw: f32,
}

/// The three-vehicle convoy. The vehicles never move; the impression of
/// passing them comes entirely from the camera path.
pub const CONVOY_PLACEMENTS: [VehiclePlacement; 3] = [
    VehiclePlacement {
        position: Vec3::ZERO,
        yaw: 0.0,
    },
    VehiclePlacement {
        position: Vec3::new(-6.0, 0.0, -15.0),
        yaw: 0.1,
    },
    VehiclePlacement {
        position: Vec3::new(5.0, 0.0, -25.0),
        yaw: -0.15,
    },
];
