//! Dust particle component and the pure advance/recycle rule.
use bevy::prelude::*;

/// Number of dust particles in the field.
pub const PARTICLE_COUNT: usize = 2000;
/// Particles spawn and recycle with x,z inside [-SPAWN_EXTENT, SPAWN_EXTENT].
pub const SPAWN_EXTENT: f32 = 50.0;
/// Initial vertical band for freshly spawned particles.
pub const INITIAL_BAND: f32 = 15.0;
/// A particle recycles to the ground once it rises above this height.
pub const CEILING: f32 = 20.0;
/// Per-axis damping applied to the velocity each tick.
pub const DAMPING: Vec3 = Vec3::new(0.5, 0.3, 0.5);

/// A single dust mote. The velocity is assigned once at spawn and never
/// reassigned, not even on recycle; the position lives in the entity
/// transform.
#[derive(Component, Debug, Clone, Copy)]
pub struct DustParticle {
    pub velocity: Vec3,
}

/// Advances one particle by its damped velocity, recycling it to the ground
/// when it crosses the ceiling. On recycle only the position resets (y to 0,
/// x/z redrawn via `redraw`); the velocity persists, which is what gives the
/// dust its directional streaking look.
pub fn advance_particle(position: &mut Vec3, velocity: Vec3, redraw: impl FnOnce() -> Vec2) {
    position.x += velocity.x * DAMPING.x;
    position.y += velocity.y * DAMPING.y;
    position.z += velocity.z * DAMPING.z;

    if position.y > CEILING {
        let ground = redraw();
        *position = Vec3::new(ground.x, 0.0, ground.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_stays_inside_the_vertical_band() {
        let mut position = Vec3::new(3.0, 0.0, -7.0);
        let velocity = Vec3::new(0.1, 0.2, -0.1);

        for _ in 0..10_000 {
            advance_particle(&mut position, velocity, || Vec2::new(1.0, -1.0));
            assert!(position.y >= 0.0);
            assert!(position.y <= CEILING);
        }
    }

    #[test]
    fn recycle_resets_position_but_keeps_velocity() {
        let mut position = Vec3::new(4.5, 19.9, -2.25);
        let particle = DustParticle {
            velocity: Vec3::new(0.1, 0.2, -0.05),
        };
        let velocity_at_spawn = particle.velocity;

        let mut recycled = false;
        for _ in 0..10 {
            advance_particle(&mut position, particle.velocity, || {
                recycled = true;
                Vec2::new(-30.0, 12.0)
            });
            if recycled {
                break;
            }
        }

        assert!(recycled, "particle should cross the ceiling within 10 ticks");
        assert_eq!(position, Vec3::new(-30.0, 0.0, 12.0));
        assert_eq!(particle.velocity, velocity_at_spawn);
    }

    #[test]
    fn particle_below_ceiling_keeps_drifting() {
        let mut position = Vec3::ZERO;
        let velocity = Vec3::new(0.2, 0.1, -0.2);

        advance_particle(&mut position, velocity, || {
            panic!("no recycle expected below the ceiling")
        });

        assert!(position.distance(Vec3::new(0.1, 0.03, -0.1)) < 1e-6);
    }
}
