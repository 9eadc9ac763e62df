//! The six-segment camera timeline.
//!
//! Every pose is a pure function of elapsed seconds; no segment reads
//! prior-frame state, so the path is seek-safe and immune to frame-rate
//! drift. The final segment is an absorbing fixed point.
use std::f32::consts::{PI, TAU};

use bevy::prelude::*;

/// The scripted sequence ends (and the camera freezes) at this time.
pub const SEQUENCE_END: f32 = 15.0;

/// A camera position plus the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// One shot of the choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Orbits the lead vehicle while closing in and descending.
    Orbit,
    /// Low lateral pass along the second vehicle's flank.
    LateralPass,
    /// Skims under the third vehicle's chassis, then climbs.
    ChassisSweep,
    /// Steep quadratic ascent away from the convoy.
    SteepAscent,
    /// High hover, slowly rising and receding.
    HighHover,
    /// Sideways drift into the closing panorama.
    LateralDrift,
    /// Absorbing terminal pose.
    Frozen,
}

/// Segment schedule as (segment, start, duration) in seconds.
const TIMELINE: [(Segment, f32, f32); 6] = [
    (Segment::Orbit, 0.0, 3.0),
    (Segment::LateralPass, 3.0, 3.0),
    (Segment::ChassisSweep, 6.0, 3.0),
    (Segment::SteepAscent, 9.0, 2.0),
    (Segment::HighHover, 11.0, 2.0),
    (Segment::LateralDrift, 13.0, 2.0),
];

impl Segment {
    /// Classifies elapsed seconds into the active segment and its normalized
    /// progress t in [0, 1].
    pub fn at(elapsed: f32) -> (Segment, f32) {
        if elapsed >= SEQUENCE_END {
            return (Segment::Frozen, 1.0);
        }
        for (segment, start, duration) in TIMELINE {
            if elapsed < start + duration {
                let t = ((elapsed - start) / duration).max(0.0);
                return (segment, t);
            }
        }
        (Segment::Frozen, 1.0)
    }

    /// Evaluates this segment's animation curve at progress `t`.
    pub fn evaluate(self, t: f32) -> CameraPose {
        match self {
            Segment::Orbit => {
                let radius = 25.0 - t * 15.0;
                let angle = t * TAU + PI;
                let height = 8.0 - t * 5.0;
                CameraPose {
                    position: Vec3::new(
                        angle.cos() * radius,
                        height,
                        angle.sin() * radius + t * 20.0,
                    ),
                    look_at: Vec3::new(0.0, 1.5, t * 10.0),
                }
            }
            Segment::LateralPass => CameraPose {
                position: Vec3::new(-8.0 + t * 16.0, 2.5 - t * 0.5, -15.0 + t * 5.0),
                look_at: Vec3::new(5.0 * t, 1.5, -12.0 + t * 5.0),
            },
            Segment::ChassisSweep => CameraPose {
                position: Vec3::new(8.0 - t * 8.0, 0.8 + t * t * 8.0, -25.0 + t * 8.0),
                look_at: Vec3::new(0.0, 1.0 + t * 5.0, -20.0 + t * 10.0),
            },
            Segment::SteepAscent => CameraPose {
                position: Vec3::new(0.0, 8.0 + t * t * 40.0, -17.0 - t * 25.0),
                look_at: Vec3::new(0.0, 0.0, -10.0),
            },
            Segment::HighHover => CameraPose {
                position: Vec3::new(0.0, 48.0 + t * 10.0, -42.0 - t * 15.0),
                look_at: Vec3::ZERO,
            },
            Segment::LateralDrift => CameraPose {
                position: Vec3::new(t * 30.0, 58.0 + t * 5.0, -57.0 - t * 10.0),
                look_at: Vec3::new(t * 20.0, 0.0, -10.0),
            },
            Segment::Frozen => CameraPose {
                position: Vec3::new(30.0, 63.0, -67.0),
                look_at: Vec3::new(20.0, 0.0, -10.0),
            },
        }
    }
}

/// Camera pose for any elapsed time (elapsed >= 0).
pub fn pose_at(elapsed: f32) -> CameraPose {
    let (segment, t) = Segment::at(elapsed);
    segment.evaluate(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn timeline_classification() {
        assert_eq!(Segment::at(0.0).0, Segment::Orbit);
        assert_eq!(Segment::at(2.999).0, Segment::Orbit);
        assert_eq!(Segment::at(3.0).0, Segment::LateralPass);
        assert_eq!(Segment::at(6.0).0, Segment::ChassisSweep);
        assert_eq!(Segment::at(9.0).0, Segment::SteepAscent);
        assert_eq!(Segment::at(11.0).0, Segment::HighHover);
        assert_eq!(Segment::at(13.0).0, Segment::LateralDrift);
        assert_eq!(Segment::at(SEQUENCE_END).0, Segment::Frozen);
        assert_eq!(Segment::at(1.0e6).0, Segment::Frozen);
    }

    #[test]
    fn terminal_pose_is_absorbing() {
        let terminal = CameraPose {
            position: Vec3::new(30.0, 63.0, -67.0),
            look_at: Vec3::new(20.0, 0.0, -10.0),
        };
        for elapsed in [15.0, 15.001, 16.0, 60.0, 3600.0, 1.0e9] {
            assert_eq!(pose_at(elapsed), terminal);
        }
    }

    #[test]
    fn opening_frame_starts_behind_the_lead_vehicle() {
        let pose = pose_at(0.0);
        assert!(pose.position.distance(Vec3::new(-25.0, 8.0, 0.0)) < 1e-4);
        assert_eq!(pose.look_at, Vec3::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn steep_ascent_begins_at_its_handoff_pose() {
        let pose = pose_at(9.0);
        assert_eq!(pose.position, Vec3::new(0.0, 8.0, -17.0));
        assert_eq!(pose.look_at, Vec3::new(0.0, 0.0, -10.0));
    }

    #[test]
    fn late_handoffs_are_continuous() {
        for boundary in [9.0, 11.0, 13.0] {
            let before = pose_at(boundary - EPS);
            let after = pose_at(boundary);
            let jump = before.position.distance(after.position);
            assert!(
                jump < 1.0,
                "handoff at {boundary}s jumped {jump} world units"
            );
        }
    }

    #[test]
    fn early_handoffs_are_bounded_cuts() {
        // The 3s and 6s boundaries are deliberate hard cuts between shots;
        // they stay bounded but are not continuous.
        let cut_a = pose_at(3.0 - EPS)
            .position
            .distance(pose_at(3.0).position);
        assert!(cut_a > 1.0 && cut_a < 36.0, "3s cut was {cut_a}");

        let cut_b = pose_at(6.0 - EPS)
            .position
            .distance(pose_at(6.0).position);
        assert!(cut_b > 1.0 && cut_b < 16.0, "6s cut was {cut_b}");
    }

    #[test]
    fn high_hover_tracks_the_origin() {
        for elapsed in [11.0, 11.7, 12.4, 12.999] {
            assert_eq!(pose_at(elapsed).look_at, Vec3::ZERO);
        }
    }

    #[test]
    fn drift_slides_position_and_target_together() {
        let pose = pose_at(14.0);
        assert!(pose.position.distance(Vec3::new(15.0, 60.5, -62.0)) < 1e-4);
        assert!(pose.look_at.distance(Vec3::new(10.0, 0.0, -10.0)) < 1e-4);
    }
}
