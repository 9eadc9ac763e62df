//! CorePlugin wires the scene clock that drives the cinematic timeline.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Seconds elapsed since the first rendered frame.
///
/// Monotonically non-decreasing and never reset; the camera director reads
/// it to place every frame on the fixed 15-second timeline.
#[derive(Resource, Debug, Default)]
pub struct SceneClock {
    elapsed: Duration,
    last_delta: Duration,
}

impl SceneClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total duration accumulated since the first frame.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in seconds, the domain of the camera timeline.
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Delta applied by the most recent tick.
    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn last_delta(&self) -> Duration {
        self.last_delta
    }

    /// Accumulates a frame delta.
    pub fn tick(&mut self, delta: Duration) {
        self.last_delta = delta;
        self.elapsed += delta;
    }
}

/// Registers the scene clock resource and its tick system.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SceneClock::new())
            .add_systems(Update, update_scene_clock);

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Update, log_elapsed_ticks.after(update_scene_clock));
        }
    }
}

/// Advances the scene clock from Bevy's frame delta.
pub fn update_scene_clock(mut clock: ResMut<SceneClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

#[cfg(feature = "core_debug")]
fn log_elapsed_ticks(mut timer: ResMut<DebugTickTimer>, clock: Res<SceneClock>) {
    if timer.timer.tick(clock.last_delta()).just_finished() {
        info!(
            target: "core_debug",
            "Scene elapsed: {:.2}s | frame dt: {:.4}s",
            clock.elapsed_secs(),
            clock.last_delta().as_secs_f32(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_accumulates_deltas() {
        let mut clock = SceneClock::new();
        clock.tick(Duration::from_secs_f32(0.5));
        clock.tick(Duration::from_secs_f32(1.25));

        assert_eq!(clock.last_delta(), Duration::from_secs_f32(1.25));
        assert_eq!(clock.elapsed(), Duration::from_secs_f32(1.75));
    }

    #[test]
    fn clock_is_monotonic() {
        let mut clock = SceneClock::new();
        let mut previous = clock.elapsed();
        for _ in 0..100 {
            clock.tick(Duration::from_millis(16));
            assert!(clock.elapsed() >= previous);
            previous = clock.elapsed();
        }
    }
}
