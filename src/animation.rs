//! Per-frame animation: Sun spin and circular planet orbits.
//!
//! Planet positions are a pure function of wall-clock time, read through
//! an injectable [`FrameClock`] so the formula can be checked without a
//! display.

use std::time::{SystemTime, UNIX_EPOCH};

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::bodies::{OrbitTag, Sun};
use crate::scene::SolarScene;
use crate::types::{ORBIT_SPEED_STEP, SUN_SPIN_STEP};

/// Source of the current time for the animation, in milliseconds.
pub trait FrameClock: Send + Sync + 'static {
    fn now_millis(&self) -> f64;
}

/// Wall clock: milliseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl FrameClock for SystemClock {
    fn now_millis(&self) -> f64 {
        // A clock set before 1970 reads as the epoch
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}

/// Clock that only moves when told to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ManualClock {
    pub millis: f64,
}

impl ManualClock {
    pub fn at(millis: f64) -> Self {
        Self { millis }
    }
}

impl FrameClock for ManualClock {
    fn now_millis(&self) -> f64 {
        self.millis
    }
}

/// Resource holding the clock the animation reads each frame.
#[derive(Resource)]
pub struct AnimationClock(pub Box<dyn FrameClock>);

impl AnimationClock {
    pub fn new(clock: impl FrameClock) -> Self {
        Self(Box::new(clock))
    }

    pub fn now_millis(&self) -> f64 {
        self.0.now_millis()
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

/// Accumulated Sun rotation about the Y axis.
///
/// Grows without bound; it is not wrapped to a full turn.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct SunSpin {
    /// Total rotation in radians.
    pub angle: f64,
    /// Number of frames applied.
    pub frames: u64,
}

impl SunSpin {
    /// Add one frame's worth of rotation.
    pub fn step(&mut self) {
        self.angle += SUN_SPIN_STEP;
        self.frames += 1;
    }
}

/// Plugin providing the per-frame animation.
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationClock>()
            .init_resource::<SunSpin>()
            .add_systems(Update, (spin_sun, advance_planet_orbits));
    }
}

/// Angular speed of planet `index`, in radians per millisecond.
pub fn orbit_speed(index: usize) -> f64 {
    ORBIT_SPEED_STEP * (index as f64 + 1.0)
}

/// Position of planet `index` on its circular orbit at time `t_ms`.
///
/// Computed in f64: wall-clock milliseconds are ~1e12 and the phase
/// `t * speed` would be meaningless in f32.
pub fn orbit_position(t_ms: f64, index: usize, distance: f64) -> DVec3 {
    let phase = t_ms * orbit_speed(index);
    DVec3::new(phase.cos() * distance, 0.0, phase.sin() * distance)
}

/// Rotate the Sun by one step.
pub fn spin_sun(mut spin: ResMut<SunSpin>, mut sun: Query<&mut Transform, With<Sun>>) {
    spin.step();
    for mut transform in sun.iter_mut() {
        transform.rotation = Quat::from_rotation_y(spin.angle as f32);
    }
}

/// Move every tracked planet to its position for the current clock time,
/// in registry order.
pub fn advance_planet_orbits(
    clock: Res<AnimationClock>,
    scene: Res<SolarScene>,
    mut planets: Query<(&OrbitTag, &mut Transform)>,
) {
    let t = clock.now_millis();
    for (index, &entity) in scene.planets.iter().enumerate() {
        let Ok((orbit, mut transform)) = planets.get_mut(entity) else {
            continue;
        };
        transform.translation = orbit_position(t, index, orbit.distance).as_vec3();
    }
}
