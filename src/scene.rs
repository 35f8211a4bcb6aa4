//! Scene assembly.
//!
//! Spawns the Sun and one entity per registry planet at startup, and keeps
//! the entity handles in [`SolarScene`] so the animation and NEO loader can
//! reach them without global state.

use bevy::prelude::*;

use crate::bodies::{create_planet, create_sun, Planet, Sun, PLANETS};

/// Handles to every body currently in the scene.
#[derive(Resource, Default, Debug)]
pub struct SolarScene {
    /// The Sun, once spawned.
    pub sun: Option<Entity>,
    /// Planet entities, index-aligned with [`PLANETS`].
    pub planets: Vec<Entity>,
    /// NEO markers in insertion order. Never animated.
    pub neo_markers: Vec<Entity>,
}

impl SolarScene {
    /// Total number of bodies tracked (Sun, planets and markers).
    pub fn body_count(&self) -> usize {
        usize::from(self.sun.is_some()) + self.planets.len() + self.neo_markers.len()
    }
}

/// Plugin assembling the solar system at startup.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SolarScene>()
            .add_systems(Startup, spawn_solar_system);
    }
}

/// Spawn the Sun at the origin and every planet from the registry.
///
/// Planets start at their orbit distance on the +X axis; the animation moves
/// them on the first frame.
pub fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut scene: ResMut<SolarScene>,
) {
    let sun = create_sun().spawn(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::ZERO,
        (Sun, Name::new("Sun")),
    );
    scene.sun = Some(sun);

    scene.planets = PLANETS
        .iter()
        .enumerate()
        .map(|(index, descriptor)| {
            create_planet(
                descriptor.display_size,
                descriptor.orbit_distance,
                descriptor.color,
            )
            .spawn(
                &mut commands,
                &mut meshes,
                &mut materials,
                Vec3::new(descriptor.orbit_distance as f32, 0.0, 0.0),
                (Planet { index }, Name::new(descriptor.name)),
            )
        })
        .collect();

    info!("Spawned Sun and {} planets", scene.planets.len());
}
