//! Headless Bevy integration tests.
//!
//! These tests verify Bevy resources and systems work correctly without GPU.

mod common;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use neo_orrery::animation::{AnimationClock, AnimationPlugin, ManualClock, SunSpin, orbit_position};
use neo_orrery::bodies::{NeoMarker, OrbitTag, PLANETS, Planet, Sun};
use neo_orrery::neo::{NeoFeedError, NeoFeedReceived, NeoLoadStatus, spawn_neo_markers};
use neo_orrery::scene::{ScenePlugin, SolarScene};
use neo_orrery::types::SUN_SPIN_STEP;

use common::{count_error_logs, create_app_with_assets, create_marker_app, sample_feed};

fn create_scene_app(clock_ms: f64) -> App {
    let mut app = create_app_with_assets();
    app.insert_resource(AnimationClock::new(ManualClock::at(clock_ms)))
        .add_plugins((ScenePlugin, AnimationPlugin));
    app
}

#[test]
fn test_scene_has_sun_and_eight_planets() {
    let mut app = create_scene_app(0.0);
    app.update();

    let world = app.world_mut();
    let suns = world.query_filtered::<Entity, With<Sun>>().iter(world).count();
    let planets = world.query::<&Planet>().iter(world).count();
    assert_eq!(suns, 1);
    assert_eq!(planets, 8);

    let scene = app.world().resource::<SolarScene>();
    assert!(scene.sun.is_some());
    assert_eq!(scene.planets.len(), PLANETS.len());
    assert!(scene.neo_markers.is_empty());
    assert_eq!(scene.body_count(), 9);
}

#[test]
fn test_planets_are_index_aligned_with_registry() {
    let mut app = create_scene_app(0.0);
    app.update();

    let planets = app.world().resource::<SolarScene>().planets.clone();
    for (i, entity) in planets.into_iter().enumerate() {
        let entity_ref = app.world().entity(entity);
        let planet = entity_ref.get::<Planet>().expect("planet component");
        let orbit = entity_ref.get::<OrbitTag>().expect("orbit tag");
        let name = entity_ref.get::<Name>().expect("name");
        assert_eq!(planet.index, i);
        assert_eq!(orbit.distance, PLANETS[i].orbit_distance);
        assert_eq!(name.as_str(), PLANETS[i].name);
    }
}

#[test]
fn test_planet_positions_follow_clock() {
    let t = 1_727_740_800_000.0;
    let mut app = create_scene_app(t);
    app.update();

    let planets = app.world().resource::<SolarScene>().planets.clone();
    for (i, entity) in planets.into_iter().enumerate() {
        let transform = app.world().entity(entity).get::<Transform>().unwrap();
        let expected = orbit_position(t, i, PLANETS[i].orbit_distance).as_vec3();
        assert_eq!(transform.translation, expected, "planet {}", PLANETS[i].name);
    }
}

#[test]
fn test_fixed_clock_gives_identical_frames() {
    let mut app = create_scene_app(123_456.0);
    app.update();
    let earth = app.world().resource::<SolarScene>().planets[2];
    let first = app.world().entity(earth).get::<Transform>().unwrap().translation;

    app.update();
    let second = app.world().entity(earth).get::<Transform>().unwrap().translation;
    assert_eq!(first, second);

    app.insert_resource(AnimationClock::new(ManualClock::at(223_456.0)));
    app.update();
    let moved = app.world().entity(earth).get::<Transform>().unwrap().translation;
    assert_ne!(first, moved);
}

#[test]
fn test_sun_spin_counts_frames() {
    let mut app = create_scene_app(0.0);
    for _ in 0..5 {
        app.update();
    }

    let spin = app.world().resource::<SunSpin>();
    assert_eq!(spin.frames, 5);
    assert!((spin.angle - 5.0 * SUN_SPIN_STEP).abs() < 1e-12);

    let sun = app.world().resource::<SolarScene>().sun.unwrap();
    let rotation = app.world().entity(sun).get::<Transform>().unwrap().rotation;
    let expected = Quat::from_rotation_y(spin.angle as f32);
    assert!(rotation.angle_between(expected) < 1e-6);
}

#[test]
fn test_feed_spawns_static_markers() {
    let mut app = create_marker_app(42);
    app.world_mut().write_message(NeoFeedReceived(Ok(sample_feed())));
    app.update();

    let world = app.world_mut();
    let markers = world.query_filtered::<&OrbitTag, With<NeoMarker>>().iter(world).count();
    assert_eq!(markers, 3);

    let scene = app.world().resource::<SolarScene>();
    assert_eq!(scene.neo_markers.len(), 3);
    assert_eq!(
        *app.world().resource::<NeoLoadStatus>(),
        NeoLoadStatus::Loaded {
            markers: 3,
            skipped: 0
        }
    );

    // Radii in date order: 2.5 AU, default 1 AU, 1.5 AU
    let radii: Vec<f64> = scene
        .neo_markers
        .iter()
        .map(|&e| app.world().entity(e).get::<OrbitTag>().unwrap().distance)
        .collect();
    assert_eq!(radii, [25.0, 10.0, 15.0]);

    for (&entity, radius) in scene.neo_markers.iter().zip(radii) {
        let pos = app.world().entity(entity).get::<Transform>().unwrap().translation;
        assert_eq!(pos.y, 0.0);
        assert!((pos.x.hypot(pos.z) as f64 - radius).abs() < 1e-3);
    }
}

#[test]
fn test_markers_do_not_move_after_placement() {
    let mut app = create_marker_app(7);
    app.world_mut().write_message(NeoFeedReceived(Ok(sample_feed())));
    app.update();

    let first = app.world().resource::<SolarScene>().neo_markers[0];
    let before = *app.world().entity(first).get::<Transform>().unwrap();
    for _ in 0..3 {
        app.update();
    }
    let after = *app.world().entity(first).get::<Transform>().unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_feed_failure_leaves_scene_unchanged() {
    let mut app = create_marker_app(1);
    app.world_mut()
        .write_message(NeoFeedReceived(Err(NeoFeedError::Status(503))));
    app.update();

    let world = app.world_mut();
    let markers = world.query_filtered::<Entity, With<NeoMarker>>().iter(world).count();
    assert_eq!(markers, 0);
    assert!(app.world().resource::<SolarScene>().neo_markers.is_empty());
    assert_eq!(
        *app.world().resource::<NeoLoadStatus>(),
        NeoLoadStatus::Failed("feed returned HTTP 503".to_string())
    );
}

#[test]
fn test_feed_failure_keeps_planets_and_sun() {
    let mut app = create_scene_app(0.0);
    app.add_message::<NeoFeedReceived>()
        .init_resource::<NeoLoadStatus>()
        .init_resource::<neo_orrery::neo::MarkerAssets>()
        .insert_resource(neo_orrery::neo::MarkerRng::seeded(1))
        .add_systems(Update, neo_orrery::neo::spawn_neo_markers);
    app.update();

    app.world_mut()
        .write_message(NeoFeedReceived(Err(NeoFeedError::Status(500))));
    app.update();

    let scene = app.world().resource::<SolarScene>();
    assert_eq!(scene.body_count(), 9);
    assert!(matches!(
        *app.world().resource::<NeoLoadStatus>(),
        NeoLoadStatus::Failed(_)
    ));
}

#[test]
fn test_feed_failure_logs_exactly_one_error() {
    let mut app = create_marker_app(1);
    let spawn = app.world_mut().register_system(spawn_neo_markers);
    app.world_mut()
        .write_message(NeoFeedReceived(Err(NeoFeedError::Status(503))));

    let errors = count_error_logs(|| {
        app.world_mut()
            .run_system(spawn)
            .expect("marker system should run");
    });
    assert_eq!(errors, 1);

    // The failure is consumed; later frames log nothing more
    let errors = count_error_logs(|| {
        for _ in 0..3 {
            app.world_mut()
                .run_system(spawn)
                .expect("marker system should run");
        }
    });
    assert_eq!(errors, 0);
}

#[test]
fn test_feed_success_logs_no_error() {
    let mut app = create_marker_app(1);
    app.world_mut().write_message(NeoFeedReceived(Ok(sample_feed())));

    let errors = count_error_logs(|| {
        app.world_mut()
            .run_system_once(spawn_neo_markers)
            .expect("marker system should run");
    });
    assert_eq!(errors, 0);
    assert!(matches!(
        *app.world().resource::<NeoLoadStatus>(),
        NeoLoadStatus::Loaded { markers: 3, .. }
    ));
}
