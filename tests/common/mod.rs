//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bevy::log::tracing::{self, Event, Level, Subscriber};
use bevy::log::tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use bevy::log::tracing_subscriber::registry::Registry;
use bevy::prelude::*;
use neo_orrery::neo::{MarkerAssets, MarkerRng, NeoFeed, NeoFeedReceived, NeoLoadStatus, spawn_neo_markers};
use neo_orrery::scene::SolarScene;

/// App with only the core plugins; no window, no GPU.
pub fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

/// Minimal app with in-memory asset storage for meshes and materials.
pub fn create_app_with_assets() -> App {
    let mut app = create_minimal_app();
    app.insert_resource(Assets::<Mesh>::default())
        .insert_resource(Assets::<StandardMaterial>::default());
    app
}

/// Minimal app wired for marker spawning, without issuing a network request.
pub fn create_marker_app(seed: u64) -> App {
    let mut app = create_minimal_app();
    app.add_message::<NeoFeedReceived>()
        .init_resource::<SolarScene>()
        .init_resource::<NeoLoadStatus>()
        .init_resource::<MarkerAssets>()
        .insert_resource(MarkerRng::seeded(seed))
        .add_systems(Update, spawn_neo_markers);
    app
}

/// Decode a feed body used as test input.
pub fn feed(body: &str) -> NeoFeed {
    NeoFeed::from_json(body).expect("test feed JSON should decode")
}

/// A feed with two dates and three records: axis 2.5, missing, and 1.5.
pub fn sample_feed() -> NeoFeed {
    feed(
        r#"{
            "element_count": 3,
            "near_earth_objects": {
                "2024-10-01": [
                    {"name": "(2024 AA)", "orbit_data": {"semi_major_axis": "2.5"}},
                    {"name": "(2024 AB)"}
                ],
                "2024-10-02": [
                    {"name": "(2024 AC)", "orbit_data": {"semi_major_axis": 1.5}}
                ]
            }
        }"#,
    )
}

/// Counts `error!` events seen on the current thread.
struct ErrorCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` and return how many `error!` entries it logged.
///
/// Only events on the calling thread are seen, so systems under test must
/// run there (for example through `run_system_once`).
pub fn count_error_logs(f: impl FnOnce()) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = Registry::default().with(ErrorCounter(count.clone()));
    tracing::subscriber::with_default(subscriber, f);
    count.load(Ordering::SeqCst)
}
