//! Near-Earth-object loader.
//!
//! Runtime behavior:
//! - One feed request is issued at startup on the IO task pool.
//! - When it completes, every record becomes a static red marker placed at a
//!   random angle on a circle scaled from its semi-major axis.
//! - Failure is logged once and leaves the scene untouched. There is no retry.

pub mod config;
pub mod feed;
pub mod placement;

#[cfg(test)]
mod proptest_placement;

pub use config::{ConfigError, FeedWindow, NeoFeedConfig};
pub use feed::{NearEarthObjectRecord, NeoFeed, NeoFeedError};
pub use placement::{MarkerPlacement, PlacementBatch, marker_position, orbit_radius, place_feed};

use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task, block_on, futures_lite::future};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bodies::{NeoMarker, body_material, body_mesh, create_neo_marker};
use crate::scene::SolarScene;

/// Progress of the one-shot feed load.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub enum NeoLoadStatus {
    /// Request in flight (or not yet issued).
    #[default]
    Pending,
    /// Markers were added to the scene.
    Loaded { markers: usize, skipped: usize },
    /// The request or decoding failed; the message was logged.
    Failed(String),
}

/// Random source for marker angles.
#[derive(Resource)]
pub struct MarkerRng(pub StdRng);

impl MarkerRng {
    /// Deterministic source, for tests and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for MarkerRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Mesh and material shared by every marker.
#[derive(Resource, Default, Clone)]
pub struct MarkerAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// In-flight feed request.
#[derive(Resource)]
pub struct NeoFeedTask(pub Task<Result<NeoFeed, NeoFeedError>>);

/// Outcome of the feed request, delivered once.
#[derive(Message)]
pub struct NeoFeedReceived(pub Result<NeoFeed, NeoFeedError>);

/// Plugin wiring the feed request and marker spawning.
///
/// Reads [`NeoFeedConfig`] if one was inserted, otherwise uses defaults.
pub struct NeoPlugin;

impl Plugin for NeoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NeoFeedConfig>()
            .init_resource::<NeoLoadStatus>()
            .init_resource::<MarkerRng>()
            .init_resource::<MarkerAssets>()
            .init_resource::<SolarScene>()
            .add_message::<NeoFeedReceived>()
            .add_systems(Startup, (load_marker_assets, start_neo_fetch))
            .add_systems(Update, (poll_neo_feed, spawn_neo_markers).chain());
    }
}

/// Create the shared marker mesh and material.
pub fn load_marker_assets(
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut assets: ResMut<MarkerAssets>,
) {
    let visual = create_neo_marker(0.0).visual;
    assets.mesh = meshes.add(body_mesh(&visual));
    assets.material = materials.add(body_material(&visual));
}

/// Issue the feed request on the IO task pool.
pub fn start_neo_fetch(mut commands: Commands, config: Res<NeoFeedConfig>) {
    info!("Requesting NEO feed: {}", config.redacted_url());

    let config = config.clone();
    let task = IoTaskPool::get().spawn(async move { feed::fetch_feed(&config) });
    commands.insert_resource(NeoFeedTask(task));
}

/// Forward the request's result once it is ready.
pub fn poll_neo_feed(
    mut commands: Commands,
    task: Option<ResMut<NeoFeedTask>>,
    mut received: MessageWriter<NeoFeedReceived>,
) {
    let Some(mut task) = task else {
        return;
    };

    if let Some(result) = block_on(future::poll_once(&mut task.0)) {
        received.write(NeoFeedReceived(result));
        commands.remove_resource::<NeoFeedTask>();
    }
}

/// Add markers for a received feed, or log the failure.
pub fn spawn_neo_markers(
    mut commands: Commands,
    mut received: MessageReader<NeoFeedReceived>,
    mut rng: ResMut<MarkerRng>,
    mut scene: ResMut<SolarScene>,
    mut status: ResMut<NeoLoadStatus>,
    assets: Res<MarkerAssets>,
) {
    for NeoFeedReceived(result) in received.read() {
        let feed = match result {
            Ok(feed) => feed,
            Err(err) => {
                error!("Error fetching NEO data: {err}");
                *status = NeoLoadStatus::Failed(err.to_string());
                continue;
            }
        };

        let batch = place_feed(feed, &mut rng.0);
        for placement in &batch.markers {
            let entity = create_neo_marker(placement.orbit_radius).spawn_with(
                &mut commands,
                assets.mesh.clone(),
                assets.material.clone(),
                placement.position.as_vec3(),
                NeoMarker,
            );
            scene.neo_markers.push(entity);
        }

        if batch.skipped > 0 {
            warn!(
                "Skipped {} NEO records with non-numeric semi-major axis",
                batch.skipped
            );
        }
        info!(
            "Plotted {} near-Earth objects from {} records",
            batch.markers.len(),
            feed.record_count()
        );

        *status = NeoLoadStatus::Loaded {
            markers: batch.markers.len(),
            skipped: batch.skipped,
        };
    }
}
