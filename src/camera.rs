//! Camera system for the orrery.
//!
//! Provides the perspective camera, keeps its projection in step with the
//! window size, and dollies it in and out with the scroll wheel.

use bevy::{input::mouse::AccumulatedMouseScroll, prelude::*, window::WindowResized};

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 75.0;

/// Near clip plane distance.
pub const NEAR_PLANE: f32 = 0.1;

/// Far clip plane distance.
pub const FAR_PLANE: f32 = 1000.0;

/// Initial camera distance from the Sun along +Z.
pub const DEFAULT_DISTANCE: f32 = 120.0;

/// Closest the camera may dolly in.
pub const MIN_DISTANCE: f32 = 10.0;

/// Furthest the camera may dolly out (inside the far plane).
pub const MAX_DISTANCE: f32 = 900.0;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Default window size in logical pixels.
pub const DEFAULT_VIEWPORT: (f32, f32) = (1280.0, 720.0);

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Current render surface size.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT.0,
            height: DEFAULT_VIEWPORT.1,
        }
    }
}

impl Viewport {
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// Resource tracking camera state.
#[derive(Resource)]
pub struct CameraState {
    /// Distance from the origin along the view axis.
    pub distance: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
        }
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraState>()
            .init_resource::<Viewport>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (handle_window_resize, camera_zoom));
    }
}

/// Perspective projection for a viewport.
pub fn perspective_for(viewport: &Viewport) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: FOV_DEGREES.to_radians(),
        aspect_ratio: viewport.aspect_ratio(),
        near: NEAR_PLANE,
        far: FAR_PLANE,
        ..default()
    }
}

/// Spawn the main camera looking at the Sun from +Z.
fn setup_camera(mut commands: Commands, viewport: Res<Viewport>, state: Res<CameraState>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(perspective_for(&viewport)),
        Transform::from_xyz(0.0, 0.0, state.distance).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Apply a new surface size to the viewport and projection.
///
/// Returns `false` (and changes nothing) for non-positive sizes, which a
/// minimized window reports.
pub fn apply_resize(
    viewport: &mut Viewport,
    projection: &mut PerspectiveProjection,
    width: f32,
    height: f32,
) -> bool {
    if !(width > 0.0 && height > 0.0) {
        return false;
    }
    viewport.width = width;
    viewport.height = height;
    projection.aspect_ratio = width / height;
    true
}

/// Resize the viewport and camera aspect when the window changes size.
pub fn handle_window_resize(
    mut resized: MessageReader<WindowResized>,
    mut viewport: ResMut<Viewport>,
    mut camera_query: Query<&mut Projection, With<MainCamera>>,
) {
    // Only the latest size matters
    let Some(event) = resized.read().last() else {
        return;
    };

    let Ok(mut projection) = camera_query.single_mut() else {
        return;
    };

    let Projection::Perspective(ref mut perspective) = *projection else {
        return;
    };

    if apply_resize(&mut viewport, perspective, event.width, event.height) {
        debug!("Viewport resized to {}x{}", event.width, event.height);
    }
}

/// Next camera distance after a scroll of `delta` lines.
pub fn zoomed_distance(distance: f32, delta: f32) -> f32 {
    // Logarithmic zoom: multiply distance by factor based on scroll direction
    let zoom_factor = 1.0 - delta * ZOOM_SPEED;
    (distance * zoom_factor).clamp(MIN_DISTANCE, MAX_DISTANCE)
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut camera_state: ResMut<CameraState>,
) {
    // Skip if no scroll input
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    camera_state.distance = zoomed_distance(camera_state.distance, mouse_scroll.delta.y);
    let direction = transform.translation.normalize_or(Vec3::Z);
    transform.translation = direction * camera_state.distance;
}
