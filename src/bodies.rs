//! Body registry and the factory that turns registry entries into
//! renderable bodies.
//!
//! Sizes and distances are display units, not physical ones: Earth has
//! size 1.0 and sits 10 units from the Sun.

use bevy::prelude::*;

use crate::types::Rgb;

/// Static description of one planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CelestialBodyDescriptor {
    pub name: &'static str,
    /// Sphere radius in scene units (Earth = 1.0).
    pub display_size: f32,
    /// Radius of the circular orbit around the Sun, in scene units.
    pub orbit_distance: f64,
    pub color: Rgb,
}

/// The eight planets, innermost first. Animation speed depends on the index.
pub const PLANETS: [CelestialBodyDescriptor; 8] = [
    planet("Mercury", 0.38, 4.0, 0xaaaaaa),
    planet("Venus", 0.95, 7.0, 0xffcc99),
    planet("Earth", 1.0, 10.0, 0x0000ff),
    planet("Mars", 0.53, 15.0, 0xff0000),
    planet("Jupiter", 11.2, 52.0, 0xffa500),
    planet("Saturn", 9.45, 95.0, 0xf7cba5),
    planet("Uranus", 4.01, 192.0, 0x66ccff),
    planet("Neptune", 3.88, 300.0, 0x3333ff),
];

const fn planet(
    name: &'static str,
    display_size: f32,
    orbit_distance: f64,
    color: u32,
) -> CelestialBodyDescriptor {
    CelestialBodyDescriptor {
        name,
        display_size,
        orbit_distance,
        color: Rgb(color),
    }
}

/// Sun sphere radius.
pub const SUN_SIZE: f32 = 2.0;
/// Sun color (pure yellow).
pub const SUN_COLOR: Rgb = Rgb(0xffff00);

/// NEO marker sphere radius.
pub const NEO_MARKER_SIZE: f32 = 0.2;
/// NEO marker color (red).
pub const NEO_MARKER_COLOR: Rgb = Rgb(0xff0000);

/// Sphere tessellation for the Sun and planets (sectors, stacks).
pub const BODY_SEGMENTS: (u32, u32) = (32, 32);
/// Sphere tessellation for NEO markers.
pub const MARKER_SEGMENTS: (u32, u32) = (16, 16);

/// Marker component for the Sun.
#[derive(Component, Default)]
pub struct Sun;

/// Marker component for a planet, with its index in [`PLANETS`].
#[derive(Component, Clone, Copy, Debug)]
pub struct Planet {
    pub index: usize,
}

/// Marker component for a near-Earth-object marker.
#[derive(Component, Default)]
pub struct NeoMarker;

/// Orbit distance the animation reads back from a planet entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitTag {
    pub distance: f64,
}

/// Visual properties used to build the sphere mesh and flat material.
#[derive(Component, Clone, Debug)]
pub struct BodyVisual {
    pub radius: f32,
    pub color: Rgb,
    pub segments: (u32, u32),
    /// Emissive glow strength (0.0 = none).
    pub glow: f32,
}

/// A renderable body that has been built but not yet added to the scene.
#[derive(Clone, Debug)]
pub struct RenderableBody {
    pub visual: BodyVisual,
    pub orbit: OrbitTag,
}

impl RenderableBody {
    /// Spawn this body at `translation`, creating its mesh and material.
    ///
    /// `extra` carries the role marker (`Sun`, `Planet`, `NeoMarker`).
    pub fn spawn(
        self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        translation: Vec3,
        extra: impl Bundle,
    ) -> Entity {
        let mesh = meshes.add(body_mesh(&self.visual));
        let material = materials.add(body_material(&self.visual));
        self.spawn_with(commands, mesh, material, translation, extra)
    }

    /// Spawn this body with already-created (possibly shared) assets.
    pub fn spawn_with(
        self,
        commands: &mut Commands,
        mesh: Handle<Mesh>,
        material: Handle<StandardMaterial>,
        translation: Vec3,
        extra: impl Bundle,
    ) -> Entity {
        commands
            .spawn((
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::from_translation(translation),
                self.visual,
                self.orbit,
                extra,
            ))
            .id()
    }
}

/// Build a renderable planet tagged with its orbit distance.
pub fn create_planet(size: f32, distance: f64, color: Rgb) -> RenderableBody {
    RenderableBody {
        visual: BodyVisual {
            radius: size,
            color,
            segments: BODY_SEGMENTS,
            glow: 0.0,
        },
        orbit: OrbitTag { distance },
    }
}

/// Build the Sun. It sits at the origin and never orbits.
pub fn create_sun() -> RenderableBody {
    RenderableBody {
        visual: BodyVisual {
            radius: SUN_SIZE,
            color: SUN_COLOR,
            segments: BODY_SEGMENTS,
            glow: 2.0,
        },
        orbit: OrbitTag { distance: 0.0 },
    }
}

/// Build a NEO marker for an orbit of the given radius.
pub fn create_neo_marker(orbit_radius: f64) -> RenderableBody {
    RenderableBody {
        visual: BodyVisual {
            radius: NEO_MARKER_SIZE,
            color: NEO_MARKER_COLOR,
            segments: MARKER_SEGMENTS,
            glow: 0.0,
        },
        orbit: OrbitTag {
            distance: orbit_radius,
        },
    }
}

/// UV sphere mesh for a body.
pub fn body_mesh(visual: &BodyVisual) -> Mesh {
    let (sectors, stacks) = visual.segments;
    Sphere::new(visual.radius).mesh().uv(sectors, stacks)
}

/// Flat (unlit) material; the Sun additionally glows.
pub fn body_material(visual: &BodyVisual) -> StandardMaterial {
    let color = visual.color.to_color();
    StandardMaterial {
        base_color: color,
        emissive: if visual.glow > 0.0 {
            color.to_linear() * visual.glow
        } else {
            LinearRgba::BLACK
        },
        unlit: true,
        ..default()
    }
}
