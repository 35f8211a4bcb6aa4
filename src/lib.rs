//! NEO Orrery - toy solar system with near-Earth objects
//!
//! A library crate providing the scene, animation and feed-loading
//! components for testing and integration purposes.

pub mod animation;
pub mod bodies;
pub mod camera;
pub mod neo;
pub mod scene;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
