//! Seams to the external collaborators: the rendering host and the camera
//! controller.

use crate::core_types::Vec3;
use crate::effects::{ParticleBuffer, ParticleConfig};
use crate::navigation::{DirectionalMarker, MarkerStyle};

/// Floating text anchored above the hazard
#[derive(Debug, Clone, PartialEq)]
pub struct HazardLabel {
    pub anchor: Vec3,
    pub text: String,
}

impl HazardLabel {
    /// Label for a hazard at `location`, pointing the observer at
    /// `safe_spot` when there is a route to follow.
    #[must_use]
    pub fn new(location: &str, position: Vec3, height: f32, safe_spot: Option<&str>) -> Self {
        let text = match safe_spot {
            Some(spot) => format!("Fire at {location}, please use arrows to go to {spot}!"),
            None => format!("Fire at {location}!"),
        };
        Self {
            anchor: position + Vec3::new(0.0, height, 0.0),
            text,
        }
    }
}

/// Receives the drawable primitives for one frame.
///
/// `G` is the host's own scene-graph type for the city model; the core
/// passes it through untouched.
pub trait RenderHost<G: ?Sized> {
    fn draw_scene(&mut self, scene: &G);

    fn draw_marker(&mut self, marker: &DirectionalMarker, style: &MarkerStyle);

    /// Draw the particle buffer as points, offset to `origin` in world space
    fn draw_particles(&mut self, origin: Vec3, particles: &ParticleBuffer, config: &ParticleConfig);

    fn draw_label(&mut self, label: &HazardLabel);
}

/// Orbit-style camera owned by the host
pub trait CameraController {
    /// Return to the initial viewpoint
    fn reset(&mut self);
}
