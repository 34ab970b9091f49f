//! Per-frame composition of the city, the flame effect, the hazard label
//! and the route markers.

use super::{CameraController, HazardLabel, HazardState, RenderHost};
use crate::config::{ConfigError, SceneConfig};
use crate::core_types::Vec3;
use crate::effects::ParticleSimulator;
use crate::navigation::{
    DirectionalMarker, LocationRegistry, MarkerStyle, Route, RouteRenderer, RouteTable,
};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, warn};

/// Height of the hazard label above the hazard coordinate
pub const LABEL_HEIGHT: f32 = 10.0;

/// Turns a level signal into a one-shot pulse.
///
/// Fires on the frame the level goes high and stays quiet until it has
/// gone low again, however many frames the upstream flag is held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CameraResetTrigger {
    level: bool,
}

impl CameraResetTrigger {
    /// Feed the current level; returns `true` on a rising edge
    pub fn observe(&mut self, level: bool) -> bool {
        let fired = level && !self.level;
        self.level = level;
        fired
    }
}

/// What the UI layer reports for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput<'a> {
    pub selected_location: Option<&'a str>,
    pub hazard_active: bool,
    /// Level of the reset-view request
    pub reset_camera: bool,
}

impl FrameInput<'_> {
    #[must_use]
    pub fn with_camera_reset(mut self, reset: bool) -> Self {
        self.reset_camera = reset;
        self
    }
}

impl<'a> From<&'a HazardState> for FrameInput<'a> {
    fn from(hazard: &'a HazardState) -> Self {
        Self {
            selected_location: hazard.selected(),
            hazard_active: hazard.is_active(),
            reset_camera: false,
        }
    }
}

/// What was submitted to the host in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSummary {
    pub markers: usize,
    pub particles_drawn: bool,
    pub label_drawn: bool,
    pub camera_reset: bool,
    /// Particle slots returned to the base this frame
    pub recycled: usize,
}

/// Wires hazard state into the route renderer and the flame effect, and
/// forwards the results to the rendering host every frame.
///
/// `G` is the host's scene graph for the city model.
#[derive(Debug)]
pub struct SceneComposer<G, R = StdRng> {
    city: G,
    registry: LocationRegistry,
    routes: RouteTable,
    renderer: RouteRenderer,
    marker_style: MarkerStyle,
    simulator: ParticleSimulator<R>,
    reset_trigger: CameraResetTrigger,
    markers: Vec<DirectionalMarker>,
    unresolved: Option<String>,
    frame: u64,
}

impl<G> SceneComposer<G> {
    /// Validate `config` and build a composer around the host's city graph.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in `config`.
    pub fn from_config(config: &SceneConfig, city: G) -> Result<Self, ConfigError> {
        let simulator = ParticleSimulator::new(config.particles)?;
        Self::with_simulator(config, city, simulator)
    }
}

impl<G, R: Rng> SceneComposer<G, R> {
    /// Build a composer that drives a caller-supplied simulator.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in `config`.
    pub fn with_simulator(
        config: &SceneConfig,
        city: G,
        simulator: ParticleSimulator<R>,
    ) -> Result<Self, ConfigError> {
        let (registry, routes) = config.build()?;
        Ok(Self {
            city,
            registry,
            routes,
            renderer: RouteRenderer::new(&config.markers),
            marker_style: config.markers,
            simulator,
            reset_trigger: CameraResetTrigger::default(),
            markers: Vec::new(),
            unresolved: None,
            frame: 0,
        })
    }

    #[must_use]
    pub fn city(&self) -> &G {
        &self.city
    }

    #[must_use]
    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    #[must_use]
    pub fn simulator(&self) -> &ParticleSimulator<R> {
        &self.simulator
    }

    /// Markers submitted in the most recent frame
    #[must_use]
    pub fn markers(&self) -> &[DirectionalMarker] {
        &self.markers
    }

    /// Number of frames composed so far
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Location and coordinate of the burning site, if the hazard is active
    /// and its location resolves
    fn resolve_site<'a>(&mut self, input: &FrameInput<'a>) -> Option<(&'a str, Vec3)> {
        let name = input
            .selected_location
            .filter(|n| input.hazard_active && !n.is_empty())?;

        if let Some(position) = self.registry.lookup(name) {
            self.unresolved = None;
            return Some((name, position));
        }

        if self.unresolved.as_deref() != Some(name) {
            warn!("Hazard location '{}' is not registered, not drawing it", name);
            self.unresolved = Some(name.to_string());
        }
        None
    }

    /// Compose one frame.
    ///
    /// Called once per displayed frame by the host's render loop; this is
    /// the only place the flame effect advances.
    pub fn frame<H, C>(&mut self, input: &FrameInput<'_>, host: &mut H, camera: &mut C) -> FrameSummary
    where
        H: RenderHost<G> + ?Sized,
        C: CameraController + ?Sized,
    {
        self.frame += 1;
        let mut summary = FrameSummary::default();

        if self.reset_trigger.observe(input.reset_camera) {
            info!("Resetting camera view");
            camera.reset();
            summary.camera_reset = true;
        }

        host.draw_scene(&self.city);

        match self.resolve_site(input) {
            Some((name, position)) => {
                self.simulator.activate();
                summary.recycled = self.simulator.tick();
                if let Some(buffer) = self.simulator.buffer() {
                    host.draw_particles(position, buffer, self.simulator.config());
                    summary.particles_drawn = true;
                }

                let safe_spot = self.routes.primary_for(name).map(Route::safe_spot);
                host.draw_label(&HazardLabel::new(name, position, LABEL_HEIGHT, safe_spot));
                summary.label_drawn = true;
            }
            None => self.simulator.deactivate(),
        }

        self.renderer.derive_markers_into(
            &self.routes,
            input.selected_location,
            input.hazard_active,
            &mut self.markers,
        );
        for marker in &self.markers {
            host.draw_marker(marker, &self.marker_style);
        }
        summary.markers = self.markers.len();

        debug!(
            "Frame {}: {} markers, particles {}, {} recycled",
            self.frame, summary.markers, summary.particles_drawn, summary.recycled
        );
        summary
    }
}
