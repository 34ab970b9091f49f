//! Console stand-ins for the rendering host and the orbit camera.

use fire_evac_core::{
    CameraController, CameraDefaults, DirectionalMarker, HazardLabel, MarkerStyle, ParticleBuffer,
    ParticleConfig, RenderHost, Vec3,
};
use std::path::PathBuf;
use tracing::info;

/// Opaque handle for the loaded city model
#[derive(Debug)]
pub struct CityModel {
    pub asset: PathBuf,
}

/// Counts what it is asked to draw and logs the interesting bits once
#[derive(Debug, Default)]
pub struct ConsoleHost {
    pub scene_draws: u64,
    pub marker_draws: u64,
    pub particle_draws: u64,
    pub label_draws: u64,
    pub peak_particle_height: f32,
    last_marker_set: Vec<DirectionalMarker>,
    pending_markers: Vec<DirectionalMarker>,
    last_label: Option<String>,
}

impl ConsoleHost {
    /// Close the frame: log the marker set if it changed since the last one
    pub fn present(&mut self, style: &MarkerStyle) {
        if self.pending_markers != self.last_marker_set {
            if self.pending_markers.is_empty() {
                info!("Route markers cleared");
            }
            for (i, m) in self.pending_markers.iter().enumerate() {
                let rgb = style.rgb(m.color);
                info!(
                    "Marker {:>2}: ({:>6.1}, {:>4.1}, {:>6.1}) -> ({:>6.1}, {:>4.1}, {:>6.1}) len {:>5.1} {:?} [{:.2} {:.2} {:.2}]",
                    i,
                    m.start.x,
                    m.start.y,
                    m.start.z,
                    m.end.x,
                    m.end.y,
                    m.end.z,
                    m.length(),
                    m.color,
                    rgb.r,
                    rgb.g,
                    rgb.b
                );
            }
            self.last_marker_set = std::mem::take(&mut self.pending_markers);
        }
        self.pending_markers.clear();
    }
}

impl RenderHost<CityModel> for ConsoleHost {
    fn draw_scene(&mut self, _scene: &CityModel) {
        self.scene_draws += 1;
    }

    fn draw_marker(&mut self, marker: &DirectionalMarker, _style: &MarkerStyle) {
        self.marker_draws += 1;
        self.pending_markers.push(*marker);
    }

    fn draw_particles(&mut self, origin: Vec3, particles: &ParticleBuffer, _config: &ParticleConfig) {
        self.particle_draws += 1;
        let top = particles
            .positions()
            .iter()
            .map(|p| p.y)
            .fold(0.0_f32, f32::max);
        self.peak_particle_height = self.peak_particle_height.max(top);
        if self.particle_draws == 1 {
            info!(
                "Flame effect at ({:.1}, {:.1}, {:.1}) with {} particles",
                origin.x,
                origin.y,
                origin.z,
                particles.len()
            );
        }
    }

    fn draw_label(&mut self, label: &HazardLabel) {
        self.label_draws += 1;
        if self.last_label.as_deref() != Some(label.text.as_str()) {
            info!("Label: \"{}\"", label.text);
            self.last_label = Some(label.text.clone());
        }
    }
}

/// Orbit camera that drifts around its target and snaps back on reset
#[derive(Debug)]
pub struct OrbitCamera {
    defaults: CameraDefaults,
    pub position: Vec3,
    pub target: Vec3,
    pub resets: u32,
}

impl OrbitCamera {
    pub fn new(defaults: CameraDefaults) -> Self {
        Self {
            defaults,
            position: defaults.position(),
            target: defaults.target(),
            resets: 0,
        }
    }

    /// Rotate about the vertical axis through the target and dolly by
    /// `zoom`, keeping the distance within the configured limits
    pub fn orbit(&mut self, yaw: f32, zoom: f32) {
        let offset = self.position - self.target;
        let (sin, cos) = yaw.sin_cos();
        let rotated = Vec3::new(
            offset.x * cos - offset.z * sin,
            offset.y,
            offset.x * sin + offset.z * cos,
        );
        let distance = (rotated.norm() * zoom)
            .clamp(self.defaults.min_distance, self.defaults.max_distance);
        self.position = self.target + rotated.normalize() * distance;
    }

    pub fn distance(&self) -> f32 {
        (self.position - self.target).norm()
    }
}

impl CameraController for OrbitCamera {
    fn reset(&mut self) {
        self.position = self.defaults.position();
        self.target = self.defaults.target();
        self.resets += 1;
    }
}
