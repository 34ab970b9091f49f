//! Rising-flame particle effect.
//!
//! A fixed population of point particles drifts upward from a small square
//! footprint. A particle that climbs past the ceiling is dropped back to the
//! base with a fresh horizontal offset, so the plume cycles forever without
//! allocating: slots are recycled, never born or killed.
//!
//! Positions are in the effect's local space. The host places the effect at
//! the hazard coordinate.

use crate::config::ConfigError;
use crate::core_types::{Rgb, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

/// What happens to a particle's color when its slot is recycled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorMode {
    /// Keep the color drawn at spawn; the gradient across the plume is stable
    #[default]
    Stable,
    /// Draw a new color on every recycle; the plume flickers
    Flicker,
}

/// Tunables for the flame effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Number of particle slots
    pub count: usize,
    /// Half-width of the square spawn footprint in x and z
    pub spawn_radius: f32,
    /// Initial particles are spread over `[0, spawn_height)` in y
    pub spawn_height: f32,
    /// Rise applied to every particle each tick
    pub base_rise: f32,
    /// Extra per-tick rise drawn uniformly from `[0, rise_jitter)`
    pub rise_jitter: f32,
    /// Height at which a particle is recycled to the base
    pub ceiling: f32,
    pub color_start: Rgb,
    pub color_end: Rgb,
    pub color_mode: ColorMode,
    /// Rendering hint: point sprite size in world units
    pub point_size: f32,
    /// Rendering hint: overlapping particles add up to a glow
    pub additive_blending: bool,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 500,
            spawn_radius: 0.1,
            spawn_height: 0.1,
            base_rise: 0.05,
            rise_jitter: 0.02,
            ceiling: 2.0,
            color_start: Rgb::DARK_ORANGE,
            color_end: Rgb::ORANGE_RED,
            color_mode: ColorMode::Stable,
            point_size: 0.2,
            additive_blending: true,
        }
    }
}

impl ParticleConfig {
    /// Check that every tunable is finite and the ranges are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParticleConfig`] describing the first
    /// bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::InvalidParticleConfig(msg));

        let scalars = [
            ("spawn_radius", self.spawn_radius),
            ("spawn_height", self.spawn_height),
            ("base_rise", self.base_rise),
            ("rise_jitter", self.rise_jitter),
            ("ceiling", self.ceiling),
            ("point_size", self.point_size),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return invalid(format!("{name} must be finite and non-negative, got {value}"));
            }
        }

        // The spawn range spans -r..r, so its width must stay representable
        if !(2.0 * self.spawn_radius).is_finite() {
            return invalid(format!(
                "spawn_radius {} gives a footprint wider than f32 can hold",
                self.spawn_radius
            ));
        }

        if [self.color_start, self.color_end]
            .into_iter()
            .flat_map(Rgb::to_array)
            .any(|v| !v.is_finite())
        {
            return invalid("colors must be finite".to_string());
        }

        if self.count == 0 {
            return invalid("count must be at least 1".to_string());
        }
        if self.ceiling <= 0.0 {
            return invalid(format!("ceiling must be positive, got {}", self.ceiling));
        }
        if self.base_rise <= 0.0 {
            return invalid(format!("base_rise must be positive, got {}", self.base_rise));
        }
        if self.spawn_height >= self.ceiling {
            return invalid(format!(
                "spawn_height {} must be below ceiling {}",
                self.spawn_height, self.ceiling
            ));
        }
        Ok(())
    }
}

/// Uniform draw from `[lo, hi)`, collapsing to `lo` for an empty range
fn uniform<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

fn base_offset<R: Rng>(rng: &mut R, config: &ParticleConfig) -> (f32, f32) {
    let r = config.spawn_radius;
    (uniform(rng, -r, r), uniform(rng, -r, r))
}

fn spawn_position<R: Rng>(rng: &mut R, config: &ParticleConfig) -> Vec3 {
    let (x, z) = base_offset(rng, config);
    Vec3::new(x, uniform(rng, 0.0, config.spawn_height), z)
}

fn spawn_color<R: Rng>(rng: &mut R, config: &ParticleConfig) -> Rgb {
    config
        .color_start
        .lerp(config.color_end, uniform(rng, 0.0, 1.0))
}

/// Fixed-size particle storage, one slot per particle.
///
/// Positions and colors are parallel arrays so each can be uploaded to a
/// vertex attribute directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleBuffer {
    positions: Vec<Vec3>,
    colors: Vec<Rgb>,
}

impl ParticleBuffer {
    fn spawn<R: Rng>(rng: &mut R, config: &ParticleConfig) -> Self {
        let mut buffer = ParticleBuffer {
            positions: vec![Vec3::zeros(); config.count],
            colors: vec![Rgb::default(); config.count],
        };
        buffer.reseed(rng, config);
        buffer
    }

    /// Redraw every slot in place
    fn reseed<R: Rng>(&mut self, rng: &mut R, config: &ParticleConfig) {
        for (pos, color) in self.positions.iter_mut().zip(self.colors.iter_mut()) {
            *pos = spawn_position(rng, config);
            *color = spawn_color(rng, config);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[must_use]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Positions as packed `x, y, z` floats
    #[must_use]
    pub fn position_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colors as packed `r, g, b` floats
    #[must_use]
    pub fn color_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }
}

/// Lifecycle of the flame effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorState {
    /// No hazard; nothing is drawn or advanced
    Idle,
    /// Buffer allocated and advancing once per tick
    Active,
}

/// Owns the particle buffer and advances it once per rendered frame.
///
/// The buffer is allocated on first activation and kept across
/// deactivation, so rapid toggling never reallocates. While idle it is not
/// exposed: [`ParticleSimulator::buffer`] returns `None`.
#[derive(Debug)]
pub struct ParticleSimulator<R = StdRng> {
    config: ParticleConfig,
    rng: R,
    buffer: Option<ParticleBuffer>,
    state: SimulatorState,
}

impl ParticleSimulator<StdRng> {
    /// Create an idle simulator seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParticleConfig`] if `config` is invalid.
    pub fn new(config: ParticleConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an idle simulator with a reproducible random sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParticleConfig`] if `config` is invalid.
    pub fn seeded(config: ParticleConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleSimulator<R> {
    /// Create an idle simulator drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParticleConfig`] if `config` is invalid.
    pub fn with_rng(config: ParticleConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            buffer: None,
            state: SimulatorState::Idle,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> SimulatorState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == SimulatorState::Active
    }

    /// Enter the active state with a freshly seeded plume.
    ///
    /// Does nothing if already active. A buffer retained from an earlier
    /// activation is reseeded in place.
    pub fn activate(&mut self) {
        if self.is_active() {
            return;
        }
        match &mut self.buffer {
            Some(buffer) => buffer.reseed(&mut self.rng, &self.config),
            None => self.buffer = Some(ParticleBuffer::spawn(&mut self.rng, &self.config)),
        }
        self.state = SimulatorState::Active;
        info!("Flame effect active with {} particles", self.config.count);
    }

    /// Return to idle. The buffer is kept for the next activation.
    pub fn deactivate(&mut self) {
        if !self.is_active() {
            return;
        }
        self.state = SimulatorState::Idle;
        info!("Flame effect idle");
    }

    /// Advance every particle by one frame.
    ///
    /// Returns how many slots were recycled to the base. Idle simulators are
    /// left untouched and report zero.
    pub fn tick(&mut self) -> usize {
        let Self {
            config,
            rng,
            buffer,
            state,
        } = self;
        let (SimulatorState::Active, Some(buffer)) = (*state, buffer.as_mut()) else {
            return 0;
        };

        let mut recycled = 0;
        for (pos, color) in buffer.positions.iter_mut().zip(buffer.colors.iter_mut()) {
            pos.y += config.base_rise + uniform(rng, 0.0, config.rise_jitter);
            if pos.y >= config.ceiling {
                let (x, z) = base_offset(rng, config);
                *pos = Vec3::new(x, 0.0, z);
                if config.color_mode == ColorMode::Flicker {
                    *color = spawn_color(rng, config);
                }
                recycled += 1;
            }
        }
        recycled
    }

    /// The live buffer while active, `None` while idle
    #[must_use]
    pub fn buffer(&self) -> Option<&ParticleBuffer> {
        match self.state {
            SimulatorState::Active => self.buffer.as_ref(),
            SimulatorState::Idle => None,
        }
    }
}
