//! Cosmetic effects drawn at the hazard site

pub mod particles;

pub use particles::{ColorMode, ParticleBuffer, ParticleConfig, ParticleSimulator, SimulatorState};
