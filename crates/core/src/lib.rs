//! Fire Evacuation Core Library
//!
//! Marks a fire at a named location in a 3D city model and guides an
//! observer out along authored evacuation routes.
//!
//! ## Pieces
//!
//! - [`LocationRegistry`]: named landmarks and road points with world coordinates
//! - [`RouteTable`]: evacuation routes keyed by hazard origin, validated at load
//! - [`RouteRenderer`]: per-frame directional markers for the active hazard
//! - [`ParticleSimulator`]: fixed-population rising-flame particle effect
//! - [`SceneComposer`]: feeds all of the above to an external rendering host
//!
//! Rendering, model loading, camera control and the menu UI belong to the
//! host and are reached through the [`RenderHost`] and [`CameraController`]
//! traits.

// Core types and utilities
pub mod core_types;

// Static, load-time data
pub mod config;

// Guidance and effects
pub mod effects;
pub mod navigation;

// Host-facing glue
pub mod scene;

// Re-export core types
pub use core_types::{Rgb, Vec3};

pub use config::{CameraDefaults, ConfigError, LocationSpec, RouteSpec, SceneConfig, WaypointSpec};
pub use effects::{ColorMode, ParticleBuffer, ParticleConfig, ParticleSimulator, SimulatorState};
pub use navigation::{
    DirectionalMarker, LocationRegistry, MarkerColor, MarkerStyle, Route, RouteRenderer, RouteTable,
};
pub use scene::{
    CameraController, CameraResetTrigger, FrameInput, FrameSummary, HazardError, HazardLabel,
    HazardState, RenderHost, SceneComposer,
};
