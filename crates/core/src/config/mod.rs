//! Static scene configuration.
//!
//! The location and route tables are authored data: they are loaded once at
//! startup, validated against each other, and turned into the immutable
//! [`LocationRegistry`] and [`RouteTable`] that the per-frame code reads.
//! Nothing here is mutated after [`SceneConfig::build`] returns.

pub mod error;
mod presets;

pub use error::ConfigError;

use crate::core_types::Vec3;
use crate::effects::ParticleConfig;
use crate::navigation::{LocationRegistry, MarkerStyle, RouteTable};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A named point of interest in the city model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSpec {
    pub name: String,
    pub position: [f32; 3],
    /// Road points that only exist to shape routes are kept out of the location menu
    #[serde(default)]
    pub hidden: bool,
}

impl LocationSpec {
    /// A location the operator can pick as a hazard site
    pub fn new(name: impl Into<String>, position: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            position,
            hidden: false,
        }
    }

    /// A route-shaping point that is not offered in the location menu
    pub fn waypoint(name: impl Into<String>, position: [f32; 3]) -> Self {
        Self {
            hidden: true,
            ..Self::new(name, position)
        }
    }
}

/// One entry of a route's waypoint list.
///
/// Either the name of a registered location or an explicit coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WaypointSpec {
    Named(String),
    Point([f32; 3]),
}

impl From<&str> for WaypointSpec {
    fn from(name: &str) -> Self {
        WaypointSpec::Named(name.to_string())
    }
}

impl From<[f32; 3]> for WaypointSpec {
    fn from(point: [f32; 3]) -> Self {
        WaypointSpec::Point(point)
    }
}

/// An authored evacuation route from a hazard origin to a safe spot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// Unique route key, used in diagnostics
    pub name: String,
    /// Location the route starts from; the route is shown when a hazard is placed here
    pub origin: String,
    /// Ordered waypoints; the first must sit on the origin
    pub waypoints: Vec<WaypointSpec>,
    /// Human-readable destination shown in the hazard label
    pub safe_spot: String,
}

/// Initial pose and limits for the host's orbit camera.
///
/// The camera controller itself is external; these values are what its
/// `reset` restores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDefaults {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub fov_degrees: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for CameraDefaults {
    fn default() -> Self {
        Self {
            position: [100.0, 50.0, 100.0],
            target: [0.0, 10.0, 0.0],
            fov_degrees: 60.0,
            min_distance: 10.0,
            max_distance: 500.0,
        }
    }
}

impl CameraDefaults {
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    #[must_use]
    pub fn target(&self) -> Vec3 {
        Vec3::from(self.target)
    }
}

/// Complete scene configuration as authored on disk or built in code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub locations: Vec<LocationSpec>,
    pub routes: Vec<RouteSpec>,
    #[serde(default)]
    pub particles: ParticleConfig,
    #[serde(default)]
    pub markers: MarkerStyle,
    #[serde(default)]
    pub camera: CameraDefaults,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::athens()
    }
}

impl SceneConfig {
    /// Validate the configuration and build the lookup tables.
    ///
    /// Every route is checked against the registry here, so a malformed
    /// table is reported before the first frame rather than drawn wrong.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: an invalid particle setting,
    /// a duplicated location, a route naming an unknown location, an empty
    /// route, or a route whose first waypoint is not on its origin.
    pub fn build(&self) -> Result<(LocationRegistry, RouteTable), ConfigError> {
        self.particles.validate()?;
        let registry = LocationRegistry::from_specs(&self.locations)?;
        let routes = RouteTable::build(&registry, &self.routes)?;
        info!(
            "Scene configuration loaded: {} locations, {} routes",
            registry.len(),
            routes.len()
        );
        Ok((registry, routes))
    }
}
