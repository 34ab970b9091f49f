//! Load-time configuration errors.

use crate::core_types::Vec3;
use thiserror::Error;

/// A problem found while validating the static scene tables.
///
/// These are raised once at startup by [`crate::config::SceneConfig::build`]
/// and never during a frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("location '{0}' is registered more than once")]
    DuplicateLocation(String),

    #[error("route '{route}' references unknown location '{location}'")]
    UnknownLocation { route: String, location: String },

    #[error("route '{0}' has no waypoints")]
    EmptyRoute(String),

    #[error(
        "route '{route}' starts at {} but origin '{origin}' is registered at {}",
        fmt_point(.found),
        fmt_point(.expected)
    )]
    OriginMismatch {
        route: String,
        origin: String,
        expected: Vec3,
        found: Vec3,
    },

    #[error("invalid particle configuration: {0}")]
    InvalidParticleConfig(String),
}

fn fmt_point(p: &Vec3) -> String {
    format!("({:.2}, {:.2}, {:.2})", p.x, p.y, p.z)
}
