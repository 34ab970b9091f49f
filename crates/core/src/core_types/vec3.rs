//! Vector type alias for 3D positions and directions.

use nalgebra::Vector3;

/// 3D vector type for world coordinates and marker directions.
///
/// This is a simple alias for `nalgebra::Vector3<f32>`, used throughout
/// the crate for location coordinates, route waypoints and particle positions.
pub type Vec3 = Vector3<f32>;
