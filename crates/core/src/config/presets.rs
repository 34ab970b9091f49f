//! Built-in scene data for the Athens city model.

use super::{CameraDefaults, LocationSpec, RouteSpec, SceneConfig};
use crate::effects::ParticleConfig;
use crate::navigation::MarkerStyle;

impl SceneConfig {
    /// The Athens city model: the selectable landmarks, the intermediate
    /// road points, and the two evacuation routes out of the OTE building.
    ///
    /// The first route is canonical for its origin and drawn in the primary
    /// marker color; the second, longer one in the secondary color.
    #[must_use]
    pub fn athens() -> Self {
        let locations = vec![
            LocationSpec::new("OTE Building", [-40.0, 1.0, 25.0]),
            LocationSpec::new("Road Point 1", [-43.0, 1.0, 18.0]),
            LocationSpec::new("Road Point 2", [-7.0, 1.0, -30.0]),
            LocationSpec::new("OAKA", [15.0, 1.0, -15.0]),
            LocationSpec::waypoint("two", [-29.8, 1.0, 14.0]),
            LocationSpec::waypoint("three", [-15.0, 1.0, 20.0]),
            LocationSpec::waypoint("four", [0.0, 1.0, 25.0]),
            LocationSpec::waypoint("five", [18.5, 1.0, 12.0]),
            LocationSpec::waypoint("six", [1.0, 1.0, 2.0]),
            LocationSpec::waypoint("seven", [15.0, 1.0, -15.0]),
        ];

        let routes = vec![
            RouteSpec {
                name: "OTE Building".to_string(),
                origin: "OTE Building".to_string(),
                waypoints: ["OTE Building", "Road Point 1", "Road Point 2", "OAKA"]
                    .into_iter()
                    .map(Into::into)
                    .collect(),
                safe_spot: "OAKA".to_string(),
            },
            RouteSpec {
                name: "OTE Building - Path 2".to_string(),
                origin: "OTE Building".to_string(),
                waypoints: [
                    "OTE Building",
                    "two",
                    "three",
                    "four",
                    "five",
                    "six",
                    "seven",
                ]
                .into_iter()
                .map(Into::into)
                .collect(),
                safe_spot: "OAKA east gate".to_string(),
            },
        ];

        SceneConfig {
            locations,
            routes,
            particles: ParticleConfig::default(),
            markers: MarkerStyle::default(),
            camera: CameraDefaults::default(),
        }
    }
}
