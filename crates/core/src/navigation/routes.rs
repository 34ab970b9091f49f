//! Route table: authored evacuation routes keyed by hazard origin.

use super::LocationRegistry;
use crate::config::{ConfigError, RouteSpec, WaypointSpec};
use crate::core_types::Vec3;
use rustc_hash::FxHashSet;
use tracing::error;

/// Maximum distance between a route's first waypoint and its origin's
/// registered coordinate for the two to count as the same point.
const ORIGIN_TOLERANCE: f32 = 1e-4;

/// A validated evacuation route with resolved waypoint coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    name: String,
    origin: String,
    waypoints: Vec<Vec3>,
    safe_spot: String,
    primary: bool,
}

impl Route {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Waypoints in travel order; the first is the origin's coordinate
    #[must_use]
    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    #[must_use]
    pub fn safe_spot(&self) -> &str {
        &self.safe_spot
    }

    /// Whether this is the first route registered for its origin
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Number of segments between consecutive waypoints
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    fn resolve(spec: &RouteSpec, registry: &LocationRegistry) -> Result<Self, ConfigError> {
        let unknown = |location: &str| ConfigError::UnknownLocation {
            route: spec.name.clone(),
            location: location.to_string(),
        };

        let origin = registry
            .lookup(&spec.origin)
            .ok_or_else(|| unknown(&spec.origin))?;

        let waypoints = spec
            .waypoints
            .iter()
            .map(|w| match w {
                WaypointSpec::Named(name) => registry.lookup(name).ok_or_else(|| unknown(name)),
                WaypointSpec::Point(p) => Ok(Vec3::from(*p)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let first = *waypoints
            .first()
            .ok_or_else(|| ConfigError::EmptyRoute(spec.name.clone()))?;

        if (first - origin).norm() > ORIGIN_TOLERANCE {
            return Err(ConfigError::OriginMismatch {
                route: spec.name.clone(),
                origin: spec.origin.clone(),
                expected: origin,
                found: first,
            });
        }

        Ok(Route {
            name: spec.name.clone(),
            origin: spec.origin.clone(),
            waypoints,
            safe_spot: spec.safe_spot.clone(),
            primary: false,
        })
    }
}

/// All evacuation routes, in registration order.
///
/// Several routes may share an origin. The first one registered for an
/// origin is its primary route.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Resolve and validate every route against the registry.
    ///
    /// # Errors
    ///
    /// Returns the first malformed route's [`ConfigError`]: an unknown
    /// origin or waypoint name, an empty waypoint list, or a first waypoint
    /// that is not on the origin.
    pub fn build(registry: &LocationRegistry, specs: &[RouteSpec]) -> Result<Self, ConfigError> {
        let routes = specs
            .iter()
            .map(|spec| Route::resolve(spec, registry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_primaries(routes))
    }

    /// Resolve every route, skipping malformed ones.
    ///
    /// Each skipped route is logged at error level and returned alongside
    /// the table so the caller can surface it.
    pub fn build_lenient(
        registry: &LocationRegistry,
        specs: &[RouteSpec],
    ) -> (Self, Vec<ConfigError>) {
        let mut routes = Vec::with_capacity(specs.len());
        let mut skipped = Vec::new();

        for spec in specs {
            match Route::resolve(spec, registry) {
                Ok(route) => routes.push(route),
                Err(e) => {
                    error!("Skipping route '{}': {}", spec.name, e);
                    skipped.push(e);
                }
            }
        }

        (Self::with_primaries(routes), skipped)
    }

    fn with_primaries(mut routes: Vec<Route>) -> Self {
        let mut seen = FxHashSet::default();
        for route in &mut routes {
            route.primary = seen.insert(route.origin.clone());
        }
        RouteTable { routes }
    }

    /// Routes starting at `origin`, in registration order
    pub fn routes_originating_at<'a>(
        &'a self,
        origin: &'a str,
    ) -> impl Iterator<Item = &'a Route> + 'a {
        self.routes.iter().filter(move |r| r.origin == origin)
    }

    /// The canonical route for `origin`, if any
    #[must_use]
    pub fn primary_for(&self, origin: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.primary && r.origin == origin)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
