//! Directional markers derived from the active hazard's routes.
//!
//! Markers are never stored. Every frame the renderer walks the routes that
//! start at the active hazard and emits one arrow per consecutive waypoint
//! pair, raised off the ground so it is not swallowed by road geometry.

use super::RouteTable;
use crate::core_types::{Rgb, Vec3};
use serde::{Deserialize, Serialize};

/// Which palette slot a marker is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerColor {
    /// Segments of the canonical route for the hazard origin
    Primary,
    /// Segments of any alternative route sharing that origin
    Secondary,
}

/// Geometry and palette for route markers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    /// Height added to both endpoints of every marker (world units)
    pub elevation_offset: f32,
    /// Arrowhead length (world units)
    pub head_length: f32,
    /// Arrowhead width (world units)
    pub head_width: f32,
    pub primary: Rgb,
    pub secondary: Rgb,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            elevation_offset: 2.0,
            head_length: 5.0,
            head_width: 2.0,
            primary: Rgb::YELLOW,
            secondary: Rgb::LIME,
        }
    }
}

impl MarkerStyle {
    #[must_use]
    pub fn rgb(&self, color: MarkerColor) -> Rgb {
        match color {
            MarkerColor::Primary => self.primary,
            MarkerColor::Secondary => self.secondary,
        }
    }
}

/// An arrow from one waypoint to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalMarker {
    pub start: Vec3,
    pub end: Vec3,
    pub color: MarkerColor,
}

impl DirectionalMarker {
    /// Unit vector from start to end; zero for a degenerate marker
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        (self.end - self.start)
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(Vec3::zeros)
    }

    #[must_use]
    pub fn length(&self) -> f32 {
        (self.end - self.start).norm()
    }
}

/// Derives the marker list for the current hazard state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRenderer {
    elevation_offset: f32,
}

impl Default for RouteRenderer {
    fn default() -> Self {
        Self::new(&MarkerStyle::default())
    }
}

impl RouteRenderer {
    #[must_use]
    pub fn new(style: &MarkerStyle) -> Self {
        Self {
            elevation_offset: style.elevation_offset,
        }
    }

    /// Markers for every route leaving `active_location`.
    ///
    /// Returns nothing when the hazard is inactive or no location is set.
    /// Output order is route registration order, then waypoint order.
    #[must_use]
    pub fn derive_markers(
        &self,
        routes: &RouteTable,
        active_location: Option<&str>,
        active: bool,
    ) -> Vec<DirectionalMarker> {
        let mut markers = Vec::new();
        self.derive_markers_into(routes, active_location, active, &mut markers);
        markers
    }

    /// Same as [`Self::derive_markers`], reusing `out`'s allocation.
    ///
    /// `out` is cleared first.
    pub fn derive_markers_into(
        &self,
        routes: &RouteTable,
        active_location: Option<&str>,
        active: bool,
        out: &mut Vec<DirectionalMarker>,
    ) {
        out.clear();

        let Some(location) = active_location.filter(|l| active && !l.is_empty()) else {
            return;
        };

        let lift = Vec3::new(0.0, self.elevation_offset, 0.0);
        for route in routes.routes_originating_at(location) {
            let color = if route.is_primary() {
                MarkerColor::Primary
            } else {
                MarkerColor::Secondary
            };
            out.extend(route.waypoints().windows(2).map(|pair| DirectionalMarker {
                start: pair[0] + lift,
                end: pair[1] + lift,
                color,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use approx::assert_relative_eq;

    #[test]
    fn test_inactive_or_unset_yields_nothing() {
        let (_, routes) = SceneConfig::athens().build().unwrap();
        let renderer = RouteRenderer::default();
        assert!(renderer
            .derive_markers(&routes, Some("OTE Building"), false)
            .is_empty());
        assert!(renderer.derive_markers(&routes, None, true).is_empty());
        assert!(renderer.derive_markers(&routes, Some(""), true).is_empty());
    }

    #[test]
    fn test_origin_without_routes_yields_nothing() {
        let (_, routes) = SceneConfig::athens().build().unwrap();
        let renderer = RouteRenderer::default();
        assert!(renderer.derive_markers(&routes, Some("OAKA"), true).is_empty());
    }

    #[test]
    fn test_endpoints_are_lifted() {
        let (registry, routes) = SceneConfig::athens().build().unwrap();
        let renderer = RouteRenderer::default();
        let markers = renderer.derive_markers(&routes, Some("OTE Building"), true);

        let ote = registry.lookup("OTE Building").unwrap();
        let rp1 = registry.lookup("Road Point 1").unwrap();
        assert_eq!(markers[0].start, ote + Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(markers[0].end, rp1 + Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_direction_and_length() {
        let marker = DirectionalMarker {
            start: Vec3::new(0.0, 3.0, 0.0),
            end: Vec3::new(3.0, 3.0, 4.0),
            color: MarkerColor::Primary,
        };
        assert_relative_eq!(marker.length(), 5.0);
        assert_relative_eq!(marker.direction().norm(), 1.0);
        assert_relative_eq!(marker.direction().z, 0.8);
    }

    #[test]
    fn test_degenerate_marker_has_zero_direction() {
        let p = Vec3::new(15.0, 3.0, -15.0);
        let marker = DirectionalMarker {
            start: p,
            end: p,
            color: MarkerColor::Secondary,
        };
        assert_eq!(marker.length(), 0.0);
        assert_eq!(marker.direction(), Vec3::zeros());
    }

    #[test]
    fn test_into_reuses_and_clears_buffer() {
        let (_, routes) = SceneConfig::athens().build().unwrap();
        let renderer = RouteRenderer::default();
        let mut out = Vec::new();
        renderer.derive_markers_into(&routes, Some("OTE Building"), true, &mut out);
        assert_eq!(out.len(), 9);
        renderer.derive_markers_into(&routes, Some("OTE Building"), false, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_style_palette() {
        let style = MarkerStyle::default();
        assert_eq!(style.rgb(MarkerColor::Primary), Rgb::YELLOW);
        assert_eq!(style.rgb(MarkerColor::Secondary), Rgb::LIME);
    }
}
