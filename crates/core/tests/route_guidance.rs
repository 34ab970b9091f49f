//! Route table and marker derivation against the Athens city model
use fire_evac_core::{
    LocationSpec, MarkerColor, RouteRenderer, RouteSpec, SceneConfig, Vec3, WaypointSpec,
};

const LIFT: f32 = 2.0;

fn lifted(p: Vec3) -> Vec3 {
    p + Vec3::new(0.0, LIFT, 0.0)
}

#[test]
fn test_every_registered_location_resolves_exactly() {
    let config = SceneConfig::athens();
    let (registry, _) = config.build().unwrap();

    for spec in &config.locations {
        assert_eq!(
            registry.lookup(&spec.name),
            Some(Vec3::from(spec.position)),
            "{}",
            spec.name
        );
    }
    assert_eq!(registry.lookup("Acropolis"), None);
    assert_eq!(
        registry.selectable().collect::<Vec<_>>(),
        vec!["OTE Building", "Road Point 1", "Road Point 2", "OAKA"]
    );
}

#[test]
fn test_ote_building_shows_both_routes_in_order() {
    let (registry, routes) = SceneConfig::athens().build().unwrap();
    let markers = RouteRenderer::default().derive_markers(&routes, Some("OTE Building"), true);

    assert_eq!(markers.len(), 9);
    let primary = markers
        .iter()
        .filter(|m| m.color == MarkerColor::Primary)
        .count();
    assert_eq!(primary, 3);
    assert!(markers[..3].iter().all(|m| m.color == MarkerColor::Primary));
    assert!(markers[3..].iter().all(|m| m.color == MarkerColor::Secondary));

    let path_one = ["OTE Building", "Road Point 1", "Road Point 2", "OAKA"];
    let path_two = ["OTE Building", "two", "three", "four", "five", "six", "seven"];
    let mut expected: Vec<(Vec3, Vec3)> = Vec::new();
    for path in [&path_one[..], &path_two[..]] {
        for pair in path.windows(2) {
            expected.push((
                lifted(registry.lookup(pair[0]).unwrap()),
                lifted(registry.lookup(pair[1]).unwrap()),
            ));
        }
    }
    let actual: Vec<(Vec3, Vec3)> = markers.iter().map(|m| (m.start, m.end)).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_marker_count_matches_waypoints_for_every_route() {
    let (_, routes) = SceneConfig::athens().build().unwrap();
    let renderer = RouteRenderer::default();

    for route in &routes {
        let markers = renderer.derive_markers(&routes, Some(route.origin()), true);
        let expected: usize = routes
            .routes_originating_at(route.origin())
            .map(|r| r.waypoints().len() - 1)
            .sum();
        assert_eq!(markers.len(), expected);

        // Consecutive markers of one route chain end to start
        let own: Vec<_> = markers
            .iter()
            .filter(|m| {
                (m.color == MarkerColor::Primary) == route.is_primary()
            })
            .collect();
        for pair in own.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}

#[test]
fn test_derivation_is_idempotent() {
    let (_, routes) = SceneConfig::athens().build().unwrap();
    let renderer = RouteRenderer::default();
    let first = renderer.derive_markers(&routes, Some("OTE Building"), true);
    let second = renderer.derive_markers(&routes, Some("OTE Building"), true);
    assert_eq!(first, second);
}

#[test]
fn test_unrouted_and_inactive_yield_no_markers() {
    let (_, routes) = SceneConfig::athens().build().unwrap();
    let renderer = RouteRenderer::default();
    assert!(renderer.derive_markers(&routes, Some("Road Point 2"), true).is_empty());
    assert!(renderer.derive_markers(&routes, Some("Nowhere"), true).is_empty());
    assert!(renderer.derive_markers(&routes, None, true).is_empty());
    assert!(renderer.derive_markers(&routes, Some("OTE Building"), false).is_empty());
}

#[test]
fn test_custom_offset_and_explicit_points() {
    let mut config = SceneConfig {
        locations: vec![
            LocationSpec::new("Depot", [0.0, 0.0, 0.0]),
            LocationSpec::new("Park", [10.0, 0.0, 0.0]),
        ],
        routes: vec![RouteSpec {
            name: "depot-park".to_string(),
            origin: "Depot".to_string(),
            waypoints: vec![
                WaypointSpec::Named("Depot".to_string()),
                WaypointSpec::Point([5.0, 0.0, 5.0]),
                WaypointSpec::Named("Park".to_string()),
            ],
            safe_spot: "Park".to_string(),
        }],
        ..SceneConfig::athens()
    };
    config.markers.elevation_offset = 0.5;

    let (_, routes) = config.build().unwrap();
    let markers = RouteRenderer::new(&config.markers).derive_markers(&routes, Some("Depot"), true);
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].end, Vec3::new(5.0, 0.5, 5.0));
    assert_eq!(markers[1].end, Vec3::new(10.0, 0.5, 0.0));
}
