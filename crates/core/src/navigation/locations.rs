//! Location registry: name to world coordinate.

use crate::config::{ConfigError, LocationSpec};
use crate::core_types::Vec3;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    position: Vec3,
    hidden: bool,
}

/// Immutable lookup from location name to its coordinate in the city model.
///
/// Registration order is preserved so the location menu lists entries the
/// way they were authored.
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    entries: Vec<Entry>,
    index: FxHashMap<String, usize>,
}

impl LocationRegistry {
    /// Build the registry from authored location specs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateLocation`] if two specs share a name.
    pub fn from_specs(specs: &[LocationSpec]) -> Result<Self, ConfigError> {
        let mut registry = LocationRegistry {
            entries: Vec::with_capacity(specs.len()),
            index: FxHashMap::default(),
        };

        for spec in specs {
            if registry.index.contains_key(&spec.name) {
                return Err(ConfigError::DuplicateLocation(spec.name.clone()));
            }
            registry
                .index
                .insert(spec.name.clone(), registry.entries.len());
            registry.entries.push(Entry {
                name: spec.name.clone(),
                position: Vec3::from(spec.position),
                hidden: spec.hidden,
            });
        }

        Ok(registry)
    }

    /// Coordinate registered under `name`, or `None` if the name is unknown
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Vec3> {
        self.index.get(name).map(|&i| self.entries[i].position)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Names offered in the location menu, in registration order
    pub fn selectable(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(|e| !e.hidden)
            .map(|e| e.name.as_str())
    }

    /// Every registered name, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LocationRegistry {
        LocationRegistry::from_specs(&[
            LocationSpec::new("OTE Building", [-40.0, 1.0, 25.0]),
            LocationSpec::waypoint("two", [-29.8, 1.0, 14.0]),
            LocationSpec::new("OAKA", [15.0, 1.0, -15.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_returns_configured_coordinate() {
        let registry = registry();
        assert_eq!(
            registry.lookup("OTE Building"),
            Some(Vec3::new(-40.0, 1.0, 25.0))
        );
        assert_eq!(registry.lookup("two"), Some(Vec3::new(-29.8, 1.0, 14.0)));
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        let registry = registry();
        assert_eq!(registry.lookup("Acropolis"), None);
        assert_eq!(registry.lookup(""), None);
        // Lookups are case sensitive
        assert_eq!(registry.lookup("oaka"), None);
    }

    #[test]
    fn test_selectable_skips_hidden_and_keeps_order() {
        let registry = registry();
        let menu: Vec<_> = registry.selectable().collect();
        assert_eq!(menu, vec!["OTE Building", "OAKA"]);
        assert_eq!(registry.names().count(), 3);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = LocationRegistry::from_specs(&[
            LocationSpec::new("OAKA", [15.0, 1.0, -15.0]),
            LocationSpec::new("OAKA", [0.0, 0.0, 0.0]),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateLocation("OAKA".to_string()));
    }
}
