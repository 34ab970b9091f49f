//! Operator-facing hazard state: the selected location and whether a fire
//! has been placed there.

use crate::navigation::LocationRegistry;
use thiserror::Error;
use tracing::info;

/// Why a hazard could not be placed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HazardError {
    /// The operator pressed "place" before choosing a location.
    /// The UI should prompt for a selection.
    #[error("please select a location first")]
    MissingSelection,

    #[error("location '{0}' is not part of the city model")]
    UnknownLocation(String),
}

/// Selection and activation flag, owned by the UI layer.
///
/// The scene reads this once per frame. An active hazard follows the
/// selection: choosing another location moves the fire there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HazardState {
    selected: Option<String>,
    active: bool,
}

impl HazardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a location. An empty name clears the selection.
    pub fn select(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.selected = if name.is_empty() { None } else { Some(name) };
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The location the hazard is burning at, if any
    #[must_use]
    pub fn active_location(&self) -> Option<&str> {
        self.selected().filter(|_| self.active)
    }

    /// Place the hazard at the selected location.
    ///
    /// Returns the location name on success.
    ///
    /// # Errors
    ///
    /// [`HazardError::MissingSelection`] when nothing is selected, or
    /// [`HazardError::UnknownLocation`] when the selection is not registered.
    /// The hazard is left inactive in both cases.
    pub fn place_hazard(&mut self, registry: &LocationRegistry) -> Result<&str, HazardError> {
        let Some(name) = self.selected.as_deref() else {
            return Err(HazardError::MissingSelection);
        };
        if !registry.contains(name) {
            return Err(HazardError::UnknownLocation(name.to_string()));
        }
        self.active = true;
        info!("Fire placed at {}", name);
        Ok(name)
    }

    /// Put the fire out
    pub fn clear_hazard(&mut self) {
        if self.active {
            info!("Fire cleared");
        }
        self.active = false;
    }
}
