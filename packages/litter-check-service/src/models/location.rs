use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Location name meaning "somewhere not in the registry"; skips the geofence.
pub const OTHER_LOCATION: &str = "Outra";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationPoint {
    /// Create a new location point
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Reference coordinates for the beaches that are geofenced.
///
/// Built once at start-up and only read afterwards. Names are matched
/// exactly (case and accents included), the same way clients send them.
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    entries: HashMap<String, LocationPoint>,
}

impl LocationRegistry {
    /// An empty registry; every location name bypasses the geofence.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace a reference point
    pub fn with_entry(mut self, name: impl Into<String>, point: LocationPoint) -> Self {
        self.entries.insert(name.into(), point);
        self
    }

    pub fn get(&self, name: &str) -> Option<&LocationPoint> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::empty().with_entry(
            "Praia Norte",
            LocationPoint::new(41.6972286129189, -8.850855546566946),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_praia_norte() {
        let registry = LocationRegistry::default();
        assert_eq!(registry.len(), 1);

        let point = registry.get("Praia Norte").unwrap();
        assert_eq!(point.latitude, 41.6972286129189);
        assert_eq!(point.longitude, -8.850855546566946);
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = LocationRegistry::default();
        assert!(registry.contains("Praia Norte"));
        assert!(!registry.contains("praia norte"));
        assert!(!registry.contains(OTHER_LOCATION));
    }

    #[test]
    fn test_with_entry_replaces() {
        let registry = LocationRegistry::empty()
            .with_entry("Praia Sul", LocationPoint::new(1.0, 2.0))
            .with_entry("Praia Sul", LocationPoint::new(3.0, 4.0));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Praia Sul"), Some(&LocationPoint::new(3.0, 4.0)));
        assert!(LocationRegistry::empty().is_empty());
    }
}
