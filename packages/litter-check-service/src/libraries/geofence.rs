use tracing::{debug, warn};

use crate::models::{LocationPoint, LocationRegistry, OTHER_LOCATION};

/// Mean Earth radius used for the great-circle distance, in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Configuration for the geofence check
#[derive(Debug, Clone)]
pub struct GeofenceConfig {
    pub max_distance_km: f64, // Submissions further than this are rejected (3km)
}

impl Default for GeofenceConfig {
    fn default() -> Self {
        Self {
            max_distance_km: 3.0,
        }
    }
}

/// Result of a geofence check
#[derive(Debug, Clone, PartialEq)]
pub enum GeofenceOutcome {
    /// Within range, or the check was skipped (`distance_km` is `None` then)
    Passed { distance_km: Option<f64> },
    Rejected { distance_km: f64 },
    /// Registered location but no coordinates to check
    MissingCoordinates,
}

impl GeofenceOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, GeofenceOutcome::Passed { .. })
    }

    /// Message shown to the submitter when the check fails
    pub fn rejection_reason(&self) -> Option<String> {
        match self {
            GeofenceOutcome::Passed { .. } => None,
            GeofenceOutcome::Rejected { distance_km } => Some(format!(
                "Distância: {}km. Deves estar na praia!",
                format_tenths(*distance_km)
            )),
            GeofenceOutcome::MissingCoordinates => {
                Some("Localização em falta. Deves estar na praia!".to_string())
            }
        }
    }
}

/// Checks that a submission was taken near the beach it claims.
pub struct Geofence {
    registry: LocationRegistry,
    config: GeofenceConfig,
}

impl Geofence {
    /// Create a geofence over the given registry with the default 3km radius
    pub fn new(registry: LocationRegistry) -> Self {
        Self {
            registry,
            config: GeofenceConfig::default(),
        }
    }

    /// Create a geofence with a custom config
    pub fn with_config(registry: LocationRegistry, config: GeofenceConfig) -> Self {
        Self { registry, config }
    }

    /// Validate submitted coordinates against the named location.
    ///
    /// `"Outra"` and names missing from the registry both skip the check.
    pub fn validate(&self, location_name: &str, latitude: f64, longitude: f64) -> GeofenceOutcome {
        self.validate_submission(location_name, Some(&LocationPoint::new(latitude, longitude)))
    }

    /// Like [`Geofence::validate`], for submissions that may lack coordinates.
    ///
    /// Missing coordinates only matter for registered locations.
    pub fn validate_submission(
        &self,
        location_name: &str,
        coordinates: Option<&LocationPoint>,
    ) -> GeofenceOutcome {
        let Some(reference) = self.reference_for(location_name) else {
            return GeofenceOutcome::Passed { distance_km: None };
        };

        let Some(coordinates) = coordinates else {
            debug!("No coordinates submitted for '{}'", location_name);
            return GeofenceOutcome::MissingCoordinates;
        };

        let distance_km = haversine_distance_km(coordinates, reference);

        debug!(
            "Geofence check for '{}': {:.3}km (max {:.1}km)",
            location_name, distance_km, self.config.max_distance_km
        );

        if distance_km > self.config.max_distance_km {
            GeofenceOutcome::Rejected { distance_km }
        } else {
            GeofenceOutcome::Passed {
                distance_km: Some(distance_km),
            }
        }
    }

    fn reference_for(&self, location_name: &str) -> Option<&LocationPoint> {
        if location_name == OTHER_LOCATION {
            debug!("Location '{}' requested, skipping geofence", OTHER_LOCATION);
            return None;
        }

        let reference = self.registry.get(location_name);
        if reference.is_none() {
            warn!(
                "Location '{}' is not in the registry, skipping geofence",
                location_name
            );
        }
        reference
    }
}

/// Great-circle distance between two points in kilometres (Haversine formula)
pub fn haversine_distance_km(point1: &LocationPoint, point2: &LocationPoint) -> f64 {
    let lat1_rad = point1.latitude.to_radians();
    let lat2_rad = point2.latitude.to_radians();
    let delta_lat = (point2.latitude - point1.latitude).to_radians();
    let delta_lon = (point2.longitude - point1.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// One decimal place from the exact binary value; only exact ties round up.
///
/// `{:.1}` already rounds the exact value but sends exact ties to even
/// (3.25 -> "3.2"), so those are bumped: 3.25 -> "3.3", 4.35 -> "4.3".
fn format_tenths(value: f64) -> String {
    let scaled = value * 10.0;
    // fused multiply-add yields the exact rounding error of `scaled`
    let exact = value.mul_add(10.0, -scaled) == 0.0;

    if exact && scaled.fract().abs() == 0.5 {
        format!("{:.1}", (scaled + 0.5 * scaled.signum()) / 10.0)
    } else {
        format!("{:.1}", value)
    }
}
