//! Geographic Coordinate Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A WGS 84 coordinate pair, validated on construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Create a new coordinate pair with range validation
    pub fn new(lat: f64, lng: f64) -> AppResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::unprocessable(format!(
                "Latitude out of range: {lat}"
            )));
        }

        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::unprocessable(format!(
                "Longitude out of range: {lng}"
            )));
        }

        Ok(Self { lat, lng })
    }

    /// Create from database values (assumed already validated)
    pub fn from_db(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_valid() {
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
        assert!(GeoPoint::new(40.7484474, -73.9871516).is_ok());
        assert!(GeoPoint::new(-90.0, 180.0).is_ok());
        assert!(GeoPoint::new(90.0, -180.0).is_ok());
    }

    #[test]
    fn test_geo_point_out_of_range() {
        assert!(GeoPoint::new(90.1, 0.0).is_err());
        assert!(GeoPoint::new(-90.1, 0.0).is_err());
        assert!(GeoPoint::new(0.0, 180.1).is_err());
        assert!(GeoPoint::new(0.0, -180.1).is_err());
    }

    #[test]
    fn test_geo_point_rejects_non_finite() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_geo_point_serialization() {
        let point = GeoPoint::new(40.7484474, -73.9871516).unwrap();
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"lat\":40.7484474"));
        assert!(json.contains("\"lng\":-73.9871516"));
    }
}
