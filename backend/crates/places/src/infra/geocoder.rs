//! Google Geocoding API Client

use serde::Deserialize;

use crate::domain::geocoder::{GeocodeError, Geocoder};
use crate::domain::value_object::geo_point::GeoPoint;

const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Geocoder backed by the Google Geocoding API
#[derive(Clone)]
pub struct GoogleGeocoder {
    client: reqwest::Client,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for GoogleGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleGeocoder")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Geocoder for GoogleGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        let response = self
            .client
            .get(GEOCODE_URL)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| GeocodeError::Provider(e.to_string()))?
            .error_for_status()
            .map_err(|e| GeocodeError::Provider(e.to_string()))?;

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GeocodeError::Provider(e.to_string()))?;

        parse_geocode_response(body)
    }
}

// ============================================================================
// Response Parsing
// ============================================================================

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

fn parse_geocode_response(body: GeocodeResponse) -> Result<GeoPoint, GeocodeError> {
    match body.status.as_str() {
        "OK" => {
            let location = body
                .results
                .first()
                .map(|r| &r.geometry.location)
                .ok_or(GeocodeError::NoResult)?;

            GeoPoint::new(location.lat, location.lng)
                .map_err(|e| GeocodeError::Provider(e.message().to_string()))
        }
        "ZERO_RESULTS" => Err(GeocodeError::NoResult),
        other => Err(GeocodeError::Provider(format!(
            "Unexpected geocoding status: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> GeocodeResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_ok_response() {
        let body = response(
            r#"{
                "status": "OK",
                "results": [
                    {"geometry": {"location": {"lat": 40.7484474, "lng": -73.9871516}}}
                ]
            }"#,
        );

        let point = parse_geocode_response(body).unwrap();
        assert_eq!(point.lat(), 40.7484474);
        assert_eq!(point.lng(), -73.9871516);
    }

    #[test]
    fn test_parse_zero_results() {
        let body = response(r#"{"status": "ZERO_RESULTS", "results": []}"#);
        assert_eq!(parse_geocode_response(body), Err(GeocodeError::NoResult));
    }

    #[test]
    fn test_parse_ok_with_empty_results() {
        // Same outcome as ZERO_RESULTS
        let body = response(r#"{"status": "OK", "results": []}"#);
        assert_eq!(parse_geocode_response(body), Err(GeocodeError::NoResult));
    }

    #[test]
    fn test_parse_quota_error() {
        let body = response(r#"{"status": "OVER_QUERY_LIMIT", "results": []}"#);
        assert!(matches!(
            parse_geocode_response(body),
            Err(GeocodeError::Provider(_))
        ));
    }
}
