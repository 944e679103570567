//! Geocoder Trait

use thiserror::Error;

use crate::domain::value_object::geo_point::GeoPoint;

/// Geocoding failure modes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The provider answered but found nothing for the address
    #[error("no result for address")]
    NoResult,

    /// Transport failure, quota exhaustion or a malformed provider response
    #[error("provider error: {0}")]
    Provider(String),
}

/// Resolves a free-form address into coordinates
#[trait_variant::make(Geocoder: Send)]
pub trait LocalGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError>;
}
