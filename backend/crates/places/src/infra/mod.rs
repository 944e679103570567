//! Infrastructure Layer
//!
//! PostgreSQL repository and geocoding provider implementations.

pub mod geocoder;
pub mod postgres;

pub use geocoder::GoogleGeocoder;
pub use postgres::PgPlaceRepository;
