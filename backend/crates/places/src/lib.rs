//! Places Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository and geocoder traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and geocoding implementations
//! - `presentation/` - HTTP handlers, DTOs, router, auth middleware
//!
//! ## Features
//! - Public read access to places (by id, by owning user)
//! - Authenticated create / update / delete, restricted to the creator
//! - Address geocoding into coordinates on creation
//! - Place rows and the owner's place list updated in one transaction
//!
//! ## Security Model
//! - Mutation routes guarded by bearer-token middleware (platform::token)
//! - Ownership enforced in the use case, not the handler

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::PlacesConfig;
pub use error::{PlaceError, PlaceResult};
pub use infra::geocoder::GoogleGeocoder;
pub use infra::postgres::PgPlaceRepository;
pub use presentation::middleware::AuthContext;
pub use presentation::router::places_router;
