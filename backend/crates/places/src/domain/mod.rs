//! Domain Layer
//!
//! Entities, value objects, repository and geocoder traits.

pub mod entity;
pub mod geocoder;
pub mod repository;
pub mod value_object;

pub use entity::owner::PlaceOwner;
pub use entity::place::Place;
pub use geocoder::{GeocodeError, Geocoder};
pub use repository::PlaceRepository;
