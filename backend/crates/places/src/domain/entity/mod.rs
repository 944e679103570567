//! Domain Entities

pub mod owner;
pub mod place;

pub use owner::PlaceOwner;
pub use place::Place;
