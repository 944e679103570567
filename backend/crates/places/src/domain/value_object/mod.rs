//! Domain Value Objects

pub mod address;
pub mod description;
pub mod geo_point;
pub mod title;

pub use address::Address;
pub use description::Description;
pub use geo_point::GeoPoint;
pub use title::Title;
