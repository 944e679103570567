//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod create_place;
pub mod delete_place;
pub mod get_place;
pub mod list_user_places;
pub mod update_place;

// Re-exports
pub use config::PlacesConfig;
pub use create_place::{CreatePlaceInput, CreatePlaceUseCase};
pub use delete_place::{DeletePlaceInput, DeletePlaceUseCase};
pub use get_place::GetPlaceUseCase;
pub use list_user_places::ListUserPlacesUseCase;
pub use update_place::{UpdatePlaceInput, UpdatePlaceUseCase};
