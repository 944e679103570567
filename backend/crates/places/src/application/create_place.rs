//! Create Place Use Case
//!
//! Validates the inputs, resolves the address into coordinates, then
//! persists the place together with the creator's place list in one
//! transaction.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::place::Place;
use crate::domain::geocoder::Geocoder;
use crate::domain::repository::PlaceRepository;
use crate::domain::value_object::{address::Address, description::Description, title::Title};
use crate::error::{PlaceError, PlaceResult};

/// Create place input
pub struct CreatePlaceInput {
    pub title: String,
    pub description: String,
    pub address: String,
    /// Path of the stored place image (written by the upload layer)
    pub image_path: String,
    /// Authenticated user creating the place
    pub creator: UserId,
}

/// Create place use case
pub struct CreatePlaceUseCase<R, G>
where
    R: PlaceRepository,
    G: Geocoder,
{
    repo: Arc<R>,
    geocoder: Arc<G>,
}

impl<R, G> CreatePlaceUseCase<R, G>
where
    R: PlaceRepository,
    G: Geocoder,
{
    pub fn new(repo: Arc<R>, geocoder: Arc<G>) -> Self {
        Self { repo, geocoder }
    }

    pub async fn execute(&self, input: CreatePlaceInput) -> PlaceResult<Place> {
        // Validate inputs; every failure early-returns before the
        // geocoder call and before any write
        let title =
            Title::new(input.title).map_err(|e| PlaceError::Validation(e.message().to_string()))?;
        let description = Description::new(input.description)
            .map_err(|e| PlaceError::Validation(e.message().to_string()))?;
        let address = Address::new(input.address)
            .map_err(|e| PlaceError::Validation(e.message().to_string()))?;

        let location = self.geocoder.geocode(address.as_str()).await?;

        let place = Place::new(
            title,
            description,
            address,
            location,
            input.image_path,
            input.creator,
        );

        self.repo.create(&place).await?;

        tracing::info!(
            place_id = %place.place_id,
            creator = %place.creator,
            "Place created"
        );

        Ok(place)
    }
}
