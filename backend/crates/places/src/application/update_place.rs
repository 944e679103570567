//! Update Place Use Case
//!
//! Only the creator may update, and only title and description change.

use std::sync::Arc;

use kernel::id::{PlaceId, UserId};

use crate::domain::entity::place::Place;
use crate::domain::repository::PlaceRepository;
use crate::domain::value_object::{description::Description, title::Title};
use crate::error::{PlaceError, PlaceResult};

/// Update place input
pub struct UpdatePlaceInput {
    pub place_id: PlaceId,
    pub title: String,
    pub description: String,
    /// Authenticated user performing the update
    pub actor: UserId,
}

/// Update place use case
pub struct UpdatePlaceUseCase<R>
where
    R: PlaceRepository,
{
    repo: Arc<R>,
}

impl<R> UpdatePlaceUseCase<R>
where
    R: PlaceRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdatePlaceInput) -> PlaceResult<Place> {
        // Existence is checked before ownership so a wrong id reads as 404,
        // not as someone else's place
        let mut place = self
            .repo
            .find_by_id(&input.place_id)
            .await?
            .ok_or(PlaceError::PlaceNotFound)?;

        if !place.is_owned_by(&input.actor) {
            return Err(PlaceError::NotOwner);
        }

        let title =
            Title::new(input.title).map_err(|e| PlaceError::Validation(e.message().to_string()))?;
        let description = Description::new(input.description)
            .map_err(|e| PlaceError::Validation(e.message().to_string()))?;

        place.apply_update(title, description);

        self.repo.update(&place).await?;

        tracing::info!(place_id = %place.place_id, "Place updated");

        Ok(place)
    }
}
