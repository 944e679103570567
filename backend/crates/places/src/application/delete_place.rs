//! Delete Place Use Case
//!
//! Deletes the place row and the owner's list entry in one transaction.
//! The image file is returned to the caller for best-effort removal after
//! the transaction commits; a leftover file is preferable to a dangling
//! database reference.

use std::sync::Arc;

use kernel::id::{PlaceId, UserId};

use crate::domain::repository::PlaceRepository;
use crate::error::{PlaceError, PlaceResult};

/// Delete place input
pub struct DeletePlaceInput {
    pub place_id: PlaceId,
    /// Authenticated user performing the deletion
    pub actor: UserId,
}

/// Delete place use case
pub struct DeletePlaceUseCase<R>
where
    R: PlaceRepository,
{
    repo: Arc<R>,
}

impl<R> DeletePlaceUseCase<R>
where
    R: PlaceRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the path of the deleted place's image
    pub async fn execute(&self, input: DeletePlaceInput) -> PlaceResult<String> {
        let place = self
            .repo
            .find_by_id(&input.place_id)
            .await?
            .ok_or(PlaceError::PlaceNotFound)?;

        if !place.is_owned_by(&input.actor) {
            return Err(PlaceError::NotOwner);
        }

        self.repo.delete(&place).await?;

        tracing::info!(place_id = %place.place_id, "Place deleted");

        Ok(place.image_path)
    }
}
