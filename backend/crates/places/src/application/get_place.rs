//! Get Place Use Case

use std::sync::Arc;

use kernel::id::PlaceId;

use crate::domain::entity::place::Place;
use crate::domain::repository::PlaceRepository;
use crate::error::{PlaceError, PlaceResult};

/// Get place by id use case
pub struct GetPlaceUseCase<R>
where
    R: PlaceRepository,
{
    repo: Arc<R>,
}

impl<R> GetPlaceUseCase<R>
where
    R: PlaceRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, place_id: &PlaceId) -> PlaceResult<Place> {
        self.repo
            .find_by_id(place_id)
            .await?
            .ok_or(PlaceError::PlaceNotFound)
    }
}
