//! List User Places Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::owner::PlaceOwner;
use crate::domain::entity::place::Place;
use crate::domain::repository::PlaceRepository;
use crate::error::{PlaceError, PlaceResult};

/// Load a user together with the places they created
///
/// An unknown user is an error; a known user with no places yields an
/// empty list.
pub struct ListUserPlacesUseCase<R>
where
    R: PlaceRepository,
{
    repo: Arc<R>,
}

impl<R> ListUserPlacesUseCase<R>
where
    R: PlaceRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> PlaceResult<(PlaceOwner, Vec<Place>)> {
        self.repo
            .find_owner_with_places(user_id)
            .await?
            .ok_or(PlaceError::OwnerNotFound)
    }
}
