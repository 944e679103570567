//! Repository Traits

use kernel::id::{PlaceId, UserId};

use crate::domain::entity::owner::PlaceOwner;
use crate::domain::entity::place::Place;
use crate::error::PlaceResult;

/// Place persistence operations
///
/// `create` and `delete` must also maintain the owning user's place list,
/// atomically with the place row itself.
#[trait_variant::make(PlaceRepository: Send)]
pub trait LocalPlaceRepository {
    /// Insert a place and append it to the creator's place list.
    /// Fails with `OwnerNotFound` when the creator does not exist.
    async fn create(&self, place: &Place) -> PlaceResult<()>;

    async fn find_by_id(&self, place_id: &PlaceId) -> PlaceResult<Option<Place>>;

    /// A user together with all places they created, in creation order.
    /// `None` when the user does not exist; an existing user with no
    /// places yields an empty list.
    async fn find_owner_with_places(
        &self,
        user_id: &UserId,
    ) -> PlaceResult<Option<(PlaceOwner, Vec<Place>)>>;

    /// Persist mutable fields (title, description, updated_at)
    async fn update(&self, place: &Place) -> PlaceResult<()>;

    /// Delete a place and remove it from the creator's place list
    async fn delete(&self, place: &Place) -> PlaceResult<()>;
}
