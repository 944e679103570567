//! Place Entity

use chrono::{DateTime, Utc};
use kernel::id::{PlaceId, UserId};

use crate::domain::value_object::{
    address::Address, description::Description, geo_point::GeoPoint, title::Title,
};

/// Place entity
///
/// The creator's user record lists this place's id; the place repository
/// keeps both sides consistent inside a single transaction.
#[derive(Debug, Clone)]
pub struct Place {
    /// Internal UUID identifier
    pub place_id: PlaceId,
    pub title: Title,
    pub description: Description,
    /// Address as entered; coordinates are derived from it once, at creation
    pub address: Address,
    pub location: GeoPoint,
    /// Image path under the uploads directory
    pub image_path: String,
    /// The user who created this place; only they may modify or delete it
    pub creator: UserId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Place {
    /// Create a new place
    pub fn new(
        title: Title,
        description: Description,
        address: Address,
        location: GeoPoint,
        image_path: String,
        creator: UserId,
    ) -> Self {
        let now = Utc::now();

        Self {
            place_id: PlaceId::new(),
            title,
            description,
            address,
            location,
            image_path,
            creator,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether a user may modify or delete this place
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.creator == user_id
    }

    /// Apply a title/description update; address, coordinates and image
    /// are fixed at creation
    pub fn apply_update(&mut self, title: Title, description: Description) {
        self.title = title;
        self.description = description;
        self.updated_at = Utc::now();
    }
}
