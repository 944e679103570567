//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::{PlaceId, UserId};
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_name::UserName};

/// User entity
///
/// `places` mirrors the ids of Place records whose creator is this user.
/// The place repository maintains that bidirectional consistency inside a
/// single transaction on place create/delete.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: UserName,
    /// Login key, unique across all users
    pub email: Email,
    /// Argon2id PHC string; never serialized in any response
    pub password_hash: HashedPassword,
    /// Avatar image path under the uploads directory
    pub image_path: String,
    /// Ordered ids of places owned by this user
    pub places: Vec<PlaceId>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with no places
    pub fn new(
        name: UserName,
        email: Email,
        password_hash: HashedPassword,
        image_path: String,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            image_path,
            places: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
