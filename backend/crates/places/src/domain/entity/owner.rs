//! Place Owner Read Model

use kernel::id::UserId;

/// A user as read back alongside the places they created
///
/// Projection of the users table; the password hash is never part of it.
#[derive(Debug, Clone)]
pub struct PlaceOwner {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    /// Avatar path under the uploads directory
    pub image_path: String,
}
