//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::UserResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user (empty places collection)
    async fn create(&self, user: &User) -> UserResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> UserResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> UserResult<Option<User>>;

    /// Check if email is already registered
    async fn exists_by_email(&self, email: &Email) -> UserResult<bool>;

    /// List all users with their owned place ids
    async fn list(&self) -> UserResult<Vec<User>>;
}
