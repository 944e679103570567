//! List Users Use Case

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::UserResult;

/// List users use case
///
/// Returns every user with their owned place ids. Password hashes stay on
/// the entity and are dropped at the DTO boundary.
pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> UserResult<Vec<User>> {
        self.repo.list().await
    }
}
