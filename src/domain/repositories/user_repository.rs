use async_trait::async_trait;

use crate::domain::errors::RepositoryResult;
use crate::domain::user::User;

/// Repository trait for user records
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every user, ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<User>>;
}
