use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::user::{NewUser, User},
};

#[async_trait]
pub trait UserRepository {
    /// Persist a new user; the store assigns the id.
    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;
}
