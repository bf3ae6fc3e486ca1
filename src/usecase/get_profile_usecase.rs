use crate::domain::{
    error::DomainError, models::user::User, repositories::user_repository::UserRepository,
};

pub struct GetProfileUsecase<U: UserRepository> {
    user_repository: U,
}

impl<U: UserRepository> GetProfileUsecase<U> {
    pub fn new(user_repository: U) -> Self {
        Self { user_repository }
    }

    pub async fn get_profile(&self, user_id: i32) -> Result<User, DomainError>
    where
        U: Send + Sync,
    {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::NotFound)
    }
}
