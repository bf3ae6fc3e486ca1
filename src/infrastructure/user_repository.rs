use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};

use crate::domain::{
    error::RepositoryError,
    models::user::{City, NewUser, User},
    repositories::user_repository::UserRepository,
};
use crate::infrastructure::entity::users;

#[derive(Clone)]
pub struct MariaDbUserRepository {
    db: DatabaseConnection,
}

impl MariaDbUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn user_from_model(model: users::Model) -> Result<User, RepositoryError> {
    let city = City::from_name(&model.city).ok_or_else(|| {
        RepositoryError::DatabaseError(format!("Unknown city stored for user: {}", model.city))
    })?;
    Ok(User::new(model.id, model.name, model.email, city))
}

#[async_trait]
impl UserRepository for MariaDbUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let user_model = users::ActiveModel {
            name: Set(new_user.name.clone()),
            email: Set(new_user.email.clone()),
            city: Set(new_user.city.as_str().to_string()),
            ..Default::default()
        };
        let insert_result = users::Entity::insert(user_model)
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(User::new(
            insert_result.last_insert_id,
            new_user.name,
            new_user.email,
            new_user.city,
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        let user = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        user.map(user_from_model).transpose()
    }
}
