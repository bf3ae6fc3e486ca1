use crate::domain::{
    error::DomainError,
    models::user::{NewUser, User},
    repositories::user_repository::UserRepository,
    services::{city_resolver::CityResolver, token_service::TokenIssuer},
};

#[derive(Debug)]
pub struct RegistrationResult {
    pub token: String,
    pub user: User,
}

pub struct RegisterUserUsecase<U: UserRepository, C: CityResolver, T: TokenIssuer> {
    user_repository: U,
    city_resolver: C,
    token_issuer: T,
}

impl<U: UserRepository, C: CityResolver, T: TokenIssuer> RegisterUserUsecase<U, C, T> {
    pub fn new(user_repository: U, city_resolver: C, token_issuer: T) -> Self {
        Self {
            user_repository,
            city_resolver,
            token_issuer,
        }
    }

    /// Resolve the city, persist the user, then sign a session token over
    /// the persisted id and email. Nothing is written when resolution
    /// fails; a signing failure leaves the committed user row in place and
    /// is surfaced as `DomainError::Signing`.
    pub async fn register(
        &self,
        name: String,
        email: String,
        latitude: f64,
        longitude: f64,
    ) -> Result<RegistrationResult, DomainError>
    where
        U: Send + Sync,
        C: Send + Sync,
        T: Send + Sync,
    {
        let city = self
            .city_resolver
            .resolve(latitude, longitude)
            .ok_or(DomainError::UnresolvableLocation)?;

        let user = self
            .user_repository
            .create(NewUser { name, email, city })
            .await?;

        let token = self.token_issuer.sign(&user).inspect_err(|e| {
            tracing::error!(user_id = user.id(), error = %e, "token signing failed after commit");
        })?;

        Ok(RegistrationResult { token, user })
    }
}
