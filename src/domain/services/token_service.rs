use crate::domain::{error::DomainError, models::user::User};

pub type Token = String;

/// Signs a session credential over a persisted user's id and email.
/// Failure maps to `DomainError::Signing`.
pub trait TokenIssuer: Send + Sync {
    fn sign(&self, user: &User) -> Result<Token, DomainError>;
}
