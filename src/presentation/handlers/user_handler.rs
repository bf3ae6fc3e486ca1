use std::sync::Arc;

use crate::{
    domain::{
        error::DomainError,
        models::user::User,
        repositories::user_repository::UserRepository,
        services::{city_resolver::CityResolver, token_service::TokenIssuer},
    },
    usecase::{get_profile_usecase::GetProfileUsecase, register_user_usecase::RegisterUserUsecase},
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

// Request

/// json for signup request
#[derive(Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub latitude: f64,
    pub longitude: f64,
}

// Response

#[derive(Serialize, Deserialize)]
pub struct UserData {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub city: String,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            city: user.city().as_str().to_string(),
        }
    }
}

/// success envelope carrying a user record
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEnvelope {
    pub status_code: u16,
    pub message: String,
    pub data: UserData,
}

/// failure envelope
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/* Boundary validation */

/// Precondition checks the usecases assume already hold. The coordinate
/// bounds match the resolver's service area, not any single city box.
fn validate_signup(request: &SignupRequest) -> Result<(), String> {
    if request.name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    if !is_valid_email(&request.email) {
        return Err("email must be a valid email address".to_string());
    }
    if !(22.0..=31.5).contains(&request.latitude) {
        return Err("latitude must be between 22.0 and 31.5".to_string());
    }
    if !(25.0..=35.0).contains(&request.longitude) {
        return Err("longitude must be between 25.0 and 35.0".to_string());
    }
    Ok(())
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

/* Router Function and Handler Function */

// User Router

/// function return Router object
/// Suppose to be nested by main router

pub fn create_user_router<
    U: UserRepository + Send + Sync + 'static + Clone,
    C: CityResolver + Send + Sync + 'static,
    T: TokenIssuer + Send + Sync + 'static + Clone,
>(
    register_service: RegisterUserUsecase<U, C, T>,
    profile_service: GetProfileUsecase<U>,
) -> Router {
    let state = AppState {
        register_service: Arc::new(register_service),
        profile_service: Arc::new(profile_service),
    };

    Router::new()
        .route("/signup", post(signup::<U, C, T>))
        .route("/{id}", get(get_profile::<U, C, T>))
        .with_state(state)
}

#[derive(Clone)]
pub struct AppState<U: UserRepository, C: CityResolver, T: TokenIssuer> {
    pub register_service: Arc<RegisterUserUsecase<U, C, T>>,
    pub profile_service: Arc<GetProfileUsecase<U>>,
}

// handler function

/// handler function for signup
async fn signup<
    U: UserRepository + Send + Sync,
    C: CityResolver + Send + Sync,
    T: TokenIssuer + Send + Sync,
>(
    State(state): State<AppState<U, C, T>>,
    Json(payload): Json<SignupRequest>,
) -> Response {
    if let Err(message) = validate_signup(&payload) {
        return creation_failed(StatusCode::BAD_REQUEST, message);
    }

    match state
        .register_service
        .register(
            payload.name,
            payload.email,
            payload.latitude,
            payload.longitude,
        )
        .await
    {
        Ok(result) => {
            let envelope = UserEnvelope {
                status_code: StatusCode::CREATED.as_u16(),
                message: "User created successfully".to_string(),
                data: result.user.into(),
            };
            let mut response = (StatusCode::CREATED, Json(envelope)).into_response();
            // session credential travels as an HttpOnly cookie
            if let Ok(cookie) = HeaderValue::from_str(&format!("jwt={}; HttpOnly", result.token)) {
                response.headers_mut().insert(header::SET_COOKIE, cookie);
            }
            response
        }
        // the user row is already committed here, so this is not a 400
        Err(err @ DomainError::Signing(_)) => {
            creation_failed(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        Err(err) => creation_failed(StatusCode::BAD_REQUEST, err.to_string()),
    }
}

/// handler function for profile fetch
async fn get_profile<
    U: UserRepository + Send + Sync,
    C: CityResolver + Send + Sync,
    T: TokenIssuer + Send + Sync,
>(
    State(state): State<AppState<U, C, T>>,
    Path(id): Path<String>,
) -> Response {
    // a non-numeric id gets the same answer as a missing user, without
    // touching the store
    let Ok(user_id) = id.parse::<i32>() else {
        return user_not_found();
    };

    match state.profile_service.get_profile(user_id).await {
        Ok(user) => {
            let envelope = UserEnvelope {
                status_code: StatusCode::OK.as_u16(),
                message: "User profile fetched successfully".to_string(),
                data: user.into(),
            };
            (StatusCode::OK, Json(envelope)).into_response()
        }
        Err(DomainError::NotFound) => user_not_found(),
        Err(err) => {
            tracing::error!(error = %err, "profile lookup failed");
            let envelope = ErrorEnvelope {
                status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                message: "Internal server error".to_string(),
                error: None,
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
        }
    }
}

fn creation_failed(status: StatusCode, error: String) -> Response {
    let envelope = ErrorEnvelope {
        status_code: status.as_u16(),
        message: "User creation failed".to_string(),
        error: Some(error),
    };
    (status, Json(envelope)).into_response()
}

fn user_not_found() -> Response {
    let envelope = ErrorEnvelope {
        status_code: StatusCode::NOT_FOUND.as_u16(),
        message: "User not found".to_string(),
        error: None,
    };
    (StatusCode::NOT_FOUND, Json(envelope)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_request() {
        let request = SignupRequest {
            name: "Shady".to_string(),
            email: "test@example.com".to_string(),
            latitude: 30.05,
            longitude: 31.15,
        };
        assert!(validate_signup(&request).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let request = SignupRequest {
            name: "  ".to_string(),
            email: "test@example.com".to_string(),
            latitude: 30.05,
            longitude: 31.15,
        };
        assert!(validate_signup(&request).is_err());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let request = SignupRequest {
            name: "Shady".to_string(),
            email: "test@example.com".to_string(),
            latitude: 45.0,
            longitude: 31.15,
        };
        assert!(validate_signup(&request).is_err());

        let request = SignupRequest {
            name: "Shady".to_string(),
            email: "test@example.com".to_string(),
            latitude: 30.05,
            longitude: 60.0,
        };
        assert!(validate_signup(&request).is_err());
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "no-at-sign", "@example.com", "user@nodot", "user@.com"] {
            assert!(!is_valid_email(email), "accepted {email:?}");
        }
        assert!(is_valid_email("user@example.com"));
    }
}
