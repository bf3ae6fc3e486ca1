mod config;
mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use axum::Router;
use sea_orm::{ConnectOptions, Database};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::{
    config::AppConfig,
    infrastructure::{
        bounding_box_resolver::BoundingBoxResolver, jwt_token_issuer::JwtTokenIssuer,
        user_repository::MariaDbUserRepository,
    },
    presentation::handlers::user_handler::create_user_router,
    usecase::{
        get_profile_usecase::GetProfileUsecase, register_user_usecase::RegisterUserUsecase,
    },
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(10)
        .min_connections(1)
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;

    let user_repository = MariaDbUserRepository::new(db);
    let city_resolver = BoundingBoxResolver::new();
    let token_issuer =
        JwtTokenIssuer::with_expiration(config.jwt_secret.clone(), config.token_expiry_hours);
    let register_service =
        RegisterUserUsecase::new(user_repository.clone(), city_resolver, token_issuer);
    let profile_service = GetProfileUsecase::new(user_repository);

    let app = Router::new().nest(
        "/user",
        create_user_router(register_service, profile_service),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "signup-api listening");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
