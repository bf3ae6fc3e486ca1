use std::error::Error;

/// Everything the service needs from the environment, resolved once at
/// startup so no component reads env vars on its own.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_expiry_hours: i64,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        // a missing .env file is fine; explicit env vars still apply
        dotenvy::dotenv().ok();

        let database_url = dotenvy::var("DATABASE_URL")?;
        let jwt_secret =
            dotenvy::var("JWT_SECRET").unwrap_or_else(|_| "defaultSecretKey".to_string());
        let token_expiry_hours = match dotenvy::var("TOKEN_EXPIRY_HOURS") {
            Ok(raw) => raw.parse()?,
            Err(_) => 1,
        };
        let port = match dotenvy::var("PORT") {
            Ok(raw) => raw.parse()?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            token_expiry_hours,
            port,
        })
    }
}
