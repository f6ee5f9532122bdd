use actix_web::cookie::Key;

use crate::availability::HttpAvailabilityClient;
use crate::errors::AppError;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_AVAILABILITY_BASE_URL: &str = "http://127.0.0.1:8080";
const MIN_SESSION_KEY_LEN: usize = 64;

/// Settings read from the environment (and `.env`, if present).
pub struct AppConfig {
    pub bind_addr: String,
    pub session_key: Key,
    pub availability_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_ok() {
            log::info!("Loaded .env");
        }

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let availability_base_url = std::env::var("AVAILABILITY_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_AVAILABILITY_BASE_URL.to_string());

        Self {
            bind_addr,
            session_key: session_key_from(std::env::var("SESSION_KEY").ok()),
            availability_base_url,
        }
    }

    /// Client for library callers that drive the availability workflow against
    /// `AVAILABILITY_BASE_URL`. The server binary itself never calls it.
    pub fn availability_client(&self) -> Result<HttpAvailabilityClient, AppError> {
        HttpAvailabilityClient::new(self.availability_base_url.clone())
    }
}

/// Persistent key from `SESSION_KEY` when long enough, otherwise a random one.
fn session_key_from(value: Option<String>) -> Key {
    match value {
        Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key",
                val.len()
            );
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}
