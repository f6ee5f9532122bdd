use std::future::Future;

use super::query::{AvailabilityQuery, AvailabilityResult};
use crate::errors::AppError;

pub const AVAILABILITY_PATH: &str = "/search-availability-json";

/// Remote availability check.
pub trait AvailabilityClient {
    fn search(
        &self,
        query: &AvailabilityQuery,
    ) -> impl Future<Output = Result<AvailabilityResult, AppError>>;
}

/// Posts the query form-encoded to the availability endpoint.
///
/// Keeps a cookie store so the session cookie carrying the CSRF token
/// goes along, the way a browser fetch would.
#[derive(Clone)]
pub struct HttpAvailabilityClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAvailabilityClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self::with_client(base_url, http))
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl AvailabilityClient for HttpAvailabilityClient {
    async fn search(&self, query: &AvailabilityQuery) -> Result<AvailabilityResult, AppError> {
        let url = self.url(AVAILABILITY_PATH);
        log::info!("Checking availability of room {} at {}", query.room_id, url);

        let response = self
            .http
            .post(&url)
            .form(query)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let result: AvailabilityResult = serde_json::from_str(&body)?;
        log::debug!("Availability response: ok={} {}", result.ok, result.message);
        Ok(result)
    }
}
