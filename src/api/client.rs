//! HTTP client for the promotions backend.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::catalog::models::{Brand, Promotion};

/// Default base address of the promotions backend.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Errors from talking to the backend. The UI collapses all of these into
/// one failed state; the distinction only matters for the diagnostic log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} returned status {status}")]
    UnexpectedStatus { url: String, status: StatusCode },
}

/// Thin client over the two read-only endpoints.
#[derive(Debug, Clone)]
pub struct PromoApi {
    base: String,
    http: Client,
}

impl PromoApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            http: Client::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn fetch_brands(&self) -> Result<Vec<Brand>, ApiError> {
        self.get_json("/api/brands").await
    }

    pub async fn fetch_promotions(&self) -> Result<Vec<Promotion>, ApiError> {
        self.get_json("/api/promotions").await
    }

    /// Fetch both collections, brands first. Fail-fast: if the brands call
    /// fails the promotions endpoint is never requested, and any failure
    /// discards whatever was fetched before it.
    pub async fn fetch_all(&self) -> Result<(Vec<Brand>, Vec<Promotion>), ApiError> {
        let brands = self.fetch_brands().await?;
        let promotions = self.fetch_promotions().await?;
        Ok((brands, promotions))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, path);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::UnexpectedStatus {
                url,
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_configured_base() {
        let api = PromoApi::new("http://promo.internal:8080");
        assert_eq!(api.base(), "http://promo.internal:8080");
    }

    #[test]
    fn unexpected_status_names_url_and_code() {
        let err = ApiError::UnexpectedStatus {
            url: format!("{DEFAULT_API_BASE}/api/brands"),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        let msg = err.to_string();
        assert!(msg.contains("/api/brands"));
        assert!(msg.contains("500"));
    }
}
