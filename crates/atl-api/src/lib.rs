//! # atl-api
//!
//! Records API client and per-entity views for Atelier.
//!
//! [`ApiClient`] is the single HTTP entry point. Its mutation helpers
//! ([`ApiClient::put_data`], [`ApiClient::delete_data`]) return the raw
//! response and leave success checks to the caller; reads go through
//! [`ApiClient::get_json`], which turns non-success statuses into
//! [`ApiError::Api`].
//!
//! The [`views`] module builds the load / create / update / delete flows
//! for each collection on top of the client.

pub mod views;

mod error;
mod http;

pub use error::ApiError;
pub use http::check_response;

use atl_config::ApiConfig;
use atl_core::{Collection, EntityKind};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

const JSON: &str = "application/json";

/// HTTP client bound to one records API base URL.
///
/// No timeout and no retry are configured: a call either completes or
/// fails with the transport error.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` with the given `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http: reqwest::Client::builder().user_agent(user_agent).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(config.base_url(), &config.user_agent)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `{base}/{collection}`.
    #[must_use]
    pub fn collection_url(&self, collection: Collection) -> String {
        self.url(collection.as_str())
    }

    /// `{base}/{kind}/{id}`.
    #[must_use]
    pub fn record_url(&self, kind: EntityKind, id: i64) -> String {
        self.url(&format!("{}/{id}", kind.as_str()))
    }

    // ── Mutation helpers ──────────────────────────────────────────────

    /// Send exactly one `PUT` to `url` with a JSON-serialized `data` body.
    ///
    /// The response is returned as-is; non-success statuses are not errors.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialize`] if `data` cannot be serialized, or
    /// [`ApiError::Http`] on transport failure.
    pub async fn put_data<T: Serialize + ?Sized>(
        &self,
        url: &str,
        data: &T,
    ) -> Result<reqwest::Response, ApiError> {
        let body = serde_json::to_vec(data)?;
        tracing::debug!(url, bytes = body.len(), "PUT");
        Ok(self
            .http
            .put(url)
            .header(CONTENT_TYPE, JSON)
            .body(body)
            .send()
            .await?)
    }

    /// Send exactly one bodiless `DELETE` to `url`.
    ///
    /// The response is returned as-is; non-success statuses are not errors.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] on transport failure.
    pub async fn delete_data(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(url, "DELETE");
        Ok(self.http.delete(url).send().await?)
    }

    // ── Reads and creates ─────────────────────────────────────────────

    /// `GET {base}/{path}` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] for non-success statuses,
    /// [`ApiError::Decode`] when the body does not match `T`, and
    /// [`ApiError::Http`] for transport failures.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(url, "GET");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| {
            tracing::warn!(url, %source, "undecodable response body");
            ApiError::Decode { url, source }
        })
    }

    /// `POST {base}/{path}` with a JSON-serialized body, returning the raw
    /// response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialize`] or [`ApiError::Http`].
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &T,
    ) -> Result<reqwest::Response, ApiError> {
        let body = serde_json::to_vec(data)?;
        self.post_raw(path, body).await
    }

    /// `POST {base}/{path}` with an already-encoded JSON body, returning the
    /// raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] on transport failure.
    pub async fn post_raw(
        &self,
        path: &str,
        body: impl Into<reqwest::Body>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.url(path);
        tracing::debug!(url, "POST");
        Ok(self
            .http
            .post(&url)
            .header(CONTENT_TYPE, JSON)
            .body(body)
            .send()
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atl_core::LookupKind;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:5000/", "atelier-test").unwrap()
    }

    #[test]
    fn base_url_is_trimmed() {
        assert_eq!(client().base_url(), "http://localhost:5000");
    }

    #[test]
    fn builds_collection_and_record_urls() {
        let client = client();
        assert_eq!(
            client.collection_url(Collection::Lookup(LookupKind::LeadStages)),
            "http://localhost:5000/leadstages"
        );
        assert_eq!(
            client.record_url(EntityKind::Vendors, 1),
            "http://localhost:5000/vendors/1"
        );
        assert_eq!(client.url("/recent"), "http://localhost:5000/recent");
    }

    #[test]
    fn from_config_uses_api_section() {
        let config = ApiConfig {
            base_url: "https://records.example.com/".into(),
            ..ApiConfig::default()
        };
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.url("vendors"), "https://records.example.com/vendors");
    }
}
