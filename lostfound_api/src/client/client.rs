//! Lost-and-found HTTP client.
//!
//! Wraps a pooled `reqwest` client around the endpoint table resolved in
//! [`crate::config`]. The table is injected at construction, so tests and
//! embedders can point the client anywhere without touching the process
//! environment.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, ClientBuilder, Method, Response};
use tokio::sync::Mutex;

use crate::config::ApiConfig;
use crate::error::{handle_api_error, LostFoundError};

/// Main client to interact with the lost-and-found API.
#[derive(Clone)]
pub struct LostFoundClient {
    /// Resolved endpoint table, read-only for the life of the client.
    pub config: ApiConfig,
    pub http: Client,
    pub token: Arc<Mutex<Option<String>>>,
}

impl Debug for LostFoundClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LostFoundClient")
            .field("config", &self.config)
            .field("http", &"reqwest::Client")
            .field("token", &self.token)
            .finish()
    }
}

const USER_AGENT: &str = concat!("lostfound-api/", env!("CARGO_PKG_VERSION"));

impl LostFoundClient {
    /// Construct a new [`LostFoundClient`] around a resolved endpoint
    /// table.
    pub fn new(config: ApiConfig) -> Self {
        let http = ClientBuilder::new()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .use_rustls_tls()
            .build()
            .expect("Failed to build reqwest client");

        Self {
            config,
            http,
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// Resolve the endpoint table from the environment (see
    /// [`crate::config::BASE_URL_ENV`]) and build a client around it.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    /* ─────────────────────────── Runtime helpers ─────────────────────────── */

    /// Manually set or clear the session token.
    pub async fn set_token(&self, token: Option<String>) {
        *self.token.lock().await = token;
    }

    /// Build a `reqwest::RequestBuilder` carrying the session token as a
    /// bearer credential when one is stored.
    async fn authed_request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let token_opt = self.token.lock().await.clone();

        let mut req = self
            .http
            .request(method, url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json");

        if let Some(t) = token_opt {
            req = req.header("Authorization", format!("Bearer {t}"));
        }

        req
    }

    /* ───────────── Convenience wrappers around HTTP verbs ───────────── */

    pub async fn authed_get(&self, url: &str) -> Result<Response, LostFoundError> {
        self.authed_request(Method::GET, url)
            .await
            .send()
            .await
            .map_err(LostFoundError::ReqwestError)
    }

    pub async fn authed_get_with_query<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        query: &T,
    ) -> Result<Response, LostFoundError> {
        self.authed_request(Method::GET, url)
            .await
            .query(query)
            .send()
            .await
            .map_err(LostFoundError::ReqwestError)
    }

    pub async fn authed_post<T: serde::Serialize>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<Response, LostFoundError> {
        self.authed_request(Method::POST, url)
            .await
            .json(body)
            .send()
            .await
            .map_err(LostFoundError::ReqwestError)
    }

    pub async fn authed_post_empty(&self, url: &str) -> Result<Response, LostFoundError> {
        self.authed_request(Method::POST, url)
            .await
            .send()
            .await
            .map_err(LostFoundError::ReqwestError)
    }
}

/// Parse the body as JSON **iff** the response status is success.
pub async fn parse_json_if_ok<T: serde::de::DeserializeOwned>(
    resp: Response,
) -> Result<T, LostFoundError> {
    let status = resp.status();
    let bytes = resp.bytes().await.map_err(LostFoundError::ReqwestError)?;

    if !status.is_success() {
        if let Ok(body) = serde_json::from_slice::<crate::types::error_types::ErrorBody>(&bytes) {
            return Err(handle_api_error(body));
        }

        return Err(LostFoundError::HttpStatus {
            code: status.as_u16(),
            body: String::from_utf8_lossy(&bytes).to_string(),
        });
    }

    serde_json::from_slice::<T>(&bytes).map_err(LostFoundError::SerdeError)
}
