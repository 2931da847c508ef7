use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::rc::Rc;

use crate::{
    api::types::{ApiError, Session},
    config,
    state::session::SESSION_STORAGE_KEY,
    utils::storage::{BrowserStorage, KeyValueStore, MemoryStorage},
};

/// Transport for the habit API. Attaches the stored session's bearer token to
/// every request and turns non-2xx responses into [`ApiError`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    storage: Rc<dyn KeyValueStore>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            storage: Rc::new(BrowserStorage),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            storage: Rc::new(MemoryStorage::default()),
        }
    }

    pub fn with_storage(mut self, storage: Rc<dyn KeyValueStore>) -> Self {
        self.storage = storage;
        self
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await.trim_end_matches('/'), path)
    }

    fn bearer_token(&self) -> Option<String> {
        let raw = self.storage.get(SESSION_STORAGE_KEY)?;
        serde_json::from_str::<Session>(&raw)
            .ok()
            .map(|session| session.token)
            .filter(|token| !token.is_empty())
    }

    pub(super) fn get_auth_headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = self.bearer_token() {
            match format!("Bearer {}", token).parse::<header::HeaderValue>() {
                Ok(value) => {
                    headers.insert(header::AUTHORIZATION, value);
                }
                Err(_) => log::warn!("stored token is not a valid header value; sending without it"),
            }
        }
        headers
    }

    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request
            .headers(self.get_auth_headers())
            .send()
            .await
            .map_err(|e| {
                log::warn!("request failed: {}", e);
                ApiError::request_failed(e.to_string())
            })
    }

    pub(super) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::error_for_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::parse_failed(format!("Failed to parse response: {}", e)))
    }

    pub(super) async fn expect_success(response: Response) -> Result<(), ApiError> {
        Self::error_for_status(response).await.map(|_| ())
    }

    async fn error_for_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_status_body(status.as_u16(), &body);
        log::warn!("API responded {}: {}", status, error);
        Err(error)
    }
}

pub(super) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}
