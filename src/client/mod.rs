//! Typed HTTP client facade over the resource API.
//!
//! One `ResourceClient` per collection, built by a single factory method.
//! When no base URL is configured the facade is in local-only mode and every
//! call fails fast with [`ClientError::Unavailable`] so callers get a
//! deterministic signal to pick their fallback path.

use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// No backend endpoint is configured (local-only mode)
    #[error("server not available")]
    Unavailable,

    /// The server rejected the request; carries the structured message from
    /// the response body
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// One page of records plus the unfiltered collection size
#[derive(Debug, Deserialize)]
pub struct ListPage {
    pub data: Vec<Value>,
    pub total: i64,
}

#[derive(Debug, Default, Clone)]
pub struct ListParams {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Register/login response: profile plus session token
#[derive(Debug, Deserialize)]
pub struct AuthSession {
    pub user: Value,
    pub token: String,
}

pub struct ApiClient {
    base_url: Option<String>,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    /// `base_url` is the server root (e.g. `http://192.168.1.10:3000`); None
    /// selects local-only mode.
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.filter(|u| !u.is_empty()),
            token: None,
            http: reqwest::Client::new(),
        }
    }

    /// Reads SCHOOL_API_URL; unset means local-only mode.
    pub fn from_env() -> Self {
        Self::new(std::env::var("SCHOOL_API_URL").ok())
    }

    pub fn is_server_mode(&self) -> bool {
        self.base_url.is_some()
    }

    /// Attach a session token to every subsequent request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Collection access object; mirrors the server-side genericity.
    pub fn resource(&self, collection: &str) -> ResourceClient<'_> {
        ResourceClient {
            client: self,
            collection: collection.to_string(),
        }
    }

    // ---- Identity & session -------------------------------------------

    pub async fn register(
        &self,
        username: &str,
        password: &str,
        full_name: &str,
    ) -> Result<AuthSession, ClientError> {
        let body = json!({ "username": username, "password": password, "fullName": full_name });
        let value = self
            .request(Method::POST, "/auth/register", Some(body))
            .await?;
        parse_session(value)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<AuthSession, ClientError> {
        let body = json!({ "username": username, "password": password });
        let value = self.request(Method::POST, "/auth/login", Some(body)).await?;
        parse_session(value)
    }

    pub async fn me(&self) -> Result<Value, ClientError> {
        self.request(Method::GET, "/auth/me", None).await
    }

    pub async fn has_users(&self) -> Result<bool, ClientError> {
        let value = self.request(Method::GET, "/auth/has-users", None).await?;
        Ok(value["hasUsers"].as_bool().unwrap_or(false))
    }

    // ---- Settings ------------------------------------------------------

    pub async fn get_settings(&self) -> Result<Value, ClientError> {
        self.request(Method::GET, "/settings", None).await
    }

    pub async fn update_settings(&self, settings: Value) -> Result<(), ClientError> {
        self.request(Method::PUT, "/settings", Some(settings)).await?;
        Ok(())
    }

    // ---- Aggregates ----------------------------------------------------

    pub async fn dashboard_stats(&self) -> Result<Value, ClientError> {
        self.request(Method::GET, "/dashboard/stats", None).await
    }

    // ---- Transport -----------------------------------------------------

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        self.request_with_query(method, path, &[], body).await
    }

    /// Query values go through reqwest's encoder, so search terms with
    /// reserved characters round-trip intact.
    async fn request_with_query(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        let base = self.base_url.as_ref().ok_or(ClientError::Unavailable)?;
        let url = format!("{}/api{}", base, path);

        let mut req = self.http.request(method, &url);
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        let res = req.send().await?;
        let status = res.status();

        if !status.is_success() {
            // Non-2xx: pull the structured message out of the error body
            let message = res
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v["error"].as_str().map(String::from))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(res.json().await?)
    }
}

/// Typed access object for one collection
pub struct ResourceClient<'a> {
    client: &'a ApiClient,
    collection: String,
}

impl ResourceClient<'_> {
    pub async fn list(&self, params: ListParams) -> Result<ListPage, ClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(search) = params.search {
            query.push(("search", search));
        }
        if let Some(limit) = params.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = params.offset {
            query.push(("offset", offset.to_string()));
        }

        let value = self
            .client
            .request_with_query(Method::GET, &format!("/{}", self.collection), &query, None)
            .await?;
        serde_json::from_value(value).map_err(|_| ClientError::Api {
            status: 200,
            message: "malformed list response".to_string(),
        })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Value, ClientError> {
        self.client
            .request(Method::GET, &format!("/{}/{}", self.collection, id), None)
            .await
    }

    pub async fn create(&self, fields: Value) -> Result<Value, ClientError> {
        self.client
            .request(Method::POST, &format!("/{}", self.collection), Some(fields))
            .await
    }

    pub async fn update(&self, id: i64, fields: Value) -> Result<Value, ClientError> {
        self.client
            .request(
                Method::PUT,
                &format!("/{}/{}", self.collection, id),
                Some(fields),
            )
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, ClientError> {
        let value = self
            .client
            .request(Method::DELETE, &format!("/{}/{}", self.collection, id), None)
            .await?;
        Ok(value["success"].as_bool().unwrap_or(false))
    }
}

fn parse_session(value: Value) -> Result<AuthSession, ClientError> {
    serde_json::from_value(value).map_err(|_| ClientError::Api {
        status: 200,
        message: "malformed auth response".to_string(),
    })
}
