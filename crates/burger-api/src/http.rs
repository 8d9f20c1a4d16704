//! # HTTP Client
//!
//! [`BurgerApi`] over the public REST API using `reqwest`.
//!
//! ## Response Envelope
//! Every endpoint answers with a JSON object carrying `success`:
//! ```text
//! { "success": true,  "data": [...] }                → Ok(body)
//! { "success": false, "message": "jwt expired" }     → Err(Rejected("jwt expired"))
//! 500 + non-JSON body                                → Err(Rejected("Request failed with status 500 ..."))
//! ```
//!
//! ## Authorized Requests
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Authorized Request Flow                              │
//! │                                                                         │
//! │  access token stored? ──no──► POST /auth/token (refresh) ──► save      │
//! │          │ yes                                                 │        │
//! │          ▼                                                     ▼        │
//! │  send with `authorization: <access token>`  ◄──────────────────┘        │
//! │          │                                                              │
//! │          ├── ok ─────────────────────────────────────────► Ok(body)     │
//! │          │                                                              │
//! │          └── "jwt expired" ──► refresh + save ──► send once more        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use url::Url;

use burger_core::{
    AuthSession, CreatedOrder, FeedSnapshot, Ingredient, LoginData, Order, RegisterData,
    ResetPasswordData, User, UserUpdate,
};

use crate::client::BurgerApi;
use crate::error::{ApiError, ApiResult};
use crate::session::{SessionStorage, Tokens};

/// Default request timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// REST implementation of [`BurgerApi`].
#[derive(Clone)]
pub struct HttpBurgerApi {
    client: reqwest::Client,
    base_url: Url,
    session: Arc<dyn SessionStorage>,
}

impl std::fmt::Debug for HttpBurgerApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBurgerApi")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpBurgerApi {
    /// Creates a client for the API rooted at `base_url`
    /// (e.g. `https://norma.nomoreparties.space/api`).
    pub fn new(
        base_url: &str,
        timeout: Duration,
        session: Arc<dyn SessionStorage>,
    ) -> ApiResult<Self> {
        // Url::join drops the last segment unless the base ends with '/'.
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        debug!(base_url = %base_url, "HTTP client created");

        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    /// The token storage this client reads and refreshes.
    pub fn session(&self) -> &Arc<dyn SessionStorage> {
        &self.session
    }

    // =========================================================================
    // Request Plumbing
    // =========================================================================

    fn request(&self, method: Method, path: &str, body: Option<&Value>) -> ApiResult<RequestBuilder> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;
        let builder = self.client.request(method, url);
        Ok(match body {
            Some(body) => builder.json(body),
            None => builder,
        })
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Value> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let body: Value = match serde_json::from_slice(&bytes) {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(e.into()),
            Err(_) => return Err(ApiError::Rejected(status_message(status))),
        };

        check_envelope(status, body)
    }

    /// Sends an unauthenticated request.
    async fn call(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<Value> {
        debug!(%method, path, "API request");
        self.send(self.request(method, path, body.as_ref())?).await
    }

    /// Sends a request with the stored access token, refreshing it when
    /// missing or expired.
    async fn call_authorized(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ApiResult<Value> {
        debug!(%method, path, "Authorized API request");

        let access_token = match self.session.access_token() {
            Some(token) => token,
            None => self.refresh_tokens().await?.access_token,
        };

        let first = self
            .request(method.clone(), path, body.as_ref())?
            .header(AUTHORIZATION, access_token);

        match self.send(first).await {
            Err(e) if e.is_token_expired() => {
                warn!(path, "Access token expired, refreshing");
                let tokens = self.refresh_tokens().await?;
                let retry = self
                    .request(method, path, body.as_ref())?
                    .header(AUTHORIZATION, tokens.access_token);
                self.send(retry).await
            }
            other => other,
        }
    }

    /// Exchanges the stored refresh token for a new token pair and saves it.
    ///
    /// ## Errors
    /// [`ApiError::Unauthorized`] if no refresh token is stored.
    pub async fn refresh_tokens(&self) -> ApiResult<Tokens> {
        let refresh_token = self.session.refresh_token().ok_or(ApiError::Unauthorized)?;

        let body = self
            .call(Method::POST, "auth/token", Some(json!({ "token": refresh_token })))
            .await?;
        let tokens: Tokens = decode(body)?;
        self.session.save(&tokens)?;

        info!("Session tokens refreshed");
        Ok(tokens)
    }
}

// =============================================================================
// Envelope Helpers
// =============================================================================

fn status_message(status: StatusCode) -> String {
    format!("Request failed with status {}", status)
}

fn check_envelope(status: StatusCode, body: Value) -> ApiResult<Value> {
    let success = body.get("success").and_then(Value::as_bool) == Some(true);
    if success && status.is_success() {
        return Ok(body);
    }

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| status_message(status));
    Err(ApiError::Rejected(message))
}

/// Decodes the whole envelope (extra fields such as `success` are ignored).
fn decode<T: DeserializeOwned>(body: Value) -> ApiResult<T> {
    Ok(serde_json::from_value(body)?)
}

/// Decodes a single field of the envelope.
fn field<T: DeserializeOwned>(mut body: Value, key: &str) -> ApiResult<T> {
    let value = body
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| ApiError::Decode(format!("missing `{}` in response", key)))?;
    decode(value)
}

#[async_trait]
impl BurgerApi for HttpBurgerApi {
    async fn get_ingredients(&self) -> ApiResult<Vec<Ingredient>> {
        field(self.call(Method::GET, "ingredients", None).await?, "data")
    }

    async fn get_feed(&self) -> ApiResult<FeedSnapshot> {
        decode(self.call(Method::GET, "orders/all", None).await?)
    }

    async fn get_orders(&self) -> ApiResult<Vec<Order>> {
        field(self.call_authorized(Method::GET, "orders", None).await?, "orders")
    }

    async fn create_order(&self, ingredient_ids: &[String]) -> ApiResult<CreatedOrder> {
        let body = json!({ "ingredients": ingredient_ids });
        decode(self.call_authorized(Method::POST, "orders", Some(body)).await?)
    }

    async fn get_order_by_number(&self, number: u64) -> ApiResult<Vec<Order>> {
        let path = format!("orders/{}", number);
        field(self.call(Method::GET, &path, None).await?, "orders")
    }

    async fn register(&self, data: &RegisterData) -> ApiResult<AuthSession> {
        let body = serde_json::to_value(data)?;
        decode(self.call(Method::POST, "auth/register", Some(body)).await?)
    }

    async fn login(&self, data: &LoginData) -> ApiResult<AuthSession> {
        let body = serde_json::to_value(data)?;
        decode(self.call(Method::POST, "auth/login", Some(body)).await?)
    }

    async fn logout(&self) -> ApiResult<()> {
        let refresh_token = self.session.refresh_token().ok_or(ApiError::Unauthorized)?;
        self.call(Method::POST, "auth/logout", Some(json!({ "token": refresh_token })))
            .await?;
        Ok(())
    }

    async fn get_user(&self) -> ApiResult<User> {
        field(self.call_authorized(Method::GET, "auth/user", None).await?, "user")
    }

    async fn update_user(&self, update: &UserUpdate) -> ApiResult<User> {
        let body = serde_json::to_value(update)?;
        field(
            self.call_authorized(Method::PATCH, "auth/user", Some(body)).await?,
            "user",
        )
    }

    async fn forgot_password(&self, email: &str) -> ApiResult<()> {
        self.call(Method::POST, "password-reset", Some(json!({ "email": email })))
            .await?;
        Ok(())
    }

    async fn reset_password(&self, data: &ResetPasswordData) -> ApiResult<()> {
        let body = serde_json::to_value(data)?;
        self.call(Method::POST, "password-reset/reset", Some(body))
            .await?;
        Ok(())
    }
}
