//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{
    AuthApi, ChallengesApi, EndorsementsApi, ExchangeOffersApi, MindContentApi, UsersApi,
};
use crate::error::{ApiError, ApiResult};
use crate::request::{PreparedRequest, RequestOptions};
use crate::session::Session;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fallback error message for status codes with no canonical reason text
const GENERIC_ERROR_MESSAGE: &str = "Network response was not ok";

/// Skillswap API client
///
/// Wraps `reqwest` with the request pipeline every facade goes through:
/// materialize the request (URL, headers, Bearer overlay, body), dispatch
/// it exactly once, and normalize the response into a decoded payload or a
/// structured [`ApiError::Status`]. The session token lives in an injected
/// [`Session`] handle, so clones of the client and external bootstrap code
/// all see the same credential.
#[derive(Clone)]
pub struct SkillswapClient {
    inner: Client,
    config: Arc<ClientConfig>,
    session: Session,
}

impl SkillswapClient {
    /// Create a new client with default configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration and a fresh session
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        Self::with_session(config, Session::new())
    }

    /// Create a new client sharing an existing session handle
    pub fn with_session(config: ClientConfig, session: Session) -> ApiResult<Self> {
        config.validate()?;

        let inner = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            session,
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL (origin, without the `/api` prefix)
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the session handle backing this client
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replace the current session token (`None` clears it)
    pub fn set_auth_token(&self, token: Option<String>) {
        self.session.set_token(token);
    }

    /// The current session token, if any
    #[must_use]
    pub fn auth_token(&self) -> Option<String> {
        self.session.token()
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access session lifecycle endpoints
    #[must_use]
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Access exchange offer endpoints
    #[must_use]
    pub fn exchange_offers(&self) -> ExchangeOffersApi {
        ExchangeOffersApi::new(self.clone())
    }

    /// Access practice challenge endpoints
    #[must_use]
    pub fn challenges(&self) -> ChallengesApi {
        ChallengesApi::new(self.clone())
    }

    /// Access mind content endpoints
    #[must_use]
    pub fn mind_content(&self) -> MindContentApi {
        MindContentApi::new(self.clone())
    }

    /// Access endorsement endpoints
    #[must_use]
    pub fn endorsements(&self) -> EndorsementsApi {
        EndorsementsApi::new(self.clone())
    }

    /// Access user profile endpoints
    #[must_use]
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform an unauthenticated GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.call(path, RequestOptions::get()).await
    }

    /// Perform an unauthenticated POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.call(
            path,
            RequestOptions::new(reqwest::Method::POST).with_body(body)?,
        )
        .await
    }

    /// Perform an authenticated GET request
    pub async fn get_auth<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.call(path, RequestOptions::get().authenticated()).await
    }

    /// Perform an authenticated POST request with a JSON body
    pub async fn post_auth<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.call(
            path,
            RequestOptions::new(reqwest::Method::POST)
                .with_body(body)?
                .authenticated(),
        )
        .await
    }

    /// Perform an authenticated PATCH request with a JSON body
    pub async fn patch_auth<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.call(
            path,
            RequestOptions::new(reqwest::Method::PATCH)
                .with_body(body)?
                .authenticated(),
        )
        .await
    }

    /// Perform an authenticated PUT request with a JSON body
    pub async fn put_auth<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.call(
            path,
            RequestOptions::new(reqwest::Method::PUT)
                .with_body(body)?
                .authenticated(),
        )
        .await
    }

    /// Perform an authenticated DELETE request (no body)
    pub async fn delete_auth<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.call(
            path,
            RequestOptions::new(reqwest::Method::DELETE).authenticated(),
        )
        .await
    }

    // -------------------------------------------------------------------------
    // Request pipeline: prepare -> dispatch -> normalize
    // -------------------------------------------------------------------------

    /// Execute a call end to end
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let prepared = self.prepare(endpoint, &options)?;
        debug!(
            method = %prepared.method,
            url = %prepared.url,
            authorized = prepared.is_authorized(),
            "Dispatching request"
        );
        let response = self.dispatch(&prepared).await?;
        let status = response.status().as_u16();
        let result = Self::normalize(response).await;
        debug!(url = %prepared.url, status, ok = result.is_ok(), "Request completed");
        result
    }

    /// Materialize a request from a descriptor and the current session token
    ///
    /// Deterministic given the descriptor and the token value at call time.
    /// Header merge order: `Content-Type: application/json`, then caller
    /// headers (caller wins on collision), then the `Authorization: Bearer`
    /// overlay when the descriptor is authenticated and a token is present.
    /// A missing token on an authenticated descriptor is not an error: the
    /// header is omitted, a warning is logged, and the backend decides.
    pub fn prepare(&self, endpoint: &str, options: &RequestOptions) -> ApiResult<PreparedRequest> {
        let url = format!(
            "{}/{}",
            self.config.api_url(),
            endpoint.trim_start_matches('/')
        );

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ApiError::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| ApiError::InvalidHeader(name.to_string()))?;
            headers.insert(name, value);
        }

        if options.authenticated {
            match self.session.token() {
                Some(token) => {
                    let value = HeaderValue::from_str(&format!("Bearer {token}"))
                        .map_err(|_| ApiError::InvalidHeader(AUTHORIZATION.to_string()))?;
                    headers.insert(AUTHORIZATION, value);
                }
                None => {
                    warn!(
                        endpoint,
                        "Authenticated request without a session token; sending without credentials"
                    );
                }
            }
        }

        let body = match &options.body {
            Some(value) => Some(serde_json::to_string(value)?),
            None => None,
        };

        Ok(PreparedRequest {
            url,
            method: options.method.clone(),
            headers,
            body,
        })
    }

    /// Send a materialized request: exactly one network call, no retry
    async fn dispatch(&self, prepared: &PreparedRequest) -> ApiResult<Response> {
        let mut request = self
            .inner
            .request(prepared.method.clone(), &prepared.url)
            .headers(prepared.headers.clone());

        if let Some(ref body) = prepared.body {
            request = request.body(body.clone());
        }

        Ok(request.send().await?)
    }

    /// Classify a raw response into a decoded payload or a structured error
    ///
    /// Non-2xx: the body is parsed as JSON when possible and the error
    /// carries status, best-effort message, and the raw body. 2xx with a
    /// JSON content type: decode into `T`; a decode failure propagates as
    /// [`ApiError::Json`] rather than being folded into `Status`. 2xx
    /// without JSON content (204, empty body): decode `T` from JSON `null`,
    /// which `()` and `Option<_>` callers accept as the no-content result.
    async fn normalize<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();

        if !status.is_success() {
            let fallback = status
                .canonical_reason()
                .map_or_else(|| GENERIC_ERROR_MESSAGE.to_string(), str::to_string);
            let text = response.text().await.unwrap_or_default();
            let body: Option<Value> = serde_json::from_str(&text).ok();
            let message = body
                .as_ref()
                .and_then(|b| b.get("message"))
                .and_then(Value::as_str)
                .map_or(fallback, str::to_string);
            return Err(ApiError::status(status.as_u16(), message, body));
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));

        if is_json {
            let text = response.text().await?;
            Ok(serde_json::from_str(&text)?)
        } else {
            Ok(serde_json::from_value(Value::Null)?)
        }
    }
}
