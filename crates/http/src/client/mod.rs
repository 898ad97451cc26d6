//! FancySpaces HTTP client
//!
//! [`FancySpacesClient`] owns the HTTP connection pool and a handle to the
//! caller's [`SessionStore`]. Every remote operation is an `async fn` on the
//! client, grouped by resource in the submodules.

pub mod api_keys;
pub mod blogs;
pub mod dashboards;
pub mod error;
pub mod events;
pub mod issues;
pub mod kv;
pub mod maven;
pub mod metrics;
pub mod secrets;
pub mod spaces;
pub mod templates;
pub mod tokens;
pub mod users;
pub mod versions;

pub use error::ClientError;
use fancyspaces_core::{ClientConfig, NotificationQueue, SessionStore};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Remote service an operation talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Service {
    Core,
    Idp,
    Analytics,
    Storage,
}

/// Credentials attached to a request
#[derive(Debug, Clone)]
pub(crate) enum Auth {
    /// No `Authorization` header
    None,
    /// `Bearer <token>` from the session, if it holds one
    Session,
    /// `Bearer <token>` with an explicit token
    Bearer(String),
    /// The configured API key, sent verbatim
    ApiKey,
    /// `Basic base64(user:password)`
    Basic { username: String, password: String },
}

/// Status codes an operation accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expect {
    /// Any 2xx
    Success,
    /// Exactly this code
    Status(StatusCode),
}

impl Expect {
    pub(crate) const OK: Self = Self::Status(StatusCode::OK);
    pub(crate) const CREATED: Self = Self::Status(StatusCode::CREATED);
    pub(crate) const NO_CONTENT: Self = Self::Status(StatusCode::NO_CONTENT);

    fn accepts(self, status: StatusCode) -> bool {
        match self {
            Self::Success => status.is_success(),
            Self::Status(expected) => status == expected,
        }
    }
}

/// Percent-encode one path segment
pub(crate) fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}

/// FancySpaces API client
#[derive(Clone)]
pub struct FancySpacesClient {
    client: Client,
    config: Arc<ClientConfig>,
    session: Arc<SessionStore>,
    notifications: Option<NotificationQueue>,
}

impl std::fmt::Debug for FancySpacesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FancySpacesClient")
            .field("core_api_url", &self.config.core_api_url)
            .field("idp_api_url", &self.config.idp_api_url)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl FancySpacesClient {
    /// Create a client with the given configuration and session
    pub fn new(config: ClientConfig, session: Arc<SessionStore>) -> Result<Self, ClientError> {
        Self::builder().config(config).session(session).build()
    }

    /// Create a new client builder
    pub fn builder() -> FancySpacesClientBuilder {
        FancySpacesClientBuilder::default()
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Session shared with the caller
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Notification queue failures are reported to, if any
    pub fn notifications(&self) -> Option<&NotificationQueue> {
        self.notifications.as_ref()
    }

    /// Whether the session holds a token that is unexpired and accepted by
    /// the identity provider. Clears the session otherwise.
    pub async fn is_authenticated(&self) -> bool {
        self.session.is_authenticated(self).await
    }

    /// Fail with [`ClientError::NotLoggedIn`] unless the session is
    /// authenticated. No request other than token validation is sent.
    pub(crate) async fn require_auth(&self) -> Result<(), ClientError> {
        if self.is_authenticated().await {
            Ok(())
        } else {
            debug!("Rejecting privileged operation without a valid session");
            Err(self.report(ClientError::NotLoggedIn))
        }
    }

    fn base_url(&self, service: Service) -> &str {
        match service {
            Service::Core => &self.config.core_api_url,
            Service::Idp => &self.config.idp_api_url,
            Service::Analytics => &self.config.analytics_api_url,
            Service::Storage => &self.config.storage_api_url,
        }
    }

    /// Create a request builder with authentication
    pub(crate) fn request(
        &self,
        service: Service,
        method: Method,
        path: &str,
        auth: Auth,
    ) -> RequestBuilder {
        let url = format!("{}{}", self.base_url(service), path);
        debug!(%method, %url, "Sending request");
        let request = self.client.request(method, url);

        match auth {
            Auth::None => request,
            Auth::Session => match self.session.token() {
                Some(token) => request.bearer_auth(token),
                None => request,
            },
            Auth::Bearer(token) => request.bearer_auth(token),
            Auth::ApiKey => match &self.config.api_key {
                Some(key) => request.header(header::AUTHORIZATION, key),
                None => request,
            },
            Auth::Basic { username, password } => request.basic_auth(username, Some(password)),
        }
    }

    /// Send a request and check its status
    pub(crate) async fn send(
        &self,
        request: RequestBuilder,
        expect: Expect,
        context: &str,
    ) -> Result<Response, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| self.report(ClientError::Request(e)))?;
        let status = response.status();

        if expect.accepts(status) {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(self.report(ClientError::Status {
                context: context.to_string(),
                status,
                body,
            }))
        }
    }

    /// Execute a request and decode the JSON body
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        expect: Expect,
        context: &str,
    ) -> Result<T, ClientError> {
        let body = self.execute_text(request, expect, context).await?;
        self.decode(&body, context)
    }

    /// Execute a request whose JSON body is a list. Anything other than an
    /// array decodes to an empty list.
    pub(crate) async fn execute_list_or_empty<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        expect: Expect,
        context: &str,
    ) -> Result<Vec<T>, ClientError> {
        let body = self.execute_text(request, expect, context).await?;
        let value: serde_json::Value = self.decode(&body, context)?;
        if value.is_array() {
            serde_json::from_value(value).map_err(|source| {
                self.report(ClientError::Decode {
                    context: context.to_string(),
                    source,
                })
            })
        } else {
            Ok(Vec::new())
        }
    }

    /// Execute a request and return the body as text
    pub(crate) async fn execute_text(
        &self,
        request: RequestBuilder,
        expect: Expect,
        context: &str,
    ) -> Result<String, ClientError> {
        let response = self.send(request, expect, context).await?;
        response
            .text()
            .await
            .map_err(|e| self.report(ClientError::Request(e)))
    }

    /// Execute a request and ignore the body
    pub(crate) async fn execute_empty(
        &self,
        request: RequestBuilder,
        expect: Expect,
        context: &str,
    ) -> Result<(), ClientError> {
        self.send(request, expect, context).await.map(drop)
    }

    fn decode<T: DeserializeOwned>(&self, body: &str, context: &str) -> Result<T, ClientError> {
        serde_json::from_str(body).map_err(|source| {
            self.report(ClientError::Decode {
                context: context.to_string(),
                source,
            })
        })
    }

    /// Log a failure and queue a notification for it
    pub(crate) fn report(&self, error: ClientError) -> ClientError {
        warn!(error = %error, "Request failed");
        if let Some(notifications) = &self.notifications {
            notifications.error(error.to_string());
        }
        error
    }
}

/// Builder for FancySpacesClient
#[derive(Default)]
pub struct FancySpacesClientBuilder {
    config: Option<ClientConfig>,
    session: Option<Arc<SessionStore>>,
    notifications: Option<NotificationQueue>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl FancySpacesClientBuilder {
    /// Set the service endpoints and transport settings
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the session the client reads tokens from and keeps in sync
    pub fn session(mut self, session: Arc<SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    /// Report failed requests to `queue`
    pub fn notifications(mut self, queue: NotificationQueue) -> Self {
        self.notifications = Some(queue);
        self
    }

    /// Set the API key, overriding the configured one
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout, overriding the configured one
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<FancySpacesClient, ClientError> {
        let mut config = self.config.unwrap_or_default();
        if let Some(api_key) = self.api_key {
            config.api_key = Some(api_key);
        }
        config
            .validate()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        let session = self
            .session
            .ok_or_else(|| ClientError::Configuration("session is required".into()))?;

        // Ensure base URLs end without a trailing slash
        for url in [
            &mut config.core_api_url,
            &mut config.idp_api_url,
            &mut config.analytics_api_url,
            &mut config.storage_api_url,
        ] {
            let trimmed = url.trim_end_matches('/').len();
            url.truncate(trimmed);
        }

        let timeout = self
            .timeout
            .unwrap_or_else(|| Duration::from_secs(config.timeout_secs));

        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(FancySpacesClient {
            client,
            config: Arc::new(config),
            session,
            notifications: self.notifications,
        })
    }
}
