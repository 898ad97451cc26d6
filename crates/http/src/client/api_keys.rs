//! Personal API keys

use super::{Auth, ClientError, Expect, FancySpacesClient, Service, segment};
use crate::types::auth::{ApiKey, CreateApiKeyRequest};
use reqwest::Method;

impl FancySpacesClient {
    /// List the keys of the logged in user
    pub async fn get_api_keys(&self) -> Result<Vec<ApiKey>, ClientError> {
        self.require_auth().await?;

        let req = self.request(Service::Idp, Method::GET, "/api-keys", Auth::Session);
        self.execute(req, Expect::OK, "get api keys").await
    }

    /// Create a key and return its secret value. The value cannot be
    /// retrieved again.
    pub async fn create_api_key(&self, description: &str) -> Result<String, ClientError> {
        self.require_auth().await?;

        let req = self
            .request(Service::Idp, Method::POST, "/api-keys", Auth::Session)
            .json(&CreateApiKeyRequest {
                description: description.to_string(),
            });
        self.execute_text(req, Expect::OK, "create api key").await
    }

    pub async fn delete_api_key(&self, key_id: &str) -> Result<(), ClientError> {
        self.require_auth().await?;

        let req = self.request(
            Service::Idp,
            Method::DELETE,
            &format!("/api-keys/{}", segment(key_id)),
            Auth::Session,
        );
        self.execute_empty(req, Expect::NO_CONTENT, "delete api key")
            .await
    }
}
