//! Token lifecycle against the identity provider

use super::{Auth, ClientError, Expect, FancySpacesClient, Service};
use async_trait::async_trait;
use fancyspaces_core::{CoreError, CoreResult, TokenValidator, UserProfile};
use reqwest::{Method, header};
use tracing::{debug, info};

impl FancySpacesClient {
    /// Exchange email and password for a new token
    pub async fn create_token(&self, email: &str, password: &str) -> Result<String, ClientError> {
        let req = self
            .request(
                Service::Idp,
                Method::POST,
                "/tokens/create",
                Auth::Basic {
                    username: email.to_string(),
                    password: password.to_string(),
                },
            )
            .header(header::ACCEPT, "text/plain");
        let token = self
            .execute_text(req, Expect::CREATED, "create token")
            .await?;
        self.non_empty(token, "create token")
    }

    /// Ask the identity provider whether `token` is still valid. Any non-2xx
    /// answer means invalid; only transport failures are errors.
    pub async fn validate_token(&self, token: &str) -> Result<bool, ClientError> {
        let response = self
            .request(
                Service::Idp,
                Method::POST,
                "/tokens/validate",
                Auth::Bearer(token.to_string()),
            )
            .send()
            .await
            .map_err(|e| self.report(ClientError::Request(e)))?;

        let valid = response.status().is_success();
        debug!(status = %response.status(), valid, "Validated token");
        Ok(valid)
    }

    /// Trade `token` for a fresh one
    pub async fn refresh_token(&self, token: &str) -> Result<String, ClientError> {
        let req = self.request(
            Service::Idp,
            Method::POST,
            "/tokens/refresh",
            Auth::Bearer(token.to_string()),
        );
        let token = self.execute_text(req, Expect::OK, "refresh token").await?;
        self.non_empty(token, "refresh token")
    }

    /// Check the credentials, obtain a token and store both in the session
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, ClientError> {
        let user = self.validate_user(email, password).await?;
        let token = self.create_token(email, password).await?;

        self.session().set_token(token);
        self.session().set_user(user.clone());
        info!(user_id = %user.id, "Logged in");
        Ok(user)
    }

    /// Forget the user and token, in memory and in storage
    pub fn logout(&self) {
        self.session().clear_user();
        info!("Logged out");
    }

    /// Replace the session token with a refreshed one
    pub async fn refresh_session(&self) -> Result<(), ClientError> {
        let Some(current) = self.session().token() else {
            return Err(self.report(ClientError::NotLoggedIn));
        };

        let token = self.refresh_token(&current).await?;
        self.session().set_token(token);
        Ok(())
    }

    fn non_empty(&self, token: String, context: &str) -> Result<String, ClientError> {
        if token.trim().is_empty() {
            Err(self.report(ClientError::EmptyBody(context.to_string())))
        } else {
            Ok(token)
        }
    }
}

#[async_trait]
impl TokenValidator for FancySpacesClient {
    async fn validate_token(&self, token: &str) -> CoreResult<bool> {
        FancySpacesClient::validate_token(self, token)
            .await
            .map_err(|e| CoreError::validation_error(e.to_string()))
    }
}
