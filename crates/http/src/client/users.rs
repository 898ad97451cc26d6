//! Account management on the identity provider

use super::{Auth, ClientError, Expect, FancySpacesClient, Service, segment};
use crate::types::auth::{
    RegisterUserRequest, UpdateUserRequest, UserProfile, ValidateUserRequest,
};
use reqwest::Method;

impl FancySpacesClient {
    /// Create an email/password account
    pub async fn register_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        let req = self
            .request(Service::Idp, Method::POST, "/users/register", Auth::None)
            .json(&RegisterUserRequest {
                provider: "basic".to_string(),
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            });
        self.execute_empty(req, Expect::CREATED, "register user")
            .await
    }

    /// Check credentials and return the matching profile
    pub async fn validate_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, ClientError> {
        let req = self
            .request(Service::Idp, Method::POST, "/users/validate", Auth::None)
            .json(&ValidateUserRequest {
                user: email.to_string(),
                password: password.to_string(),
            });
        self.execute(req, Expect::OK, "validate user").await
    }

    pub async fn update_user(
        &self,
        user_id: &str,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        self.require_auth().await?;

        let req = self
            .request(
                Service::Idp,
                Method::PUT,
                &format!("/users/{}", segment(user_id)),
                Auth::Session,
            )
            .json(&UpdateUserRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            });
        self.execute_empty(req, Expect::OK, "update user").await
    }

    /// Submit the emailed verification code. The code is sent as the raw body.
    pub async fn verify_user(&self, code: &str) -> Result<(), ClientError> {
        self.require_auth().await?;

        let req = self
            .request(
                Service::Idp,
                Method::POST,
                "/users/verify/check",
                Auth::Session,
            )
            .body(code.to_string());
        self.execute_empty(req, Expect::OK, "verify user").await
    }

    pub async fn resend_verification_code(&self) -> Result<(), ClientError> {
        self.require_auth().await?;

        let req = self.request(
            Service::Idp,
            Method::POST,
            "/users/verify/resend",
            Auth::Session,
        );
        self.execute_empty(req, Expect::OK, "resend verification code")
            .await
    }
}
