//! Space secrets, authorized by API key

use super::{Auth, ClientError, Expect, FancySpacesClient, Service, segment};
use crate::types::secrets::{CreateSecretRequest, SpaceSecret, UpdateSecretRequest};
use reqwest::{Method, header};

fn secrets_path(space_id: &str) -> String {
    format!("/spaces/{}/secrets", segment(space_id))
}

fn secret_path(space_id: &str, key: &str) -> String {
    format!("{}/{}", secrets_path(space_id), segment(key))
}

impl FancySpacesClient {
    /// Secret metadata, without the value
    pub async fn get_secret(&self, space_id: &str, key: &str) -> Result<SpaceSecret, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &secret_path(space_id, key),
            Auth::ApiKey,
        );
        self.execute(req, Expect::Success, "fetch secret").await
    }

    /// Plain text value of a secret
    pub async fn get_secret_decrypted(
        &self,
        space_id: &str,
        key: &str,
    ) -> Result<String, ClientError> {
        let req = self
            .request(
                Service::Core,
                Method::GET,
                &format!("{}/decrypted", secret_path(space_id, key)),
                Auth::ApiKey,
            )
            .header(header::ACCEPT, "text/plain");
        self.execute_text(req, Expect::Success, "fetch decrypted secret")
            .await
    }

    pub async fn get_all_secrets(&self, space_id: &str) -> Result<Vec<SpaceSecret>, ClientError> {
        let req = self.request(
            Service::Core,
            Method::GET,
            &secrets_path(space_id),
            Auth::ApiKey,
        );
        self.execute(req, Expect::Success, "fetch secrets").await
    }

    pub async fn create_secret(
        &self,
        space_id: &str,
        key: &str,
        value: &str,
        description: &str,
    ) -> Result<(), ClientError> {
        let req = self
            .request(
                Service::Core,
                Method::POST,
                &secrets_path(space_id),
                Auth::ApiKey,
            )
            .json(&CreateSecretRequest {
                key: key.to_string(),
                value: value.to_string(),
                description: description.to_string(),
            });
        self.execute_empty(req, Expect::Success, "create secret")
            .await
    }

    pub async fn update_secret(
        &self,
        space_id: &str,
        key: &str,
        value: &str,
        description: &str,
    ) -> Result<(), ClientError> {
        let req = self
            .request(
                Service::Core,
                Method::PUT,
                &secret_path(space_id, key),
                Auth::ApiKey,
            )
            .json(&UpdateSecretRequest {
                value: value.to_string(),
                description: description.to_string(),
            });
        self.execute_empty(req, Expect::Success, "update secret")
            .await
    }

    pub async fn delete_secret(&self, space_id: &str, key: &str) -> Result<(), ClientError> {
        let req = self.request(
            Service::Core,
            Method::DELETE,
            &secret_path(space_id, key),
            Auth::ApiKey,
        );
        self.execute_empty(req, Expect::Success, "delete secret")
            .await
    }
}
