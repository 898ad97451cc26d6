//! Key/value engine of the storage service
//!
//! Every operation is a `POST` to the numbered command endpoint of a
//! collection.

use super::{Auth, ClientError, Expect, FancySpacesClient, Service, segment};
use crate::types::storage::{
    CountResponse, ExistsResponse, KeyRequest, KeysRequest, KeysResponse, KvCommand,
    SizeResponse, ValueResponse, ValuesResponse,
};
use reqwest::{Method, RequestBuilder};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

impl FancySpacesClient {
    fn kv_request(&self, database: &str, collection: &str, command: KvCommand) -> RequestBuilder {
        self.request(
            Service::Storage,
            Method::POST,
            &format!(
                "/databases/{}/collections/{}/kv/{}",
                segment(database),
                segment(collection),
                command.id()
            ),
            Auth::ApiKey,
        )
    }

    pub async fn kv_delete(
        &self,
        database: &str,
        collection: &str,
        key: &str,
    ) -> Result<(), ClientError> {
        let req = self
            .kv_request(database, collection, KvCommand::Delete)
            .json(&KeyRequest { key });
        self.execute_empty(req, Expect::Success, "delete key").await
    }

    pub async fn kv_delete_multiple(
        &self,
        database: &str,
        collection: &str,
        keys: &[String],
    ) -> Result<(), ClientError> {
        let req = self
            .kv_request(database, collection, KvCommand::DeleteMultiple)
            .json(&KeysRequest { keys });
        self.execute_empty(req, Expect::Success, "delete multiple keys")
            .await
    }

    pub async fn kv_delete_all(&self, database: &str, collection: &str) -> Result<(), ClientError> {
        let req = self.kv_request(database, collection, KvCommand::DeleteAll);
        self.execute_empty(req, Expect::Success, "delete all keys")
            .await
    }

    pub async fn kv_exists(
        &self,
        database: &str,
        collection: &str,
        key: &str,
    ) -> Result<bool, ClientError> {
        let req = self
            .kv_request(database, collection, KvCommand::Exists)
            .json(&KeyRequest { key });
        let resp: ExistsResponse = self
            .execute(req, Expect::Success, "check if key exists")
            .await?;
        Ok(resp.exists)
    }

    /// Value stored under `key`, `Null` if absent
    pub async fn kv_get(
        &self,
        database: &str,
        collection: &str,
        key: &str,
    ) -> Result<JsonValue, ClientError> {
        let req = self
            .kv_request(database, collection, KvCommand::Get)
            .json(&KeyRequest { key });
        let resp: ValueResponse = self.execute(req, Expect::Success, "get key").await?;
        Ok(resp.value)
    }

    pub async fn kv_get_multiple(
        &self,
        database: &str,
        collection: &str,
        keys: &[String],
    ) -> Result<HashMap<String, JsonValue>, ClientError> {
        let req = self
            .kv_request(database, collection, KvCommand::GetMultiple)
            .json(&KeysRequest { keys });
        let resp: ValuesResponse = self
            .execute(req, Expect::Success, "get multiple keys")
            .await?;
        Ok(resp.values)
    }

    pub async fn kv_get_all(
        &self,
        database: &str,
        collection: &str,
    ) -> Result<HashMap<String, JsonValue>, ClientError> {
        let req = self.kv_request(database, collection, KvCommand::GetAll);
        let resp: ValuesResponse = self.execute(req, Expect::Success, "get all keys").await?;
        Ok(resp.values)
    }

    pub async fn kv_keys(&self, database: &str, collection: &str) -> Result<Vec<String>, ClientError> {
        let req = self.kv_request(database, collection, KvCommand::Keys);
        let resp: KeysResponse = self.execute(req, Expect::Success, "fetch kv keys").await?;
        Ok(resp.keys)
    }

    /// Number of entries in the collection
    pub async fn kv_count(&self, database: &str, collection: &str) -> Result<u64, ClientError> {
        let req = self.kv_request(database, collection, KvCommand::Count);
        let resp: CountResponse = self.execute(req, Expect::Success, "fetch kv count").await?;
        Ok(resp.count)
    }

    /// Stored size of the collection in bytes
    pub async fn kv_size(&self, database: &str, collection: &str) -> Result<u64, ClientError> {
        let req = self.kv_request(database, collection, KvCommand::Size);
        let resp: SizeResponse = self.execute(req, Expect::Success, "fetch kv size").await?;
        Ok(resp.size)
    }
}
