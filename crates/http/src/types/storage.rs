//! Storage engine payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceDatabase {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceDatabaseCollection {
    pub database: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Engine key, see [`engine_display_name`]
    pub engine: String,
}

/// Display name of a storage engine key
pub fn engine_display_name(engine: &str) -> &str {
    match engine {
        "kv" => "Key-Value Store",
        "document" => "Document Store",
        "object" => "Object Store",
        "analytical" => "Analytical Store",
        "broker" => "Message Broker",
        "" => "Unknown",
        other => other,
    }
}

/// Typed key/value entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KvValue {
    pub key: String,
    pub value: JsonValue,
    #[serde(rename = "type")]
    pub value_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

/// Key/value commands exposed over HTTP, numbered as in the storage protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum KvCommand {
    Delete = 2020,
    DeleteMultiple = 2021,
    DeleteAll = 2022,
    Exists = 2030,
    Get = 2031,
    GetMultiple = 2032,
    GetAll = 2033,
    Keys = 2037,
    Count = 2038,
    Size = 2039,
}

impl KvCommand {
    pub const fn id(self) -> u16 {
        self as u16
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct KeyRequest<'a> {
    pub key: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct KeysRequest<'a> {
    pub keys: &'a [String],
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ValueResponse {
    #[serde(default)]
    pub value: JsonValue,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ValuesResponse {
    #[serde(default)]
    pub values: HashMap<String, JsonValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct KeysResponse {
    #[serde(default)]
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CountResponse {
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SizeResponse {
    pub size: u64,
}
