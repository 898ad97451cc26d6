//! Analytics payloads: dashboards, events, logs, metrics and templates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// A chart on a dashboard or in a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub name: String,
    #[serde(default)]
    pub options: HashMap<String, JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub dashboard_id: String,
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub charts: Vec<Chart>,
}

/// Body of dashboard create and update requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub name: String,
    pub summary: String,
    pub public: bool,
    pub charts: Vec<Chart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Position in the query result, assigned by the client
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventQueryResult {
    /// Server-side query time
    #[serde(default)]
    pub time: f64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Position in the query result, assigned by the client
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub service: String,
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub message: String,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsQueryResult {
    #[serde(default)]
    pub time: f64,
    #[serde(default)]
    pub rows_count: u64,
    #[serde(default)]
    pub records: Vec<LogRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub project_id: String,
    #[serde(default)]
    pub metric_id: String,
    pub name: String,
    #[serde(default)]
    pub multi_sender: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_interval: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_extra_aggregation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_metric: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_interval: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub project_id: String,
    pub metric_id: String,
    #[serde(default)]
    pub label: String,
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordQueryResult {
    #[serde(default)]
    pub time: f64,
    #[serde(default)]
    pub rows_count: u64,
    #[serde(default)]
    pub records: Vec<MetricRecord>,
}

/// Bucket size for aggregated metric records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordInterval {
    Minute,
    Hour,
    Day,
}

impl RecordInterval {
    pub(crate) const fn path(self) -> &'static str {
        match self {
            Self::Minute => "per-minute",
            Self::Hour => "per-hour",
            Self::Day => "per-day",
        }
    }
}

/// Bundle of metrics and dashboards that can be applied to a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metrics: Vec<TemplateMetric>,
    #[serde(default)]
    pub dashboards: Vec<TemplateDashboard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMetric {
    pub name: String,
    #[serde(default)]
    pub multi_sender: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_interval: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_extra_aggregation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_metric: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_interval: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDashboard {
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub charts: Vec<Chart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ApplyTemplateRequest<'a> {
    pub project_id: &'a str,
}
