//! Request and response payloads of the platform APIs
//!
//! Timestamps are decoded into `chrono::DateTime<Utc>` as part of
//! deserialization, so every accessor returns fully typed values.

pub mod analytics;
pub mod auth;
pub mod blogs;
pub mod issues;
pub mod maven;
pub mod secrets;
pub mod spaces;
pub mod storage;
pub mod versions;

pub use analytics::{
    Chart, Dashboard, DashboardRequest, Event, EventQueryResult, LogRecord, LogsQueryResult,
    Metric, MetricRecord, RecordInterval, RecordQueryResult, Template, TemplateDashboard,
    TemplateMetric,
};
pub use auth::{ApiKey, UserProfile};
pub use blogs::BlogArticle;
pub use issues::{
    ExternalSource, Issue, IssueComment, IssueDraft, IssuePriority, IssueStatus, IssueType,
};
pub use maven::{MavenArtifact, MavenArtifactFile, MavenArtifactVersion, MavenRepository};
pub use secrets::SpaceSecret;
pub use spaces::{DownloadCount, Space, SpaceLink, SpaceMember};
pub use storage::{KvCommand, KvValue, SpaceDatabase, SpaceDatabaseCollection};
pub use versions::{LATEST_VERSION, SpaceVersion, SpaceVersionFile};
