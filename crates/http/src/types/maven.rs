//! Maven repositories hosted by a space

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MavenRepository {
    pub space_id: String,
    pub name: String,
    pub public: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub internal_mirror: Option<MavenMirror>,
}

/// Repository of another space this one mirrors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MavenMirror {
    pub space_id: String,
    pub repository: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MavenArtifact {
    pub space_id: String,
    pub repository: String,
    pub group: String,
    pub id: String,
    #[serde(default)]
    pub versions: Vec<MavenArtifactVersion>,
}

impl MavenArtifact {
    /// `group:id` coordinate used to address the artifact
    pub fn coordinate(&self) -> String {
        format!("{}:{}", self.group, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MavenArtifactVersion {
    pub version: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub files: Vec<MavenArtifactFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MavenArtifactFile {
    pub name: String,
    pub size: u64,
    pub url: String,
}
