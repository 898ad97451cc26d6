//! Spaces and their settings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A project hosted on the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub links: Vec<SpaceLink>,
    #[serde(default)]
    pub icon_url: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub creator: String,
    #[serde(default)]
    pub members: Vec<SpaceMember>,
    #[serde(default)]
    pub issue_settings: FeatureSettings,
    #[serde(default)]
    pub release_settings: FeatureSettings,
    #[serde(default)]
    pub maven_repository_settings: FeatureSettings,
    #[serde(default)]
    pub storage_settings: FeatureSettings,
    #[serde(default)]
    pub analytics_settings: AnalyticsSettings,
    #[serde(default)]
    pub secrets_settings: FeatureSettings,
}

/// On/off switch for a space feature
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSettings {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSettings {
    pub enabled: bool,
    #[serde(default)]
    pub require_write_key: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceMember {
    pub user_id: String,
    pub role: String,
}

/// Download counters of a space
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadCount {
    #[serde(default)]
    pub downloads: u64,
    /// Downloads per version id
    #[serde(default)]
    pub versions: HashMap<String, u64>,
}

/// Display name of a space category
pub fn category_display_name(name: &str) -> &str {
    match name.to_ascii_lowercase().as_str() {
        "minecraft_plugin" => "Minecraft Plugin",
        "minecraft_server" => "Minecraft Server",
        "minecraft_mod" => "Minecraft Mod",
        "hytale_plugin" => "Hytale Plugin",
        "web_app" => "Web App",
        "mobile_app" => "Mobile App",
        "other" => "Other",
        _ => name,
    }
}

/// Display name of a space link kind
pub fn link_display_name(name: &str) -> &str {
    match name.to_ascii_lowercase().as_str() {
        "source_code" => "Source Code",
        "documentation" => "Documentation",
        "wiki" => "Wiki",
        "discord" => "Discord",
        "website" => "Website",
        "issues" => "Issues",
        _ => name,
    }
}
