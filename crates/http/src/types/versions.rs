//! Releases of a space

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version id that resolves to the newest release
pub const LATEST_VERSION: &str = "latest";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceVersion {
    pub space_id: String,
    pub id: String,
    pub name: String,
    pub platform: String,
    pub channel: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub changelog: String,
    #[serde(default)]
    pub supported_platform_versions: Vec<String>,
    #[serde(default)]
    pub files: Vec<SpaceVersionFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceVersionFile {
    pub name: String,
    pub url: String,
    pub size: u64,
}

/// Display name of a release platform
pub fn platform_display_name(name: &str) -> &str {
    match name.to_ascii_lowercase().as_str() {
        "bukkit" => "Bukkit",
        "spigot" => "Spigot",
        "paper" => "Paper",
        "purpur" => "Purpur",
        "folia" => "Folia",
        "bungeecord" => "BungeeCord",
        "waterfall" => "Waterfall",
        "velocity" => "Velocity",
        "fabric" => "Fabric",
        "forge" => "Forge",
        "quilt" => "Quilt",
        "liteloader" => "LiteLoader",
        "hytale_plugin" => "Hytale Plugin",
        "executable" => "Executable",
        _ => name,
    }
}
