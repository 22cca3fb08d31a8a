use std::path::Path;

use serde::{Deserialize, Serialize};

use super::command::LaunchCommand;
use super::launcher::LaunchPolicy;
use crate::error::{UtilsError, UtilsResult};

pub const LAUNCHER_CONFIG_FILENAME: &str = "launcher.json";

/// Optional JSON overrides for the launcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<LaunchPolicy>,
    /// Replaces the platform's fallback chain when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<LaunchCommand>>,
}

pub fn load_launcher_config(path: &Path) -> UtilsResult<LauncherConfig> {
    let data = std::fs::read_to_string(path).map_err(|error| {
        UtilsError::Config(format!(
            "failed to read launcher config {}: {error}",
            path.display()
        ))
    })?;
    serde_json::from_str(&data).map_err(|error| {
        UtilsError::Config(format!(
            "failed to parse launcher config {}: {error}",
            path.display()
        ))
    })
}

pub fn write_launcher_config(path: &Path, config: &LauncherConfig) -> UtilsResult<()> {
    let data = serde_json::to_string_pretty(config).map_err(|error| {
        UtilsError::Config(format!(
            "failed to serialize launcher config {}: {error}",
            path.display()
        ))
    })?;
    std::fs::write(path, data).map_err(|error| {
        UtilsError::Config(format!(
            "failed to write launcher config {}: {error}",
            path.display()
        ))
    })?;
    Ok(())
}
