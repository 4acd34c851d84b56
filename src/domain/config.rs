//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file
//! (`config.yaml`). Holds the workspace agent endpoint and system paths.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Main application configuration structure.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub system: SystemConfig,
}

/// Where the workspace agent that owns the git service lives.
#[derive(Debug, Deserialize, Clone)]
pub struct WorkspaceConfig {
    #[serde(default = "default_agent_url")]
    pub agent_url: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            agent_url: default_agent_url(),
        }
    }
}

fn default_agent_url() -> String {
    "http://127.0.0.1:8000/api".to_string()
}

/// System-level settings.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct SystemConfig {
    /// Directory for session logs. Defaults to `data`.
    #[serde(default)]
    pub data_dir: Option<String>,
}

impl AppConfig {
    /// Loads configuration from `path` when given, otherwise from
    /// `config.yaml` in the working directory, then the user config dir.
    /// Missing files fall back to defaults; a present but malformed file
    /// is an error.
    pub fn load(path: Option<&str>) -> Result<AppConfig> {
        let candidates: Vec<PathBuf> = match path {
            Some(p) => vec![PathBuf::from(p)],
            None => {
                let mut found = vec![PathBuf::from("config.yaml")];
                if let Some(dir) = dirs::config_dir() {
                    found.push(dir.join("stagehand").join("config.yaml"));
                }
                found
            }
        };

        for candidate in &candidates {
            if candidate.exists() {
                let content = fs::read_to_string(candidate)
                    .with_context(|| format!("Failed to read {}", candidate.display()))?;
                return serde_yaml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", candidate.display()));
            }
        }

        // An explicitly named file must exist; the search locations need not.
        if let Some(p) = path {
            anyhow::bail!("Config file {p} not found");
        }
        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_parses_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "workspace:\n  agent_url: http://localhost:9000/api\nsystem:\n  data_dir: /tmp/stagehand"
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.workspace.agent_url, "http://localhost:9000/api");
        assert_eq!(config.system.data_dir.as_deref(), Some("/tmp/stagehand"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(AppConfig::load(Some("/nonexistent/config.yaml")).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.workspace.agent_url, "http://127.0.0.1:8000/api");
        assert!(config.system.data_dir.is_none());
    }
}
