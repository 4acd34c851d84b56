//! # Workspace Git Client
//!
//! HTTP adapter for the workspace agent's git endpoints. Implements the
//! status and staging collaborator contracts; the agent owns the actual
//! git semantics and the wire format.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;

use crate::domain::paths::ResourcePath;
use crate::domain::traits::{StageExecutor, StatusSource};
use crate::domain::types::StatusSnapshot;

#[derive(Clone)]
pub struct WorkspaceGitClient {
    base_url: String,
    http: reqwest::Client,
}

/// Body of `POST /git/add`.
#[derive(Debug, Serialize)]
struct AddRequestBody {
    project: String,
    update_only: bool,
    paths: Vec<String>,
}

impl WorkspaceGitClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl StatusSource for WorkspaceGitClient {
    async fn status(&self, project: &ResourcePath) -> Result<StatusSnapshot> {
        let response = self
            .http
            .get(format!("{}/git/status", self.base_url))
            .query(&[("project", project.to_string())])
            .send()
            .await
            .context("status request did not reach the workspace agent")?
            .error_for_status()
            .context("workspace agent rejected the status request")?;

        response
            .json::<StatusSnapshot>()
            .await
            .context("status payload was not valid JSON")
    }
}

#[async_trait]
impl StageExecutor for WorkspaceGitClient {
    async fn stage(
        &self,
        project: &ResourcePath,
        update_only: bool,
        paths: &[ResourcePath],
    ) -> Result<()> {
        let body = AddRequestBody {
            project: project.to_string(),
            update_only,
            paths: paths.iter().map(ToString::to_string).collect(),
        };

        self.http
            .post(format!("{}/git/add", self.base_url))
            .json(&body)
            .send()
            .await
            .context("add request did not reach the workspace agent")?
            .error_for_status()
            .context("workspace agent rejected the add request")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_body_serializes_paths_as_strings() {
        let body = AddRequestBody {
            project: "proj".to_string(),
            update_only: true,
            paths: vec!["a/b.txt".to_string(), String::new()],
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "project": "proj",
                "update_only": true,
                "paths": ["a/b.txt", ""],
            })
        );
    }

    #[test]
    fn test_status_snapshot_deserializes_with_missing_sets() {
        let snapshot: StatusSnapshot =
            serde_json::from_str(r#"{"modified": ["readme.md"]}"#).unwrap();
        assert_eq!(snapshot.modified, ["readme.md"]);
        assert!(snapshot.untracked.is_empty());
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = WorkspaceGitClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url, "http://localhost:8000/api");
    }
}
