//! # CLI Selection
//!
//! Adapts command-line arguments to the selection-source contract: each
//! path argument becomes a selected resource under the project root, and
//! an empty argument list selects the project root itself.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::paths::ResourcePath;
use crate::domain::traits::SelectionSource;
use crate::domain::types::{Resource, ResourceKind};

pub struct CliSelection {
    root: ResourcePath,
    resources: Vec<Resource>,
}

impl CliSelection {
    /// `project_dir` is the project root on disk; `paths` are the
    /// user-supplied selections, absolute or relative to the root.
    pub fn new(project_dir: &Path, paths: &[String]) -> Result<Self> {
        let root = ResourcePath::parse(&project_dir.to_string_lossy());

        let mut resources = Vec::with_capacity(paths.len().max(1));
        for raw in paths {
            let full: PathBuf = if Path::new(raw).is_absolute() {
                PathBuf::from(raw)
            } else {
                project_dir.join(raw)
            };
            let metadata = full
                .metadata()
                .with_context(|| format!("Selected path {} does not exist", full.display()))?;
            let kind = if metadata.is_dir() {
                ResourceKind::Folder
            } else {
                ResourceKind::File
            };
            let location = ResourcePath::parse(&full.to_string_lossy());
            let name = location
                .last_segment()
                .unwrap_or_default()
                .to_string();
            resources.push(Resource {
                name,
                location,
                kind,
            });
        }

        // Bare invocation: the whole project is the selection.
        if resources.is_empty() {
            resources.push(Resource {
                name: root.last_segment().unwrap_or_default().to_string(),
                location: root.clone(),
                kind: ResourceKind::Folder,
            });
        }

        Ok(Self { root, resources })
    }
}

impl SelectionSource for CliSelection {
    fn selected_resources(&self) -> Vec<Resource> {
        self.resources.clone()
    }

    fn project_root(&self) -> ResourcePath {
        self.root.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_paths_resolve_relative_to_project_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("readme.md"), "hello").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();

        let selection = CliSelection::new(
            dir.path(),
            &["readme.md".to_string(), "src".to_string()],
        )
        .unwrap();

        let resources = selection.selected_resources();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].name, "readme.md");
        assert_eq!(resources[0].kind, ResourceKind::File);
        assert_eq!(resources[1].name, "src");
        assert_eq!(resources[1].kind, ResourceKind::Folder);

        let root = selection.project_root();
        for resource in &resources {
            assert!(root.is_prefix_of(&resource.location));
        }
    }

    #[test]
    fn test_empty_arguments_select_the_project_root() {
        let dir = TempDir::new().unwrap();
        let selection = CliSelection::new(dir.path(), &[]).unwrap();

        let resources = selection.selected_resources();
        assert_eq!(resources.len(), 1);
        assert!(resources[0].is_container());
        assert_eq!(resources[0].location, selection.project_root());
    }

    #[test]
    fn test_missing_path_is_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(CliSelection::new(dir.path(), &["ghost.txt".to_string()]).is_err());
    }
}
