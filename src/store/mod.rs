pub mod local;
pub mod wire;

use std::path::PathBuf;

use crate::model::{NodeKind, Project, Settings};

pub use local::LocalStore;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("project not found: {0}")]
    ProjectNotFound(String),
    #[error("{kind} not found: {id}", kind = .kind.label())]
    NodeNotFound { kind: NodeKind, id: String },
    #[error("project limit reached: at most {0} projects in the local store")]
    ProjectLimit(usize),
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed project data: {0}")]
    MalformedData(#[from] serde_json::Error),
    #[error("could not parse settings.toml: {0}")]
    SettingsParse(#[from] toml::de::Error),
    #[error("could not serialize settings.toml: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Summary row for the project list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    /// Completion percentage, 0–100
    pub progress: u8,
}

/// Persistence backend for projects and settings.
///
/// The TUI and CLI only talk to this trait; `LocalStore` is the local
/// (guest-mode) backend. A server-backed client would slot in behind
/// the same seam.
pub trait ProjectStore {
    fn list_projects(&self) -> Result<Vec<ProjectSummary>, StoreError>;
    fn load_project(&self, project_id: &str) -> Result<Project, StoreError>;
    fn save_project(&mut self, project: &Project) -> Result<(), StoreError>;
    fn create_project(&mut self, name: &str) -> Result<Project, StoreError>;
    fn delete_project(&mut self, project_id: &str) -> Result<(), StoreError>;
    /// Rename a single node. `kind` must match the stored node's kind.
    fn update_node_name(
        &mut self,
        project_id: &str,
        kind: NodeKind,
        node_id: &str,
        new_name: &str,
    ) -> Result<(), StoreError>;
    fn settings(&self) -> Result<Settings, StoreError>;
    fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError>;
    /// Delete all project data. Settings survive.
    fn reset_all_data(&mut self) -> Result<(), StoreError>;
}

/// Generate an ID in the web client's convention: `<prefix>_<ms-timestamp>`
pub fn new_id(prefix: &str) -> String {
    format!("{}_{}", prefix, chrono::Utc::now().timestamp_millis())
}

/// Generate a node ID that is unique within the project tree. Two nodes
/// created in the same millisecond would otherwise share a timestamp id.
pub fn new_node_id(project: &Project, prefix: &str) -> String {
    dedup_node_id(project, new_id(prefix))
}

fn dedup_node_id(project: &Project, mut id: String) -> String {
    while project.find_node(&id).is_some() {
        id.push('0');
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::sample_project;
    use pretty_assertions::assert_eq;

    #[test]
    fn node_ids_are_deduplicated_against_the_tree() {
        let project = sample_project();
        assert_eq!(dedup_node_id(&project, "task_10".to_string()), "task_100");
        assert_eq!(dedup_node_id(&project, "task_99".to_string()), "task_99");
    }

    #[test]
    fn new_node_id_carries_the_prefix() {
        let project = sample_project();
        let id = new_node_id(&project, "subtask");
        assert!(id.starts_with("subtask_"));
        assert!(project.find_node(&id).is_none());
    }
}
