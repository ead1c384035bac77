use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::{NodeKind, Project, Settings};

use super::wire::{ProjectMap, ProjectRecord};
use super::{ProjectStore, ProjectSummary, StoreError, new_id};

const PROJECTS_FILE: &str = "projects.json";
const SETTINGS_FILE: &str = "settings.toml";

/// Local file-backed store: the guest-mode persistence backend.
///
/// All project data lives in one `projects.json` in the data directory,
/// settings in `settings.toml` beside it.
pub struct LocalStore {
    data_dir: PathBuf,
}

impl LocalStore {
    /// Open (and create if needed) the store at the given directory
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|e| StoreError::Write {
            path: data_dir.clone(),
            source: e,
        })?;
        Ok(LocalStore { data_dir })
    }

    /// Platform data directory (e.g. `~/.local/share/planbaum`)
    pub fn default_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "planbaum")
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn projects_path(&self) -> PathBuf {
        self.data_dir.join(PROJECTS_FILE)
    }

    fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    /// Read the project map. A missing file is an empty store; a corrupt
    /// file is an error, never silently replaced.
    fn read_records(&self) -> Result<ProjectMap, StoreError> {
        let path = self.projects_path();
        if !path.exists() {
            return Ok(ProjectMap::new());
        }
        let text = fs::read_to_string(&path).map_err(|e| StoreError::Read {
            path: path.clone(),
            source: e,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    fn write_records(&self, records: &ProjectMap) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(records)?;
        atomic_write(&self.data_dir, &self.projects_path(), text.as_bytes())
    }
}

/// Write via temp file + rename so a crash never leaves a half-written file
fn atomic_write(dir: &Path, path: &Path, content: &[u8]) -> Result<(), StoreError> {
    let wrap = |e: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(wrap)?;
    tmp.write_all(content).map_err(wrap)?;
    tmp.flush().map_err(wrap)?;
    tmp.persist(path).map_err(|e| wrap(e.error))?;
    Ok(())
}

impl ProjectStore for LocalStore {
    fn list_projects(&self) -> Result<Vec<ProjectSummary>, StoreError> {
        let records = self.read_records()?;
        Ok(records
            .into_values()
            .map(|record| {
                let project = Project::from(record);
                ProjectSummary {
                    progress: project.progress(),
                    id: project.id,
                    name: project.name,
                }
            })
            .collect())
    }

    fn load_project(&self, project_id: &str) -> Result<Project, StoreError> {
        let mut records = self.read_records()?;
        records
            .shift_remove(project_id)
            .map(Project::from)
            .ok_or_else(|| StoreError::ProjectNotFound(project_id.to_string()))
    }

    fn save_project(&mut self, project: &Project) -> Result<(), StoreError> {
        let mut records = self.read_records()?;
        records.insert(project.id.clone(), ProjectRecord::from(project));
        self.write_records(&records)
    }

    fn create_project(&mut self, name: &str) -> Result<Project, StoreError> {
        let mut records = self.read_records()?;
        if let Some(limit) = self.settings()?.project_limit
            && records.len() >= limit
        {
            return Err(StoreError::ProjectLimit(limit));
        }
        let mut id = new_id("proj");
        while records.contains_key(&id) {
            id.push('0');
        }
        let project = Project::new(id, name);
        records.insert(project.id.clone(), ProjectRecord::from(&project));
        self.write_records(&records)?;
        Ok(project)
    }

    fn delete_project(&mut self, project_id: &str) -> Result<(), StoreError> {
        let mut records = self.read_records()?;
        if records.shift_remove(project_id).is_none() {
            return Err(StoreError::ProjectNotFound(project_id.to_string()));
        }
        self.write_records(&records)
    }

    fn update_node_name(
        &mut self,
        project_id: &str,
        kind: NodeKind,
        node_id: &str,
        new_name: &str,
    ) -> Result<(), StoreError> {
        let mut project = self.load_project(project_id)?;
        let node = project
            .find_node_mut(node_id)
            .filter(|n| n.kind == kind)
            .ok_or_else(|| StoreError::NodeNotFound {
                kind,
                id: node_id.to_string(),
            })?;
        node.name = new_name.to_string();
        self.save_project(&project)
    }

    fn settings(&self) -> Result<Settings, StoreError> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(Settings::default());
        }
        let text = fs::read_to_string(&path).map_err(|e| StoreError::Read {
            path: path.clone(),
            source: e,
        })?;
        Ok(toml::from_str(&text)?)
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        let text = toml::to_string(settings)?;
        atomic_write(&self.data_dir, &self.settings_path(), text.as_bytes())
    }

    fn reset_all_data(&mut self) -> Result<(), StoreError> {
        let path = self.projects_path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Write { path, source: e }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Node, ThemePref};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, LocalStore) {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn empty_store_lists_nothing() {
        let (_dir, store) = open_store();
        assert!(store.list_projects().unwrap().is_empty());
    }

    #[test]
    fn create_save_load_round_trip() {
        let (_dir, mut store) = open_store();
        let mut project = store.create_project("Hausbau").unwrap();
        assert!(project.id.starts_with("proj_"));

        let mut phase = Node::new(NodeKind::Phase, new_id("phase"), "Setup");
        phase
            .children
            .push(Node::new(NodeKind::Task, new_id("task"), "Init repo"));
        project.phases.push(phase);
        store.save_project(&project).unwrap();

        let loaded = store.load_project(&project.id).unwrap();
        assert_eq!(loaded, project);

        let summaries = store.list_projects().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "Hausbau");
        assert_eq!(summaries[0].progress, 0);
    }

    #[test]
    fn load_unknown_project_fails() {
        let (_dir, store) = open_store();
        assert!(matches!(
            store.load_project("proj_0"),
            Err(StoreError::ProjectNotFound(_))
        ));
    }

    #[test]
    fn delete_project_removes_it() {
        let (_dir, mut store) = open_store();
        let project = store.create_project("Weg damit").unwrap();
        store.delete_project(&project.id).unwrap();
        assert!(store.list_projects().unwrap().is_empty());
        assert!(matches!(
            store.delete_project(&project.id),
            Err(StoreError::ProjectNotFound(_))
        ));
    }

    #[test]
    fn project_limit_is_enforced() {
        let (_dir, mut store) = open_store();
        store
            .save_settings(&Settings {
                project_limit: Some(1),
                ..Settings::default()
            })
            .unwrap();
        store.create_project("Erstes").unwrap();
        assert!(matches!(
            store.create_project("Zweites"),
            Err(StoreError::ProjectLimit(1))
        ));
    }

    #[test]
    fn update_node_name_persists() {
        let (_dir, mut store) = open_store();
        let mut project = store.create_project("Hausbau").unwrap();
        project
            .phases
            .push(Node::new(NodeKind::Phase, "phase_1", "Setup"));
        store.save_project(&project).unwrap();

        store
            .update_node_name(&project.id, NodeKind::Phase, "phase_1", "Vorbereitung")
            .unwrap();
        let loaded = store.load_project(&project.id).unwrap();
        assert_eq!(loaded.find_node("phase_1").unwrap().name, "Vorbereitung");
    }

    #[test]
    fn update_node_name_checks_kind() {
        let (_dir, mut store) = open_store();
        let mut project = store.create_project("Hausbau").unwrap();
        project
            .phases
            .push(Node::new(NodeKind::Phase, "phase_1", "Setup"));
        store.save_project(&project).unwrap();

        let err = store
            .update_node_name(&project.id, NodeKind::Task, "phase_1", "x")
            .unwrap_err();
        assert!(matches!(err, StoreError::NodeNotFound { .. }));
    }

    #[test]
    fn reset_all_data_keeps_settings() {
        let (dir, mut store) = open_store();
        store.create_project("Hausbau").unwrap();
        store
            .save_settings(&Settings {
                theme: ThemePref::Dark,
                ..Settings::default()
            })
            .unwrap();

        store.reset_all_data().unwrap();
        assert!(store.list_projects().unwrap().is_empty());
        assert_eq!(store.settings().unwrap().theme, ThemePref::Dark);
        assert!(!dir.path().join(PROJECTS_FILE).exists());

        // Resetting an already-empty store is fine
        store.reset_all_data().unwrap();
    }

    #[test]
    fn corrupt_projects_file_is_an_error() {
        let (dir, store) = open_store();
        fs::write(dir.path().join(PROJECTS_FILE), "not json {{{").unwrap();
        assert!(matches!(
            store.list_projects(),
            Err(StoreError::MalformedData(_))
        ));
    }

    #[test]
    fn stored_file_uses_browser_wire_format() {
        let (dir, mut store) = open_store();
        let mut project = store.create_project("Hausbau").unwrap();
        project
            .phases
            .push(Node::new(NodeKind::Phase, "phase_1", "Setup"));
        store.save_project(&project).unwrap();

        let text = fs::read_to_string(dir.path().join(PROJECTS_FILE)).unwrap();
        assert!(text.contains("\"projectName\": \"Hausbau\""));
        assert!(text.contains("\"phaseId\": \"phase_1\""));
    }
}
