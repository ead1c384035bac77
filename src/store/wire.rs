//! On-disk representation of projects.json.
//!
//! The wire format keeps the web client's per-level camelCase field names
//! (`phaseId`/`phaseName`, `taskId`/`taskName`, `subtaskId`/`subtaskName`)
//! so guest-store data written by the browser parses unchanged. The model
//! side collapses the three shapes into the tagged `Node`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{Comment, Node, NodeKind, Project};

/// projects.json: map project-id → record, insertion order preserved
pub type ProjectMap = IndexMap<String, ProjectRecord>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub project_id: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub phases: Vec<PhaseRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseRecord {
    pub phase_id: String,
    #[serde(default)]
    pub phase_name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub task_id: String,
    #[serde(default)]
    pub task_name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub subtasks: Vec<SubtaskRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtaskRecord {
    pub subtask_id: String,
    #[serde(default)]
    pub subtask_name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        Project {
            id: record.project_id,
            name: record.project_name,
            phases: record.phases.into_iter().map(Node::from).collect(),
        }
    }
}

impl From<&Project> for ProjectRecord {
    fn from(project: &Project) -> Self {
        ProjectRecord {
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            phases: project.phases.iter().map(PhaseRecord::from).collect(),
        }
    }
}

impl From<PhaseRecord> for Node {
    fn from(record: PhaseRecord) -> Self {
        Node {
            kind: NodeKind::Phase,
            id: record.phase_id,
            name: record.phase_name,
            done: record.done,
            comments: record.comments,
            children: record.tasks.into_iter().map(Node::from).collect(),
        }
    }
}

impl From<TaskRecord> for Node {
    fn from(record: TaskRecord) -> Self {
        Node {
            kind: NodeKind::Task,
            id: record.task_id,
            name: record.task_name,
            done: record.done,
            comments: record.comments,
            children: record.subtasks.into_iter().map(Node::from).collect(),
        }
    }
}

impl From<SubtaskRecord> for Node {
    fn from(record: SubtaskRecord) -> Self {
        Node {
            kind: NodeKind::Subtask,
            id: record.subtask_id,
            name: record.subtask_name,
            done: record.done,
            comments: record.comments,
            children: Vec::new(),
        }
    }
}

impl From<&Node> for PhaseRecord {
    fn from(node: &Node) -> Self {
        PhaseRecord {
            phase_id: node.id.clone(),
            phase_name: node.name.clone(),
            done: node.done,
            comments: node.comments.clone(),
            tasks: node.children.iter().map(TaskRecord::from).collect(),
        }
    }
}

impl From<&Node> for TaskRecord {
    fn from(node: &Node) -> Self {
        TaskRecord {
            task_id: node.id.clone(),
            task_name: node.name.clone(),
            done: node.done,
            comments: node.comments.clone(),
            subtasks: node.children.iter().map(SubtaskRecord::from).collect(),
        }
    }
}

impl From<&Node> for SubtaskRecord {
    fn from(node: &Node) -> Self {
        SubtaskRecord {
            subtask_id: node.id.clone(),
            subtask_name: node.name.clone(),
            done: node.done,
            comments: node.comments.clone(),
        }
    }
}
