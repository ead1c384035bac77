use serde::{Deserialize, Serialize};

/// Placeholder shown when a stored name is empty or missing
pub const UNNAMED_LABEL: &str = "(unbenannt)";

/// Level of a node in the strictly three-level project hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Phase,
    Task,
    Subtask,
}

impl NodeKind {
    /// Display tag as used in the persisted data and the editor label
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Phase => "Phase",
            NodeKind::Task => "Aufgabe",
            NodeKind::Subtask => "Subaufgabe",
        }
    }

    /// Parse a display tag back into a kind
    pub fn from_label(tag: &str) -> Option<NodeKind> {
        match tag {
            "Phase" => Some(NodeKind::Phase),
            "Aufgabe" => Some(NodeKind::Task),
            "Subaufgabe" => Some(NodeKind::Subtask),
            _ => None,
        }
    }

    /// Prefix used when generating IDs (`phase_<ms>`, `task_<ms>`, ...)
    pub fn id_prefix(self) -> &'static str {
        match self {
            NodeKind::Phase => "phase",
            NodeKind::Task => "task",
            NodeKind::Subtask => "subtask",
        }
    }

    /// The kind of a direct child. Subtasks are leaves.
    pub fn child_kind(self) -> Option<NodeKind> {
        match self {
            NodeKind::Phase => Some(NodeKind::Task),
            NodeKind::Task => Some(NodeKind::Subtask),
            NodeKind::Subtask => None,
        }
    }
}

/// A comment attached to a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    /// Millisecond timestamp, same convention as the web client
    pub timestamp: i64,
    pub text: String,
}

/// One node of the phase/task/subtask tree.
///
/// All three levels share this shape; `kind` is the discriminant.
/// A `Subtask` never has children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub id: String,
    pub name: String,
    pub done: bool,
    pub comments: Vec<Comment>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, id: impl Into<String>, name: impl Into<String>) -> Self {
        Node {
            kind,
            id: id.into(),
            name: name.into(),
            done: false,
            comments: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Display name, falling back to a placeholder when the stored name
    /// is empty (malformed data renders a label, never a blank)
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            UNNAMED_LABEL
        } else {
            &self.name
        }
    }

    /// This node plus all descendants
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }
}
