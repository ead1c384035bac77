use super::node::{Node, NodeKind};

/// A project: an ordered sequence of phases
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub phases: Vec<Node>,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Project {
            id: id.into(),
            name: name.into(),
            phases: Vec::new(),
        }
    }

    /// Total node count across all levels
    pub fn node_count(&self) -> usize {
        self.phases.iter().map(Node::count).sum()
    }

    /// Find a node anywhere in the tree by ID
    pub fn find_node(&self, node_id: &str) -> Option<&Node> {
        find_in(&self.phases, node_id)
    }

    pub fn find_node_mut(&mut self, node_id: &str) -> Option<&mut Node> {
        find_in_mut(&mut self.phases, node_id)
    }

    /// Remove a node anywhere in the tree by ID; returns the removed node
    pub fn remove_node(&mut self, node_id: &str) -> Option<Node> {
        remove_in(&mut self.phases, node_id)
    }

    /// Completion percentage, 0–100. Each task counts its subtasks when it
    /// has any, otherwise the task itself. Phases carry no weight of their own.
    pub fn progress(&self) -> u8 {
        let mut total = 0usize;
        let mut completed = 0usize;
        for phase in &self.phases {
            for task in &phase.children {
                if task.children.is_empty() {
                    total += 1;
                    if task.done {
                        completed += 1;
                    }
                } else {
                    total += task.children.len();
                    completed += task.children.iter().filter(|s| s.done).count();
                }
            }
        }
        if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        }
    }
}

fn find_in<'a>(nodes: &'a [Node], node_id: &str) -> Option<&'a Node> {
    for node in nodes {
        if node.id == node_id {
            return Some(node);
        }
        if let Some(found) = find_in(&node.children, node_id) {
            return Some(found);
        }
    }
    None
}

fn find_in_mut<'a>(nodes: &'a mut [Node], node_id: &str) -> Option<&'a mut Node> {
    for node in nodes {
        if node.id == node_id {
            return Some(node);
        }
        if let Some(found) = find_in_mut(&mut node.children, node_id) {
            return Some(found);
        }
    }
    None
}

fn remove_in(nodes: &mut Vec<Node>, node_id: &str) -> Option<Node> {
    if let Some(pos) = nodes.iter().position(|n| n.id == node_id) {
        return Some(nodes.remove(pos));
    }
    for node in nodes.iter_mut() {
        if let Some(removed) = remove_in(&mut node.children, node_id) {
            return Some(removed);
        }
    }
    None
}

/// Build a sample subtree for tests
#[cfg(test)]
pub(crate) fn sample_project() -> Project {
    let mut project = Project::new("proj_1", "Hausbau");
    let mut phase = Node::new(NodeKind::Phase, "phase_1", "Setup");
    let mut task = Node::new(NodeKind::Task, "task_10", "Init repo");
    task.children
        .push(Node::new(NodeKind::Subtask, "subtask_100", "Create remote"));
    task.children
        .push(Node::new(NodeKind::Subtask, "subtask_101", "First commit"));
    phase.children.push(task);
    phase
        .children
        .push(Node::new(NodeKind::Task, "task_11", "Write readme"));
    project.phases.push(phase);
    project
        .phases
        .push(Node::new(NodeKind::Phase, "phase_2", "Rohbau"));
    project
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn find_node_at_every_level() {
        let project = sample_project();
        assert_eq!(project.find_node("phase_2").unwrap().name, "Rohbau");
        assert_eq!(project.find_node("task_11").unwrap().name, "Write readme");
        assert_eq!(
            project.find_node("subtask_101").unwrap().name,
            "First commit"
        );
        assert!(project.find_node("task_99").is_none());
    }

    #[test]
    fn find_node_mut_edits_in_place() {
        let mut project = sample_project();
        project.find_node_mut("subtask_100").unwrap().name = "Create origin".into();
        assert_eq!(
            project.find_node("subtask_100").unwrap().name,
            "Create origin"
        );
    }

    #[test]
    fn remove_node_detaches_subtree() {
        let mut project = sample_project();
        let removed = project.remove_node("task_10").unwrap();
        assert_eq!(removed.children.len(), 2);
        assert!(project.find_node("task_10").is_none());
        assert!(project.find_node("subtask_100").is_none());
        assert_eq!(project.node_count(), 3);
    }

    #[test]
    fn node_count_sums_all_levels() {
        let project = sample_project();
        // 2 phases + 2 tasks + 2 subtasks
        assert_eq!(project.node_count(), 6);
    }

    #[test]
    fn progress_counts_subtasks_or_bare_tasks() {
        let mut project = sample_project();
        // Units: subtask_100, subtask_101, task_11 (no subtasks) → 3 total
        assert_eq!(project.progress(), 0);
        project.find_node_mut("subtask_100").unwrap().done = true;
        assert_eq!(project.progress(), 33);
        project.find_node_mut("subtask_101").unwrap().done = true;
        project.find_node_mut("task_11").unwrap().done = true;
        assert_eq!(project.progress(), 100);
    }

    #[test]
    fn progress_of_empty_project_is_zero() {
        let project = Project::new("proj_2", "Leer");
        assert_eq!(project.progress(), 0);
    }
}
