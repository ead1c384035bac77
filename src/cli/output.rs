use serde::Serialize;

use crate::labels::Labels;
use crate::model::{Comment, Node, Project};
use crate::store::ProjectSummary;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ProjectSummaryJson {
    pub id: String,
    pub name: String,
    pub progress: u8,
}

#[derive(Serialize)]
pub struct NodeJson {
    pub kind: &'static str,
    pub id: String,
    pub name: String,
    pub done: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeJson>,
}

#[derive(Serialize)]
pub struct ProjectJson {
    pub id: String,
    pub name: String,
    pub progress: u8,
    pub phases: Vec<NodeJson>,
}

impl NodeJson {
    fn from_node(node: &Node) -> Self {
        NodeJson {
            kind: node.kind.label(),
            id: node.id.clone(),
            name: node.name.clone(),
            done: node.done,
            comments: node.comments.clone(),
            children: node.children.iter().map(NodeJson::from_node).collect(),
        }
    }
}

impl ProjectJson {
    pub fn from_project(project: &Project) -> Self {
        ProjectJson {
            id: project.id.clone(),
            name: project.name.clone(),
            progress: project.progress(),
            phases: project.phases.iter().map(NodeJson::from_node).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

pub fn print_project_list(summaries: &[ProjectSummary], labels: &Labels, json: bool) {
    if json {
        let rows: Vec<ProjectSummaryJson> = summaries
            .iter()
            .map(|s| ProjectSummaryJson {
                id: s.id.clone(),
                name: s.name.clone(),
                progress: s.progress,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows).unwrap_or_default());
        return;
    }
    if summaries.is_empty() {
        println!("{}", labels.no_projects);
        return;
    }
    for summary in summaries {
        println!("{:24}  {:3}%  {}", summary.id, summary.progress, summary.name);
    }
}

pub fn print_tree(project: &Project, labels: &Labels, json: bool) {
    if json {
        let out = ProjectJson::from_project(project);
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return;
    }
    println!("{}  [{}]", project.name, project.id);
    for line in tree_lines(project, labels) {
        println!("{}", line);
    }
}

/// Plain-text tree rows with hierarchical numbering (`1.`, `1.1.`, `1.1.1.`).
/// An empty project yields exactly one informational row.
pub fn tree_lines(project: &Project, labels: &Labels) -> Vec<String> {
    if project.phases.is_empty() {
        return vec![labels.no_phases.to_string()];
    }
    let mut lines = Vec::new();
    for (pi, phase) in project.phases.iter().enumerate() {
        lines.push(format!("{}. {}", pi + 1, phase.display_name()));
        for (ti, task) in phase.children.iter().enumerate() {
            lines.push(format!(
                "  {}.{}. {}{}",
                pi + 1,
                ti + 1,
                task.display_name(),
                done_marker(task)
            ));
            for (si, subtask) in task.children.iter().enumerate() {
                lines.push(format!(
                    "    {}.{}.{}. {}{}",
                    pi + 1,
                    ti + 1,
                    si + 1,
                    subtask.display_name(),
                    done_marker(subtask)
                ));
            }
        }
    }
    lines
}

fn done_marker(node: &Node) -> &'static str {
    if node.done { " \u{2713}" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::sample_project;
    use pretty_assertions::assert_eq;

    #[test]
    fn tree_lines_numbering() {
        let project = sample_project();
        let labels = Labels::german();
        let lines = tree_lines(&project, &labels);
        assert_eq!(
            lines,
            vec![
                "1. Setup".to_string(),
                "  1.1. Init repo".to_string(),
                "    1.1.1. Create remote".to_string(),
                "    1.1.2. First commit".to_string(),
                "  1.2. Write readme".to_string(),
                "2. Rohbau".to_string(),
            ]
        );
    }

    #[test]
    fn empty_project_yields_single_info_row() {
        let project = Project::new("proj_1", "Leer");
        let labels = Labels::german();
        let lines = tree_lines(&project, &labels);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], labels.no_phases);
    }

    #[test]
    fn done_nodes_get_a_check_mark() {
        let mut project = sample_project();
        project.find_node_mut("task_11").unwrap().done = true;
        let lines = tree_lines(&project, &Labels::german());
        assert!(lines.iter().any(|l| l.contains("Write readme \u{2713}")));
    }

    #[test]
    fn json_shape_nests_children() {
        let project = sample_project();
        let out = ProjectJson::from_project(&project);
        let text = serde_json::to_string(&out).unwrap();
        assert!(text.contains("\"kind\":\"Phase\""));
        assert!(text.contains("\"kind\":\"Subaufgabe\""));
    }
}
