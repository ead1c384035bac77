use std::collections::HashSet;
use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::debug::DebugLog;
use crate::labels::Labels;
use crate::model::{Comment, Node, NodeKind, Project, Settings};
use crate::store::{LocalStore, ProjectStore, ProjectSummary, StoreError, new_node_id};

use super::input;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Project,
    Settings,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Editing the name input in the detail panel
    Edit,
    /// A prompt popup is capturing a line of input
    Prompt,
    /// A confirmation popup is waiting for y/n
    Confirm,
    /// An info popup is waiting for acknowledgement
    Info,
}

/// A row in the flattened tree view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatNode {
    pub id: String,
    pub kind: NodeKind,
    pub depth: usize,
    /// Hierarchical number: `"1"`, `"1.1"`, `"1.1.1"`
    pub number: String,
    pub has_children: bool,
    pub is_expanded: bool,
}

/// The detail panel's single pending edit: which node is under edit and
/// the candidate name. Selecting another node replaces this wholesale.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub node_id: String,
    pub kind: NodeKind,
    /// Panel title (the node's display name at selection/save time)
    pub title: String,
    /// Candidate name, pre-filled with the current name
    pub buffer: String,
    /// Byte offset into `buffer`
    pub cursor: usize,
}

/// What a pending confirmation will do when confirmed
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    DeleteProject { project_id: String },
    DeleteNode { node_id: String },
    ResetAllData,
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub title: String,
    pub message: String,
    pub action: ConfirmAction,
}

/// What a prompt popup does with its submitted value
#[derive(Debug, Clone)]
pub enum PromptAction {
    NewProject,
    NewPhase,
    NewChild { parent_id: String },
    AddComment { node_id: String },
}

#[derive(Debug, Clone)]
pub struct PromptState {
    pub title: String,
    pub label: String,
    pub buffer: String,
    pub cursor: usize,
    pub action: PromptAction,
}

/// Effect run when an info popup is dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoFollowUp {
    None,
    GoToDashboard,
}

#[derive(Debug, Clone)]
pub struct InfoState {
    pub title: String,
    pub message: String,
    pub follow_up: InfoFollowUp,
}

/// Rows of the settings view, top to bottom
pub const SETTINGS_ROWS: usize = 3;
pub const SETTINGS_ROW_THEME: usize = 0;
pub const SETTINGS_ROW_LANGUAGE: usize = 1;
pub const SETTINGS_ROW_RESET: usize = 2;

/// Main application state
pub struct App {
    pub store: Box<dyn ProjectStore>,
    pub debug: DebugLog,
    pub settings: Settings,
    pub theme: Theme,
    pub labels: Labels,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    /// Dashboard rows
    pub projects: Vec<ProjectSummary>,
    pub dashboard_cursor: usize,
    pub dashboard_scroll: usize,
    /// Currently open project (project view)
    pub project: Option<Project>,
    pub tree_cursor: usize,
    pub tree_scroll: usize,
    /// Collapsed node IDs; everything else is expanded (the default)
    pub collapsed: HashSet<String>,
    /// Detail panel state: `None` = empty panel, `Some` = a node is shown
    pub editor: Option<EditorState>,
    pub confirm: Option<ConfirmState>,
    pub prompt: Option<PromptState>,
    pub info: Option<InfoState>,
    pub settings_cursor: usize,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(store: Box<dyn ProjectStore>, debug: DebugLog) -> Result<Self, StoreError> {
        let settings = store.settings()?;
        let projects = store.list_projects()?;
        let theme = Theme::from_settings(&settings);
        let labels = Labels::for_language(&settings.language);

        Ok(App {
            store,
            debug,
            settings,
            theme,
            labels,
            view: View::Dashboard,
            mode: Mode::Navigate,
            should_quit: false,
            projects,
            dashboard_cursor: 0,
            dashboard_scroll: 0,
            project: None,
            tree_cursor: 0,
            tree_scroll: 0,
            collapsed: HashSet::new(),
            editor: None,
            confirm: None,
            prompt: None,
            info: None,
            settings_cursor: 0,
            status_message: None,
        })
    }

    // -----------------------------------------------------------------
    // Popups
    // -----------------------------------------------------------------

    pub fn show_info(&mut self, title: &str, message: &str, follow_up: InfoFollowUp) {
        self.info = Some(InfoState {
            title: title.to_string(),
            message: message.to_string(),
            follow_up,
        });
        self.mode = Mode::Info;
    }

    pub fn show_error(&mut self, err: &dyn std::fmt::Display) {
        let message = err.to_string();
        self.debug.log(&message);
        let title = self.labels.error;
        self.show_info(title, &message, InfoFollowUp::None);
    }

    pub fn request_confirm(&mut self, title: &str, message: &str, action: ConfirmAction) {
        self.confirm = Some(ConfirmState {
            title: title.to_string(),
            message: message.to_string(),
            action,
        });
        self.mode = Mode::Confirm;
    }

    pub fn open_prompt(&mut self, title: &str, label: &str, action: PromptAction) {
        self.prompt = Some(PromptState {
            title: title.to_string(),
            label: label.to_string(),
            buffer: String::new(),
            cursor: 0,
            action,
        });
        self.mode = Mode::Prompt;
    }

    // -----------------------------------------------------------------
    // Dashboard / project lifecycle
    // -----------------------------------------------------------------

    pub fn reload_projects(&mut self) {
        match self.store.list_projects() {
            Ok(projects) => {
                self.projects = projects;
                if !self.projects.is_empty() {
                    self.dashboard_cursor = self.dashboard_cursor.min(self.projects.len() - 1);
                } else {
                    self.dashboard_cursor = 0;
                }
            }
            Err(e) => self.show_error(&e),
        }
    }

    pub fn open_project(&mut self, project_id: &str) {
        match self.store.load_project(project_id) {
            Ok(project) => {
                self.project = Some(project);
                self.view = View::Project;
                self.tree_cursor = 0;
                self.tree_scroll = 0;
                self.collapsed.clear();
                self.editor = None;
                self.status_message = None;
            }
            Err(e) => self.show_error(&e),
        }
    }

    pub fn close_project(&mut self) {
        self.project = None;
        self.editor = None;
        self.view = View::Dashboard;
        self.reload_projects();
    }

    // -----------------------------------------------------------------
    // Tree
    // -----------------------------------------------------------------

    /// Flat list of visible tree rows. Empty when the project has no phases.
    pub fn flat_nodes(&self) -> Vec<FlatNode> {
        match &self.project {
            Some(project) => flatten_project(project, &self.collapsed),
            None => Vec::new(),
        }
    }

    /// The flat row under the tree cursor
    pub fn cursor_flat(&self) -> Option<FlatNode> {
        self.flat_nodes().into_iter().nth(self.tree_cursor)
    }

    pub fn clamp_tree_cursor(&mut self) {
        let len = self.flat_nodes().len();
        if len == 0 {
            self.tree_cursor = 0;
        } else {
            self.tree_cursor = self.tree_cursor.min(len - 1);
        }
    }

    /// Activate the node under the cursor: populate the detail panel.
    /// Any unsaved edit of a previously selected node is discarded.
    pub fn select_under_cursor(&mut self) {
        let Some(flat) = self.cursor_flat() else {
            return;
        };
        let Some(project) = &self.project else {
            return;
        };
        let Some(node) = project.find_node(&flat.id) else {
            return;
        };
        self.editor = Some(EditorState {
            node_id: node.id.clone(),
            kind: node.kind,
            title: node.display_name().to_string(),
            buffer: node.name.clone(),
            cursor: node.name.len(),
        });
    }

    /// Select the cursor node (if not already shown) and start editing its name
    pub fn start_edit(&mut self) {
        let cursor_id = self.cursor_flat().map(|f| f.id);
        let already_shown = match (&self.editor, &cursor_id) {
            (Some(editor), Some(id)) => &editor.node_id == id,
            _ => false,
        };
        if !already_shown {
            self.select_under_cursor();
        }
        if self.editor.is_some() {
            self.mode = Mode::Edit;
        }
    }

    /// Abort the pending edit: restore the buffer from the stored name
    pub fn cancel_edit(&mut self) {
        if let (Some(editor), Some(project)) = (&mut self.editor, &self.project)
            && let Some(node) = project.find_node(&editor.node_id)
        {
            editor.buffer = node.name.clone();
            editor.cursor = editor.buffer.len();
        }
        self.mode = Mode::Navigate;
    }

    /// Save the pending edit: submits the input's *current* value to the
    /// store. Success lands in the status row, failure in an info popup.
    pub fn save_editor(&mut self) {
        let Some(project_id) = self.project.as_ref().map(|p| p.id.clone()) else {
            return;
        };
        let Some(editor) = self.editor.clone() else {
            return;
        };
        match self
            .store
            .update_node_name(&project_id, editor.kind, &editor.node_id, &editor.buffer)
        {
            Ok(()) => {
                if let Some(project) = &mut self.project
                    && let Some(node) = project.find_node_mut(&editor.node_id)
                {
                    node.name = editor.buffer.clone();
                }
                if let Some(project) = &self.project
                    && let Some(node) = project.find_node(&editor.node_id)
                    && let Some(editor) = &mut self.editor
                {
                    editor.title = node.display_name().to_string();
                }
                self.debug
                    .log(&format!("renamed {} {}", editor.kind.label(), editor.node_id));
                self.status_message = Some(self.labels.saved.to_string());
                self.mode = Mode::Navigate;
            }
            Err(e) => {
                self.mode = Mode::Navigate;
                self.show_error(&e);
            }
        }
    }

    pub fn toggle_expand_under_cursor(&mut self) {
        let Some(flat) = self.cursor_flat() else {
            return;
        };
        if !flat.has_children {
            return;
        }
        if !self.collapsed.remove(&flat.id) {
            self.collapsed.insert(flat.id);
        }
        self.clamp_tree_cursor();
    }

    pub fn toggle_done_under_cursor(&mut self) {
        let Some(flat) = self.cursor_flat() else {
            return;
        };
        if flat.kind == NodeKind::Phase {
            return;
        }
        if let Some(project) = &mut self.project
            && let Some(node) = project.find_node_mut(&flat.id)
        {
            node.done = !node.done;
        }
        self.persist_project();
    }

    // -----------------------------------------------------------------
    // Mutations behind prompts/confirms
    // -----------------------------------------------------------------

    /// Run the prompt's action with the submitted (non-empty) value
    pub fn submit_prompt(&mut self, action: PromptAction, value: String) {
        match action {
            PromptAction::NewProject => match self.store.create_project(&value) {
                Ok(project) => {
                    let id = project.id.clone();
                    self.reload_projects();
                    self.open_project(&id);
                }
                Err(e) => self.show_error(&e),
            },
            PromptAction::NewPhase => {
                if let Some(project) = &mut self.project {
                    let id = new_node_id(project, "phase");
                    project.phases.push(Node::new(NodeKind::Phase, id, value));
                }
                self.persist_project();
            }
            PromptAction::NewChild { parent_id } => {
                let child_kind = self
                    .project
                    .as_ref()
                    .and_then(|p| p.find_node(&parent_id))
                    .and_then(|n| n.kind.child_kind());
                let Some(kind) = child_kind else {
                    return;
                };
                if let Some(project) = &mut self.project {
                    let id = new_node_id(project, kind.id_prefix());
                    if let Some(parent) = project.find_node_mut(&parent_id) {
                        parent.children.push(Node::new(kind, id, value));
                    }
                }
                self.persist_project();
            }
            PromptAction::AddComment { node_id } => {
                let comment = Comment {
                    author: self.labels.guest_author.to_string(),
                    timestamp: chrono::Utc::now().timestamp_millis(),
                    text: value,
                };
                if let Some(project) = &mut self.project
                    && let Some(node) = project.find_node_mut(&node_id)
                {
                    node.comments.push(comment);
                }
                self.persist_project();
            }
        }
    }

    /// Run a confirmed action
    pub fn execute_confirm(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::DeleteProject { project_id } => {
                if let Err(e) = self.store.delete_project(&project_id) {
                    self.show_error(&e);
                    return;
                }
                if self.project.as_ref().is_some_and(|p| p.id == project_id) {
                    self.close_project();
                } else {
                    self.reload_projects();
                }
            }
            ConfirmAction::DeleteNode { node_id } => {
                if let Some(project) = &mut self.project {
                    project.remove_node(&node_id);
                }
                if self.editor.as_ref().is_some_and(|e| e.node_id == node_id) {
                    self.editor = None;
                }
                self.persist_project();
                self.clamp_tree_cursor();
            }
            ConfirmAction::ResetAllData => match self.store.reset_all_data() {
                Ok(()) => {
                    self.debug.log("reset all data");
                    self.project = None;
                    self.editor = None;
                    self.reload_projects();
                    let title = self.labels.success;
                    let message = self.labels.all_data_deleted;
                    self.show_info(title, message, InfoFollowUp::GoToDashboard);
                }
                Err(e) => self.show_error(&e),
            },
        }
    }

    /// Write the open project back to the store; errors land in a popup.
    /// The tree re-renders from the updated model on the next frame.
    pub fn persist_project(&mut self) {
        let result = match &self.project {
            Some(project) => self.store.save_project(project),
            None => return,
        };
        if let Err(e) = result {
            self.show_error(&e);
        }
    }

    // -----------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------

    pub fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        self.theme = Theme::from_settings(&self.settings);
        self.persist_settings();
    }

    /// Cycle the language preference; labels swap immediately
    pub fn cycle_language(&mut self) {
        self.settings.language = if self.labels.language == "de" {
            "en".to_string()
        } else {
            "de".to_string()
        };
        self.labels = Labels::for_language(&self.settings.language);
        self.persist_settings();
    }

    fn persist_settings(&mut self) {
        let settings = self.settings.clone();
        if let Err(e) = self.store.save_settings(&settings) {
            self.show_error(&e);
        }
    }
}

/// Recursively flatten the phase tree into visible rows, honoring the
/// collapsed set and carrying hierarchical numbers (`1`, `1.1`, `1.1.1`)
pub fn flatten_project(project: &Project, collapsed: &HashSet<String>) -> Vec<FlatNode> {
    let mut items = Vec::new();
    flatten_level(&project.phases, 0, "", collapsed, &mut items);
    items
}

fn flatten_level(
    nodes: &[Node],
    depth: usize,
    parent_number: &str,
    collapsed: &HashSet<String>,
    items: &mut Vec<FlatNode>,
) {
    for (i, node) in nodes.iter().enumerate() {
        let number = if parent_number.is_empty() {
            format!("{}", i + 1)
        } else {
            format!("{}.{}", parent_number, i + 1)
        };
        let has_children = !node.children.is_empty();
        let is_expanded = has_children && !collapsed.contains(&node.id);
        items.push(FlatNode {
            id: node.id.clone(),
            kind: node.kind,
            depth,
            number: number.clone(),
            has_children,
            is_expanded,
        });
        if is_expanded {
            flatten_level(&node.children, depth + 1, &number, collapsed, items);
        }
    }
}

/// Run the TUI application
pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = crate::cli::handlers::resolve_data_dir(data_dir)?;
    let store = LocalStore::open(&data_dir)?;
    let debug = DebugLog::new(&data_dir);
    debug.log("tui started");

    let mut app = App::new(Box::new(store), debug)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(std::time::Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
