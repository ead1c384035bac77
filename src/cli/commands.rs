use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pb", about = concat!("[#] planbaum v", env!("CARGO_PKG_VERSION"), " - phases, tasks, subtasks"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'D', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all projects
    Projects,
    /// Create a new project
    New(NewArgs),
    /// Print a project's phase tree
    Show(ShowArgs),
    /// Add a phase (or, with --parent, a task or subtask)
    Add(AddArgs),
    /// Rename a phase, task, or subtask
    Rename(RenameArgs),
    /// Toggle a task or subtask done
    Done(DoneArgs),
    /// Add a comment to a node
    Comment(CommentArgs),
    /// Delete a project
    Delete(DeleteArgs),
    /// Delete all locally stored project data
    Reset(ResetArgs),
}

#[derive(Args)]
pub struct NewArgs {
    /// Project name
    pub name: String,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Project ID
    pub project: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Project ID
    pub project: String,
    /// Name of the new node
    pub name: String,
    /// Parent node ID (omit to add a phase)
    #[arg(short, long)]
    pub parent: Option<String>,
}

#[derive(Args)]
pub struct RenameArgs {
    /// Project ID
    pub project: String,
    /// Node ID
    pub node: String,
    /// New name
    pub name: String,
}

#[derive(Args)]
pub struct DoneArgs {
    /// Project ID
    pub project: String,
    /// Node ID (task or subtask)
    pub node: String,
}

#[derive(Args)]
pub struct CommentArgs {
    /// Project ID
    pub project: String,
    /// Node ID
    pub node: String,
    /// Comment text
    pub text: String,
    /// Comment author
    #[arg(long, default_value = "Gast")]
    pub author: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Project ID
    pub project: String,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}
