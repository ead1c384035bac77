use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::cli::commands::*;
use crate::cli::output;
use crate::debug::DebugLog;
use crate::labels::Labels;
use crate::model::{Comment, Node, NodeKind};
use crate::store::{LocalStore, ProjectStore, new_node_id};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let mut store = LocalStore::open(&data_dir)?;
    let debug = DebugLog::new(&data_dir);
    let labels = Labels::for_language(&store.settings()?.language);

    let command = match cli.command {
        Some(c) => c,
        None => unreachable!("no-subcommand case is handled in main"),
    };

    let result: Result<(), Box<dyn std::error::Error>> = match command {
        Commands::Projects => cmd_projects(&store, &labels, json),
        Commands::New(args) => cmd_new(&mut store, args, json),
        Commands::Show(args) => cmd_show(&store, &labels, args, json),
        Commands::Add(args) => cmd_add(&mut store, args, json),
        Commands::Rename(args) => cmd_rename(&mut store, args),
        Commands::Done(args) => cmd_done(&mut store, args),
        Commands::Comment(args) => cmd_comment(&mut store, &labels, args),
        Commands::Delete(args) => cmd_delete(&mut store, args),
        Commands::Reset(args) => cmd_reset(&mut store, &labels, args),
    };

    if let Err(ref e) = result {
        debug.log(&format!("command failed: {}", e));
    }
    result
}

/// Resolve the data directory: `-D` flag, else the platform data dir
pub fn resolve_data_dir(flag: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(dir) = flag {
        return Ok(PathBuf::from(dir));
    }
    LocalStore::default_dir().ok_or_else(|| "could not determine a data directory".into())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_projects(
    store: &LocalStore,
    labels: &Labels,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let summaries = store.list_projects()?;
    output::print_project_list(&summaries, labels, json);
    Ok(())
}

fn cmd_new(
    store: &mut LocalStore,
    args: NewArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let project = store.create_project(&args.name)?;
    if json {
        let out = output::ProjectJson::from_project(&project);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("created {} [{}]", project.name, project.id);
    }
    Ok(())
}

fn cmd_show(
    store: &LocalStore,
    labels: &Labels,
    args: ShowArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let project = store.load_project(&args.project)?;
    output::print_tree(&project, labels, json);
    Ok(())
}

fn cmd_add(
    store: &mut LocalStore,
    args: AddArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut project = store.load_project(&args.project)?;

    let kind = match &args.parent {
        None => NodeKind::Phase,
        Some(parent_id) => {
            let parent = project
                .find_node(parent_id)
                .ok_or_else(|| format!("parent node not found: {}", parent_id))?;
            parent
                .kind
                .child_kind()
                .ok_or_else(|| format!("{} cannot have children", parent.kind.label()))?
        }
    };

    let node = Node::new(kind, new_node_id(&project, kind.id_prefix()), &args.name);
    let node_id = node.id.clone();
    match &args.parent {
        None => project.phases.push(node),
        Some(parent_id) => {
            // Checked above; the parent is still there
            if let Some(parent) = project.find_node_mut(parent_id) {
                parent.children.push(node);
            }
        }
    }
    store.save_project(&project)?;

    if json {
        println!("{}", serde_json::json!({ "id": node_id, "kind": kind.label() }));
    } else {
        println!("added {} {} [{}]", kind.label(), args.name, node_id);
    }
    Ok(())
}

fn cmd_rename(store: &mut LocalStore, args: RenameArgs) -> Result<(), Box<dyn std::error::Error>> {
    let project = store.load_project(&args.project)?;
    let kind = project
        .find_node(&args.node)
        .map(|n| n.kind)
        .ok_or_else(|| format!("node not found: {}", args.node))?;
    store.update_node_name(&args.project, kind, &args.node, &args.name)?;
    println!("renamed {} to {}", args.node, args.name);
    Ok(())
}

fn cmd_done(store: &mut LocalStore, args: DoneArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut project = store.load_project(&args.project)?;
    let node = project
        .find_node_mut(&args.node)
        .ok_or_else(|| format!("node not found: {}", args.node))?;
    if node.kind == NodeKind::Phase {
        return Err("phases have no done flag".into());
    }
    node.done = !node.done;
    let done = node.done;
    store.save_project(&project)?;
    println!("{} {}", args.node, if done { "done" } else { "reopened" });
    Ok(())
}

fn cmd_comment(
    store: &mut LocalStore,
    labels: &Labels,
    args: CommentArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut project = store.load_project(&args.project)?;
    let node = project
        .find_node_mut(&args.node)
        .ok_or_else(|| format!("node not found: {}", args.node))?;
    let author = if args.author.is_empty() {
        labels.guest_author.to_string()
    } else {
        args.author.clone()
    };
    node.comments.push(Comment {
        author,
        timestamp: chrono::Utc::now().timestamp_millis(),
        text: args.text,
    });
    store.save_project(&project)?;
    println!("commented on {}", args.node);
    Ok(())
}

fn cmd_delete(store: &mut LocalStore, args: DeleteArgs) -> Result<(), Box<dyn std::error::Error>> {
    store.delete_project(&args.project)?;
    println!("deleted {}", args.project);
    Ok(())
}

fn cmd_reset(
    store: &mut LocalStore,
    labels: &Labels,
    args: ResetArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if !args.force {
        print!("{} [y/N] ", labels.confirm_reset_message);
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "j" | "J") {
            println!("aborted");
            return Ok(());
        }
    }
    store.reset_all_data()?;
    println!("{}", labels.all_data_deleted);
    Ok(())
}
