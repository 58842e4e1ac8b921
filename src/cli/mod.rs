//! CLI boundary: flag parsing and one-shot command dispatch.
//!
//! Exactly one command flag is accepted per invocation (clap `ArgGroup`).
//! A malformed `--edit` value (missing `:` or a non-numeric id) prints an
//! error and exits with status 1 before any actor call. An invalid index on
//! a mutation prints the actor's rejection and returns normally.

use crate::actor::{ClientError, TodoClient};
use crate::model::TodoList;
use crate::storage::TodoStore;
use crate::trace::TraceId;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};
use tracing::warn;

#[derive(Debug, Parser)]
#[command(author, version, about = "Actor-backed todo manager", long_about = None)]
#[command(group(ArgGroup::new("command").args(["add", "edit", "delete", "toggle", "list"])))]
pub struct Cli {
    /// Add a new todo with the given description
    #[arg(long, value_name = "DESCRIPTION")]
    pub add: Option<String>,

    /// Edit a todo: id:new_description
    #[arg(long, value_name = "ID:DESCRIPTION")]
    pub edit: Option<String>,

    /// Delete the todo at the given index
    #[arg(long, value_name = "ID")]
    pub delete: Option<usize>,

    /// Cycle the status of the todo at the given index
    #[arg(long, value_name = "ID")]
    pub toggle: Option<usize>,

    /// Print all todos
    #[arg(long)]
    pub list: bool,

    /// Path of the JSON file todos are persisted to
    #[arg(long, default_value = "todos.json", value_name = "PATH")]
    pub file: PathBuf,

    /// Port the HTTP server listens on when no command flag is given
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

/// One resolved CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Edit { index: usize, description: String },
    Delete(usize),
    Toggle(usize),
    List,
}

impl Cli {
    /// Resolves the parsed flags into a single command, or `None` when no
    /// command flag was given (server mode).
    ///
    /// Exits the process with status 1 on a malformed `--edit` value.
    pub fn command(&self) -> Option<Command> {
        if self.list {
            return Some(Command::List);
        }
        if let Some(description) = &self.add {
            return Some(Command::Add(description.clone()));
        }
        if let Some(raw) = &self.edit {
            match parse_edit(raw) {
                Ok((index, description)) => return Some(Command::Edit { index, description }),
                Err(message) => {
                    println!("Error: {message}");
                    std::process::exit(1);
                }
            }
        }
        if let Some(index) = self.delete {
            return Some(Command::Delete(index));
        }
        if let Some(index) = self.toggle {
            return Some(Command::Toggle(index));
        }
        None
    }
}

/// Splits an `id:new_description` value.
fn parse_edit(raw: &str) -> Result<(usize, String), String> {
    let (id, description) = raw
        .split_once(':')
        .ok_or_else(|| "invalid format for edit, use id:new_description".to_string())?;
    let index = id
        .parse::<usize>()
        .map_err(|_| "invalid index for edit".to_string())?;
    Ok((index, description.to_string()))
}

/// Runs one command against the actor, saving after a successful mutation.
///
/// An invalid index prints the error and returns; the process still exits 0
/// (the list was simply left unchanged).
pub async fn run(
    cmd: Command,
    trace: &TraceId,
    client: &TodoClient,
    store: &dyn TodoStore,
) -> Result<(), ClientError> {
    let mutated = match cmd {
        Command::List => {
            print_table(&client.get_all(trace).await?);
            false
        }
        Command::Add(description) => {
            client.add(trace, description).await?;
            true
        }
        Command::Edit { index, description } => {
            report(client.edit(trace, index, description).await)?
        }
        Command::Delete(index) => report(client.delete(trace, index).await)?,
        Command::Toggle(index) => report(client.toggle(trace, index).await)?,
    };

    if mutated {
        let todos = client.get_all(trace).await?;
        if let Err(err) = store.save(trace, &todos).await {
            warn!(trace_id = %trace, error = %err, "Could not save todos");
            println!("Error: {err}");
        }
    }
    Ok(())
}

/// Prints an invalid-index rejection and keeps going; channel failures
/// still propagate.
fn report(result: Result<(), ClientError>) -> Result<bool, ClientError> {
    match result {
        Ok(()) => Ok(true),
        Err(ClientError::Todo(err)) => {
            println!("Error: {err}");
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

#[derive(Tabled)]
struct TodoRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created At")]
    created_at: String,
}

fn print_table(todos: &TodoList) {
    let rows: Vec<TodoRow> = todos
        .iter()
        .enumerate()
        .map(|(index, todo)| TodoRow {
            index,
            description: todo.description.clone(),
            status: todo.status.to_string(),
            created_at: todo.created_at.to_rfc2822(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::sharp()));
}
