use clap::{Parser, Subcommand};
use tasklist_service::DEFAULT_API_URL;

#[derive(Debug, Parser)]
#[command(name = "tasklist", about = "Manage task lists on a task-list server")]
pub struct Cli {
    /// Base URL of the task-list API
    #[arg(long, env = "TASKLIST_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show all task lists with their progress
    Lists {
        /// Only lists whose title contains this text
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show the tasks of one list
    Show {
        list_id: String,
        /// Only tasks whose title contains this text
        #[arg(long, default_value = "")]
        search: String,
        /// Only tasks with this priority (high, medium, low)
        #[arg(long)]
        priority: Option<String>,
    },
    /// Create a task list
    NewList {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Change a task list's title or description
    EditList {
        list_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a task list and all of its tasks
    DeleteList { list_id: String },
    /// Add a task to a list
    NewTask {
        list_id: String,
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Due date as YYYY-MM-DD
        #[arg(long, default_value = "")]
        due: String,
        /// high, medium or low
        #[arg(long)]
        priority: Option<String>,
    },
    /// Change a task's fields
    EditTask {
        list_id: String,
        task_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Due date as YYYY-MM-DD; empty string clears it
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        priority: Option<String>,
    },
    /// Flip a task between open and closed
    Toggle { list_id: String, task_id: String },
    /// Delete a task
    DeleteTask { list_id: String, task_id: String },
}
