use std::collections::HashMap;
use std::fmt;

use tasklist_core::{Priority, Task, TaskList};

/// The six navigation states of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Dashboard,
    TaskList,
    CreateList,
    EditList,
    CreateTask,
    EditTask,
}

impl View {
    pub const ALL: &[View] = &[
        View::Dashboard,
        View::TaskList,
        View::CreateList,
        View::EditList,
        View::CreateTask,
        View::EditTask,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::TaskList => "tasklist",
            View::CreateList => "createList",
            View::EditList => "editList",
            View::CreateTask => "createTask",
            View::EditTask => "editTask",
        }
    }

    pub fn requires_list(&self) -> bool {
        matches!(
            self,
            View::TaskList | View::EditList | View::CreateTask | View::EditTask
        )
    }

    pub fn requires_task(&self) -> bool {
        matches!(self, View::EditTask)
    }

    pub fn is_form(&self) -> bool {
        matches!(
            self,
            View::CreateList | View::EditList | View::CreateTask | View::EditTask
        )
    }

    /// Where a form returns to after a successful submission.
    pub fn parent(&self) -> View {
        match self {
            View::CreateTask | View::EditTask => View::TaskList,
            _ => View::Dashboard,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable snapshot of everything the client knows.
///
/// `tasks` is the normalized per-list cache: an absent key means the list's
/// tasks were never loaded, an empty vector means loaded and empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub task_lists: Vec<TaskList>,
    pub tasks: HashMap<String, Vec<Task>>,
    pub current_view: View,
    pub current_task_list_id: Option<String>,
    pub current_task_id: Option<String>,
    pub search_query: String,
    pub selected_priority: Option<Priority>,
}

impl AppState {
    pub fn task_list(&self, id: &str) -> Option<&TaskList> {
        self.task_lists.iter().find(|l| l.id == id)
    }

    /// Cached tasks for a list; empty when the list was never loaded.
    pub fn tasks_for(&self, list_id: &str) -> &[Task] {
        self.tasks.get(list_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn task(&self, list_id: &str, task_id: &str) -> Option<&Task> {
        self.tasks_for(list_id).iter().find(|t| t.id == task_id)
    }

    pub fn current_task_list(&self) -> Option<&TaskList> {
        self.current_task_list_id
            .as_deref()
            .and_then(|id| self.task_list(id))
    }
}
