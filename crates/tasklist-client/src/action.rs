use tasklist_core::{Priority, Task, TaskList};

use crate::state::View;

/// Every state change the store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetView {
        view: View,
        list_id: Option<String>,
        task_id: Option<String>,
    },
    SetTaskLists(Vec<TaskList>),
    AddTaskList(TaskList),
    UpdateTaskList(TaskList),
    DeleteTaskList(String),
    SetTasks {
        list_id: String,
        tasks: Vec<Task>,
    },
    AddTask {
        list_id: String,
        task: Task,
    },
    UpdateTask {
        list_id: String,
        task: Task,
    },
    DeleteTask {
        list_id: String,
        task_id: String,
    },
    SetSearch(String),
    SetPriorityFilter(Option<Priority>),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetView { .. } => "SetView",
            Action::SetTaskLists(_) => "SetTaskLists",
            Action::AddTaskList(_) => "AddTaskList",
            Action::UpdateTaskList(_) => "UpdateTaskList",
            Action::DeleteTaskList(_) => "DeleteTaskList",
            Action::SetTasks { .. } => "SetTasks",
            Action::AddTask { .. } => "AddTask",
            Action::UpdateTask { .. } => "UpdateTask",
            Action::DeleteTask { .. } => "DeleteTask",
            Action::SetSearch(_) => "SetSearch",
            Action::SetPriorityFilter(_) => "SetPriorityFilter",
        }
    }
}
