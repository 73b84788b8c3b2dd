use tasklist_core::task::{due_date_from_input, due_date_input};
use tasklist_core::{
    validate_title, NewTask, NewTaskList, Priority, Status, Task, TaskList, TaskListError,
};

/// Editable fields of the create/edit list form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListForm {
    pub title: String,
    pub description: String,
}

impl ListForm {
    pub fn from_list(list: &TaskList) -> Self {
        Self {
            title: list.title.clone(),
            description: list.description.clone().unwrap_or_default(),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
    }

    fn description(&self) -> Option<String> {
        let description = self.description.trim();
        (!description.is_empty()).then(|| description.to_string())
    }

    pub fn to_new_list(&self) -> Result<NewTaskList, TaskListError> {
        Ok(NewTaskList::empty(validate_title(&self.title)?, self.description()))
    }

    /// The full list to send on update: `base` with the edited fields.
    pub fn apply_to(&self, base: &TaskList) -> Result<TaskList, TaskListError> {
        Ok(TaskList {
            title: validate_title(&self.title)?,
            description: self.description(),
            ..base.clone()
        })
    }
}

/// Editable fields of the create/edit task form. `due_date` holds a
/// calendar date (`YYYY-MM-DD`) or is blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: due_date_input(task.due_date.as_deref()),
            priority: task.priority,
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty() && due_date_from_input(&self.due_date).is_ok()
    }

    pub fn to_new_task(&self) -> Result<NewTask, TaskListError> {
        Ok(NewTask {
            title: validate_title(&self.title)?,
            description: self.description.trim().to_string(),
            due_date: due_date_from_input(&self.due_date)?,
            priority: self.priority,
            status: Status::Open,
        })
    }

    /// The full task to send on update. Status is kept from `base`.
    pub fn apply_to(&self, base: &Task) -> Result<Task, TaskListError> {
        Ok(Task {
            title: validate_title(&self.title)?,
            description: self.description.trim().to_string(),
            due_date: due_date_from_input(&self.due_date)?,
            priority: self.priority,
            ..base.clone()
        })
    }
}
