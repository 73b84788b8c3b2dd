use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::action::Action;
use crate::state::AppState;

/// Compute the snapshot that follows `state` once `action` is applied.
///
/// Pure: `state` is only read, and the same inputs always give the same
/// output. Missing cache keys and unmatched ids are absorbed as no-ops.
pub fn transition(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::SetView {
            view,
            list_id,
            task_id,
        } => {
            next.current_view = view;
            next.current_task_list_id = list_id;
            next.current_task_id = task_id;
        }
        Action::SetTaskLists(lists) => {
            next.task_lists = lists;
        }
        Action::AddTaskList(list) => {
            next.task_lists.push(list);
        }
        Action::UpdateTaskList(list) => {
            if let Some(slot) = next.task_lists.iter_mut().find(|l| l.id == list.id) {
                *slot = list;
            }
        }
        Action::DeleteTaskList(id) => {
            next.task_lists.retain(|l| l.id != id);
            next.tasks.remove(&id);
        }
        Action::SetTasks { list_id, tasks } => {
            next.tasks.insert(list_id, tasks);
        }
        Action::AddTask { list_id, task } => {
            next.tasks.entry(list_id).or_default().push(task);
        }
        Action::UpdateTask { list_id, task } => {
            if let Some(slot) = next
                .tasks
                .get_mut(&list_id)
                .and_then(|tasks| tasks.iter_mut().find(|t| t.id == task.id))
            {
                *slot = task;
            }
        }
        Action::DeleteTask { list_id, task_id } => {
            if let Some(tasks) = next.tasks.get_mut(&list_id) {
                tasks.retain(|t| t.id != task_id);
            }
        }
        Action::SetSearch(query) => {
            next.search_query = query;
        }
        Action::SetPriorityFilter(priority) => {
            next.selected_priority = priority;
        }
    }
    next
}

/// Shared handle to the current snapshot.
///
/// Clones point at the same store. Transitions are serialized: each one runs
/// to completion before the next is applied. Snapshots handed out earlier are
/// never touched again.
#[derive(Debug, Clone, Default)]
pub struct Store {
    current: Arc<Mutex<Arc<AppState>>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            current: Arc::new(Mutex::new(Arc::new(state))),
        }
    }

    pub fn snapshot(&self) -> Arc<AppState> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply `action` and return the resulting snapshot.
    pub fn dispatch(&self, action: Action) -> Arc<AppState> {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        debug!(action = action.name(), "dispatch");
        let next = Arc::new(transition(&current, action));
        *current = next.clone();
        next
    }
}
