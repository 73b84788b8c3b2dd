use std::sync::Arc;

use tasklist_core::Priority;
use tasklist_service::TaskListService;
use tracing::{debug, error, info, warn};

use crate::action::Action;
use crate::fence::{FetchFence, FetchScope};
use crate::form::{ListForm, TaskForm};
use crate::screen::Screen;
use crate::state::{AppState, View};
use crate::store::Store;

/// Result of a user intent that may contact the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server accepted the change and it was folded into the store.
    Applied,
    /// Blocked locally before any request was made.
    Rejected,
    /// The request failed; the store keeps its previous snapshot.
    Failed,
}

/// Drives navigation and keeps the store in sync with the remote service.
///
/// The service and store are handed in by the caller; every screen-level
/// operation goes through this type. Remote failures are logged here and
/// never escape as errors.
pub struct Controller<S> {
    service: S,
    store: Store,
    fence: FetchFence,
}

impl<S: TaskListService> Controller<S> {
    pub fn new(service: S, store: Store) -> Self {
        Self {
            service,
            store,
            fence: FetchFence::new(),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn snapshot(&self) -> Arc<AppState> {
        self.store.snapshot()
    }

    pub fn is_loading_lists(&self) -> bool {
        self.fence.is_loading(&FetchScope::TaskLists)
    }

    pub fn is_loading_tasks(&self, list_id: &str) -> bool {
        self.fence.is_loading(&FetchScope::Tasks(list_id.to_string()))
    }

    // -- Navigation --

    /// Switch views and run the target view's entry effect: the dashboard
    /// always reloads all lists, a list view always reloads its tasks.
    pub async fn navigate(&self, view: View, list_id: Option<String>, task_id: Option<String>) {
        let state = self.store.dispatch(Action::SetView {
            view,
            list_id,
            task_id,
        });
        match Screen::resolve(&state) {
            Some(Screen::Dashboard) => self.load_task_lists().await,
            Some(Screen::TaskList { list_id }) => self.load_tasks(list_id).await,
            Some(_) => {}
            None => warn!(%view, "view entered without the identifiers it requires"),
        }
    }

    pub async fn load_task_lists(&self) {
        let ticket = self.fence.begin(FetchScope::TaskLists);
        let result = self.service.list_task_lists().await;
        if !self.fence.finish(ticket) {
            debug!("discarding stale task list response");
            return;
        }
        match result {
            Ok(lists) => {
                self.store.dispatch(Action::SetTaskLists(lists));
            }
            Err(e) => error!("failed to load task lists: {e}"),
        }
    }

    pub async fn load_tasks(&self, list_id: &str) {
        let ticket = self.fence.begin(FetchScope::Tasks(list_id.to_string()));
        let result = self.service.list_tasks(list_id).await;
        if !self.fence.finish(ticket) {
            debug!(list_id, "discarding stale task response");
            return;
        }
        match result {
            Ok(tasks) => {
                self.store.dispatch(Action::SetTasks {
                    list_id: list_id.to_string(),
                    tasks,
                });
            }
            Err(e) => error!(list_id, "failed to load tasks: {e}"),
        }
    }

    // -- Filters --

    pub fn set_search(&self, query: &str) {
        self.store.dispatch(Action::SetSearch(query.to_string()));
    }

    pub fn set_priority_filter(&self, priority: Option<Priority>) {
        self.store.dispatch(Action::SetPriorityFilter(priority));
    }

    // -- Forms --

    /// Fields for the list form: the cached list when editing, blank otherwise.
    pub fn list_form(&self) -> ListForm {
        let state = self.snapshot();
        match Screen::resolve(&state) {
            Some(Screen::EditList { list_id }) => state
                .task_list(list_id)
                .map(ListForm::from_list)
                .unwrap_or_default(),
            _ => ListForm::default(),
        }
    }

    /// Fields for the task form: the cached task when editing, blank otherwise.
    pub fn task_form(&self) -> TaskForm {
        let state = self.snapshot();
        match Screen::resolve(&state) {
            Some(Screen::EditTask { list_id, task_id }) => state
                .task(list_id, task_id)
                .map(TaskForm::from_task)
                .unwrap_or_default(),
            _ => TaskForm::default(),
        }
    }

    /// Create or update a list depending on the active view, then return to
    /// the dashboard.
    pub async fn submit_list_form(&self, form: &ListForm) -> Outcome {
        if !form.can_submit() {
            return Outcome::Rejected;
        }
        let state = self.snapshot();
        let result = match Screen::resolve(&state) {
            Some(Screen::CreateList) => {
                let Ok(input) = form.to_new_list() else {
                    return Outcome::Rejected;
                };
                self.service
                    .create_task_list(&input)
                    .await
                    .map(Action::AddTaskList)
            }
            Some(Screen::EditList { list_id }) => {
                let Some(base) = state.task_list(list_id) else {
                    warn!(list_id, "edited list is not cached");
                    return Outcome::Rejected;
                };
                let Ok(list) = form.apply_to(base) else {
                    return Outcome::Rejected;
                };
                self.service
                    .update_task_list(list_id, &list)
                    .await
                    .map(Action::UpdateTaskList)
            }
            _ => {
                warn!(view = %state.current_view, "list form submitted outside a list form");
                return Outcome::Rejected;
            }
        };

        match result {
            Ok(action) => {
                info!("saved task list");
                self.store.dispatch(action);
                self.navigate(state.current_view.parent(), None, None).await;
                Outcome::Applied
            }
            Err(e) => {
                error!("failed to save task list: {e}");
                Outcome::Failed
            }
        }
    }

    /// Create or update a task in the active list, then return to that list.
    pub async fn submit_task_form(&self, form: &TaskForm) -> Outcome {
        if !form.can_submit() {
            return Outcome::Rejected;
        }
        let state = self.snapshot();
        let (list_id, result) = match Screen::resolve(&state) {
            Some(Screen::CreateTask { list_id }) => {
                let Ok(input) = form.to_new_task() else {
                    return Outcome::Rejected;
                };
                (list_id, self.service.create_task(list_id, &input).await)
            }
            Some(Screen::EditTask { list_id, task_id }) => {
                let Some(base) = state.task(list_id, task_id) else {
                    warn!(list_id, task_id, "edited task is not cached");
                    return Outcome::Rejected;
                };
                let Ok(task) = form.apply_to(base) else {
                    return Outcome::Rejected;
                };
                (list_id, self.service.update_task(list_id, task_id, &task).await)
            }
            _ => {
                warn!(view = %state.current_view, "task form submitted outside a task form");
                return Outcome::Rejected;
            }
        };

        match result {
            Ok(task) => {
                info!(list_id, task_id = %task.id, "saved task");
                let action = if state.current_view == View::CreateTask {
                    Action::AddTask {
                        list_id: list_id.to_string(),
                        task,
                    }
                } else {
                    Action::UpdateTask {
                        list_id: list_id.to_string(),
                        task,
                    }
                };
                self.store.dispatch(action);
                self.navigate(state.current_view.parent(), Some(list_id.to_string()), None)
                    .await;
                Outcome::Applied
            }
            Err(e) => {
                error!(list_id, "failed to save task: {e}");
                Outcome::Failed
            }
        }
    }

    // -- Task list view operations --

    /// Flip a task between open and closed in the active list. The cache is
    /// only updated once the server has accepted the change.
    pub async fn toggle_task_status(&self, task_id: &str) -> Outcome {
        let state = self.snapshot();
        let Some(list_id) = state.current_task_list_id.as_deref() else {
            return Outcome::Rejected;
        };
        let Some(task) = state.task(list_id, task_id) else {
            warn!(list_id, task_id, "toggled task is not cached");
            return Outcome::Rejected;
        };
        let updated = task.with_toggled_status();
        match self.service.update_task(list_id, task_id, &updated).await {
            Ok(_) => {
                debug!(list_id, task_id, status = %updated.status, "toggled task status");
                self.store.dispatch(Action::UpdateTask {
                    list_id: list_id.to_string(),
                    task: updated,
                });
                Outcome::Applied
            }
            Err(e) => {
                error!(list_id, task_id, "failed to update task status: {e}");
                Outcome::Failed
            }
        }
    }

    pub async fn delete_task(&self, task_id: &str) -> Outcome {
        let state = self.snapshot();
        let Some(list_id) = state.current_task_list_id.as_deref() else {
            return Outcome::Rejected;
        };
        match self.service.delete_task(list_id, task_id).await {
            Ok(()) => {
                self.store.dispatch(Action::DeleteTask {
                    list_id: list_id.to_string(),
                    task_id: task_id.to_string(),
                });
                Outcome::Applied
            }
            Err(e) => {
                error!(list_id, task_id, "failed to delete task: {e}");
                Outcome::Failed
            }
        }
    }

    /// Delete a list and its cached tasks. Leaves any view scoped to it for
    /// the dashboard.
    pub async fn delete_list(&self, list_id: &str) -> Outcome {
        if let Err(e) = self.service.delete_task_list(list_id).await {
            error!(list_id, "failed to delete task list: {e}");
            return Outcome::Failed;
        }
        let state = self.store.dispatch(Action::DeleteTaskList(list_id.to_string()));
        if state.current_task_list_id.as_deref() == Some(list_id) {
            self.navigate(View::Dashboard, None, None).await;
        }
        Outcome::Applied
    }
}
