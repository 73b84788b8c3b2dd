//! View data computed from a snapshot on every render. Nothing here is
//! stored back into the state.

use tasklist_core::{Status, Task, TaskList};

use crate::state::AppState;

fn matches_search(title: &str, query: &str) -> bool {
    title.to_lowercase().contains(&query.to_lowercase())
}

/// Lists whose title contains the search query, ignoring case.
pub fn filtered_task_lists(state: &AppState) -> Vec<&TaskList> {
    state
        .task_lists
        .iter()
        .filter(|l| matches_search(&l.title, &state.search_query))
        .collect()
}

/// Cached tasks of `list_id` matching both the search query and the
/// priority filter.
pub fn filtered_tasks<'a>(state: &'a AppState, list_id: &str) -> Vec<&'a Task> {
    state
        .tasks_for(list_id)
        .iter()
        .filter(|t| matches_search(&t.title, &state.search_query))
        .filter(|t| state.selected_priority.map_or(true, |p| t.priority == p))
        .collect()
}

/// Completion ratio as reported by the server.
pub fn list_progress(list: &TaskList) -> f64 {
    list.progress_or_zero()
}

/// Mean of every list's server-reported progress; 0 with no lists.
pub fn average_progress(state: &AppState) -> f64 {
    if state.task_lists.is_empty() {
        return 0.0;
    }
    let total: f64 = state.task_lists.iter().map(list_progress).sum();
    total / state.task_lists.len() as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub open: usize,
    pub closed: usize,
}

impl TaskCounts {
    pub fn total(&self) -> usize {
        self.open + self.closed
    }
}

pub fn task_counts(tasks: &[Task]) -> TaskCounts {
    tasks
        .iter()
        .fold(TaskCounts::default(), |mut counts, t| {
            match t.status {
                Status::Open => counts.open += 1,
                Status::Closed => counts.closed += 1,
            }
            counts
        })
}

/// Closed/total over the cached tasks, recomputed from detail rather than
/// taken from the list summary. 0 for an empty list.
pub fn task_progress(tasks: &[Task]) -> f64 {
    let counts = task_counts(tasks);
    if counts.total() == 0 {
        return 0.0;
    }
    counts.closed as f64 / counts.total() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::store::transition;
    use tasklist_core::Priority;

    fn list(id: &str, title: &str, progress: Option<f64>) -> TaskList {
        TaskList {
            id: id.into(),
            title: title.into(),
            description: None,
            count: None,
            progress,
            tasks: None,
        }
    }

    fn task(id: &str, title: &str, priority: Priority, status: Status) -> Task {
        Task {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            due_date: None,
            priority,
            status,
        }
    }

    fn state_with_tasks(tasks: Vec<Task>) -> AppState {
        transition(
            &AppState::default(),
            Action::SetTasks {
                list_id: "L1".into(),
                tasks,
            },
        )
    }

    #[test]
    fn list_search_is_case_insensitive_substring() {
        let state = AppState {
            task_lists: vec![list("L1", "Groceries", None), list("L2", "Work Plan", None)],
            search_query: "work".into(),
            ..Default::default()
        };
        let titles: Vec<_> = filtered_task_lists(&state)
            .iter()
            .map(|l| l.title.as_str())
            .collect();
        assert_eq!(titles, ["Work Plan"]);
    }

    #[test]
    fn empty_search_matches_everything() {
        let state = AppState {
            task_lists: vec![list("L1", "a", None), list("L2", "b", None)],
            ..Default::default()
        };
        assert_eq!(filtered_task_lists(&state).len(), 2);
    }

    #[test]
    fn priority_filter_keeps_only_matching_tasks() {
        let mut state = state_with_tasks(vec![
            task("T1", "Pay rent", Priority::High, Status::Open),
            task("T2", "Water plants", Priority::Low, Status::Open),
            task("T3", "File taxes", Priority::High, Status::Closed),
            task("T4", "Call mom", Priority::Medium, Status::Open),
        ]);
        state.selected_priority = Some(Priority::High);

        let ids: Vec<_> = filtered_tasks(&state, "L1").iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["T1", "T3"]);

        state.search_query = "TAXES".into();
        let ids: Vec<_> = filtered_tasks(&state, "L1").iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["T3"]);
    }

    #[test]
    fn filtered_tasks_of_unloaded_list_is_empty() {
        assert!(filtered_tasks(&AppState::default(), "L9").is_empty());
    }

    #[test]
    fn progress_is_recomputed_from_cached_tasks() {
        let tasks = vec![
            task("T1", "a", Priority::Low, Status::Open),
            task("T2", "b", Priority::Low, Status::Closed),
            task("T3", "c", Priority::Low, Status::Closed),
        ];
        assert!((task_progress(&tasks) - 2.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(task_progress(&[]), 0.0);
        assert_eq!(task_counts(&tasks), TaskCounts { open: 1, closed: 2 });
    }

    #[test]
    fn average_progress_treats_missing_as_zero() {
        assert_eq!(average_progress(&AppState::default()), 0.0);

        let state = AppState {
            task_lists: vec![
                list("L1", "a", Some(1.0)),
                list("L2", "b", None),
                list("L3", "c", Some(0.5)),
            ],
            ..Default::default()
        };
        assert_eq!(average_progress(&state), 0.5);
        assert_eq!(list_progress(&state.task_lists[1]), 0.0);
    }
}
