use crate::state::{AppState, View};

/// The active screen together with the identifiers it is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    Dashboard,
    TaskList { list_id: &'a str },
    CreateList,
    EditList { list_id: &'a str },
    CreateTask { list_id: &'a str },
    EditTask { list_id: &'a str, task_id: &'a str },
}

impl<'a> Screen<'a> {
    /// Interpret the navigation triple. Identifiers a view does not use are
    /// ignored; `None` when a view is missing one it requires.
    pub fn resolve(state: &'a AppState) -> Option<Screen<'a>> {
        let list_id = state.current_task_list_id.as_deref();
        let task_id = state.current_task_id.as_deref();
        let screen = match state.current_view {
            View::Dashboard => Screen::Dashboard,
            View::CreateList => Screen::CreateList,
            View::TaskList => Screen::TaskList { list_id: list_id? },
            View::EditList => Screen::EditList { list_id: list_id? },
            View::CreateTask => Screen::CreateTask { list_id: list_id? },
            View::EditTask => Screen::EditTask {
                list_id: list_id?,
                task_id: task_id?,
            },
        };
        Some(screen)
    }

    pub fn view(&self) -> View {
        match self {
            Screen::Dashboard => View::Dashboard,
            Screen::TaskList { .. } => View::TaskList,
            Screen::CreateList => View::CreateList,
            Screen::EditList { .. } => View::EditList,
            Screen::CreateTask { .. } => View::CreateTask,
            Screen::EditTask { .. } => View::EditTask,
        }
    }

    pub fn list_id(&self) -> Option<&'a str> {
        match *self {
            Screen::TaskList { list_id }
            | Screen::EditList { list_id }
            | Screen::CreateTask { list_id }
            | Screen::EditTask { list_id, .. } => Some(list_id),
            Screen::Dashboard | Screen::CreateList => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(view: View, list_id: Option<&str>, task_id: Option<&str>) -> AppState {
        AppState {
            current_view: view,
            current_task_list_id: list_id.map(String::from),
            current_task_id: task_id.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn views_without_scope_ignore_ids() {
        let state = at(View::Dashboard, Some("L1"), Some("T1"));
        assert_eq!(Screen::resolve(&state), Some(Screen::Dashboard));
        let state = at(View::CreateList, None, None);
        assert_eq!(Screen::resolve(&state), Some(Screen::CreateList));
    }

    #[test]
    fn list_scoped_views_require_list_id() {
        for view in [View::TaskList, View::EditList, View::CreateTask] {
            assert!(view.requires_list());
            assert_eq!(Screen::resolve(&at(view, None, None)), None);
            let state = at(view, Some("L1"), None);
            let screen = Screen::resolve(&state).unwrap();
            assert_eq!(screen.view(), view);
            assert_eq!(screen.list_id(), Some("L1"));
        }
    }

    #[test]
    fn edit_task_requires_both_ids() {
        assert_eq!(Screen::resolve(&at(View::EditTask, Some("L1"), None)), None);
        assert_eq!(Screen::resolve(&at(View::EditTask, None, Some("T1"))), None);
        let state = at(View::EditTask, Some("L1"), Some("T1"));
        assert_eq!(
            Screen::resolve(&state),
            Some(Screen::EditTask {
                list_id: "L1",
                task_id: "T1"
            })
        );
    }

    #[test]
    fn forms_return_to_their_parent() {
        assert_eq!(View::CreateList.parent(), View::Dashboard);
        assert_eq!(View::EditList.parent(), View::Dashboard);
        assert_eq!(View::CreateTask.parent(), View::TaskList);
        assert_eq!(View::EditTask.parent(), View::TaskList);
        assert!(View::ALL.iter().filter(|v| v.is_form()).count() == 4);
    }
}
