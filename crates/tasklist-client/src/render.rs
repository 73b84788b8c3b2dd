use tasklist_client::derive::{
    average_progress, filtered_task_lists, filtered_tasks, list_progress, task_counts,
    task_progress,
};
use tasklist_client::AppState;
use tasklist_core::task::due_date_input;
use tasklist_core::Status;

fn percent(ratio: f64) -> String {
    format!("{:>3}%", (ratio * 100.0).round() as i64)
}

pub fn dashboard(state: &AppState) {
    let lists = filtered_task_lists(state);
    println!(
        "{} lists, average progress {}",
        state.task_lists.len(),
        percent(average_progress(state))
    );
    if lists.is_empty() {
        println!("(no task lists)");
        return;
    }
    println!("{:<38} {:<24} {:>6} PROGRESS", "ID", "TITLE", "TASKS");
    for list in lists {
        println!(
            "{:<38} {:<24} {:>6} {}",
            list.id,
            list.title,
            list.count_or_zero(),
            percent(list_progress(list))
        );
    }
}

pub fn task_list(state: &AppState, list_id: &str) {
    let tasks = state.tasks_for(list_id);
    let counts = task_counts(tasks);
    let title = state
        .task_list(list_id)
        .map(|l| l.title.as_str())
        .unwrap_or(list_id);
    println!(
        "{title}: {} open, {} done, {} complete",
        counts.open,
        counts.closed,
        percent(task_progress(tasks))
    );
    let visible = filtered_tasks(state, list_id);
    if visible.is_empty() {
        println!("(no tasks)");
        return;
    }
    for task in visible {
        let mark = match task.status {
            Status::Open => "[ ]",
            Status::Closed => "[x]",
        };
        let due = due_date_input(task.due_date.as_deref());
        println!(
            "{mark} {:<2} {:<38} {:<32} {due}",
            task.priority.symbol(),
            task.id,
            task.title
        );
    }
}
