pub mod error;
pub mod task;
pub mod task_list;

pub use error::{validate_title, TaskListError};
pub use task::{NewTask, Priority, Status, Task};
pub use task_list::{NewTaskList, TaskList};
