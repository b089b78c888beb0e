mod task_composer;
mod task_list;
mod task_list_row;
mod task_summary;

pub use task_composer::TaskComposer;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use task_summary::TaskSummary;
