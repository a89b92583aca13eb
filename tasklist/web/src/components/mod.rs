mod add_task;
mod filter_controls;
mod list_task;
mod task_row;

pub use add_task::AddTask;
pub use filter_controls::FilterControls;
pub use list_task::ListTask;
pub use task_row::TaskRow;
