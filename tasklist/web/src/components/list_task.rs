use super::TaskRow;
use dioxus::prelude::*;
use tasklist_core::{Filter, Task, TaskId, visible_tasks};

/// The tasks visible under `filter`, one row each.
#[component]
pub fn ListTask(
    tasks: Vec<Task>,
    filter: Filter,
    on_toggle: EventHandler<TaskId>,
    on_edit: EventHandler<(TaskId, String)>,
) -> Element {
    let visible = visible_tasks(&tasks, filter);

    if visible.is_empty() {
        return rsx! {
            p { class: "text-center text-gray-500 py-8", "Nothing to show" }
        };
    }

    rsx! {
        ul { class: "divide-y divide-gray-200",
            {visible.into_iter().map(|task| rsx! {
                TaskRow {
                    key: "{task.id}",
                    task: task.clone(),
                    on_toggle: on_toggle,
                    on_edit: on_edit,
                }
            })}
        }
    }
}
