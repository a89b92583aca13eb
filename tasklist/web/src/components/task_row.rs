use dioxus::prelude::*;
use tasklist_core::{EditMode, Task, TaskId};

/// One task: a checkbox, its description and an inline editor.
#[component]
pub fn TaskRow(
    task: Task,
    on_toggle: EventHandler<TaskId>,
    on_edit: EventHandler<(TaskId, String)>,
) -> Element {
    let mut mode = use_signal(EditMode::default);
    let id = task.id;

    let handle_commit = move |evt: FormEvent| {
        evt.prevent_default();
        let committed = mode.write().commit();
        if let Some(description) = committed {
            on_edit.call((id, description));
        }
    };

    let description_class = if task.is_done {
        "flex-1 text-gray-400 line-through"
    } else {
        "flex-1 text-gray-900"
    };

    let editing_text = mode.read().text().map(str::to_string);
    let current = task.description.clone();

    rsx! {
        li { class: "flex items-center space-x-3 py-2",
            input {
                r#type: "checkbox",
                checked: task.is_done,
                onchange: move |_| on_toggle.call(id),
                class: "h-4 w-4"
            }

            if let Some(text) = editing_text {
                form { class: "flex flex-1 space-x-2", onsubmit: handle_commit,
                    input {
                        r#type: "text",
                        value: "{text}",
                        oninput: move |evt: FormEvent| mode.write().set_text(evt.value()),
                        class: "flex-1 px-2 py-1 border border-gray-300 rounded",
                        autofocus: true
                    }
                    button {
                        r#type: "submit",
                        class: "px-3 py-1 bg-purple-600 text-white rounded hover:bg-purple-700",
                        "Save"
                    }
                    button {
                        r#type: "button",
                        onclick: move |_| mode.write().cancel(),
                        class: "px-3 py-1 border border-gray-300 text-gray-700 rounded hover:bg-gray-50",
                        "Cancel"
                    }
                }
            } else {
                span { class: description_class, "{task.description}" }
                button {
                    r#type: "button",
                    onclick: move |_| mode.write().enter(&current),
                    class: "px-3 py-1 text-sm text-purple-600 hover:underline",
                    "Edit"
                }
            }
        }
    }
}
