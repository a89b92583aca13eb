use dioxus::prelude::*;
use tasklist_core::Draft;

/// Text box and button for adding a task. Blank input is ignored.
#[component]
pub fn AddTask(on_add: EventHandler<String>) -> Element {
    let mut draft = use_signal(Draft::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submitted = draft.write().submit();
        if let Some(description) = submitted {
            on_add.call(description);
        }
    };

    let text = draft.read().text().to_string();

    rsx! {
        form { class: "flex space-x-3 mb-6", onsubmit: handle_submit,
            input {
                r#type: "text",
                placeholder: "What needs doing?",
                value: "{text}",
                oninput: move |evt: FormEvent| draft.write().set_text(evt.value()),
                class: "flex-1 px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500 focus:border-transparent",
                autofocus: true
            }
            button {
                r#type: "submit",
                class: "px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700 transition-colors font-medium",
                "Add Task"
            }
        }
    }
}
