use dioxus::prelude::*;
use tasklist_core::{Action, Filter, FilterCounts, Store, TaskId};
use tracing::info;

mod components;
mod config;
mod state;

use components::{AddTask, FilterControls, ListTask};
use config::WebConfig;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    let config = WebConfig::load().unwrap_or_else(|err| {
        eprintln!("Falling back to default configuration: {err:#}");
        WebConfig::default()
    });

    if let Err(err) = dioxus::logger::init(config.log_level()) {
        eprintln!("Failed to initialise logging: {err}");
    }
    info!(title = %config.title, "starting task list");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

/// Root component. Owns the store and wires the child components to it.
#[component]
fn App() -> Element {
    let config = use_context::<WebConfig>();
    let (store, snapshot) = state::use_store_provider(Store::new);

    let state = snapshot();
    let counts = FilterCounts::of(&state.tasks);

    let add_store = store.clone();
    let handle_add = move |description: String| {
        let id = add_store.add_task(description);
        info!(id, "task added");
    };

    let toggle_store = store.clone();
    let handle_toggle = move |id: TaskId| {
        info!(id, "task toggled");
        toggle_store.dispatch(Action::toggle_task(id));
    };

    let edit_store = store.clone();
    let handle_edit = move |(id, description): (TaskId, String)| {
        info!(id, "task edited");
        edit_store.dispatch(Action::edit_task(id, description));
    };

    let handle_filter = move |filter: Filter| {
        info!(%filter, "filter selected");
        store.dispatch(Action::set_filter(filter));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        main { class: "min-h-screen bg-gray-50 py-8",
            div { class: "max-w-xl mx-auto px-6 bg-white rounded-lg shadow-md p-6",
                h1 { class: "text-3xl font-bold text-gray-900 mb-6 text-center", "{config.title}" }
                AddTask { on_add: handle_add }
                FilterControls { active: state.filter, counts: counts, on_select: handle_filter }
                ListTask {
                    tasks: state.tasks.clone(),
                    filter: state.filter,
                    on_toggle: handle_toggle,
                    on_edit: handle_edit,
                }
            }
        }
    }
}
