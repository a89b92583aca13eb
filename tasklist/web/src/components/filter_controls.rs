use dioxus::prelude::*;
use tasklist_core::{Filter, FilterCounts};

/// One button per filter, with the number of tasks each would show.
#[component]
pub fn FilterControls(
    active: Filter,
    counts: FilterCounts,
    on_select: EventHandler<Filter>,
) -> Element {
    rsx! {
        div { class: "flex space-x-2 mb-4",
            {Filter::ALL_FILTERS.into_iter().map(move |filter| {
                let class = if filter == active {
                    "px-3 py-1 rounded-full text-sm font-medium bg-purple-600 text-white"
                } else {
                    "px-3 py-1 rounded-full text-sm font-medium bg-gray-100 text-gray-700 hover:bg-gray-200"
                };
                let label = filter.label();
                let count = counts.for_filter(filter);
                rsx! {
                    button {
                        key: "{filter}",
                        r#type: "button",
                        class: class,
                        onclick: move |_| on_select.call(filter),
                        "{label} ({count})"
                    }
                }
            })}
        }
    }
}
