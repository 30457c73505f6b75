//! Filter Bar Component
//!
//! Status/priority/category selects, removable chips for the active
//! criteria, and a clear-all button. The panel body can be collapsed.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::filter::{FilterChip, TaskFilter};
use crate::models::{Priority, TaskStatus};
use crate::store::AppStateStoreFields;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;
    let filter = store.filter();
    let collapsed = store.filters_collapsed();

    let chips = move || filter.get().chips(&store.categories().get());

    view! {
        <div class="filter-panel">
            <div class="filter-header" on:click=move |_| collapsed.update(|c| *c = !*c)>
                <span>
                    <i class="fas fa-filter"></i>
                    " Filters"
                </span>
                <div class="filter-controls" on:click=|ev| ev.stop_propagation()>
                    <Show when=move || !filter.get().is_empty()>
                        <button class="btn btn-outline clear-filters" on:click=move |_| ctx.apply_filter(TaskFilter::default())>
                            <i class="fas fa-times"></i>
                            " Clear"
                        </button>
                    </Show>
                    <button class="btn btn-outline" on:click=move |_| collapsed.update(|c| *c = !*c)>
                        <i class=move || if collapsed.get() { "fas fa-chevron-down" } else { "fas fa-chevron-up" }></i>
                    </button>
                </div>
            </div>

            <div class=move || if collapsed.get() { "filter-content collapsed" } else { "filter-content" }>
                <select
                    prop:value=move || filter.get().status.map(|s| s.as_str()).unwrap_or_default()
                    on:change=move |ev| {
                        let status = TaskStatus::parse(&event_target_value(&ev));
                        ctx.apply_filter(TaskFilter { status, ..filter.get_untracked() });
                    }
                >
                    <option value="">"All statuses"</option>
                    {TaskStatus::ALL.into_iter().map(|s| view! { <option value=s.as_str()>{s.label()}</option> }).collect_view()}
                </select>

                <select
                    prop:value=move || filter.get().priority.map(|p| p.as_str()).unwrap_or_default()
                    on:change=move |ev| {
                        let priority = Priority::parse(&event_target_value(&ev));
                        ctx.apply_filter(TaskFilter { priority, ..filter.get_untracked() });
                    }
                >
                    <option value="">"All priorities"</option>
                    {Priority::ALL.into_iter().map(|p| view! { <option value=p.as_str()>{p.label()}</option> }).collect_view()}
                </select>

                <select
                    prop:value=move || filter.get().category_id.map(|id| id.to_string()).unwrap_or_default()
                    on:change=move |ev| {
                        let category_id = event_target_value(&ev).parse::<u32>().ok();
                        ctx.apply_filter(TaskFilter { category_id, ..filter.get_untracked() });
                    }
                >
                    <option value="">"All categories"</option>
                    <For
                        each=move || store.categories().get()
                        key=|c| (c.id, c.name.clone())
                        children=|c| view! { <option value=c.id.to_string()>{c.name}</option> }
                    />
                </select>
            </div>

            <Show when=move || !chips().is_empty()>
                <div class="active-filters">
                    {move || chips().into_iter().map(|chip: FilterChip| {
                        let kind = chip.kind;
                        view! {
                            <div class="active-filter-tag">
                                <i class=chip.icon_class()></i>
                                <span>{chip.label}</span>
                                <button
                                    class="remove-filter"
                                    title="Remove filter"
                                    on:click=move |_| ctx.apply_filter(filter.get_untracked().without(kind))
                                >
                                    <i class="fas fa-times"></i>
                                </button>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
