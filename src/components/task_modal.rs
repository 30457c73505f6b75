//! Task Modal Component
//!
//! Create/edit form for a task. The form is refilled whenever the modal
//! opens, from the edited task or from defaults.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::AppContext;
use crate::models::{Priority, TaskDraft, TaskStatus};
use crate::services;
use crate::store::{AppStateStoreFields, ModalState};

#[component]
pub fn TaskModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let modal = ctx.store.task_modal();

    view! {
        <Show when=move || modal.with(ModalState::is_open)>
            <TaskForm />
        </Show>
    }
}

#[component]
fn TaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;
    let modal = store.task_modal();

    let editing_id = modal.with_untracked(|m| m.editing().map(|t| t.id));
    let draft = RwSignal::new(modal.with_untracked(|m| m.editing().map(TaskDraft::from).unwrap_or_default()));

    let title = if editing_id.is_some() { "Edit Task" } else { "New Task" };
    let close = move |_: ()| modal.set(ModalState::Closed);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = draft.get_untracked();
        ctx.spawn(move |svc| async move {
            match editing_id {
                Some(id) => services::tasks::update_task(&svc, id, &draft).await,
                None => services::tasks::create_task(&svc, &draft).await,
            }
        });
    };

    view! {
        <Modal title=title.to_string() on_close=close>
            <form class="modal-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="task-title">"Title"</label>
                    <input
                        id="task-title"
                        type="text"
                        required
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="task-description">"Description"</label>
                    <textarea
                        id="task-description"
                        rows="3"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="task-priority">"Priority"</label>
                        <select
                            id="task-priority"
                            prop:value=move || draft.with(|d| d.priority.as_str())
                            on:change=move |ev| {
                                if let Some(p) = Priority::parse(&event_target_value(&ev)) {
                                    draft.update(|d| d.priority = p);
                                }
                            }
                        >
                            {Priority::ALL.into_iter().map(|p| view! { <option value=p.as_str()>{p.label()}</option> }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="task-status">"Status"</label>
                        <select
                            id="task-status"
                            prop:value=move || draft.with(|d| d.status.as_str())
                            on:change=move |ev| {
                                if let Some(s) = TaskStatus::parse(&event_target_value(&ev)) {
                                    draft.update(|d| d.status = s);
                                }
                            }
                        >
                            {TaskStatus::ALL.into_iter().map(|s| view! { <option value=s.as_str()>{s.label()}</option> }).collect_view()}
                        </select>
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="task-category">"Category"</label>
                        <select
                            id="task-category"
                            prop:value=move || draft.with(|d| d.category_id.map(|id| id.to_string()).unwrap_or_default())
                            on:change=move |ev| {
                                let category_id = event_target_value(&ev).parse::<u32>().ok();
                                draft.update(|d| d.category_id = category_id);
                            }
                        >
                            <option value="">"No category"</option>
                            <For
                                each=move || store.categories().get()
                                key=|c| (c.id, c.name.clone())
                                children=|c| view! { <option value=c.id.to_string()>{c.name}</option> }
                            />
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="task-due-date">"Due date"</label>
                        <input
                            id="task-due-date"
                            type="datetime-local"
                            prop:value=move || draft.with(|d| d.due_date.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.due_date = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>
                </div>
                <div class="form-actions">
                    <button type="button" class="btn btn-outline" on:click=move |_| modal.set(ModalState::Closed)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">
                        <i class="fas fa-save"></i>
                        {if editing_id.is_some() { " Update" } else { " Create" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
