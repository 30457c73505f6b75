//! Category Modal Component

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::AppContext;
use crate::models::CategoryDraft;
use crate::services;
use crate::store::{AppStateStoreFields, ModalState};

#[component]
pub fn CategoryModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let modal = ctx.store.category_modal();

    view! {
        <Show when=move || modal.with(ModalState::is_open)>
            <CategoryForm />
        </Show>
    }
}

#[component]
fn CategoryForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let modal = ctx.store.category_modal();

    let editing_id = modal.with_untracked(|m| m.editing().map(|c| c.id));
    let draft = RwSignal::new(modal.with_untracked(|m| m.editing().map(CategoryDraft::from).unwrap_or_default()));
    let title = if editing_id.is_some() { "Edit Category" } else { "New Category" };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = draft.get_untracked();
        ctx.spawn(move |svc| async move {
            match editing_id {
                Some(id) => services::categories::update_category(&svc, id, &draft).await,
                None => services::categories::create_category(&svc, &draft).await,
            }
        });
    };

    view! {
        <Modal title=title.to_string() on_close=move |_: ()| modal.set(ModalState::Closed)>
            <form class="modal-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="category-name">"Name"</label>
                    <input
                        id="category-name"
                        type="text"
                        required
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="category-description">"Description"</label>
                    <textarea
                        id="category-description"
                        rows="2"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label for="category-color">"Color"</label>
                    <div class="color-input">
                        <input
                            id="category-color"
                            type="color"
                            prop:value=move || draft.with(|d| d.color.clone())
                            on:input=move |ev| draft.update(|d| d.color = event_target_value(&ev))
                        />
                        <div
                            class="color-preview"
                            style=move || draft.with(|d| format!("background-color: {}", d.color))
                        ></div>
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
