//! Confirm Dialog Component
//!
//! Answers `Shell::confirm` prompts raised before a delete.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let prompt = ctx.store.confirm_prompt();

    view! {
        {move || prompt.get().map(|message| view! {
            <div class="modal active confirm-modal" on:click=move |_| ctx.answer_confirm(false)>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <p class="confirm-message">{message}</p>
                    <div class="form-actions">
                        <button type="button" class="btn btn-outline" on:click=move |_| ctx.answer_confirm(false)>
                            "Cancel"
                        </button>
                        <button type="button" class="btn btn-danger" on:click=move |_| ctx.answer_confirm(true)>
                            <i class="fas fa-trash"></i>
                            " Delete"
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}
