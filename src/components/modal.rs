//! Modal Frame Component
//!
//! Backdrop plus dialog box shared by the task and category editors.

use leptos::prelude::*;

/// Modal dialog; clicking the backdrop or the × closes it
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal active" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{move || title.get()}</h3>
                    <button type="button" class="modal-close" on:click=move |_| on_close.run(())>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
