//! Toast Stack Component
//!
//! Notifications in the corner; each one expires on its own timer or can
//! be closed by hand.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields, ToastEntry};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-container">
            <For
                each=move || store.toasts().get()
                key=|entry| entry.id
                children=move |entry: ToastEntry| {
                    let id = entry.id;
                    let kind = entry.toast.kind;
                    let (headline, details) = entry.toast.headline_and_details();
                    view! {
                        <div class=format!("toast {}", kind.as_str())>
                            <i class=kind.icon_class()></i>
                            <div class="toast-body">
                                <div class="toast-headline">{headline}</div>
                                {details.map(|d| view! { <div class="toast-details">{d}</div> })}
                            </div>
                            <button class="toast-close" on:click=move |_| store_dismiss_toast(&store, id)>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
