//! Loading Overlay Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || { store.loading().get() > 0 }>
            <div class="loading-overlay">
                <div class="spinner"></div>
            </div>
        </Show>
    }
}
