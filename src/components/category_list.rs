//! Category List View Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::format::format_date;
use crate::models::Category;
use crate::services;
use crate::store::{AppStateStoreFields, ModalState};

#[component]
pub fn CategoryList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    view! {
        <section class="view categories-view">
            <div class="categories-grid">
                {move || {
                    let categories = store.categories().get();
                    if categories.is_empty() {
                        view! { <p class="text-muted">"No categories yet."</p> }.into_any()
                    } else {
                        categories
                            .into_iter()
                            .map(|category| view! { <CategoryCard category=category /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: Category) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = category.id;
    let editing = category.clone();

    view! {
        <div class="category-card">
            <div class="category-actions">
                <button
                    class="btn btn-outline"
                    title="Edit"
                    on:click=move |_| ctx.store.category_modal().set(ModalState::Edit(editing.clone()))
                >
                    <i class="fas fa-edit"></i>
                </button>
                <button
                    class="btn btn-danger"
                    title="Delete"
                    on:click=move |_| ctx.spawn(move |svc| async move {
                        services::categories::delete_category(&svc, id).await
                    })
                >
                    <i class="fas fa-trash"></i>
                </button>
            </div>
            <div class="category-header">
                <div class="category-color" style=format!("background-color: {}", category.color)></div>
                <div class="category-name">{category.name.clone()}</div>
            </div>
            {category.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                <div class="category-description">{d}</div>
            })}
            <div class="category-stats">
                <span>{format!("{} tasks", category.task_count)}</span>
                <span class="text-xs">{format_date(category.created_at.as_deref())}</span>
            </div>
        </div>
    }
}
