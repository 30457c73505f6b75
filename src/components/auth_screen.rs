//! Auth Screen Component
//!
//! Login and registration tabs shown while signed out.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::services;
use crate::store::{AppStateStoreFields, AuthTab};

#[component]
pub fn AuthScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let tab = ctx.store.auth_tab();

    let tab_class = move |which: AuthTab| {
        if tab.get() == which { "tab-btn active" } else { "tab-btn" }
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1 class="auth-title">
                    <i class="fas fa-list-check"></i>
                    " Task Manager"
                </h1>
                <div class="auth-tabs">
                    <button class=move || tab_class(AuthTab::Login) on:click=move |_| tab.set(AuthTab::Login)>
                        "Login"
                    </button>
                    <button class=move || tab_class(AuthTab::Register) on:click=move |_| tab.set(AuthTab::Register)>
                        "Register"
                    </button>
                </div>
                {move || match tab.get() {
                    AuthTab::Login => view! { <LoginForm /> }.into_any(),
                    AuthTab::Register => view! { <RegisterForm /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (username, password) = (username.get(), password.get());
        ctx.spawn(move |svc| async move {
            services::auth::login(&svc, &username, &password).await;
        });
    };

    view! {
        <form class="auth-form active" on:submit=on_submit>
            <div class="form-group">
                <label for="login-username">"Username"</label>
                <input
                    id="login-username"
                    type="text"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="login-password">"Password"</label>
                <input
                    id="login-password"
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn btn-primary btn-full">
                <i class="fas fa-sign-in-alt"></i>
                " Login"
            </button>
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (username, email, password) = (username.get(), email.get(), password.get());
        ctx.spawn(move |svc| async move {
            services::auth::register(&svc, &username, &email, &password).await;
        });
    };

    view! {
        <form class="auth-form active" on:submit=on_submit>
            <div class="form-group">
                <label for="register-username">"Username"</label>
                <input
                    id="register-username"
                    type="text"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="register-email">"Email"</label>
                <input
                    id="register-email"
                    type="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="register-password">"Password"</label>
                <input
                    id="register-password"
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn btn-primary btn-full">
                <i class="fas fa-user-plus"></i>
                " Register"
            </button>
        </form>
    }
}
