//! Login page: email/password form against `POST /auth/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::session::{self, Session};
use crate::auth::slot::BrowserSlot;
use crate::net::api;
use crate::net::types::LoginRequest;

/// Login form. On success the issued token goes through the session store
/// (which persists and decodes it) and navigation lands on the new identity's
/// own dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let submit = Callback::new(move |()| {
        let request = LoginRequest { email: email.get(), password: password.get() };
        if request.email.trim().is_empty() || request.password.is_empty() {
            error.set(Some("Email and password are required.".to_owned()));
            return;
        }

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&request).await {
                Ok(token) => match session::login_session(session, &BrowserSlot, &token) {
                    Ok(identity) => {
                        navigate(identity.role.dashboard_path(), NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("issued token failed to decode: {err}");
                        error.set(Some("Received an unusable token from the server.".to_owned()));
                    }
                },
                Err(message) => error.set(Some(message)),
            }
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Welcome Back"</h2>

                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <label class="auth-card__label">
                    "Email Address"
                    <input
                        class="auth-card__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-card__label">
                    "Password"
                    <input
                        class="auth-card__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>

                <button class="btn btn--primary" on:click=move |_| submit.run(())>
                    "Sign In"
                </button>

                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href="/register">"Register here"</a>
                </p>
            </div>
        </div>
    }
}
