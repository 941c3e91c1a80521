//! Registration page against `POST /auth/register`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::RegisterRequest;

/// Registration form; navigates to the login page on success.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let submit = Callback::new(move |()| {
        // The backend derives the login name from the display name.
        let request = RegisterRequest {
            username: name.get(),
            name: name.get(),
            password: password.get(),
            email: email.get(),
            phone: phone.get(),
            address: address.get(),
        };
        if request.name.trim().is_empty()
            || request.email.trim().is_empty()
            || request.password.is_empty()
        {
            error.set(Some("Name, email, and password are required.".to_owned()));
            return;
        }

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::register(&request).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(message) => error.set(Some(message)),
            }
        });
    });

    let text_field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="auth-card__label">
                {label}
                <input
                    class="auth-card__input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Create Account"</h2>

                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                {text_field("Full Name", "text", name)}
                {text_field("Email Address", "email", email)}
                {text_field("Password", "password", password)}
                {text_field("Phone", "tel", phone)}
                {text_field("Address", "text", address)}

                <button class="btn btn--primary" on:click=move |_| submit.run(())>
                    "Register"
                </button>

                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
