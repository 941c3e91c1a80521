//! Top navbar: welcome line, role badge, and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::identity::Role;
use crate::auth::session::{self, Session};
use crate::auth::slot::BrowserSlot;

/// Navbar above the page content.
///
/// The role badge shows the session's role label — unrecognized roles display
/// their issued string verbatim. Logout clears the session and returns to the
/// login page.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let welcome = move || {
        session.with(|s| match s.identity() {
            None => "Welcome Back, Guest".to_owned(),
            Some(identity) => match identity.role {
                Role::SuperAdmin => format!("Welcome Back Super Admin, {}", identity.subject),
                Role::Admin => format!("Welcome Back Admin, {}", identity.subject),
                Role::User | Role::Other(_) => "Welcome Back".to_owned(),
            },
        })
    };

    let badge = move || {
        session.with(|s| {
            s.identity()
                .map_or_else(|| "user".to_owned(), |identity| identity.role.label().to_owned())
        })
    };

    let on_logout = move |_| {
        session::logout_session(session, &BrowserSlot);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <h1 class="navbar__welcome">{welcome}</h1>
            <div class="navbar__actions">
                <span class="navbar__badge">{badge}</span>
                <button class="btn btn--danger" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
