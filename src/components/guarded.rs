//! Route-guard wrapper component.
//!
//! Consults the declarative route table for the current path and either
//! renders its children or redirects — to the login page when no identity is
//! present, or to the identity's own dashboard when the role is insufficient.
//! A denied route is an expected UX event, so there is no error page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth::guard::{self, Access};
use crate::auth::session::Session;

/// Renders `children` only when the route guard grants the current path.
#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();

    let access = Memo::new(move |_| {
        let path = location.pathname.get();
        session.with(|s| guard::check_path(&path, s.identity()))
    });

    let navigate = use_navigate();
    Effect::new(move || match access.get() {
        Access::RedirectToLogin => navigate("/login", NavigateOptions::default()),
        Access::Redirect(path) => navigate(path, NavigateOptions::default()),
        Access::Granted => {}
    });

    view! {
        <Show when=move || access.get() == Access::Granted>
            {children()}
        </Show>
    }
}
