//! Public landing page.

use leptos::prelude::*;

/// Landing page with links into the auth flow.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"PetClinic"</h1>
            <p>"Owners, pets, vets, and appointments in one place."</p>
            <div class="home-page__actions">
                <a class="btn btn--primary" href="/login">"Sign In"</a>
                <a class="btn" href="/register">"Register"</a>
            </div>
        </div>
    }
}
