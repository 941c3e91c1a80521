//! Reusable stat card for the dashboard pages.

use leptos::prelude::*;

/// A labeled count with a loading placeholder.
#[component]
pub fn StatCard(title: &'static str, #[prop(into)] value: Signal<Option<usize>>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__title">{title}</span>
            <span class="stat-card__value">
                {move || value.get().map_or_else(|| "...".to_owned(), |n| n.to_string())}
            </span>
        </div>
    }
}
