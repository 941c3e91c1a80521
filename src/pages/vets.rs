//! Vet pages: list, detail, add, edit. Everyone can browse vets; the
//! management affordances are staff-only.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::auth::session::Session;
use crate::net::api;
use crate::net::types::{Vet, VetPayload};

/// Vet table with staff-only add/edit/delete actions.
#[component]
pub fn VetListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let vets = LocalResource::new(move || async move {
        api::fetch_vets(&session.get_untracked()).await
    });

    let is_staff = move || session.with(|s| s.identity().is_some_and(|i| i.role.is_admin()));

    let on_delete = move |id: i64| {
        leptos::task::spawn_local(async move {
            match api::delete_vet(&session.get_untracked(), id).await {
                Ok(()) => vets.refetch(),
                Err(message) => leptos::logging::warn!("vet delete failed: {message}"),
            }
        });
    };

    let nav_add = navigate.clone();
    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h2>"Vets"</h2>
                <Show when=is_staff>
                    <button
                        class="btn btn--primary"
                        on:click={
                            let nav_add = nav_add.clone();
                            move |_| nav_add("/vets/add", NavigateOptions::default())
                        }
                    >
                        "Add Vet"
                    </button>
                </Show>
            </header>

            <Suspense fallback=move || view! { <p>"Loading vets..."</p> }>
                {move || {
                    let navigate = navigate.clone();
                    vets.get().map(|list| {
                        let list = list.unwrap_or_default();
                        if list.is_empty() {
                            view! { <p class="list-page__empty">"No vets found."</p> }.into_any()
                        } else {
                            view! {
                                <div class="vet-cards">
                                    {list
                                        .into_iter()
                                        .map(|vet| {
                                            let navigate = navigate.clone();
                                            let nav_edit = navigate.clone();
                                            let id = vet.id;
                                            view! {
                                                <div class="vet-card">
                                                    <a
                                                        class="vet-card__name"
                                                        href=format!("/vets/{id}")
                                                    >
                                                        {vet.name}
                                                    </a>
                                                    <span class="vet-card__specialization">
                                                        {vet.specialization.unwrap_or_default()}
                                                    </span>
                                                    <Show when=is_staff>
                                                        <span class="vet-card__actions">
                                                            <button
                                                                class="btn btn--small"
                                                                on:click={
                                                                    let nav_edit = nav_edit.clone();
                                                                    move |_| nav_edit(
                                                                        &format!("/vets/edit/{id}"),
                                                                        NavigateOptions::default(),
                                                                    )
                                                                }
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn btn--small btn--danger"
                                                                on:click=move |_| on_delete(id)
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </span>
                                                    </Show>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Single vet detail, loaded by the `:id` route param.
#[component]
pub fn VetDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let params = use_params_map();

    let id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()).unwrap_or_default())
    });

    let vet = LocalResource::new(move || {
        let id = id.get();
        async move { api::fetch_vet(&session.get_untracked(), id).await }
    });

    view! {
        <Suspense fallback=move || view! { <p>"Loading vet..."</p> }>
            {move || {
                vet.get().map(|loaded| {
                    loaded.map_or_else(
                        || view! { <p>"Vet not found."</p> }.into_any(),
                        |vet| {
                            view! {
                                <div class="detail-page">
                                    <h2>{vet.name}</h2>
                                    <p>
                                        "Specialization: "
                                        {vet.specialization.unwrap_or_else(|| "General".to_owned())}
                                    </p>
                                    <a class="btn" href="/vets">"Back to vets"</a>
                                </div>
                            }
                            .into_any()
                        },
                    )
                })
            }}
        </Suspense>
    }
}

/// Shared vet form for the add and edit flows.
#[component]
fn VetForm(heading: &'static str, initial: Vet, on_submit: Callback<VetPayload>) -> impl IntoView {
    let name = RwSignal::new(initial.name);
    let specialization = RwSignal::new(initial.specialization.unwrap_or_default());

    let submit = move |_| {
        let payload = VetPayload { name: name.get(), specialization: specialization.get() };
        if payload.name.trim().is_empty() {
            return;
        }
        on_submit.run(payload);
    };

    view! {
        <div class="form-page">
            <h2>{heading}</h2>
            <label class="form__label">
                "Vet Name"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Specialization"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || specialization.get()
                    on:input=move |ev| specialization.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" on:click=submit>
                "Save"
            </button>
        </div>
    }
}

/// Create a vet.
#[component]
pub fn AddVetPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let on_submit = Callback::new(move |payload: VetPayload| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_vet(&session.get_untracked(), &payload).await {
                Ok(()) => navigate("/vets", NavigateOptions::default()),
                Err(message) => leptos::logging::warn!("vet create failed: {message}"),
            }
        });
    });

    view! { <VetForm heading="Add Vet" initial=Vet::default() on_submit=on_submit/> }
}

/// Edit an existing vet, loaded by the `:id` route param.
#[component]
pub fn EditVetPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()).unwrap_or_default())
    });

    let vet = LocalResource::new(move || {
        let id = id.get();
        async move { api::fetch_vet(&session.get_untracked(), id).await }
    });

    let on_submit = Callback::new(move |payload: VetPayload| {
        let navigate = navigate.clone();
        let id = id.get_untracked();
        leptos::task::spawn_local(async move {
            match api::update_vet(&session.get_untracked(), id, &payload).await {
                Ok(()) => navigate("/vets", NavigateOptions::default()),
                Err(message) => leptos::logging::warn!("vet update failed: {message}"),
            }
        });
    });

    view! {
        <Suspense fallback=move || view! { <p>"Loading vet..."</p> }>
            {move || {
                vet.get().map(|loaded| {
                    loaded.map_or_else(
                        || view! { <p>"Vet not found."</p> }.into_any(),
                        |vet| {
                            view! { <VetForm heading="Edit Vet" initial=vet on_submit=on_submit/> }
                                .into_any()
                        },
                    )
                })
            }}
        </Suspense>
    }
}
