//! Owner management pages (staff only): list, add, edit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::auth::identity::Role;
use crate::auth::session::Session;
use crate::net::api;
use crate::net::types::{Owner, OwnerPayload};

/// Owner table with edit for staff and delete for superadmin only.
#[component]
pub fn OwnerListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let owners = LocalResource::new(move || async move {
        api::fetch_owners(&session.get_untracked()).await
    });

    // Deletion is a superadmin affordance; the backend enforces it regardless.
    let can_delete =
        move || session.with(|s| s.identity().is_some_and(|i| i.role == Role::SuperAdmin));

    let on_delete = move |id: i64| {
        leptos::task::spawn_local(async move {
            match api::delete_owner(&session.get_untracked(), id).await {
                Ok(()) => owners.refetch(),
                Err(message) => leptos::logging::warn!("owner delete failed: {message}"),
            }
        });
    };

    let nav_add = navigate.clone();
    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h2>"Owner List"</h2>
                <button
                    class="btn btn--primary"
                    on:click=move |_| nav_add("/owner/add", NavigateOptions::default())
                >
                    "Add Owner"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading owners..."</p> }>
                {move || {
                    let navigate = navigate.clone();
                    owners.get().map(|list| {
                        let list = list.unwrap_or_default();
                        if list.is_empty() {
                            view! { <p class="list-page__empty">"No owners found."</p> }.into_any()
                        } else {
                            view! {
                                <table class="list-page__table">
                                    <thead>
                                        <tr>
                                            <th>"ID"</th>
                                            <th>"Name"</th>
                                            <th>"Email"</th>
                                            <th>"Phone"</th>
                                            <th>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|owner| {
                                                let navigate = navigate.clone();
                                                let id = owner.id;
                                                view! {
                                                    <tr>
                                                        <td>{owner.id}</td>
                                                        <td>{owner.name}</td>
                                                        <td>{owner.email}</td>
                                                        <td>{owner.phone}</td>
                                                        <td>
                                                            <button
                                                                class="btn btn--small"
                                                                on:click=move |_| navigate(
                                                                    &format!("/owner/edit/{id}"),
                                                                    NavigateOptions::default(),
                                                                )
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <Show when=can_delete>
                                                                <button
                                                                    class="btn btn--small btn--danger"
                                                                    on:click=move |_| on_delete(id)
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            </Show>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Shared owner form for the add and edit flows.
#[component]
fn OwnerForm(
    heading: &'static str,
    initial: Owner,
    on_submit: Callback<OwnerPayload>,
) -> impl IntoView {
    let name = RwSignal::new(initial.name);
    let email = RwSignal::new(initial.email);
    let phone = RwSignal::new(initial.phone);
    let address = RwSignal::new(initial.address.unwrap_or_default());

    let submit = move |_| {
        let payload = OwnerPayload {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            address: address.get(),
        };
        if payload.name.trim().is_empty() || payload.email.trim().is_empty() {
            return;
        }
        on_submit.run(payload);
    };

    let field = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form__label">
                {label}
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="form-page">
            <h2>{heading}</h2>
            {field("Name", name)}
            {field("Email", email)}
            {field("Phone", phone)}
            {field("Address", address)}
            <button class="btn btn--primary" on:click=submit>
                "Save"
            </button>
        </div>
    }
}

/// Create a new owner.
#[component]
pub fn AddOwnerPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let on_submit = Callback::new(move |payload: OwnerPayload| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_owner(&session.get_untracked(), &payload).await {
                Ok(()) => navigate("/owner", NavigateOptions::default()),
                Err(message) => leptos::logging::warn!("owner create failed: {message}"),
            }
        });
    });

    view! { <OwnerForm heading="Add Owner" initial=Owner::default() on_submit=on_submit/> }
}

/// Edit an existing owner, loaded by the `:id` route param.
#[component]
pub fn EditOwnerPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()).unwrap_or_default())
    });

    let owner = LocalResource::new(move || {
        let id = id.get();
        async move { api::fetch_owner(&session.get_untracked(), id).await }
    });
    let pets = LocalResource::new(move || {
        let id = id.get();
        async move { api::fetch_pets_by_owner(&session.get_untracked(), id).await }
    });

    let on_submit = Callback::new(move |payload: OwnerPayload| {
        let navigate = navigate.clone();
        let id = id.get_untracked();
        leptos::task::spawn_local(async move {
            match api::update_owner(&session.get_untracked(), id, &payload).await {
                Ok(()) => navigate("/owner", NavigateOptions::default()),
                Err(message) => leptos::logging::warn!("owner update failed: {message}"),
            }
        });
    });

    view! {
        <div class="edit-owner-page">
            <Suspense fallback=move || view! { <p>"Loading owner..."</p> }>
                {move || {
                    owner.get().map(|loaded| {
                        loaded.map_or_else(
                            || view! { <p>"Owner not found."</p> }.into_any(),
                            |owner| {
                                view! {
                                    <OwnerForm
                                        heading="Edit Owner"
                                        initial=owner
                                        on_submit=on_submit
                                    />
                                }
                                .into_any()
                            },
                        )
                    })
                }}
            </Suspense>

            <section class="edit-owner-page__pets">
                <h3>"Pets"</h3>
                {move || {
                    let list = pets.get().flatten().unwrap_or_default();
                    if list.is_empty() {
                        view! { <p>"No pets registered for this owner."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="edit-owner-page__pet-list">
                                {list
                                    .into_iter()
                                    .map(|pet| {
                                        let breed = pet.breed.unwrap_or_default();
                                        view! { <li>{pet.name}" "{breed}</li> }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any()
                    }
                }}
            </section>
        </div>
    }
}
