//! Pet pages: list, add, edit. Users see and manage their own pets; staff
//! see the whole clinic and pick the owner when adding.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::auth::session::Session;
use crate::net::api;
use crate::net::types::{Pet, PetPayload};

fn is_staff(session: RwSignal<Session>) -> bool {
    session.with_untracked(|s| s.identity().is_some_and(|i| i.role.is_admin()))
}

/// Pet table. Staff fetch every pet; users fetch `/pets/mine`.
#[component]
pub fn PetListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let pets = LocalResource::new(move || async move {
        let current = session.get_untracked();
        if current.identity().is_some_and(|i| i.role.is_admin()) {
            api::fetch_pets(&current).await
        } else {
            api::fetch_my_pets(&current).await
        }
    });

    let on_delete = move |id: i64| {
        leptos::task::spawn_local(async move {
            match api::delete_pet(&session.get_untracked(), id).await {
                Ok(()) => pets.refetch(),
                Err(message) => leptos::logging::warn!("pet delete failed: {message}"),
            }
        });
    };

    let heading = move || if is_staff(session) { "Pets" } else { "My Pets" };

    let nav_add = navigate.clone();
    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h2>{heading}</h2>
                <button
                    class="btn btn--primary"
                    on:click=move |_| nav_add("/pets/add", NavigateOptions::default())
                >
                    "Add Pet"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading pets..."</p> }>
                {move || {
                    let navigate = navigate.clone();
                    pets.get().map(|list| {
                        let list = list.unwrap_or_default();
                        if list.is_empty() {
                            view! { <p class="list-page__empty">"No pets found."</p> }.into_any()
                        } else {
                            view! {
                                <table class="list-page__table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Breed"</th>
                                            <th>"Born"</th>
                                            <th>"Owner"</th>
                                            <th>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|pet| {
                                                let navigate = navigate.clone();
                                                let id = pet.id;
                                                let owner_name = pet
                                                    .owner
                                                    .as_ref()
                                                    .map_or("-", |o| o.name.as_str())
                                                    .to_owned();
                                                view! {
                                                    <tr>
                                                        <td>{pet.name}</td>
                                                        <td>{pet.breed.unwrap_or_default()}</td>
                                                        <td>{pet.birth_date.unwrap_or_default()}</td>
                                                        <td>{owner_name}</td>
                                                        <td>
                                                            <button
                                                                class="btn btn--small"
                                                                on:click=move |_| navigate(
                                                                    &format!("/pets/edit/{id}"),
                                                                    NavigateOptions::default(),
                                                                )
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                class="btn btn--small btn--danger"
                                                                on:click=move |_| on_delete(id)
                                                            >
                                                                "Delete"
                                                            </button>
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

/// Shared pet form for the add and edit flows.
#[component]
fn PetForm(heading: &'static str, initial: Pet, on_submit: Callback<PetPayload>) -> impl IntoView {
    let name = RwSignal::new(initial.name);
    let breed = RwSignal::new(initial.breed.unwrap_or_default());
    let birth_date = RwSignal::new(initial.birth_date.unwrap_or_default());

    let submit = move |_| {
        let payload = PetPayload {
            name: name.get(),
            breed: breed.get(),
            birth_date: birth_date.get(),
        };
        if payload.name.trim().is_empty() {
            return;
        }
        on_submit.run(payload);
    };

    view! {
        <div class="form-page">
            <h2>{heading}</h2>
            <label class="form__label">
                "Name"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Breed"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || breed.get()
                    on:input=move |ev| breed.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Birth Date"
                <input
                    class="form__input"
                    type="date"
                    prop:value=move || birth_date.get()
                    on:input=move |ev| birth_date.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" on:click=submit>
                "Save"
            </button>
        </div>
    }
}

/// Create a pet. Staff pick the owning account; users add under their own.
#[component]
pub fn AddPetPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let staff = is_staff(session);
    let owner_id = RwSignal::new(Option::<i64>::None);

    // Staff-only: owner choices for the select control.
    let owners = LocalResource::new(move || async move {
        if is_staff(session) {
            api::fetch_owners(&session.get_untracked()).await
        } else {
            None
        }
    });

    let on_submit = Callback::new(move |payload: PetPayload| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let current = session.get_untracked();
            let result = match owner_id.get_untracked() {
                Some(owner) => api::create_pet(&current, owner, &payload).await,
                None => api::create_my_pet(&current, &payload).await,
            };
            match result {
                Ok(()) => navigate("/pets", NavigateOptions::default()),
                Err(message) => leptos::logging::warn!("pet create failed: {message}"),
            }
        });
    });

    view! {
        <Show when=move || staff>
            <label class="form__label">
                "Owner"
                <select
                    class="form__input"
                    on:change=move |ev| {
                        owner_id.set(event_target_value(&ev).parse::<i64>().ok());
                    }
                >
                    <option value="">"Select an owner"</option>
                    {move || {
                        owners
                            .get()
                            .flatten()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|owner| {
                                view! { <option value=owner.id.to_string()>{owner.name}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
        </Show>
        <PetForm heading="Add Pet" initial=Pet::default() on_submit=on_submit/>
    }
}

/// Edit an existing pet, loaded by the `:id` route param.
#[component]
pub fn EditPetPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()).unwrap_or_default())
    });

    let pet = LocalResource::new(move || {
        let id = id.get();
        async move { api::fetch_pet(&session.get_untracked(), id).await }
    });

    let on_submit = Callback::new(move |payload: PetPayload| {
        let navigate = navigate.clone();
        let id = id.get_untracked();
        leptos::task::spawn_local(async move {
            match api::update_pet(&session.get_untracked(), id, &payload).await {
                Ok(()) => navigate("/pets", NavigateOptions::default()),
                Err(message) => leptos::logging::warn!("pet update failed: {message}"),
            }
        });
    });

    view! {
        <Suspense fallback=move || view! { <p>"Loading pet..."</p> }>
            {move || {
                pet.get().map(|loaded| {
                    loaded.map_or_else(
                        || view! { <p>"Pet not found."</p> }.into_any(),
                        |pet| {
                            view! { <PetForm heading="Edit Pet" initial=pet on_submit=on_submit/> }
                                .into_any()
                        },
                    )
                })
            }}
        </Suspense>
    }
}
