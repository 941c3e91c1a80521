//! Visit (appointment) pages: list with status controls and a shared
//! book/edit form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::auth::session::Session;
use crate::net::api;
use crate::net::types::{Visit, VisitPayload, VisitStatus};

/// Appointment table. Staff see every visit and may set any status; users see
/// their own and may cancel upcoming ones.
#[component]
pub fn VisitListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let visits = LocalResource::new(move || async move {
        let current = session.get_untracked();
        if current.identity().is_some_and(|i| i.role.is_admin()) {
            api::fetch_visits(&current).await
        } else {
            api::fetch_my_visits(&current).await
        }
    });

    let is_staff = move || session.with(|s| s.identity().is_some_and(|i| i.role.is_admin()));

    let set_status = move |visit: Visit, status: VisitStatus| {
        leptos::task::spawn_local(async move {
            match api::update_visit_status(&session.get_untracked(), &visit, status).await {
                Ok(()) => visits.refetch(),
                Err(message) => leptos::logging::warn!("status update failed: {message}"),
            }
        });
    };

    let on_delete = move |id: i64| {
        leptos::task::spawn_local(async move {
            match api::delete_visit(&session.get_untracked(), id).await {
                Ok(()) => visits.refetch(),
                Err(message) => leptos::logging::warn!("visit delete failed: {message}"),
            }
        });
    };

    let nav_add = navigate.clone();
    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h2>"Appointments"</h2>
                <button
                    class="btn btn--primary"
                    on:click=move |_| nav_add("/visits/add", NavigateOptions::default())
                >
                    "Book Appointment"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading appointments..."</p> }>
                {move || {
                    let navigate = navigate.clone();
                    visits.get().map(|list| {
                        let list = list.unwrap_or_default();
                        if list.is_empty() {
                            view! { <p class="list-page__empty">"No appointments found."</p> }
                                .into_any()
                        } else {
                            view! {
                                <table class="list-page__table">
                                    <thead>
                                        <tr>
                                            <th>"Date"</th>
                                            <th>"Pet"</th>
                                            <th>"Vet"</th>
                                            <th>"Description"</th>
                                            <th>"Status"</th>
                                            <th>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|visit| {
                                                visit_row(
                                                    visit,
                                                    is_staff(),
                                                    navigate.clone(),
                                                    set_status,
                                                    on_delete,
                                                )
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

fn visit_row(
    visit: Visit,
    staff: bool,
    navigate: impl Fn(&str, NavigateOptions) + Clone + 'static,
    set_status: impl Fn(Visit, VisitStatus) + Copy + Send + Sync + 'static,
    on_delete: impl Fn(i64) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let id = visit.id;
    let pet_name = visit.pet.as_ref().map_or("-", |p| p.name.as_str()).to_owned();
    let vet_name = visit.vet.as_ref().map_or("-", |v| v.name.as_str()).to_owned();
    let date = visit.visit_date.clone().unwrap_or_default();
    let description = visit.description.clone().unwrap_or_default();
    let status = visit.status;
    let cancellable = !staff && status == VisitStatus::Upcoming;

    let status_cell = if staff {
        let status_visit = visit.clone();
        view! {
            <select
                class="status-select"
                prop:value=status.code()
                on:change=move |ev| {
                    let next = match event_target_value(&ev).as_str() {
                        "COMPLETED" => VisitStatus::Completed,
                        "CANCELLED" => VisitStatus::Cancelled,
                        _ => VisitStatus::Upcoming,
                    };
                    set_status(status_visit.clone(), next);
                }
            >
                <option value="UPCOMING">"Upcoming"</option>
                <option value="COMPLETED">"Completed"</option>
                <option value="CANCELLED">"Cancelled"</option>
            </select>
        }
        .into_any()
    } else {
        view! { <span class="status-badge">{status.label()}</span> }.into_any()
    };

    let cancel_visit = visit.clone();
    view! {
        <tr>
            <td>{date}</td>
            <td>{pet_name}</td>
            <td>{vet_name}</td>
            <td>{description}</td>
            <td>{status_cell}</td>
            <td>
                <button
                    class="btn btn--small"
                    on:click=move |_| navigate(
                        &format!("/visits/edit/{id}"),
                        NavigateOptions::default(),
                    )
                >
                    "Edit"
                </button>
                <Show when=move || cancellable>
                    <button
                        class="btn btn--small"
                        on:click={
                            let cancel_visit = cancel_visit.clone();
                            move |_| set_status(cancel_visit.clone(), VisitStatus::Cancelled)
                        }
                    >
                        "Cancel"
                    </button>
                </Show>
                <Show when=move || staff>
                    <button class="btn btn--small btn--danger" on:click=move |_| on_delete(id)>
                        "Delete"
                    </button>
                </Show>
            </td>
        </tr>
    }
}

/// Book or edit an appointment. The edit flow loads the visit named by the
/// `:id` route param; the add flow starts blank.
#[component]
pub fn VisitFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let edit_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });

    let date = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let pet_id = RwSignal::new(Option::<i64>::None);
    let vet_id = RwSignal::new(Option::<i64>::None);
    let error = RwSignal::new(Option::<String>::None);

    // Selectable pets depend on role; vets are visible to everyone.
    let pets = LocalResource::new(move || async move {
        let current = session.get_untracked();
        if current.identity().is_some_and(|i| i.role.is_admin()) {
            api::fetch_pets(&current).await
        } else {
            api::fetch_my_pets(&current).await
        }
    });
    let vets = LocalResource::new(move || async move {
        api::fetch_vets(&session.get_untracked()).await
    });

    // Pre-fill the form when editing.
    Effect::new(move || {
        let Some(id) = edit_id.get() else { return };
        leptos::task::spawn_local(async move {
            if let Some(visit) = api::fetch_visit(&session.get_untracked(), id).await {
                date.set(visit.visit_date.unwrap_or_default());
                description.set(visit.description.unwrap_or_default());
                pet_id.set(visit.pet.map(|p| p.id));
                vet_id.set(visit.vet.map(|v| v.id));
            }
        });
    });

    let submit = Callback::new(move |()| {
        let (Some(pet), Some(vet)) = (pet_id.get(), vet_id.get()) else {
            error.set(Some("Pick a pet and a vet.".to_owned()));
            return;
        };
        let payload = VisitPayload {
            date: date.get(),
            description: description.get(),
            pet_id: pet,
            vet_id: vet,
        };
        if payload.date.is_empty() {
            error.set(Some("Pick a date.".to_owned()));
            return;
        }

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let current = session.get_untracked();
            let result = match edit_id.get_untracked() {
                Some(id) => api::update_visit(&current, id, &payload).await,
                None => api::create_visit(&current, &payload).await,
            };
            match result {
                Ok(()) => navigate("/visits", NavigateOptions::default()),
                Err(message) => error.set(Some(message)),
            }
        });
    });

    let heading = move || if edit_id.get().is_some() { "Edit Appointment" } else { "Book Appointment" };

    view! {
        <div class="form-page">
            <h2>{heading}</h2>

            <Show when=move || error.get().is_some()>
                <p class="form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <label class="form__label">
                "Date"
                <input
                    class="form__input"
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />
            </label>

            <label class="form__label">
                "Description"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
            </label>

            <label class="form__label">
                "Pet"
                <select
                    class="form__input"
                    on:change=move |ev| pet_id.set(event_target_value(&ev).parse::<i64>().ok())
                >
                    <option value="">"Select a pet"</option>
                    {move || {
                        let selected = pet_id.get();
                        pets.get()
                            .flatten()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|pet| {
                                view! {
                                    <option
                                        value=pet.id.to_string()
                                        selected=selected == Some(pet.id)
                                    >
                                        {pet.name}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>

            <label class="form__label">
                "Vet"
                <select
                    class="form__input"
                    on:change=move |ev| vet_id.set(event_target_value(&ev).parse::<i64>().ok())
                >
                    <option value="">"Select a vet"</option>
                    {move || {
                        let selected = vet_id.get();
                        vets.get()
                            .flatten()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|vet| {
                                view! {
                                    <option
                                        value=vet.id.to_string()
                                        selected=selected == Some(vet.id)
                                    >
                                        {vet.name}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>

            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                "Save"
            </button>
        </div>
    }
}
