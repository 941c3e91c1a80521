//! Role dashboards: per-role landing pages with summary stats.

use leptos::prelude::*;

use crate::auth::session::Session;
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::types::{Visit, VisitStatus};

fn count_by_status(visits: &[Visit], status: VisitStatus) -> usize {
    visits.iter().filter(|v| v.status == status).count()
}

/// Dashboard for the USER role: own pets and appointments.
#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let profile = LocalResource::new(move || async move {
        api::fetch_my_owner_profile(&session.get_untracked()).await
    });
    let pets = LocalResource::new(move || async move {
        api::fetch_my_pets(&session.get_untracked()).await
    });
    let visits = LocalResource::new(move || async move {
        api::fetch_my_visits(&session.get_untracked()).await
    });

    let pet_count = Signal::derive(move || pets.get().flatten().map(|list| list.len()));
    let upcoming = Signal::derive(move || {
        visits.get().flatten().map(|list| count_by_status(&list, VisitStatus::Upcoming))
    });
    let completed = Signal::derive(move || {
        visits.get().flatten().map(|list| count_by_status(&list, VisitStatus::Completed))
    });
    let cancelled = Signal::derive(move || {
        visits.get().flatten().map(|list| count_by_status(&list, VisitStatus::Cancelled))
    });

    let next_visit = move || {
        visits.get().flatten().and_then(|list| {
            let mut upcoming: Vec<Visit> = list
                .into_iter()
                .filter(|v| v.status == VisitStatus::Upcoming)
                .collect();
            upcoming.sort_by(|a, b| a.visit_date.cmp(&b.visit_date));
            upcoming.into_iter().next()
        })
    };

    view! {
        <div class="dashboard-page">
            <h2>"My Dashboard"</h2>
            <div class="dashboard-page__stats">
                <StatCard title="My Pets" value=pet_count/>
                <StatCard title="Upcoming Appointments" value=upcoming/>
                <StatCard title="Past Visits" value=completed/>
                <StatCard title="Cancelled" value=cancelled/>
            </div>

            <section class="dashboard-page__next">
                <h3>"Next Appointment"</h3>
                {move || {
                    next_visit().map_or_else(
                        || view! { <p>"No upcoming appointments."</p> }.into_any(),
                        |visit| {
                            let pet = visit.pet.as_ref().map_or("-", |p| p.name.as_str()).to_owned();
                            let date = visit.visit_date.clone().unwrap_or_default();
                            let description = visit.description.clone().unwrap_or_default();
                            view! {
                                <div class="visit-summary">
                                    <p>{format!("{date} - {pet}")}</p>
                                    <p>{description}</p>
                                </div>
                            }
                            .into_any()
                        },
                    )
                }}
            </section>

            <section class="dashboard-page__profile">
                <h3>"My Profile"</h3>
                {move || {
                    profile.get().flatten().map_or_else(
                        || view! { <p>"No owner profile on record."</p> }.into_any(),
                        |owner| {
                            view! {
                                <div class="profile-card">
                                    <p class="profile-card__name">{owner.name}</p>
                                    <p>{owner.email}</p>
                                    <p>{owner.phone}</p>
                                    <p>{owner.address.unwrap_or_default()}</p>
                                </div>
                            }
                            .into_any()
                        },
                    )
                }}
            </section>
        </div>
    }
}

/// Dashboard for the ADMIN role: clinic-wide counts.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let owners = LocalResource::new(move || async move {
        api::fetch_owners(&session.get_untracked()).await
    });
    let pets = LocalResource::new(move || async move {
        api::fetch_pets(&session.get_untracked()).await
    });
    let visits = LocalResource::new(move || async move {
        api::fetch_visits(&session.get_untracked()).await
    });

    let owner_count = Signal::derive(move || owners.get().flatten().map(|list| list.len()));
    let pet_count = Signal::derive(move || pets.get().flatten().map(|list| list.len()));
    let visit_count = Signal::derive(move || visits.get().flatten().map(|list| list.len()));
    let upcoming = Signal::derive(move || {
        visits.get().flatten().map(|list| count_by_status(&list, VisitStatus::Upcoming))
    });

    view! {
        <div class="dashboard-page">
            <h2>"Clinic Dashboard"</h2>
            <div class="dashboard-page__stats">
                <StatCard title="Owners" value=owner_count/>
                <StatCard title="Pets" value=pet_count/>
                <StatCard title="Appointments" value=visit_count/>
                <StatCard title="Upcoming" value=upcoming/>
            </div>
        </div>
    }
}

/// Dashboard for the SUPERADMIN role: everything the admin sees plus vets.
#[component]
pub fn SuperAdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let owners = LocalResource::new(move || async move {
        api::fetch_owners(&session.get_untracked()).await
    });
    let pets = LocalResource::new(move || async move {
        api::fetch_pets(&session.get_untracked()).await
    });
    let vets = LocalResource::new(move || async move {
        api::fetch_vets(&session.get_untracked()).await
    });
    let visits = LocalResource::new(move || async move {
        api::fetch_visits(&session.get_untracked()).await
    });

    let owner_count = Signal::derive(move || owners.get().flatten().map(|list| list.len()));
    let pet_count = Signal::derive(move || pets.get().flatten().map(|list| list.len()));
    let vet_count = Signal::derive(move || vets.get().flatten().map(|list| list.len()));
    let visit_count = Signal::derive(move || visits.get().flatten().map(|list| list.len()));

    view! {
        <div class="dashboard-page">
            <h2>"Clinic Administration"</h2>
            <div class="dashboard-page__stats">
                <StatCard title="Owners" value=owner_count/>
                <StatCard title="Pets" value=pet_count/>
                <StatCard title="Vets" value=vet_count/>
                <StatCard title="Appointments" value=visit_count/>
            </div>
        </div>
    }
}
