//! Role-keyed sidebar navigation.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::auth::identity::Role;
use crate::auth::session::Session;

/// Menu entries for a role. Users see their own pets and appointments; staff
/// additionally manage vets and owners.
fn menu_for(role: &Role) -> &'static [(&'static str, &'static str)] {
    const USER_MENU: &[(&str, &str)] = &[
        ("Dashboard", "/user/dashboard"),
        ("My Pets", "/pets"),
        ("Appointments", "/visits"),
    ];
    const ADMIN_MENU: &[(&str, &str)] = &[
        ("Dashboard", "/admin/dashboard"),
        ("Pets", "/pets"),
        ("Appointments", "/visits"),
        ("Vets", "/vets"),
        ("Owners", "/owner"),
    ];
    const SUPERADMIN_MENU: &[(&str, &str)] = &[
        ("Dashboard", "/superadmin/dashboard"),
        ("Pets", "/pets"),
        ("Appointments", "/visits"),
        ("Vets", "/vets"),
        ("Owners", "/owner"),
    ];

    match role.gating_role() {
        Role::Admin => ADMIN_MENU,
        Role::SuperAdmin => SUPERADMIN_MENU,
        _ => USER_MENU,
    }
}

/// Sidebar with the clinic title and the current role's navigation links.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();

    let items = move || {
        session.with(|s| {
            s.identity()
                .map_or(menu_for(&Role::User), |identity| menu_for(&identity.role))
        })
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__title">"PetClinic"</div>
            <nav class="sidebar__nav">
                {move || {
                    let current = location.pathname.get();
                    items()
                        .iter()
                        .map(|(name, path)| {
                            let active = current.starts_with(path);
                            view! {
                                <a
                                    href=*path
                                    class=if active {
                                        "sidebar__link sidebar__link--active"
                                    } else {
                                        "sidebar__link"
                                    }
                                >
                                    {*name}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>
        </aside>
    }
}
