//! Dashboard layout: sidebar, navbar, and the routed page content.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::guarded::Guarded;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;

/// Layout for every protected route. The [`Guarded`] wrapper covers all
/// children, so individual pages do not repeat the guard check.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    view! {
        <Guarded>
            <div class="dashboard-layout">
                <Sidebar/>
                <div class="dashboard-layout__main">
                    <Navbar/>
                    <main class="dashboard-layout__content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Guarded>
    }
}
