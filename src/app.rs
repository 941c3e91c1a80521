//! Root application component with routing and the shared session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::auth::session::Session;
use crate::auth::slot::BrowserSlot;
use crate::components::layout::DashboardLayout;
use crate::pages::dashboards::{AdminDashboardPage, SuperAdminDashboardPage, UserDashboardPage};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::owners::{AddOwnerPage, EditOwnerPage, OwnerListPage};
use crate::pages::pets::{AddPetPage, EditPetPage, PetListPage};
use crate::pages::register::RegisterPage;
use crate::pages::vets::{AddVetPage, EditVetPage, VetDetailPage, VetListPage};
use crate::pages::visits::{VisitFormPage, VisitListPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the one [`Session`] for this process from the durable slot and
/// provides it as context; every route below reads identity from that signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::initialize(&BrowserSlot));
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/petclinic.css"/>
        <Title text="PetClinic"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>

                <ParentRoute path=StaticSegment("user") view=DashboardLayout>
                    <Route path=StaticSegment("dashboard") view=UserDashboardPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("admin") view=DashboardLayout>
                    <Route path=StaticSegment("dashboard") view=AdminDashboardPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("superadmin") view=DashboardLayout>
                    <Route path=StaticSegment("dashboard") view=SuperAdminDashboardPage/>
                </ParentRoute>

                <ParentRoute path=StaticSegment("owner") view=DashboardLayout>
                    <Route path=StaticSegment("") view=OwnerListPage/>
                    <Route path=StaticSegment("add") view=AddOwnerPage/>
                    <Route path=(StaticSegment("edit"), ParamSegment("id")) view=EditOwnerPage/>
                </ParentRoute>

                <ParentRoute path=StaticSegment("pets") view=DashboardLayout>
                    <Route path=StaticSegment("") view=PetListPage/>
                    <Route path=StaticSegment("add") view=AddPetPage/>
                    <Route path=(StaticSegment("edit"), ParamSegment("id")) view=EditPetPage/>
                </ParentRoute>

                <ParentRoute path=StaticSegment("vets") view=DashboardLayout>
                    <Route path=StaticSegment("") view=VetListPage/>
                    <Route path=StaticSegment("add") view=AddVetPage/>
                    <Route path=(StaticSegment("edit"), ParamSegment("id")) view=EditVetPage/>
                    <Route path=ParamSegment("id") view=VetDetailPage/>
                </ParentRoute>

                <ParentRoute path=StaticSegment("visits") view=DashboardLayout>
                    <Route path=StaticSegment("") view=VisitListPage/>
                    <Route path=StaticSegment("add") view=VisitFormPage/>
                    <Route path=(StaticSegment("edit"), ParamSegment("id")) view=VisitFormPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
