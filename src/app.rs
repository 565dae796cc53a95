//! Root application component: routing, session context, auth state.
//!
//! ARCHITECTURE
//! ============
//! The router is a two-state machine over the `authenticated` flag.
//! Unauthenticated: `/login` renders the login view and everything else
//! redirects there. Authenticated: `/login` redirects home, protected
//! paths render behind the route guard, and unmatched paths redirect
//! home. Login/logout are the only transitions besides the startup seed
//! and expiry detection; their async internals are not modeled here.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::pages::absences::AbsencesPage;
use crate::pages::admin_groups::AdminGroupsPage;
use crate::pages::admin_users::AdminUsersPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::messages::MessagesPage;
use crate::pages::news_admin::NewsAdminPage;
use crate::pages::reports::ReportsPage;
use crate::pages::user::UserPage;
use crate::session::expiry::{self, ExpiryCheck};
use crate::session::role::Role;
use crate::session::store::SessionContext;
use crate::state::auth::AuthState;
use crate::util::clock;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
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

/// Where the catch-all route sends the user.
pub fn fallback_target(authenticated: bool) -> &'static str {
    if authenticated { "/" } else { "/login" }
}

/// Root application component.
///
/// Reads the session store once at startup to seed the authenticated
/// flag, after running the expiry check; an expired session is cleared
/// and the view force-reloaded so initialization re-runs unauthenticated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::browser();
    if expiry::check_and_expire(&session, clock::now_ms()) == ExpiryCheck::Expired {
        expiry::force_reload();
    }
    let auth = RwSignal::new(AuthState {
        authenticated: session.has_session(),
    });

    provide_context(session);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/educacenter.css"/>
        <Title text="EducaCenter"/>

        <Router>
            <Routes fallback=RouteFallback>
                <Route path=StaticSegment("login") view=LoginRoute/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("usuario")
                    view=|| view! { <ProtectedRoute><UserPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("mensajes")
                    view=|| view! { <ProtectedRoute><MessagesPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("faltas")
                    view=|| view! { <ProtectedRoute><AbsencesPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("informes")
                    view=|| view! { <ProtectedRoute><ReportsPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("noticias")
                    view=|| view! { <ProtectedRoute><NewsAdminPage/></ProtectedRoute> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("usuarios"))
                    view=|| {
                        view! {
                            <ProtectedRoute require=Role::Admin>
                                <AdminUsersPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("grupos"))
                    view=|| {
                        view! {
                            <ProtectedRoute require=Role::Admin>
                                <AdminGroupsPage/>
                            </ProtectedRoute>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

/// `/login`: renders the login view, or redirects home when a session is
/// already active.
#[component]
fn LoginRoute() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    move || {
        if auth.get().authenticated {
            view! { <Redirect path="/"/> }.into_any()
        } else {
            view! { <LoginPage/> }.into_any()
        }
    }
}

/// Catch-all: unknown paths redirect according to the auth state.
#[component]
fn RouteFallback() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    move || view! { <Redirect path=fallback_target(auth.get().authenticated)/> }
}
