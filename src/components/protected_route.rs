//! Route guard wrapper for protected views.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::session::expiry::{self, ExpiryCheck};
use crate::session::guard::{GuardDecision, guard_decision};
use crate::session::role::Role;
use crate::session::store::SessionContext;
use crate::util::clock;

/// Gates rendering of a protected view.
///
/// The decision is re-evaluated on every navigation, never cached, and is
/// preceded by the session expiry check so a stale tab is logged out on
/// its next navigation rather than only at cold start. With no session
/// the requested view is never partially rendered; the guard yields a
/// redirect to `/login` instead. An unmet role requirement redirects to
/// the home path.
#[component]
pub fn ProtectedRoute(
    /// Role the session must hold, for admin-only views.
    #[prop(optional, into)]
    require: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<SessionContext>();

    move || {
        if expiry::check_and_expire(&session, clock::now_ms()) == ExpiryCheck::Expired {
            expiry::force_reload();
        }
        match guard_decision(session.has_session(), require, session.role()) {
            GuardDecision::Allow => children().into_any(),
            GuardDecision::ToLogin => view! { <Redirect path="/login"/> }.into_any(),
            GuardDecision::ToHome => view! { <Redirect path="/"/> }.into_any(),
        }
    }
}
