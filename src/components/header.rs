//! Top bar with the user's display name and logout/messages actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::store::SessionContext;
use crate::state::auth::AuthState;

/// Portal header.
///
/// Logout is busy-guarded: the button is disabled while the remote call
/// is in flight, and the local session is cleared whatever that call
/// returns, so the user always ends up logged out locally.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let display_name = session.display_name().unwrap_or_else(|| "Usuario".to_owned());

    let on_messages = {
        let navigate = navigate.clone();
        move |_| navigate("/mensajes", NavigateOptions::default())
    };

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(err) = crate::net::api::logout(&session).await {
                log::warn!("logout: backend call failed: {err}");
            }
            auth.set(AuthState { authenticated: false });
            busy.set(false);
            navigate("/login", NavigateOptions::default());
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, navigate, auth);
        }
    };

    view! {
        <header class="header">
            <div class="header__brand">"EducaCenter"</div>
            <div class="header__user">
                <span class="header__name">{display_name}</span>
                <button class="header__action" on:click=on_messages title="Mensajes">
                    "✉"
                </button>
                <button
                    class="header__action"
                    on:click=on_logout
                    disabled=move || busy.get()
                    title="Cerrar sesión"
                >
                    {move || if busy.get() { "…" } else { "Salir" }}
                </button>
            </div>
        </header>
    }
}
