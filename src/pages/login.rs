//! Login page with email + password credentials.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::session::store::SessionContext;
use crate::state::auth::AuthState;

/// Trim and require both credential fields before submitting.
///
/// # Errors
///
/// Returns the inline form message when either field is blank.
pub fn validate_login_input(
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Introduce email y contraseña.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login page.
///
/// The submit button is disabled while the request is in flight. On
/// success the session record is saved in one step and the router flag
/// flips to authenticated; on failure the user stays here with an inline
/// message and the control re-enabled.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        let session = session.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                LoginOutcome::Success(record) => {
                    session.save(&record);
                    auth.set(AuthState { authenticated: true });
                    navigate("/", NavigateOptions::default());
                }
                LoginOutcome::Failure(message) => {
                    error.set(message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, session, navigate, auth);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"EducaCenter"</h1>
                <p class="login-card__subtitle">"Inicio de Sesión"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Entrando…" } else { "Entrar" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
