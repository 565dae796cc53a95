//! REST API calls against the EducaCenter backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, attaching the
//! session token as a bearer credential. Server-side (SSR): stubs that
//! report "unreachable" so hydration degrades instead of crashing.
//!
//! ERROR HANDLING
//! ==============
//! Login and logout failures are converted to user-presentable messages at
//! this boundary; list fetches collapse to `None` and render as empty
//! views. Nothing here panics or propagates an unhandled rejection.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use crate::net::config;
use crate::net::types::{
    Absence, Group, LoginResponse, Message, NewMessage, NewsItem, Report, UserSummary,
};
use crate::session::record::SessionRecord;
use crate::session::role::Role;
use crate::session::store::SessionContext;
#[cfg(feature = "hydrate")]
use crate::util::clock;

/// Message shown when the backend cannot be reached.
pub const ERR_CONNECT: &str = "Error al conectar con el servidor";
/// Fallback message for a rejected login without a backend reason.
pub const ERR_BAD_CREDENTIALS: &str = "Credenciales incorrectas";
/// Fallback message for a rejected logout without a backend reason.
pub const ERR_LOGOUT: &str = "Error al cerrar sesión";

/// Result of a login attempt, after folding network and backend rejection
/// into one user-presentable shape.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    /// The backend issued a token; the record is ready to persist.
    Success(SessionRecord),
    /// No session was created; the message is shown inline on the form.
    Failure(String),
}

/// Fold a login response into an outcome, stamping `now_ms` as the login
/// instant. A response without a token is a rejection even on HTTP 200.
pub fn login_outcome(resp: LoginResponse, now_ms: i64) -> LoginOutcome {
    match resp.token {
        Some(token) if !token.is_empty() => LoginOutcome::Success(SessionRecord::from_login(
            token,
            resp.role.as_deref(),
            resp.name.as_deref(),
            resp.surname.as_deref(),
            resp.id.unwrap_or_default(),
            now_ms,
        )),
        _ => LoginOutcome::Failure(resp.message.unwrap_or_else(|| ERR_BAD_CREDENTIALS.to_owned())),
    }
}

/// Inbox query for a user's messages.
pub fn messages_query(user_id: i64) -> String {
    format!("/messages.php?user_id={user_id}")
}

/// Absence query scoped by the caller's role: teachers see the absences
/// they recorded, students their own, parents their children's; admins
/// see everything.
pub fn absences_query(role: Option<Role>, user_id: i64) -> String {
    match role {
        Some(Role::Teacher) => format!("/absences.php?teacher_id={user_id}"),
        Some(Role::Student) => format!("/absences.php?student_id={user_id}"),
        Some(Role::Parent) => format!("/absences.php?user_id={user_id}"),
        Some(Role::Admin) | None => "/absences.php".to_owned(),
    }
}

/// Report query with the same role scoping as [`absences_query`].
pub fn reports_query(role: Option<Role>, user_id: i64) -> String {
    match role {
        Some(Role::Teacher) => format!("/reports.php?teacher_id={user_id}"),
        Some(Role::Student) => format!("/reports.php?student_id={user_id}"),
        Some(Role::Parent) => format!("/reports.php?user_id={user_id}"),
        Some(Role::Admin) | None => "/reports.php".to_owned(),
    }
}

/// Apply the local half of the logout flow.
///
/// The store is cleared no matter what the remote call returned: the user
/// must end up logged out locally even when the backend row could not be
/// confirmed invalidated. Returns the remote error, if any, for display.
pub fn apply_logout(session: &SessionContext, remote: Result<(), String>) -> Option<String> {
    session.clear();
    remote.err()
}

/// POST credentials to the authentication endpoint.
pub async fn login(email: &str, password: &str) -> LoginOutcome {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let request = match gloo_net::http::Request::post(&config::endpoint("/login.php"))
            .json(&body)
        {
            Ok(request) => request,
            Err(_) => return LoginOutcome::Failure(ERR_CONNECT.to_owned()),
        };
        let Ok(resp) = request.send().await else {
            return LoginOutcome::Failure(ERR_CONNECT.to_owned());
        };
        let Ok(parsed) = resp.json::<LoginResponse>().await else {
            return LoginOutcome::Failure(ERR_CONNECT.to_owned());
        };
        login_outcome(parsed, clock::now_ms())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        LoginOutcome::Failure(ERR_CONNECT.to_owned())
    }
}

/// POST to the session-termination endpoint.
async fn post_logout(token: Option<String>) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(
            gloo_net::http::Request::post(&config::endpoint("/logout.php")),
            token.as_deref(),
        )
        .send()
        .await
        .map_err(|_| ERR_CONNECT.to_owned())?;
        let status = resp
            .json::<crate::net::types::ApiStatus>()
            .await
            .map_err(|_| ERR_CONNECT.to_owned())?;
        if status.success {
            Ok(())
        } else {
            Err(status.message.unwrap_or_else(|| ERR_LOGOUT.to_owned()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ERR_CONNECT.to_owned())
    }
}

/// Full logout flow: remote call, then unconditional local clear.
pub async fn logout(session: &SessionContext) -> Option<String> {
    let remote = post_logout(session.token()).await;
    apply_logout(session, remote)
}

/// Fetch published announcements.
pub async fn fetch_news(token: Option<String>) -> Option<Vec<NewsItem>> {
    get_json("/announcements.php", token).await
}

/// Fetch the inbox for `user_id`.
pub async fn fetch_messages(token: Option<String>, user_id: i64) -> Option<Vec<Message>> {
    get_json(&messages_query(user_id), token).await
}

/// Fetch absences scoped by role.
pub async fn fetch_absences(
    token: Option<String>,
    role: Option<Role>,
    user_id: i64,
) -> Option<Vec<Absence>> {
    get_json(&absences_query(role, user_id), token).await
}

/// Fetch reports scoped by role.
pub async fn fetch_reports(
    token: Option<String>,
    role: Option<Role>,
    user_id: i64,
) -> Option<Vec<Report>> {
    get_json(&reports_query(role, user_id), token).await
}

/// Fetch a single user row by id (profile view).
pub async fn fetch_user(token: Option<String>, id: i64) -> Option<UserSummary> {
    get_json(&format!("/users.php?id={id}"), token).await
}

/// Fetch all users (admin view).
pub async fn fetch_users(token: Option<String>) -> Option<Vec<UserSummary>> {
    get_json("/users.php", token).await
}

/// Fetch all groups (admin view).
pub async fn fetch_groups(token: Option<String>) -> Option<Vec<Group>> {
    get_json("/groups.php", token).await
}

/// Send an internal message.
///
/// # Errors
///
/// Returns a user-presentable message when the backend rejects the send
/// or cannot be reached.
pub async fn send_message(token: Option<String>, message: &NewMessage) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let request = bearer(
            gloo_net::http::Request::post(&config::endpoint("/messages.php")),
            token.as_deref(),
        )
        .json(message)
        .map_err(|_| ERR_CONNECT.to_owned())?;
        let resp = request.send().await.map_err(|_| ERR_CONNECT.to_owned())?;
        let status = resp
            .json::<crate::net::types::ApiStatus>()
            .await
            .map_err(|_| ERR_CONNECT.to_owned())?;
        if status.success {
            Ok(())
        } else {
            Err(status
                .message
                .unwrap_or_else(|| "No se pudo enviar el mensaje".to_owned()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, message);
        Err(ERR_CONNECT.to_owned())
    }
}

/// GET a JSON list from `path`, yielding `None` on any failure.
async fn get_json<T: serde::de::DeserializeOwned>(
    path: &str,
    token: Option<String>,
) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(
            gloo_net::http::Request::get(&config::endpoint(path)),
            token.as_deref(),
        )
        .send()
        .await
        .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<T>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        None
    }
}

/// Attach the bearer credential when a token is present.
#[cfg(feature = "hydrate")]
fn bearer(
    builder: gloo_net::http::RequestBuilder,
    token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}
