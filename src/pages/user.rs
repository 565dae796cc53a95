//! Profile page for the logged-in actor.

use leptos::prelude::*;

use crate::components::side_panel::SidePanelLayout;
use crate::net::api;
use crate::session::role::label_or_unknown;
use crate::session::store::SessionContext;

/// Profile view.
///
/// Identity fields come straight from the session store; the email and
/// group columns are fetched. An unrecognized stored role is displayed
/// as "Desconocido" rather than failing the view.
#[component]
pub fn UserPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let display_name = session.display_name().unwrap_or_else(|| "Usuario".to_owned());
    let role_label = label_or_unknown(session.role());
    let user_id = session.user_id().unwrap_or_default();

    let details = {
        let session = session.clone();
        LocalResource::new(move || api::fetch_user(session.token(), user_id))
    };

    view! {
        <SidePanelLayout>
            <section class="profile">
                <h2>"Usuario"</h2>
                <dl class="profile__fields">
                    <dt>"Nombre"</dt>
                    <dd>{display_name}</dd>
                    <dt>"Rol"</dt>
                    <dd>{role_label}</dd>
                    <dt>"Identificador"</dt>
                    <dd>{user_id}</dd>
                </dl>
                <Suspense fallback=move || view! { <p>"Cargando datos..."</p> }>
                    {move || {
                        details.get().map(|user| match user {
                            Some(user) => {
                                view! {
                                    <dl class="profile__fields">
                                        <dt>"Email"</dt>
                                        <dd>{user.email.unwrap_or_default()}</dd>
                                        <dt>"Grupo"</dt>
                                        <dd>{user.group_name.unwrap_or_default()}</dd>
                                    </dl>
                                }
                                    .into_any()
                            }
                            None => view! { <p>"Datos no disponibles."</p> }.into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </SidePanelLayout>
    }
}
