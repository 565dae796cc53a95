//! User administration (admin only, enforced by the route guard).

use leptos::prelude::*;

use crate::components::side_panel::SidePanelLayout;
use crate::net::api;
use crate::session::role::{Role, label_or_unknown};
use crate::session::store::SessionContext;

/// User table for administrators.
#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let users = LocalResource::new(move || api::fetch_users(session.token()));

    view! {
        <SidePanelLayout>
            <section class="admin">
                <h2>"Administración de usuarios"</h2>
                <Suspense fallback=move || view! { <p>"Cargando usuarios..."</p> }>
                    {move || {
                        users.get().map(|rows| match rows {
                            Some(rows) if !rows.is_empty() => {
                                view! {
                                    <table class="admin__table">
                                        <thead>
                                            <tr>
                                                <th>"Nombre"</th>
                                                <th>"Email"</th>
                                                <th>"Rol"</th>
                                                <th>"Grupo"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows
                                                .into_iter()
                                                .map(|row| {
                                                    let role = row.role.as_deref().and_then(Role::parse);
                                                    let name = format!(
                                                        "{} {}",
                                                        row.name.unwrap_or_default(),
                                                        row.surname.unwrap_or_default()
                                                    );
                                                    view! {
                                                        <tr>
                                                            <td>{name.trim().to_owned()}</td>
                                                            <td>{row.email.unwrap_or_default()}</td>
                                                            <td>{label_or_unknown(role)}</td>
                                                            <td>{row.group_name.unwrap_or_default()}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            _ => view! { <p>"No hay usuarios."</p> }.into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </SidePanelLayout>
    }
}
