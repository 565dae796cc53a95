//! Group administration (admin only, enforced by the route guard).

use leptos::prelude::*;

use crate::components::side_panel::SidePanelLayout;
use crate::net::api;
use crate::session::store::SessionContext;

/// Group table for administrators.
#[component]
pub fn AdminGroupsPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let groups = LocalResource::new(move || api::fetch_groups(session.token()));

    view! {
        <SidePanelLayout>
            <section class="admin">
                <h2>"Administración de grupos"</h2>
                <Suspense fallback=move || view! { <p>"Cargando grupos..."</p> }>
                    {move || {
                        groups.get().map(|rows| match rows {
                            Some(rows) if !rows.is_empty() => {
                                view! {
                                    <ul class="admin__groups">
                                        {rows
                                            .into_iter()
                                            .map(|group| view! { <li>{group.name}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            _ => view! { <p>"No hay grupos."</p> }.into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </SidePanelLayout>
    }
}
