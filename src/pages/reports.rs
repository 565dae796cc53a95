//! Academic reports, scoped to the caller's role.

use leptos::prelude::*;

use crate::components::side_panel::SidePanelLayout;
use crate::net::api;
use crate::session::store::SessionContext;

/// Reports list with the same role scoping as absences.
#[component]
pub fn ReportsPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let role = session.role();
    let user_id = session.user_id().unwrap_or_default();

    let reports = {
        let session = session.clone();
        LocalResource::new(move || api::fetch_reports(session.token(), role, user_id))
    };

    view! {
        <SidePanelLayout>
            <section class="reports">
                <h2>"Informe de alumnado"</h2>
                <Suspense fallback=move || view! { <p>"Cargando informes..."</p> }>
                    {move || {
                        reports.get().map(|rows| match rows {
                            Some(rows) if !rows.is_empty() => {
                                view! {
                                    <ul class="reports__list">
                                        {rows
                                            .into_iter()
                                            .map(|row| {
                                                view! {
                                                    <li class="reports__item">
                                                        <span class="reports__student">
                                                            {row.student_name.unwrap_or_default()}
                                                        </span>
                                                        <span class="reports__teacher">
                                                            {row.teacher_name.unwrap_or_default()}
                                                        </span>
                                                        <span class="reports__date">
                                                            {row.created_at.unwrap_or_default()}
                                                        </span>
                                                        <p>{row.content.unwrap_or_default()}</p>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            _ => view! { <p>"No hay informes disponibles."</p> }.into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </SidePanelLayout>
    }
}
