//! Absence records, scoped to the caller's role.

use leptos::prelude::*;

use crate::components::side_panel::SidePanelLayout;
use crate::net::api;
use crate::session::store::SessionContext;

/// Absences list. Teachers see what they recorded, students and parents
/// their own side, admins everything; the scoping lives in the query.
#[component]
pub fn AbsencesPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let role = session.role();
    let user_id = session.user_id().unwrap_or_default();

    let absences = {
        let session = session.clone();
        LocalResource::new(move || api::fetch_absences(session.token(), role, user_id))
    };

    view! {
        <SidePanelLayout>
            <section class="absences">
                <h2>"Faltas de asistencia"</h2>
                <Suspense fallback=move || view! { <p>"Cargando faltas..."</p> }>
                    {move || {
                        absences.get().map(|rows| match rows {
                            Some(rows) if !rows.is_empty() => {
                                view! {
                                    <table class="absences__table">
                                        <thead>
                                            <tr>
                                                <th>"Alumno"</th>
                                                <th>"Profesor"</th>
                                                <th>"Fecha"</th>
                                                <th>"Justificada"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows
                                                .into_iter()
                                                .map(|row| {
                                                    view! {
                                                        <tr>
                                                            <td>{row.student_name.unwrap_or_default()}</td>
                                                            <td>{row.teacher_name.unwrap_or_default()}</td>
                                                            <td>{row.date.unwrap_or_default()}</td>
                                                            <td>{if row.justified { "Sí" } else { "No" }}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            _ => view! { <p>"No hay faltas registradas."</p> }.into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </SidePanelLayout>
    }
}
