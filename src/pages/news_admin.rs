//! Announcement management view for admin and teacher roles.
//!
//! Reached via the management menu entry; students and parents read the
//! same announcements on the home view instead. Create/edit/delete
//! dialogs are backend-driven and out of scope here.

use leptos::prelude::*;

use crate::components::news_list::NewsList;
use crate::components::side_panel::SidePanelLayout;
use crate::session::role::Role;
use crate::session::store::SessionContext;

/// Management view over the announcement list.
#[component]
pub fn NewsAdminPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let can_manage = matches!(session.role(), Some(Role::Admin | Role::Teacher));

    view! {
        <SidePanelLayout>
            <section class="news news--manage">
                <h2>"Gestión de noticias"</h2>
                <Show when=move || !can_manage>
                    <p class="news__notice">"Solo lectura para tu rol."</p>
                </Show>
                <NewsList/>
            </section>
        </SidePanelLayout>
    }
}
