//! Home page: read-only announcements for every role.

use leptos::prelude::*;

use crate::components::news_list::NewsList;
use crate::components::side_panel::SidePanelLayout;

/// Home page — the default landing view after login.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SidePanelLayout>
            <section class="news">
                <h2>"Noticias"</h2>
                <NewsList/>
            </section>
        </SidePanelLayout>
    }
}
