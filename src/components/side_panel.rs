//! Layout with the collapsible role-gated side menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::nav::{Destination, destinations_for};
use crate::session::store::SessionContext;

/// Page layout: header on top, side menu on the left, content beside it.
///
/// The menu renders exactly the destinations the navigation policy grants
/// the current role; the admin entries sit behind a collapsible
/// sub-section. Visibility here is presentational; the route guard
/// enforces the admin-only destinations independently.
#[component]
pub fn SidePanelLayout(children: Children) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let open = RwSignal::new(false);
    let admin_open = RwSignal::new(false);

    let destinations = destinations_for(session.role());
    let main_entries: Vec<Destination> = destinations
        .iter()
        .copied()
        .filter(|d| !d.is_admin_section())
        .collect();
    let admin_entries: Vec<Destination> = destinations
        .iter()
        .copied()
        .filter(|d| d.is_admin_section())
        .collect();
    let has_admin = !admin_entries.is_empty();
    let admin_entries = StoredValue::new(admin_entries);

    view! {
        <div class="layout">
            <Header/>
            <div class="layout__body">
                <aside class="menu" class=("menu--open", move || open.get())>
                    <div class="menu__top">
                        <span class="menu__title">"MENÚ"</span>
                        <button class="menu__toggle" on:click=move |_| open.update(|v| *v = !*v)>
                            {move || if open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                    <Show when=move || open.get()>
                        <nav class="menu__entries">
                            {main_entries
                                .clone()
                                .into_iter()
                                .map(MenuEntry)
                                .collect::<Vec<_>>()}
                            <Show when=move || has_admin>
                                <button
                                    class="menu__item"
                                    on:click=move |_| admin_open.update(|v| *v = !*v)
                                >
                                    "Administración"
                                </button>
                                <Show when=move || admin_open.get()>
                                    <div class="menu__admin">
                                        {admin_entries
                                            .get_value()
                                            .into_iter()
                                            .map(MenuEntry)
                                            .collect::<Vec<_>>()}
                                    </div>
                                </Show>
                            </Show>
                        </nav>
                    </Show>
                </aside>
                <main class="layout__content">{children()}</main>
            </div>
        </div>
    }
}

/// One navigation button in the menu.
#[allow(non_snake_case)]
fn MenuEntry(destination: Destination) -> impl IntoView {
    let navigate = use_navigate();
    view! {
        <button
            class="menu__item"
            on:click=move |_| navigate(destination.path(), NavigateOptions::default())
        >
            {destination.label()}
        </button>
    }
}
