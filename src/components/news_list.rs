//! Announcement list shared by the home view and the management view.

use leptos::prelude::*;

use crate::net::api;
use crate::session::store::SessionContext;

/// Fetches and renders the published announcements.
#[component]
pub fn NewsList() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let news = LocalResource::new(move || api::fetch_news(session.token()));

    view! {
        <Suspense fallback=move || view! { <p>"Cargando noticias..."</p> }>
            {move || {
                news.get().map(|items| match items {
                    Some(items) if !items.is_empty() => {
                        view! {
                            <ul class="news__list">
                                {items
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <li class="news__item">
                                                <h3>{item.title}</h3>
                                                <p class="news__meta">
                                                    {item.author.unwrap_or_default()}
                                                    " "
                                                    {item.created_at.unwrap_or_default()}
                                                </p>
                                                <p>{item.content.unwrap_or_default()}</p>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }
                    _ => view! { <p>"No hay noticias publicadas."</p> }.into_any(),
                })
            }}
        </Suspense>
    }
}
