//! Internal messaging: inbox list plus a compose form.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::*;

use crate::components::side_panel::SidePanelLayout;
use crate::net::api;
use crate::net::types::NewMessage;
use crate::session::store::SessionContext;

/// Validate the compose form. The receiver id must be numeric and the
/// body non-empty; the subject may be blank.
///
/// # Errors
///
/// Returns the inline form message for an invalid receiver or empty body.
pub fn validate_compose_input(
    receiver: &str,
    subject: &str,
    body: &str,
) -> Result<NewMessage, &'static str> {
    let Ok(receiver_id) = receiver.trim().parse::<i64>() else {
        return Err("Introduce un destinatario válido.");
    };
    let body = body.trim();
    if body.is_empty() {
        return Err("El mensaje no puede estar vacío.");
    }
    Ok(NewMessage {
        receiver_id,
        subject: subject.trim().to_owned(),
        body: body.to_owned(),
    })
}

/// Inbox page with a busy-guarded send form.
#[component]
pub fn MessagesPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let user_id = session.user_id().unwrap_or_default();

    let inbox = {
        let session = session.clone();
        LocalResource::new(move || api::fetch_messages(session.token(), user_id))
    };

    let receiver = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let message = match validate_compose_input(&receiver.get(), &subject.get(), &body.get()) {
            Ok(message) => message,
            Err(text) => {
                notice.set(text.to_owned());
                return;
            }
        };
        busy.set(true);
        notice.set(String::new());

        let session = session.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::send_message(session.token(), &message).await {
                Ok(()) => {
                    notice.set("Mensaje enviado.".to_owned());
                    receiver.set(String::new());
                    subject.set(String::new());
                    body.set(String::new());
                    inbox.refetch();
                }
                Err(text) => notice.set(text),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, message);
        }
    };

    view! {
        <SidePanelLayout>
            <section class="messages">
                <h2>"Mensajes"</h2>

                <form class="messages__compose" on:submit=on_send>
                    <input
                        class="messages__input"
                        type="text"
                        placeholder="Id del destinatario"
                        prop:value=move || receiver.get()
                        on:input=move |ev| receiver.set(event_target_value(&ev))
                    />
                    <input
                        class="messages__input"
                        type="text"
                        placeholder="Asunto"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                    <textarea
                        class="messages__input"
                        placeholder="Mensaje"
                        prop:value=move || body.get()
                        on:input=move |ev| body.set(event_target_value(&ev))
                    ></textarea>
                    <button class="messages__send" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Enviando…" } else { "Enviar" }}
                    </button>
                </form>
                <Show when=move || !notice.get().is_empty()>
                    <p class="messages__notice">{move || notice.get()}</p>
                </Show>

                <Suspense fallback=move || view! { <p>"Cargando mensajes..."</p> }>
                    {move || {
                        inbox.get().map(|messages| match messages {
                            Some(messages) if !messages.is_empty() => {
                                view! {
                                    <ul class="messages__list">
                                        {messages
                                            .into_iter()
                                            .map(|msg| {
                                                let unread = !msg.is_read;
                                                view! {
                                                    <li
                                                        class="messages__item"
                                                        class=("messages__item--unread", move || unread)
                                                    >
                                                        <span class="messages__sender">
                                                            {msg.sender_name.unwrap_or_default()}
                                                        </span>
                                                        <span class="messages__subject">
                                                            {msg.subject.unwrap_or_default()}
                                                        </span>
                                                        <span class="messages__date">
                                                            {msg.created_at.unwrap_or_default()}
                                                        </span>
                                                        <p>{msg.body.unwrap_or_default()}</p>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            _ => view! { <p>"No tienes mensajes."</p> }.into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </SidePanelLayout>
    }
}
