use leptos::{ev::SubmitEvent, prelude::*};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::config::SITE;
use crate::contact::{ContactError, ContactMessage};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-gray-800 border border-gray-700 focus:outline-none focus:ring-2 focus:ring-purple-500 text-white";

/// Opens the visitor's mail client with the message filled in. The draft
/// survives reloads until it's handed off.
#[component]
pub fn ContactForm(
    #[prop(optional)] on_sent: Option<Callback<()>>,
    /// Keeps element ids unique when the form is on the page twice.
    #[prop(default = "contact")]
    id_prefix: &'static str,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let (draft, set_draft, _) =
        use_local_storage::<ContactMessage, JsonSerdeWasmCodec>("contact_draft");
    #[cfg(not(feature = "hydrate"))]
    let (draft, set_draft) = signal(ContactMessage::default());

    let notice = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let message = draft.get_untracked();
        let sent = message
            .mailto_uri(&SITE.contact.recipient)
            .and_then(|uri| {
                window()
                    .location()
                    .set_href(&uri)
                    .map_err(|e| ContactError::Delivery(format!("{e:?}")))
            });
        match sent {
            Ok(()) => {
                set_draft.set(ContactMessage::default());
                notice.set(None);
                if let Some(on_sent) = on_sent {
                    on_sent.run(());
                }
            }
            Err(e) => {
                log::warn!("contact form: {e}");
                notice.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <form class="space-y-4 text-left" on:submit=on_submit novalidate=true>
            <div>
                <label for=format!("{id_prefix}-name") class="block text-sm font-medium text-gray-300 mb-2">
                    "Name"
                </label>
                <input
                    id=format!("{id_prefix}-name")
                    type="text"
                    class=INPUT_CLASS
                    placeholder="Your name"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| set_draft.update(|d| d.name = event_target_value(&ev))
                />
            </div>
            <div>
                <label for=format!("{id_prefix}-email") class="block text-sm font-medium text-gray-300 mb-2">
                    "Email"
                </label>
                <input
                    id=format!("{id_prefix}-email")
                    type="email"
                    class=INPUT_CLASS
                    placeholder="you@example.com"
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| set_draft.update(|d| d.email = event_target_value(&ev))
                />
            </div>
            <div>
                <label for=format!("{id_prefix}-message") class="block text-sm font-medium text-gray-300 mb-2">
                    "Message"
                </label>
                <textarea
                    id=format!("{id_prefix}-message")
                    rows="4"
                    class=INPUT_CLASS
                    placeholder="How can I help you?"
                    prop:value=move || draft.with(|d| d.message.clone())
                    on:input=move |ev| set_draft.update(|d| d.message = event_target_value(&ev))
                ></textarea>
            </div>
            {move || {
                notice
                    .get()
                    .map(|text| {
                        view! {
                            <p class="text-sm text-red-400" role="alert">
                                {text}
                            </p>
                        }
                    })
            }}
            <button
                type="submit"
                class="w-full px-4 py-3 rounded-lg bg-gradient-to-r from-violet-600 to-purple-400 hover:from-violet-700 hover:to-purple-700 font-medium shadow-md transition-all duration-300"
            >
                "Send Message"
            </button>
        </form>
    }
}

/// The header's pop-up copy of the form.
#[component]
pub fn ContactModal(open: RwSignal<bool>) -> impl IntoView {
    Effect::new(move |_| {
        let overflow = if open.get() { "hidden" } else { "auto" };
        if let Some(body) = document().body() {
            if let Err(e) = body.style().set_property("overflow", overflow) {
                log::warn!("couldn't lock scrolling: {e:?}");
            }
        }
    });

    let close = Callback::new(move |_: ()| open.set(false));

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 bg-black/50 backdrop-blur-sm z-50 flex items-center justify-center p-4"
                on:click=move |_| open.set(false)
            >
                <div
                    class="bg-gray-900 rounded-xl shadow-xl w-full max-w-md p-6"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex justify-between items-center mb-4">
                        <h2 class="text-2xl font-bold text-gray-300">"Get In Touch"</h2>
                        <button
                            class="text-gray-400 hover:text-white"
                            aria-label="Close"
                            on:click=move |_| open.set(false)
                        >
                            "✕"
                        </button>
                    </div>
                    <ContactForm on_sent=close id_prefix="modal" />
                </div>
            </div>
        </Show>
    }
}
