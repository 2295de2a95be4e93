use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use super::contact::ContactModal;
use super::scroll::{scroll_y, window_size};
use super::viewport::use_viewport;
use crate::config::SITE;
use crate::nav::{active_section, scroll_progress, SectionBounds, NAV_ITEMS};

fn section_bounds() -> Vec<SectionBounds> {
    let document = document();
    NAV_ITEMS
        .iter()
        .filter_map(|item| {
            let el = document
                .get_element_by_id(item.id)?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()?;
            Some(SectionBounds {
                id: item.id,
                top: el.offset_top() as f64,
                height: el.offset_height() as f64,
            })
        })
        .collect()
}

fn page_progress() -> f64 {
    let (_, viewport_height) = window_size();
    let scroll_height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();
    scroll_progress(scroll_y(), scroll_height, viewport_height)
}

#[component]
fn Brand() -> impl IntoView {
    let initial = SITE.name.chars().next().unwrap_or('P');
    view! {
        <a href="#home" class="flex items-center">
            <div class="h-10 w-10 rounded-xl bg-gradient-to-r from-gray-500 to-gray-100 flex items-center justify-center text-purple-600 font-bold text-xl mr-3">
                {initial.to_string()}
            </div>
            <span class="text-xl font-bold bg-gradient-to-r from-gray-300 to-gray-100 bg-clip-text text-transparent">
                "Portfolio"
            </span>
        </a>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    SITE.links
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-gray-300 hover:text-violet-400 transition-colors duration-300"
                >
                    {link.label.clone()}
                </a>
            }
        })
        .collect_view()
}

#[component]
pub fn Header() -> impl IntoView {
    let viewport = use_viewport();
    let active = RwSignal::new(NAV_ITEMS[0].id);
    let progress = RwSignal::new(0.0);
    let menu_open = RwSignal::new(false);
    let contact_open = RwSignal::new(false);

    let on_scroll = move || {
        if let Some(id) = active_section(scroll_y(), &section_bounds()) {
            active.set(id);
        }
        progress.set(page_progress());
    };
    let handle = window_event_listener(ev::scroll, move |_| on_scroll());
    on_cleanup(move || handle.remove());

    // the menu belongs to the mobile layout; crossing to desktop closes it
    Effect::new(move |_| {
        if !viewport.is_mobile() {
            menu_open.set(false);
        }
    });

    let link_class = move |id: &'static str| {
        move || {
            if active.get() == id {
                "relative font-medium text-violet-400 transition-colors duration-300"
            } else {
                "relative font-medium text-gray-300 hover:text-violet-400 transition-colors duration-300"
            }
        }
    };

    let open_contact = move |_| {
        menu_open.set(false);
        contact_open.set(true);
    };

    view! {
        <header class="fixed top-0 w-full z-50 bg-gray-900/80 backdrop-blur-sm border-b border-gray-700">
            <div
                class="absolute bottom-0 left-0 h-0.5 bg-gradient-to-r from-violet-600 to-blue-500"
                style=move || format!("width: {:.2}%;", progress.get() * 100.0)
            ></div>
            <div class="max-w-screen-xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between h-16 md:h-20">
                <Brand />
                <Show when=move || !viewport.is_mobile()>
                    <nav class="flex space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a href=format!("#{}", item.id) class=link_class(item.id)>
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="flex items-center space-x-4">
                        <SocialLinks />
                        <button
                            class="ml-4 px-4 py-2 rounded-xl bg-gradient-to-r from-gray-400 to-gray-100 text-violet-700 font-bold hover:from-violet-700 hover:to-purple-700 hover:text-white transition-all duration-500"
                            on:click=open_contact
                        >
                            "Hire Me"
                        </button>
                    </div>
                </Show>
                <Show when=move || viewport.is_mobile()>
                    <button
                        class="text-gray-300"
                        aria-label="Toggle menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </Show>
            </div>
            <Show when=move || menu_open.get()>
                <div class="bg-gray-900 shadow-lg px-4 py-5 space-y-5">
                    <nav class="flex flex-col space-y-3">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=format!("#{}", item.id)
                                        class=link_class(item.id)
                                        on:click=move |_| menu_open.set(false)
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="pt-4 border-t border-gray-700 flex space-x-5">
                        <SocialLinks />
                    </div>
                    <button
                        class="block w-full px-4 py-2 rounded-lg bg-gradient-to-r from-violet-600 to-violet-400 font-bold"
                        on:click=open_contact
                    >
                        "Contact Me"
                    </button>
                </div>
            </Show>
        </header>
        <ContactModal open=contact_open />
    }
}
