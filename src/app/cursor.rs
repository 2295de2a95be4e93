use std::collections::HashMap;

use leptos::{ev, prelude::*};
use leptos_use::{use_raf_fn_with_options, UseRafFnCallbackArgs, UseRafFnOptions};
use wasm_bindgen::JsCast;

use super::viewport::use_viewport;
use crate::config::SITE;
use crate::landing::cursor::{CURSOR_DOT, INTERACTIVE_SELECTOR};
use crate::landing::{CursorTracker, ListenerHost, ListenerKind, VisualState};

const CURSOR_TRANSFORM: &str = "translate(-50%, -50%)";
const BODY_CLASS: &str = "has-custom-cursor";

/// Closest interactive ancestor of an event target, if any.
fn interactive(target: Option<web_sys::EventTarget>) -> Option<web_sys::Element> {
    target?
        .dyn_into::<web_sys::Element>()
        .ok()?
        .closest(INTERACTIVE_SELECTOR)
        .ok()
        .flatten()
}

/// Window-level listeners feeding a [`CursorTracker`]. Hover is delegated:
/// one `mouseover`/`mouseout` pair covers interactive elements mounted at
/// any time.
struct WindowListeners {
    tracker: StoredValue<CursorTracker>,
    handles: HashMap<ListenerKind, WindowListenerHandle>,
}

impl ListenerHost for WindowListeners {
    fn attach(&mut self, kind: ListenerKind) {
        let tracker = self.tracker;
        let handle = match kind {
            ListenerKind::PointerMove => window_event_listener(ev::mousemove, move |e| {
                tracker.update_value(|t| t.pointer_move(e.client_x() as f64, e.client_y() as f64));
            }),
            ListenerKind::PointerDown => window_event_listener(ev::mousedown, move |_| {
                tracker.update_value(|t| t.pointer_down());
            }),
            ListenerKind::HoverEnter => window_event_listener(ev::mouseover, move |e| {
                let entered = interactive(e.target());
                if entered.is_some() && entered != interactive(e.related_target()) {
                    tracker.update_value(|t| t.hover(true));
                }
            }),
            ListenerKind::HoverLeave => window_event_listener(ev::mouseout, move |e| {
                let left = interactive(e.target());
                if left.is_some() && left != interactive(e.related_target()) {
                    tracker.update_value(|t| t.hover(false));
                }
            }),
        };
        if let Some(previous) = self.handles.insert(kind, handle) {
            previous.remove();
        }
    }

    fn detach(&mut self, kind: ListenerKind) {
        if let Some(handle) = self.handles.remove(&kind) {
            handle.remove();
        }
    }
}

fn toggle_body_class(enabled: bool) {
    let Some(body) = document().body() else {
        return;
    };
    if let Err(e) = body.class_list().toggle_with_force(BODY_CLASS, enabled) {
        log::warn!("couldn't toggle {BODY_CLASS}: {e:?}");
    }
}

#[component]
pub fn CustomCursor() -> impl IntoView {
    let viewport = use_viewport();
    let tracker = StoredValue::new(CursorTracker::new(SITE.cursor.clone()));
    let listeners = StoredValue::new_local(WindowListeners {
        tracker,
        handles: HashMap::new(),
    });
    let enabled = RwSignal::new(false);
    let dot = RwSignal::new(VisualState::default().with_opacity(0.0));
    let ring = RwSignal::new(VisualState::default().with_opacity(0.0));

    let sync = move || {
        tracker.update_value(|t| {
            for id in t.context_mut().take_dirty() {
                let signal = if id == CURSOR_DOT { dot } else { ring };
                if let Some(state) = t.context().state(id) {
                    signal.set(state.clone());
                }
            }
        });
    };
    let raf = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            tracker.update_value(|t| t.tick(args.timestamp));
            sync();
        },
        UseRafFnOptions::default().immediate(false),
    );

    let (pause, resume) = (raf.pause, raf.resume);
    Effect::new(move |_| {
        let Some(class) = viewport.class() else {
            return;
        };
        let now_enabled = tracker
            .try_update_value(|t| {
                listeners.update_value(|host| t.on_viewport(class, host));
                t.is_enabled()
            })
            .unwrap_or(false);
        toggle_body_class(now_enabled);
        enabled.set(now_enabled);
        if now_enabled {
            resume();
        } else {
            // the hidden state was set outside a tick
            sync();
            pause();
        }
    });

    on_cleanup(move || {
        tracker.update_value(|t| listeners.update_value(|host| t.teardown(host)));
    });

    let style = move |state: RwSignal<VisualState>| {
        move || state.with(|s| s.style_css(CURSOR_TRANSFORM))
    };

    view! {
        <Show when=move || enabled.get()>
            <div
                class="fixed top-0 left-0 w-2 h-2 rounded-full bg-white pointer-events-none z-[10000] mix-blend-difference"
                style=style(dot)
            ></div>
            <div
                class="fixed top-0 left-0 w-8 h-8 rounded-full border-2 border-white pointer-events-none z-[10000] mix-blend-difference"
                style=style(ring)
            ></div>
        </Show>
    }
}
