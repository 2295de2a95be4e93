use leptos::{ev, html, prelude::*};

use crate::nav::is_revealed;

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Inner width and height of the window.
pub fn window_size() -> (f64, f64) {
    let window = window();
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or_default()
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// Document offset of the element's top edge.
pub fn document_top(el: &web_sys::Element) -> f64 {
    el.get_bounding_client_rect().top() + scroll_y()
}

/// Window scroll and resize listeners that live as long as the owner. The
/// intro's layout refresh arrives as a resize.
pub fn on_scroll_and_resize(on_scroll: impl Fn() + 'static, on_resize: impl Fn() + 'static) {
    let scroll = window_event_listener(ev::scroll, move |_| on_scroll());
    let resize = window_event_listener(ev::resize, move |_| on_resize());
    on_cleanup(move || {
        scroll.remove();
        resize.remove();
    });
}

/// Whether `target` has risen past the reveal line.
pub fn use_reveal(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let revealed = RwSignal::new(false);
    let check = move || {
        let Some(el) = target.get_untracked() else {
            return;
        };
        let (_, height) = window_size();
        let now = is_revealed(el.get_bounding_client_rect().top(), height);
        if now != revealed.get_untracked() {
            revealed.set(now);
        }
    };
    Effect::new(move |_| {
        if target.get().is_some() {
            check();
        }
    });
    on_scroll_and_resize(check, check);
    revealed.read_only()
}
