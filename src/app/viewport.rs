use std::sync::{Arc, Mutex};

use leptos::{ev, prelude::*};

use crate::landing::{ViewportClass, ViewportClassifier};

/// Current viewport class, `None` until measured in the browser.
#[derive(Debug, Clone, Copy)]
pub struct Viewport(RwSignal<Option<ViewportClass>>);

impl Viewport {
    pub fn class(&self) -> Option<ViewportClass> {
        self.0.get()
    }

    pub fn is_mobile(&self) -> bool {
        self.class() == Some(ViewportClass::Mobile)
    }
}

fn window_width() -> Option<f64> {
    window().inner_width().ok()?.as_f64()
}

/// Owns the one [`ViewportClassifier`] on the page and exposes its
/// crossings as a signal. Everything else reads [`use_viewport`].
pub fn provide_viewport(breakpoint: f64) -> Viewport {
    let class = RwSignal::new(None);
    let classifier = Arc::new(Mutex::new(ViewportClassifier::new(breakpoint)));
    if let Ok(mut c) = classifier.lock() {
        c.subscribe(move |v| class.set(Some(v)));
    }

    let measure = move || {
        let Some(width) = window_width() else {
            return;
        };
        match classifier.lock() {
            Ok(mut c) => {
                c.update(width);
            }
            Err(e) => log::warn!("viewport classifier poisoned: {e}"),
        }
    };
    let initial = measure.clone();
    Effect::new(move |_| initial());
    let handle = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || handle.remove());

    let viewport = Viewport(class);
    provide_context(viewport);
    viewport
}

pub fn use_viewport() -> Viewport {
    expect_context::<Viewport>()
}
