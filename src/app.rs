mod contact;
mod cursor;
mod footer;
mod header;
mod homepage;
mod intro;
mod projects;
mod scroll;
mod viewport;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SITE;
use crate::landing::ContentGate;
use cursor::CustomCursor;
use footer::{FloatingCvButton, Footer};
use header::Header;
use homepage::HomePage;
use intro::Intro;
use viewport::provide_viewport;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_viewport(SITE.breakpoint_px);

    // main content stays mounted behind the intro; only its classes change
    let gate = RwSignal::new(ContentGate::default());
    provide_context(gate);

    view! {
        <Title formatter=|title| format!("{} - {title}", SITE.name) />
        // must not be a scroll container or the pinned sections stop sticking
        <div class="relative min-h-screen overflow-x-clip">
            <CustomCursor />
            <Router>
                <div
                    class=move || format!("relative transition-opacity duration-700 {}", gate.get().class())
                    aria-hidden=move || (!gate.get().is_visible()).to_string()
                >
                    <Header />
                    <main>
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                        </Routes>
                    </main>
                    <Footer />
                    <FloatingCvButton />
                </div>
            </Router>
            <Intro />
        </div>
    }
}
