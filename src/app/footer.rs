use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::config::SITE;
use crate::nav::NAV_ITEMS;

fn built_at() -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(env!("BUILD_TIME")) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            log::warn!("bad BUILD_TIME: {e}");
            Utc::now()
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let built = built_at();
    view! {
        <footer class="bg-black border-t border-gray-800 py-12 px-4">
            <div class="max-w-screen-xl mx-auto flex flex-col md:flex-row gap-8 justify-between">
                <div>
                    <p class="text-xl font-bold text-purple-300">{SITE.name.clone()}</p>
                    <p class="text-gray-400">{SITE.tagline.clone()}</p>
                </div>
                <nav class="flex flex-wrap gap-6">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a href=format!("#{}", item.id) class="text-gray-400 hover:text-white">
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex gap-6">
                    {SITE
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-gray-400 hover:text-violet-400"
                                >
                                    {link.label.clone()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="max-w-screen-xl mx-auto mt-8 pt-8 border-t border-gray-800 flex flex-col sm:flex-row justify-between text-sm text-gray-500">
                <span>{format!("© {} {}. All rights reserved.", built.year(), SITE.name)}</span>
                <span>{format!("Last built {}", built.format("%Y-%m-%d %H:%M UTC"))}</span>
            </div>
        </footer>
    }
}

#[component]
pub fn FloatingCvButton() -> impl IntoView {
    view! {
        <div class="fixed bottom-6 right-6 z-[999] hover:scale-105 active:scale-95 transition-transform">
            <a
                href=SITE.resume_url.clone()
                download=""
                class="flex items-center gap-2 p-4 bg-gradient-to-r from-blue-600 to-indigo-600 text-white rounded-full shadow-lg hover:shadow-xl transition-all duration-300"
                aria-label="Download CV"
            >
                <span class="text-xl">"⬇"</span>
                <span class="hidden sm:inline-block font-medium">"Download CV"</span>
            </a>
        </div>
    }
}
