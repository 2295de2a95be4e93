use leptos::server_fn::codec::GetUrl;
use leptos::{html, prelude::*};

use super::scroll::{document_top, on_scroll_and_resize, scroll_y, use_reveal, window_size};
use super::viewport::use_viewport;
use crate::nav::PinnedStrip;

#[cfg(feature = "ssr")]
use crate::projects::get_projects;
use crate::projects::{Project, GLOBAL_PROJECT_CACHE};

const CACHE_KEY: &str = "";

#[server(input = GetUrl)]
pub async fn get_projects_server() -> Result<Vec<Project>, ServerFnError> {
    get_projects().await.map_err(|e| {
        tracing::error!("{e}");
        ServerFnError::new(e.to_string())
    })
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        date,
        tags,
        repo,
        demo,
        image,
        content,
        ..
    } = project;
    view! {
        <article class="shrink-0 w-[85vw] md:w-[60vw] lg:w-[40vw] snap-center rounded-2xl bg-[#2a0b42]/70 border border-purple-900/30 p-6 flex flex-col gap-4">
            {image
                .map(|src| {
                    view! {
                        <img
                            src=src
                            alt=title.clone()
                            class="w-full aspect-video object-cover rounded-xl"
                            loading="lazy"
                        />
                    }
                })}
            <div class="flex items-baseline justify-between gap-4">
                <h3 class="text-2xl font-bold text-purple-200">{title.clone()}</h3>
                <span class="text-sm text-gray-400">{date.format("%b %Y").to_string()}</span>
            </div>
            <p class="text-gray-300">{description}</p>
            <div class="text-sm text-gray-400 leading-relaxed" inner_html=content></div>
            <ul class="flex flex-wrap gap-2">
                {tags
                    .into_iter()
                    .map(|tag| {
                        view! {
                            <li class="px-3 py-1 rounded-full text-xs bg-purple-900/40 text-purple-200">
                                {tag}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="mt-auto flex gap-4">
                {demo
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-violet-300 hover:text-white"
                            >
                                "Live ↗"
                            </a>
                        }
                    })}
                {repo
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-violet-300 hover:text-white"
                            >
                                "Source ↗"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let viewport = use_viewport();
    let projects = Resource::new(
        || (),
        move |_| async move {
            let cache = &*GLOBAL_PROJECT_CACHE;
            if let Some(p) = cache.get(CACHE_KEY) {
                return (*p).clone();
            }
            let projects = match get_projects_server().await {
                Ok(projects) => projects,
                Err(e) => {
                    log::warn!("couldn't load projects: {e}");
                    return Vec::new();
                }
            };
            #[cfg(feature = "hydrate")]
            cache.insert(CACHE_KEY.to_string(), projects.clone());
            projects
        },
    );

    let heading_ref = NodeRef::<html::Div>::new();
    let heading_shown = use_reveal(heading_ref);

    // desktop pins the cards and turns vertical scrolling into sideways
    let pinned = move || !viewport.is_mobile();
    let track_ref = NodeRef::<html::Div>::new();
    let row_ref = NodeRef::<html::Div>::new();
    let strip = StoredValue::new(PinnedStrip::default());
    let distance = RwSignal::new(0.0);
    let shift = RwSignal::new(0.0);

    let measure = move || {
        let (Some(track), Some(row)) = (track_ref.get_untracked(), row_ref.get_untracked()) else {
            return;
        };
        let (width, _) = window_size();
        let measured = PinnedStrip {
            top: document_top(&track),
            strip_width: row.scroll_width() as f64,
            viewport_width: width,
        };
        log::debug!("project strip {measured:?}");
        strip.set_value(measured);
        distance.set(measured.distance());
        shift.set(measured.offset(scroll_y()));
    };
    // the row only exists once the projects have loaded
    Effect::new(move |_| {
        let _ = row_ref.get();
        let _ = viewport.class();
        measure();
    });
    on_scroll_and_resize(
        move || shift.set(strip.get_value().offset(scroll_y())),
        measure,
    );

    view! {
        <section id="projects" class="relative py-32 bg-gradient-to-b from-black to-[#9a74cf50]">
            <div
                node_ref=heading_ref
                class=move || {
                    format!(
                        "container mx-auto px-4 transition-all duration-1000 ease-out {}",
                        if heading_shown.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-24" },
                    )
                }
            >
                <h2 class="text-5xl md:text-7xl font-bold text-center mb-6 bg-clip-text text-transparent bg-gradient-to-r from-purple-300 via-white to-purple-300">
                    "Featured Projects"
                </h2>
                <div
                    class="mx-auto mb-16 h-1 bg-purple-400 shadow-[0_0_20px_rgba(192,132,252,0.8)] transition-all duration-[1800ms] delay-300"
                    style=move || if heading_shown.get() { "width: 33%;" } else { "width: 0%; opacity: 0;" }
                ></div>
            </div>
            <div
                node_ref=track_ref
                style=move || {
                    if pinned() {
                        format!("height: calc(100vh + {:.0}px);", distance.get())
                    } else {
                        String::new()
                    }
                }
            >
                <div class=move || {
                    if pinned() { "sticky top-0 h-screen overflow-hidden flex items-center" } else { "px-4" }
                }>
                    <Transition fallback=move || {
                        view! {
                            <div class="flex gap-8 overflow-hidden px-[5vw]">
                                <div class="loading-skeleton h-96 w-[40vw] rounded-2xl"></div>
                                <div class="loading-skeleton h-96 w-[40vw] rounded-2xl"></div>
                            </div>
                        }
                    }>
                        {move || Suspend::new(async move {
                            let projects = projects.await;
                            view! {
                                <div
                                    node_ref=row_ref
                                    class=move || {
                                        if pinned() {
                                            "flex gap-8 w-max px-[5vw] will-change-transform"
                                        } else {
                                            "flex gap-8 overflow-x-auto snap-x snap-mandatory pb-6"
                                        }
                                    }
                                    style=move || {
                                        if pinned() {
                                            format!("transform: translateX({:.1}px);", shift.get())
                                        } else {
                                            String::new()
                                        }
                                    }
                                >
                                    {projects
                                        .into_iter()
                                        .map(|project| view! { <ProjectCard project=project /> })
                                        .collect_view()}
                                </div>
                            }
                        })}
                    </Transition>
                </div>
            </div>
        </section>
    }
}
