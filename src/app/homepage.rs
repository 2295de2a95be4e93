use leptos::{html, prelude::*};
use leptos_meta::Title;

use super::contact::ContactForm;
use super::projects::ProjectsSection;
use super::scroll::{document_top, on_scroll_and_resize, scroll_y, use_reveal, window_size};
use crate::config::{SkillGroup, SITE};
use crate::nav::{circle_frame, pinned_progress};

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex flex-col items-center justify-center text-center px-4 pt-20">
            <p class="text-lg text-purple-300 mb-4">"Hi, I'm"</p>
            <h1 class="text-5xl md:text-7xl font-bold mb-6 bg-clip-text text-transparent bg-gradient-to-r from-purple-300 via-white to-blue-300">
                {SITE.name.clone()}
            </h1>
            <p class="max-w-2xl text-xl text-gray-300">{SITE.tagline.clone()}</p>
            <div class="mt-10 flex gap-4">
                <a
                    href="#projects"
                    class="px-6 py-3 rounded-xl bg-gradient-to-r from-violet-600 to-purple-400 font-medium"
                >
                    "See my work"
                </a>
                <a href="#contact" class="px-6 py-3 rounded-xl border border-purple-400 font-medium">
                    "Say hello"
                </a>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-32 px-4">
            <div class="max-w-3xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold mb-10 text-center">"About Me"</h2>
                {SITE
                    .about
                    .iter()
                    .map(|p| view! { <p class="text-lg mb-6 leading-relaxed text-gray-300">{p.clone()}</p> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// The little equaliser next to each skill.
#[component]
fn SkillBars(color: String) -> impl IntoView {
    (0..5)
        .map(|i| {
            let style = format!(
                "left: {}px; height: {}px; background-color: {color}; animation-delay: {:.1}s;",
                i * 16,
                10 + i * 8,
                i as f64 * 0.2
            );
            view! { <span class="absolute bottom-0 w-3 rounded-full animate-pulse" style=style></span> }
        })
        .collect_view()
}

/// Eases in with a little overshoot, like `back.out(1.7)`.
const REVEAL_EASE: &str = "ease-[cubic-bezier(0.34,1.56,0.64,1)]";

#[component]
fn SkillCard(group: SkillGroup, index: usize) -> impl IntoView {
    let SkillGroup {
        category,
        color,
        items,
    } = group;
    let card_ref = NodeRef::<html::Div>::new();
    let shown = use_reveal(card_ref);
    view! {
        <div
            node_ref=card_ref
            class=move || {
                format!(
                    "transition-all duration-800 {REVEAL_EASE} {}",
                    if shown.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-20" },
                )
            }
            style=format!("transition-delay: {}ms;", index * 150)
        >
            <div class="relative bg-[#2a0b42]/70 backdrop-blur-sm p-8 rounded-2xl border border-purple-900/30 shadow-xl min-h-[400px] hover:-translate-y-2 transition-transform">
                <h3 class="text-2xl font-bold text-purple-300 mb-6">{category}</h3>
                <ul class="space-y-6">
                    {items
                        .into_iter()
                        .map(|skill| {
                            let color = color.clone();
                            view! {
                                <li class="flex items-center justify-between py-2">
                                    <span class="text-lg font-medium" style=format!("color: {color};")>
                                        {skill}
                                    </span>
                                    <div class="relative w-20 h-10">
                                        <SkillBars color=color />
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn Skills() -> impl IntoView {
    let title_ref = NodeRef::<html::Div>::new();
    let title_shown = use_reveal(title_ref);
    view! {
        <section
            id="skills"
            class="relative py-32 min-h-screen bg-gradient-to-b from-[#9a74cf50] to-black"
        >
            <div class="container mx-auto px-4">
                <div
                    node_ref=title_ref
                    class=move || {
                        format!(
                            "transition-all duration-1200 {REVEAL_EASE} {}",
                            if title_shown.get() {
                                "opacity-100 translate-y-0 scale-100"
                            } else {
                                "opacity-0 translate-y-12 scale-80"
                            },
                        )
                    }
                >
                    <h2 class="text-5xl md:text-7xl font-bold text-center mb-20 bg-clip-text text-transparent bg-gradient-to-r from-purple-300 via-white to-purple-300">
                        "Toolbox of Wonders"
                    </h2>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {SITE
                        .skills
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(index, group)| view! { <SkillCard group=group index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Pinned for two screens of scrolling while a circle floods the view.
#[component]
fn ContactCircle() -> impl IntoView {
    let track_ref = NodeRef::<html::Div>::new();
    let progress = RwSignal::new(0.0);
    let follow = move || {
        let Some(track) = track_ref.get_untracked() else {
            return;
        };
        let (_, height) = window_size();
        progress.set(pinned_progress(scroll_y(), document_top(&track), height * 2.0));
    };
    Effect::new(move |_| {
        if track_ref.get().is_some() {
            follow();
        }
    });
    on_scroll_and_resize(follow, follow);
    let frame = Memo::new(move |_| circle_frame(progress.get()));

    view! {
        <div node_ref=track_ref class="h-[300vh]">
            <div class="sticky top-0 h-screen overflow-hidden flex items-center justify-center">
                <div
                    class="absolute w-24 h-24 rounded-full will-change-transform"
                    style=move || {
                        let f = frame.get();
                        format!(
                            "transform: scale({:.3}); background-color: {}; box-shadow: 0 0 {:.0}px {:.0}px rgba(233, 213, 255, {:.2});",
                            f.scale,
                            f.color,
                            50.0 * f.glow,
                            20.0 * f.glow,
                            0.3 * f.glow,
                        )
                    }
                ></div>
                <p
                    class="relative text-4xl md:text-6xl font-bold text-center px-4"
                    style=move || format!("opacity: {:.3};", frame.get().lead_opacity)
                >
                    "Got an idea?"
                </p>
                <div
                    class="absolute inset-0 flex flex-col items-center justify-center text-center px-4 text-purple-950"
                    style=move || format!("opacity: {:.3};", frame.get().message_opacity)
                >
                    <h2 class="text-5xl md:text-7xl font-bold mb-6">"Let's Talk"</h2>
                    <p class="text-xl">"Scroll on and drop me a line."</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="bg-[#e9d5ff]">
            <ContactCircle />
            <div class="bg-black py-32 px-4">
                <div class="max-w-md mx-auto text-center">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">"Say Hello"</h2>
                    <p class="mb-10 text-gray-300">
                        "Have a project in mind or just want to say hi? My inbox is open."
                    </p>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <Hero />
        <About />
        <Skills />
        <ProjectsSection />
        <Contact />
    }
}
