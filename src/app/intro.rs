use std::collections::HashMap;

use leptos::{html, prelude::*};
use leptos_use::{use_raf_fn_with_options, UseRafFnCallbackArgs, UseRafFnOptions};

use crate::config::SITE;
use crate::landing::sequencer::{CALL_TO_ACTION, NEBULA, TITLE};
use crate::landing::{
    generate_field, ContentGate, ElementId, ElementKind, ExitTrigger, IntroSequencer,
    PointerFeedback, ReadinessGate, SequencerEvent, SequencerState, Slot, VisualField,
    VisualState,
};

const NEBULA_STYLE: &str = "background: radial-gradient(circle at center, rgba(156, 39, 176, 0.8) 0%, rgba(33, 150, 243, 0.6) 40%, rgba(0, 0, 0, 0) 70%); filter: blur(60px);";
const TITLE_STYLE: &str = "background: linear-gradient(90deg, #9c27b0, #2196f3); -webkit-background-clip: text; background-clip: text; color: transparent; text-shadow: 0 0 30px rgba(156, 39, 176, 0.7); line-height: 1;";
const CALL_TO_ACTION_STYLE: &str = "text-shadow: 0 0 20px rgba(255, 255, 255, 0.8); letter-spacing: 0.5rem;";

type Styles = HashMap<ElementId, RwSignal<VisualState>>;

/// Dispatches a synthetic `resize` so anything that measured the content
/// while it was hidden measures again.
fn refresh_layout() {
    match web_sys::Event::new("resize") {
        Ok(event) => {
            if let Err(e) = window().dispatch_event(&event) {
                log::warn!("couldn't dispatch resize: {e:?}");
            }
        }
        Err(e) => log::warn!("couldn't create resize event: {e:?}"),
    }
}

fn apply_events(
    events: Vec<SequencerEvent>,
    phase: RwSignal<SequencerState>,
    gate: RwSignal<ContentGate>,
    overlay: RwSignal<bool>,
) {
    for event in events {
        match event {
            SequencerEvent::StateChanged(state) => {
                log::debug!("intro state {state:?}");
                phase.set(state);
            }
            SequencerEvent::RevealContent => {
                gate.update(|g| g.set_visible(true));
                overlay.set(false);
            }
            SequencerEvent::RefreshLayout => refresh_layout(),
        }
    }
}

/// Full-screen landing overlay. Plays until the visitor clicks through or
/// the auto-advance timer fires, then hands the page over to the content.
#[component]
pub fn Intro() -> impl IntoView {
    let gate = expect_context::<RwSignal<ContentGate>>();
    let config = SITE.intro.clone();

    let overlay = RwSignal::new(true);
    let phase = RwSignal::new(SequencerState::Idle);
    let ready = RwSignal::new(false);
    let finished = RwSignal::new(false);
    let field = RwSignal::new(None::<VisualField>);
    let sequencer = StoredValue::new(None::<IntroSequencer>);
    let readiness = StoredValue::new(ReadinessGate::new());

    let nebula = RwSignal::new(VisualState::default());
    let title = RwSignal::new(VisualState::default());
    let call_to_action = RwSignal::new(VisualState::default());
    let styles = StoredValue::new(Styles::from([
        (NEBULA, nebula),
        (TITLE, title),
        (CALL_TO_ACTION, call_to_action),
    ]));

    let nebula_ref = NodeRef::<html::Div>::new();
    let title_ref = NodeRef::<html::H1>::new();
    let call_to_action_ref = NodeRef::<html::Button>::new();

    // the field is random, so it's only laid out in the browser
    Effect::new(move |_| {
        let palette = match SITE.palette() {
            Ok(palette) => palette,
            Err(e) => {
                log::warn!("{e}, using the default palette");
                Default::default()
            }
        };
        let generated = generate_field(config.counts, &palette, config.seed);
        styles.update_value(|styles| {
            for element in generated.elements() {
                styles.insert(element.id, RwSignal::new(element.initial_state()));
            }
        });
        sequencer.set_value(Some(IntroSequencer::new(config.clone(), &generated)));
        log::debug!("laid out {} field elements", generated.len());
        field.set(Some(generated));
    });

    let mark_ready = move |slot: Slot| {
        if readiness
            .try_update_value(|r| r.mark_ready(slot))
            .unwrap_or(false)
        {
            ready.set(true);
        }
    };
    Effect::new(move |_| {
        if nebula_ref.get().is_some() {
            mark_ready(Slot::Nebula);
        }
    });
    Effect::new(move |_| {
        if title_ref.get().is_some() {
            mark_ready(Slot::Title);
        }
    });
    Effect::new(move |_| {
        if call_to_action_ref.get().is_some() {
            mark_ready(Slot::CallToAction);
        }
    });

    let frame = move |args: UseRafFnCallbackArgs| {
        let events = sequencer
            .try_update_value(|seq| {
                let Some(seq) = seq.as_mut() else {
                    return Vec::new();
                };
                let mut events = seq.start(args.timestamp);
                events.extend(seq.tick(args.timestamp));
                let dirty = seq.context_mut().take_dirty();
                styles.with_value(|styles| {
                    for id in dirty {
                        if let (Some(signal), Some(state)) =
                            (styles.get(&id), seq.context().state(id))
                        {
                            signal.set(state.clone());
                        }
                    }
                });
                if seq.is_finished() {
                    seq.teardown();
                    finished.set(true);
                }
                events
            })
            .unwrap_or_default();
        apply_events(events, phase, gate, overlay);
    };
    let raf = use_raf_fn_with_options(frame, UseRafFnOptions::default().immediate(false));

    let resume = raf.resume;
    Effect::new(move |_| {
        if ready.get() && !finished.get_untracked() {
            log::debug!("landing nodes mounted, starting intro");
            resume();
        }
    });
    let pause = raf.pause;
    Effect::new(move |_| {
        if finished.get() {
            pause();
        }
    });

    on_cleanup(move || {
        sequencer.update_value(|seq| {
            if let Some(seq) = seq.as_mut() {
                seq.teardown();
            }
        });
    });

    let enter = move |_| {
        let events = sequencer
            .try_update_value(|seq| {
                seq.as_mut()
                    .map(|seq| seq.trigger_exit(ExitTrigger::User))
                    .unwrap_or_default()
            })
            .unwrap_or_default();
        apply_events(events, phase, gate, overlay);
    };

    let feedback = move |feedback: PointerFeedback| {
        sequencer.update_value(|seq| {
            if let Some(seq) = seq.as_mut() {
                seq.call_to_action_feedback(feedback);
            }
        });
    };

    let exiting = move || phase.get() != SequencerState::Looping;

    let field_view = move || {
        field.with(|field| {
            field.as_ref().map(|field| {
                [
                    ElementKind::ShockwaveRing,
                    ElementKind::Flare,
                    ElementKind::Particle,
                ]
                .into_iter()
                .map(|kind| {
                    let layer = if kind == ElementKind::ShockwaveRing {
                        "absolute inset-0 pointer-events-none"
                    } else {
                        "absolute inset-0 overflow-hidden pointer-events-none"
                    };
                    let elements = field
                        .of_kind(kind)
                        .map(|element| {
                            let state = styles.with_value(|s| s.get(&element.id).copied());
                            let base = element.base_style();
                            let transform = element.base_transform();
                            let style = move || match state {
                                Some(state) => {
                                    format!("{base} {}", state.with(|s| s.style_css(transform)))
                                }
                                None => base.clone(),
                            };
                            view! { <div class="absolute rounded-full" style=style></div> }
                        })
                        .collect_view();
                    view! { <div class=layer>{elements}</div> }
                })
                .collect_view()
            })
        })
    };

    view! {
        <Show when=move || overlay.get()>
            <div class="fixed inset-0 z-[9999] flex flex-col items-center justify-center overflow-hidden bg-black">
                <div
                    node_ref=nebula_ref
                    class="absolute inset-0"
                    style=move || format!("{NEBULA_STYLE} {}", nebula.with(|s| s.style_css("")))
                ></div>
                {field_view}
                <h1
                    node_ref=title_ref
                    class="text-7xl md:text-[10rem] font-bold text-center relative z-10"
                    style=move || format!("{TITLE_STYLE} {}", title.with(|s| s.style_css("")))
                >
                    "WELCOME"
                </h1>
                <button
                    node_ref=call_to_action_ref
                    class="mt-32 text-3xl md:text-6xl font-bold text-white text-center relative z-10 cursor-pointer disabled:cursor-default"
                    style=move || {
                        format!(
                            "{CALL_TO_ACTION_STYLE} {}",
                            call_to_action.with(|s| s.style_css("")),
                        )
                    }
                    data-cursor-hover=""
                    disabled=exiting
                    on:click=enter
                    on:pointerenter=move |_| feedback(PointerFeedback::Hover)
                    on:pointerleave=move |_| feedback(PointerFeedback::Rest)
                    on:pointerdown=move |_| feedback(PointerFeedback::Press)
                    on:pointerup=move |_| feedback(PointerFeedback::Hover)
                >
                    "ENTER THE WORLD"
                </button>
            </div>
        </Show>
    }
}
