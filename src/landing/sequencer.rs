use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::color::Rgba;
use super::easing::Ease;
use super::field::{ElementKind, FieldCounts, VisualField};
use super::timeline::{
    AnimationContext, ElementId, Keyframe, PropSet, Repeat, TimelineEvent, TimerHandle,
    TweenHandle, TweenVars, VisualState,
};

pub const NEBULA: ElementId = ElementId(0);
pub const TITLE: ElementId = ElementId(1);
pub const CALL_TO_ACTION: ElementId = ElementId(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequencerState {
    Idle,
    Looping,
    Exiting,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitTrigger {
    AutoAdvance,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    StateChanged(SequencerState),
    /// Main content can become visible and interactive.
    RevealContent,
    /// Sections measured while hidden should re-measure.
    RefreshLayout,
}

/// Pointer feedback on the call-to-action while the intro loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerFeedback {
    Rest,
    Hover,
    Press,
}

impl PointerFeedback {
    fn scale(self) -> f64 {
        match self {
            PointerFeedback::Rest => 1.0,
            PointerFeedback::Hover => 1.1,
            PointerFeedback::Press => 0.9,
        }
    }
}

/// What has to finish before the exit counts as done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitJoin {
    /// Only the call-to-action zoom. The rest of the exit keeps playing
    /// over the revealed content.
    #[default]
    CallToAction,
    /// Every exit tween.
    AllTweens,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    pub auto_advance_ms: u64,
    pub glitch_interval_ms: u64,
    pub layout_refresh_ms: u64,
    pub counts: FieldCounts,
    pub palette: Vec<String>,
    pub seed: Option<u64>,
    pub exit_join: ExitJoin,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: 8000,
            glitch_interval_ms: 3000,
            layout_refresh_ms: 100,
            counts: FieldCounts::default(),
            palette: super::color::COSMIC_COLORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            seed: None,
            exit_join: ExitJoin::default(),
        }
    }
}

const GLITCH_PURPLE: Rgba = Rgba::rgb(0x9c, 0x27, 0xb0);
const GLITCH_BLUE: Rgba = Rgba::rgb(0x21, 0x96, 0xf3);

/// Drives the landing overlay: idle loops, the exit choreography and the
/// hand-off to the main content.
#[derive(Debug)]
pub struct IntroSequencer {
    config: IntroConfig,
    ctx: AnimationContext,
    rng: StdRng,
    state: SequencerState,
    torn_down: bool,
    particles: Vec<ElementId>,
    flares: Vec<ElementId>,
    rings: Vec<ElementId>,
    auto_advance: Option<TimerHandle>,
    glitch_timer: Option<TimerHandle>,
    glitch_tween: Option<TweenHandle>,
    feedback_tween: Option<TweenHandle>,
    layout_refresh: Option<TimerHandle>,
    exit_pending: Vec<TweenHandle>,
    cta_exit: Option<TweenHandle>,
}

impl IntroSequencer {
    pub fn new(config: IntroConfig, field: &VisualField) -> Self {
        let rng = match config.seed {
            // don't replay the exact stream the field was laid out with
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };
        let mut ctx = AnimationContext::new();
        ctx.register(NEBULA, VisualState::default());
        ctx.register(TITLE, VisualState::default());
        ctx.register(
            CALL_TO_ACTION,
            VisualState::default().with_color(Rgba::WHITE),
        );
        for element in field.elements() {
            ctx.register(element.id, element.initial_state());
        }
        Self {
            config,
            ctx,
            rng,
            state: SequencerState::Idle,
            torn_down: false,
            particles: field.ids_of(ElementKind::Particle),
            flares: field.ids_of(ElementKind::Flare),
            rings: field.ids_of(ElementKind::ShockwaveRing),
            auto_advance: None,
            glitch_timer: None,
            glitch_tween: None,
            feedback_tween: None,
            layout_refresh: None,
            exit_pending: Vec::new(),
            cta_exit: None,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn context(&self) -> &AnimationContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut AnimationContext {
        &mut self.ctx
    }

    pub fn call_to_action_exit(&self) -> Option<TweenHandle> {
        self.cta_exit
    }

    pub fn pending_exit(&self) -> &[TweenHandle] {
        &self.exit_pending
    }

    /// Nothing left for the host to drive.
    pub fn is_finished(&self) -> bool {
        self.torn_down || (self.state == SequencerState::Completed && self.layout_refresh.is_none())
    }

    /// `Idle -> Looping`. Call once the readiness gate has resolved.
    pub fn start(&mut self, now: f64) -> Vec<SequencerEvent> {
        if self.torn_down || self.state != SequencerState::Idle {
            return Vec::new();
        }
        self.ctx.tick(now);
        self.state = SequencerState::Looping;
        log::debug!("intro looping at {now:.0}ms");

        self.ctx.tween_to(
            &[NEBULA],
            PropSet::new().scale(1.2).opacity(0.8),
            TweenVars::secs(5.0)
                .ease(Ease::sine_in_out())
                .repeat(Repeat::Infinite)
                .yoyo(true),
        );

        for (i, id) in self.particles.clone().into_iter().enumerate() {
            let props = PropSet::new()
                .x(self.rng.gen_range(-300.0..=300.0))
                .y(self.rng.gen_range(-300.0..=300.0))
                .rotation(self.rng.gen_range(0.0..=360.0));
            let vars = TweenVars::secs(self.rng.gen_range(10.0..=20.0))
                .delay(Duration::from_millis(10) * i as u32)
                .ease(Ease::sine_in_out())
                .repeat(Repeat::Infinite)
                .yoyo(true);
            self.ctx.tween_to(&[id], props, vars);
        }

        for (i, id) in self.flares.clone().into_iter().enumerate() {
            let props = PropSet::new()
                .scale(self.rng.gen_range(1.5..=3.0))
                .opacity(self.rng.gen_range(0.2..=0.6));
            let vars = TweenVars::secs(self.rng.gen_range(5.0..=10.0))
                .delay(Duration::from_millis(500) * i as u32)
                .ease(Ease::sine_in_out())
                .repeat(Repeat::Infinite)
                .yoyo(true);
            self.ctx.tween_to(&[id], props, vars);
        }

        let rings = self.rings.clone();
        self.ctx.tween_to(
            &rings,
            PropSet::new().scale(3.0).opacity(0.0),
            TweenVars::secs(4.0)
                .stagger(Duration::from_millis(1500))
                .ease(Ease::power_out(2))
                .repeat(Repeat::Infinite),
        );

        self.ctx.tween_from(
            &[TITLE],
            PropSet::new().y(-200.0).rotate_x(90.0).opacity(0.0),
            TweenVars::secs(2.0).ease(Ease::ElasticOut {
                amplitude: 1.0,
                period: 0.5,
            }),
        );

        self.glitch_timer = Some(
            self.ctx
                .interval(Duration::from_millis(self.config.glitch_interval_ms)),
        );
        self.auto_advance = Some(
            self.ctx
                .delayed_call(Duration::from_millis(self.config.auto_advance_ms)),
        );

        vec![SequencerEvent::StateChanged(SequencerState::Looping)]
    }

    /// `Looping -> Exiting`. Any trigger after the first is ignored.
    pub fn trigger_exit(&mut self, trigger: ExitTrigger) -> Vec<SequencerEvent> {
        if self.torn_down || self.state != SequencerState::Looping {
            log::debug!("ignoring {trigger:?} exit in {:?}", self.state);
            return Vec::new();
        }
        // flip first so nothing below can start a second exit
        self.state = SequencerState::Exiting;
        log::debug!("intro exiting ({trigger:?})");

        if let Some(timer) = self.auto_advance.take() {
            self.ctx.cancel_timer(timer);
        }
        if let Some(timer) = self.glitch_timer.take() {
            self.ctx.cancel_timer(timer);
        }
        self.glitch_tween = None;
        self.feedback_tween = None;

        let mut scope = Vec::with_capacity(self.particles.len() + self.flares.len() + 5);
        scope.extend_from_slice(&self.particles);
        scope.extend_from_slice(&self.flares);
        scope.extend_from_slice(&self.rings);
        scope.extend([TITLE, CALL_TO_ACTION]);
        self.ctx.kill_all(&scope);

        let mut pending = Vec::new();
        for id in self.particles.clone() {
            let props = PropSet::new()
                .x(self.rng.gen_range(-1000.0..=1000.0))
                .y(self.rng.gen_range(-1000.0..=1000.0))
                .opacity(0.0);
            let vars = TweenVars::secs(1.5).ease(Ease::power_out(4));
            pending.extend(self.ctx.tween_to(&[id], props, vars));
        }
        let flares = self.flares.clone();
        pending.extend(self.ctx.tween_to(
            &flares,
            PropSet::new().scale(0.0).opacity(0.0),
            TweenVars::secs(1.0).ease(Ease::power_out(4)),
        ));
        let rings = self.rings.clone();
        pending.extend(self.ctx.tween_to(
            &rings,
            PropSet::new().scale(5.0).opacity(0.0),
            TweenVars::secs(2.0).ease(Ease::power_out(4)),
        ));
        pending.extend(self.ctx.tween_to(
            &[TITLE],
            PropSet::new().y(100.0).opacity(0.0),
            TweenVars::secs(1.0).ease(Ease::power_in(3)),
        ));
        self.cta_exit = self.ctx.tween_to(
            &[CALL_TO_ACTION],
            PropSet::new().scale(10.0).opacity(0.0),
            TweenVars::secs(1.5).ease(Ease::power_in(4)),
        );
        pending.extend(self.cta_exit);
        self.exit_pending = pending;

        let mut events = vec![SequencerEvent::StateChanged(SequencerState::Exiting)];
        if self.exit_joined() {
            // nothing was mounted to animate
            events.extend(self.complete());
        }
        events
    }

    /// Scales the call-to-action for hover and press. Ignored outside
    /// `Looping`, so it never fights the exit zoom.
    pub fn call_to_action_feedback(&mut self, feedback: PointerFeedback) {
        if self.torn_down || self.state != SequencerState::Looping {
            return;
        }
        if let Some(previous) = self.feedback_tween.take() {
            self.ctx.kill(previous);
        }
        self.feedback_tween = self.ctx.tween_to(
            &[CALL_TO_ACTION],
            PropSet::new().scale(feedback.scale()),
            TweenVars::secs(0.2).ease(Ease::power_out(2)),
        );
    }

    /// Feeds the completion of one tween into the exit join. `tick` calls
    /// this for every finished tween.
    pub fn notify_tween_complete(&mut self, handle: TweenHandle) -> Vec<SequencerEvent> {
        if self.glitch_tween == Some(handle) {
            self.glitch_tween = None;
        }
        if self.feedback_tween == Some(handle) {
            self.feedback_tween = None;
        }
        if self.torn_down || self.state != SequencerState::Exiting {
            return Vec::new();
        }
        let before = self.exit_pending.len();
        self.exit_pending.retain(|h| *h != handle);
        if self.exit_pending.len() == before {
            return Vec::new();
        }
        if self.exit_joined() {
            self.complete()
        } else {
            Vec::new()
        }
    }

    fn exit_joined(&self) -> bool {
        match self.config.exit_join {
            ExitJoin::AllTweens => self.exit_pending.is_empty(),
            ExitJoin::CallToAction => match self.cta_exit {
                Some(cta) => !self.exit_pending.contains(&cta),
                None => true,
            },
        }
    }

    fn complete(&mut self) -> Vec<SequencerEvent> {
        self.state = SequencerState::Completed;
        log::debug!("intro completed");
        self.layout_refresh = Some(
            self.ctx
                .delayed_call(Duration::from_millis(self.config.layout_refresh_ms)),
        );
        vec![
            SequencerEvent::StateChanged(SequencerState::Completed),
            SequencerEvent::RevealContent,
        ]
    }

    fn glitch(&mut self) {
        if self.state != SequencerState::Looping {
            return;
        }
        if let Some(previous) = self.glitch_tween.take() {
            self.ctx.kill(previous);
        }
        let frame = Duration::from_millis(50);
        self.glitch_tween = self.ctx.keyframes(
            &[CALL_TO_ACTION],
            vec![
                Keyframe::new(PropSet::new().x(-5.0).color(GLITCH_PURPLE), frame),
                Keyframe::new(PropSet::new().x(5.0).color(GLITCH_BLUE), frame),
                Keyframe::new(PropSet::new().x(0.0).color(Rgba::WHITE), frame),
            ],
            TweenVars::new(Duration::ZERO)
                .ease(Ease::Linear)
                .repeat(Repeat::Times(3))
                .yoyo(true),
        );
    }

    pub fn tick(&mut self, now: f64) -> Vec<SequencerEvent> {
        if self.torn_down {
            return Vec::new();
        }
        let mut events = Vec::new();
        for event in self.ctx.tick(now) {
            match event {
                TimelineEvent::TimerFired(timer) if self.auto_advance == Some(timer) => {
                    self.auto_advance = None;
                    events.extend(self.trigger_exit(ExitTrigger::AutoAdvance));
                }
                TimelineEvent::TimerFired(timer) if self.glitch_timer == Some(timer) => {
                    self.glitch();
                }
                TimelineEvent::TimerFired(timer) if self.layout_refresh == Some(timer) => {
                    self.layout_refresh = None;
                    events.push(SequencerEvent::RefreshLayout);
                }
                TimelineEvent::TimerFired(_) => {}
                TimelineEvent::TweenCompleted(tween) => {
                    events.extend(self.notify_tween_complete(tween));
                }
            }
        }
        events
    }

    /// Releases every tween, interval and timer. The sequencer is inert
    /// afterwards.
    pub fn teardown(&mut self) {
        self.ctx.dispose();
        self.torn_down = true;
        self.auto_advance = None;
        self.glitch_timer = None;
        self.glitch_tween = None;
        self.feedback_tween = None;
        self.layout_refresh = None;
        self.exit_pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landing::color::Palette;
    use crate::landing::field::generate_field;

    const FRAME: f64 = 16.0;

    fn small_config(exit_join: ExitJoin) -> IntroConfig {
        IntroConfig {
            counts: FieldCounts {
                particles: 12,
                flares: 3,
                rings: 3,
            },
            seed: Some(7),
            exit_join,
            ..IntroConfig::default()
        }
    }

    fn sequencer(exit_join: ExitJoin) -> IntroSequencer {
        let config = small_config(exit_join);
        let field = generate_field(config.counts, &Palette::default(), config.seed);
        IntroSequencer::new(config, &field)
    }

    /// Runs frames from `from` up to `to`, collecting (time, event) pairs.
    fn run(seq: &mut IntroSequencer, from: f64, to: f64) -> Vec<(f64, SequencerEvent)> {
        let mut out = Vec::new();
        let mut t = from;
        while t <= to {
            out.extend(seq.tick(t).into_iter().map(|e| (t, e)));
            t += FRAME;
        }
        out
    }

    fn states(events: &[SequencerEvent]) -> Vec<SequencerState> {
        events
            .iter()
            .filter_map(|e| match e {
                SequencerEvent::StateChanged(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_manual_exit_state_sequence() {
        let mut seq = sequencer(ExitJoin::default());
        let mut recorded = vec![seq.state()];
        let mut events = seq.start(1000.0);
        events.extend(run(&mut seq, 1000.0, 2000.0).into_iter().map(|(_, e)| e));
        events.extend(seq.trigger_exit(ExitTrigger::User));
        events.extend(run(&mut seq, 2000.0, 5000.0).into_iter().map(|(_, e)| e));
        recorded.extend(states(&events));

        assert_eq!(
            recorded,
            vec![
                SequencerState::Idle,
                SequencerState::Looping,
                SequencerState::Exiting,
                SequencerState::Completed
            ]
        );
        assert!(events.contains(&SequencerEvent::RevealContent));
        assert!(events.contains(&SequencerEvent::RefreshLayout));
        assert!(seq.is_finished());
    }

    #[test]
    fn test_double_exit_is_ignored() {
        let mut seq = sequencer(ExitJoin::AllTweens);
        seq.start(0.0);
        seq.tick(500.0);

        let first = seq.trigger_exit(ExitTrigger::User);
        let tweens = seq.context().active_tweens();
        let pending = seq.pending_exit().to_vec();
        let second = seq.trigger_exit(ExitTrigger::User);

        assert_eq!(states(&first), vec![SequencerState::Exiting]);
        assert!(second.is_empty());
        assert_eq!(seq.context().active_tweens(), tweens);
        assert_eq!(seq.pending_exit(), pending.as_slice());

        let events = run(&mut seq, 500.0, 10_000.0);
        let completions = events
            .iter()
            .filter(|(_, e)| *e == SequencerEvent::StateChanged(SequencerState::Completed))
            .count();
        assert_eq!(completions, 1);
        assert!(seq.trigger_exit(ExitTrigger::AutoAdvance).is_empty());
    }

    #[test]
    fn test_auto_advance_window() {
        let mut seq = sequencer(ExitJoin::AllTweens);
        let start = 1234.0;
        seq.start(start);
        let events = run(&mut seq, start, start + 9000.0);
        let (at, _) = events
            .iter()
            .find(|(_, e)| *e == SequencerEvent::StateChanged(SequencerState::Exiting))
            .expect("auto advance should fire");
        let elapsed = at - start;
        assert!((8000.0..8100.0).contains(&elapsed), "fired after {elapsed}ms");
    }

    #[test]
    fn test_manual_exit_cancels_auto_advance() {
        let mut seq = sequencer(ExitJoin::AllTweens);
        seq.start(0.0);
        run(&mut seq, 0.0, 2000.0);
        let exit = seq.trigger_exit(ExitTrigger::User);
        assert_eq!(states(&exit), vec![SequencerState::Exiting]);

        let events = run(&mut seq, 2000.0, 12_000.0);
        assert!(!events
            .iter()
            .any(|(_, e)| *e == SequencerEvent::StateChanged(SequencerState::Exiting)));
        assert_eq!(seq.state(), SequencerState::Completed);
    }

    #[test]
    fn test_teardown_while_looping_releases_everything() {
        let mut seq = sequencer(ExitJoin::AllTweens);
        seq.start(0.0);
        run(&mut seq, 0.0, 3500.0);
        assert!(seq.context().active_tweens() > 0);
        assert!(seq.context().active_timers() > 0);

        seq.teardown();
        assert_eq!(seq.context().active_tweens(), 0);
        assert_eq!(seq.context().active_timers(), 0);
        assert!(run(&mut seq, 3500.0, 20_000.0).is_empty());
        assert!(seq.trigger_exit(ExitTrigger::User).is_empty());
        assert!(seq.is_finished());
    }

    #[test]
    fn test_call_to_action_completion_alone_completes() {
        let mut seq = sequencer(ExitJoin::CallToAction);
        seq.start(0.0);
        seq.trigger_exit(ExitTrigger::User);
        let cta = seq.call_to_action_exit().expect("cta is mounted");

        let events = seq.notify_tween_complete(cta);
        assert_eq!(
            events,
            vec![
                SequencerEvent::StateChanged(SequencerState::Completed),
                SequencerEvent::RevealContent
            ]
        );
        // the other exit tweens are still in flight
        assert!(seq.pending_exit().len() > 1);
        assert!(seq.notify_tween_complete(cta).is_empty());
    }

    #[test]
    fn test_default_config_completes_on_call_to_action() {
        let mut seq = IntroSequencer::new(IntroConfig::default(), &VisualField::default());
        seq.start(0.0);
        seq.trigger_exit(ExitTrigger::User);
        let cta = seq.call_to_action_exit().expect("cta is mounted");

        let events = seq.notify_tween_complete(cta);
        assert_eq!(states(&events), vec![SequencerState::Completed]);
        assert!(events.contains(&SequencerEvent::RevealContent));
    }

    #[test]
    fn test_default_join_reveals_with_call_to_action() {
        let mut seq = sequencer(ExitJoin::default());
        seq.start(0.0);
        seq.tick(100.0);
        seq.trigger_exit(ExitTrigger::User);
        let events = run(&mut seq, 100.0, 3000.0);
        let (at, _) = events
            .iter()
            .find(|(_, e)| *e == SequencerEvent::RevealContent)
            .unwrap();
        // 1.5s zoom, not the 2s rings
        assert!((1600.0..1700.0).contains(at), "revealed at {at}");
    }

    #[test]
    fn test_all_tweens_join_waits_for_every_exit_tween() {
        let mut seq = sequencer(ExitJoin::AllTweens);
        seq.start(0.0);
        seq.trigger_exit(ExitTrigger::User);
        let cta = seq.call_to_action_exit().unwrap();
        assert!(seq.notify_tween_complete(cta).is_empty());
        assert_eq!(seq.state(), SequencerState::Exiting);

        let rest = seq.pending_exit().to_vec();
        let (last, others) = rest.split_last().unwrap();
        for handle in others {
            assert!(seq.notify_tween_complete(*handle).is_empty());
        }
        let events = seq.notify_tween_complete(*last);
        assert_eq!(states(&events), vec![SequencerState::Completed]);
    }

    #[test]
    fn test_real_time_join_finishes_with_longest_tween() {
        let mut seq = sequencer(ExitJoin::AllTweens);
        seq.start(0.0);
        seq.tick(100.0);
        seq.trigger_exit(ExitTrigger::User);
        // the rings take 2s, longer than the 1.5s call-to-action
        let events = run(&mut seq, 100.0, 3000.0);
        let (at, _) = events
            .iter()
            .find(|(_, e)| *e == SequencerEvent::RevealContent)
            .unwrap();
        assert!(*at >= 2100.0, "revealed at {at}");
    }

    #[test]
    fn test_no_idle_loops_survive_exit() {
        let mut seq = sequencer(ExitJoin::AllTweens);
        seq.start(0.0);
        run(&mut seq, 0.0, 3100.0);
        seq.trigger_exit(ExitTrigger::User);
        run(&mut seq, 3100.0, 6000.0);
        // only the nebula pulse is left, it goes away with the overlay
        assert_eq!(seq.context().active_tweens(), 1);
        assert_eq!(seq.context().active_timers(), 0);
    }

    #[test]
    fn test_glitch_fires_on_interval() {
        let mut seq = sequencer(ExitJoin::AllTweens);
        seq.start(0.0);
        run(&mut seq, 0.0, 2990.0);
        let before = seq.context().active_tweens();
        seq.tick(3000.0);
        assert_eq!(seq.context().active_tweens(), before + 1);
        seq.tick(3025.0);
        let cta = seq.context().state(CALL_TO_ACTION).unwrap();
        assert_ne!(cta.color, Some(Rgba::WHITE));
        // four 150ms cycles later the flicker is over and back to white
        run(&mut seq, 3025.0, 3700.0);
        assert_eq!(seq.context().active_tweens(), before);
        let cta = seq.context().state(CALL_TO_ACTION).unwrap();
        assert_eq!(cta.color, Some(Rgba::WHITE));
        assert_eq!(cta.x, 0.0);
    }

    #[test]
    fn test_exit_without_mounted_targets_completes() {
        let config = small_config(ExitJoin::CallToAction);
        let mut seq = IntroSequencer::new(config, &VisualField::default());
        seq.start(0.0);
        for id in [NEBULA, TITLE, CALL_TO_ACTION] {
            seq.context_mut().unregister(id);
        }
        let events = seq.trigger_exit(ExitTrigger::User);
        assert_eq!(
            states(&events),
            vec![SequencerState::Exiting, SequencerState::Completed]
        );
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut seq = sequencer(ExitJoin::AllTweens);
        assert!(seq.trigger_exit(ExitTrigger::User).is_empty());
        assert_eq!(seq.start(0.0).len(), 1);
        assert!(seq.start(10.0).is_empty());
    }

    #[test]
    fn test_call_to_action_hover_and_press() {
        let mut seq = sequencer(ExitJoin::default());
        let scale = |seq: &IntroSequencer| seq.context().state(CALL_TO_ACTION).unwrap().scale;
        seq.call_to_action_feedback(PointerFeedback::Hover);
        assert_eq!(seq.context().active_tweens(), 0);

        seq.start(0.0);
        seq.call_to_action_feedback(PointerFeedback::Hover);
        run(&mut seq, 0.0, 300.0);
        assert!((scale(&seq) - 1.1).abs() < 1e-9);

        seq.call_to_action_feedback(PointerFeedback::Press);
        run(&mut seq, 300.0, 600.0);
        assert!((scale(&seq) - 0.9).abs() < 1e-9);

        seq.call_to_action_feedback(PointerFeedback::Rest);
        run(&mut seq, 600.0, 900.0);
        assert!((scale(&seq) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_feedback_ignored_during_exit() {
        let mut seq = sequencer(ExitJoin::default());
        seq.start(0.0);
        seq.call_to_action_feedback(PointerFeedback::Hover);
        seq.trigger_exit(ExitTrigger::User);
        let cta = seq.call_to_action_exit().unwrap();
        let tweens = seq.context().active_tweens();

        seq.call_to_action_feedback(PointerFeedback::Rest);
        assert_eq!(seq.context().active_tweens(), tweens);
        assert!(seq.context().is_active(cta));
    }
}
