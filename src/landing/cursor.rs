use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::easing::Ease;
use super::timeline::{
    AnimationContext, ElementId, PropSet, TimelineEvent, TweenHandle, TweenVars, VisualState,
};
use super::viewport::ViewportClass;

pub const CURSOR_DOT: ElementId = ElementId(0);
pub const CURSOR_RING: ElementId = ElementId(1);

/// Selector for elements that grow the ring on hover.
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, textarea, [data-cursor-hover]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerDown,
    HoverEnter,
    HoverLeave,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 4] = [
        ListenerKind::PointerMove,
        ListenerKind::PointerDown,
        ListenerKind::HoverEnter,
        ListenerKind::HoverLeave,
    ];
}

/// Whatever owns the real event listeners (the DOM in the browser).
pub trait ListenerHost {
    fn attach(&mut self, kind: ListenerKind);
    fn detach(&mut self, kind: ListenerKind);
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorState {
    pub position: (f64, f64),
    pub is_pressed: bool,
    pub is_hovering_interactive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub dot_follow_ms: u64,
    pub ring_follow_ms: u64,
    pub press_scale: f64,
    pub press_ms: u64,
    pub release_ms: u64,
    pub hover_scale: f64,
    pub hover_ms: u64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            dot_follow_ms: 100,
            ring_follow_ms: 300,
            press_scale: 0.7,
            press_ms: 100,
            release_ms: 300,
            hover_scale: 1.5,
            hover_ms: 300,
        }
    }
}

/// Dot and trailing ring that replace the system cursor on wide viewports.
#[derive(Debug)]
pub struct CursorTracker {
    config: CursorConfig,
    ctx: AnimationContext,
    state: CursorState,
    enabled: bool,
    dot_move: Option<TweenHandle>,
    ring_move: Option<TweenHandle>,
    press: Option<TweenHandle>,
    release: Option<TweenHandle>,
    hover: Option<TweenHandle>,
}

impl CursorTracker {
    pub fn new(config: CursorConfig) -> Self {
        let mut ctx = AnimationContext::new();
        ctx.register(CURSOR_DOT, VisualState::default().with_opacity(0.0));
        ctx.register(CURSOR_RING, VisualState::default().with_opacity(0.0));
        Self {
            config,
            ctx,
            state: CursorState::default(),
            enabled: false,
            dot_move: None,
            ring_move: None,
            press: None,
            release: None,
            hover: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn context(&self) -> &AnimationContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut AnimationContext {
        &mut self.ctx
    }

    /// Attaches listeners when the viewport becomes wide, detaches them when
    /// it becomes narrow. Repeats of the current class do nothing.
    pub fn on_viewport(&mut self, class: ViewportClass, host: &mut impl ListenerHost) {
        match (class, self.enabled) {
            (ViewportClass::Desktop, false) => {
                for kind in ListenerKind::ALL {
                    host.attach(kind);
                }
                self.enabled = true;
                log::debug!("cursor tracker enabled");
            }
            (ViewportClass::Mobile, true) => {
                for kind in ListenerKind::ALL {
                    host.detach(kind);
                }
                self.disable();
                log::debug!("cursor tracker disabled");
            }
            _ => {}
        }
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.ctx.kill_all(&[CURSOR_DOT, CURSOR_RING]);
        self.ctx
            .set(&[CURSOR_DOT, CURSOR_RING], &PropSet::new().opacity(0.0).scale(1.0));
        self.state = CursorState::default();
        self.dot_move = None;
        self.ring_move = None;
        self.press = None;
        self.release = None;
        self.hover = None;
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !self.enabled {
            return;
        }
        self.state.position = (x, y);
        for handle in [self.dot_move.take(), self.ring_move.take()].into_iter().flatten() {
            self.ctx.kill(handle);
        }
        let props = PropSet::new().x(x).y(y).opacity(1.0);
        self.dot_move = self.ctx.tween_to(
            &[CURSOR_DOT],
            props.clone(),
            TweenVars::new(Duration::from_millis(self.config.dot_follow_ms)),
        );
        self.ring_move = self.ctx.tween_to(
            &[CURSOR_RING],
            props,
            TweenVars::new(Duration::from_millis(self.config.ring_follow_ms)),
        );
    }

    pub fn pointer_down(&mut self) {
        if !self.enabled {
            return;
        }
        self.state.is_pressed = true;
        for handle in [self.press.take(), self.release.take()].into_iter().flatten() {
            self.ctx.kill(handle);
        }
        self.press = self.ctx.tween_to(
            &[CURSOR_DOT, CURSOR_RING],
            PropSet::new().scale(self.config.press_scale),
            TweenVars::new(Duration::from_millis(self.config.press_ms)),
        );
    }

    pub fn hover(&mut self, entering: bool) {
        if !self.enabled {
            return;
        }
        self.state.is_hovering_interactive = entering;
        if let Some(handle) = self.hover.take() {
            self.ctx.kill(handle);
        }
        let scale = if entering { self.config.hover_scale } else { 1.0 };
        self.hover = self.ctx.tween_to(
            &[CURSOR_RING],
            PropSet::new().scale(scale),
            TweenVars::new(Duration::from_millis(self.config.hover_ms)).ease(Ease::power_out(1)),
        );
    }

    pub fn tick(&mut self, now: f64) {
        for event in self.ctx.tick(now) {
            let TimelineEvent::TweenCompleted(handle) = event else {
                continue;
            };
            if self.press == Some(handle) {
                self.press = None;
                self.release = self.ctx.tween_to(
                    &[CURSOR_DOT, CURSOR_RING],
                    PropSet::new().scale(1.0),
                    TweenVars::new(Duration::from_millis(self.config.release_ms)),
                );
            } else if self.release == Some(handle) {
                self.release = None;
                self.state.is_pressed = false;
            } else if self.dot_move == Some(handle) {
                self.dot_move = None;
            } else if self.ring_move == Some(handle) {
                self.ring_move = None;
            } else if self.hover == Some(handle) {
                self.hover = None;
            }
        }
    }

    pub fn teardown(&mut self, host: &mut impl ListenerHost) {
        if self.enabled {
            for kind in ListenerKind::ALL {
                host.detach(kind);
            }
        }
        self.disable();
        self.ctx.dispose();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::landing::viewport::ViewportClassifier;

    #[derive(Debug, Default)]
    struct CountingHost {
        attached: HashSet<ListenerKind>,
        attaches: usize,
        detaches: usize,
    }

    impl ListenerHost for CountingHost {
        fn attach(&mut self, kind: ListenerKind) {
            assert!(self.attached.insert(kind), "{kind:?} attached twice");
            self.attaches += 1;
        }

        fn detach(&mut self, kind: ListenerKind) {
            assert!(self.attached.remove(&kind), "{kind:?} was not attached");
            self.detaches += 1;
        }
    }

    fn enabled_tracker() -> (CursorTracker, CountingHost) {
        let mut tracker = CursorTracker::new(CursorConfig::default());
        let mut host = CountingHost::default();
        tracker.on_viewport(ViewportClass::Desktop, &mut host);
        tracker.tick(0.0);
        (tracker, host)
    }

    fn pos(tracker: &CursorTracker, id: ElementId) -> (f64, f64) {
        let s = tracker.context().state(id).unwrap();
        (s.x, s.y)
    }

    #[test]
    fn test_breakpoint_crossings_toggle_listeners_once() {
        let shared = Arc::new(Mutex::new((
            CursorTracker::new(CursorConfig::default()),
            CountingHost::default(),
        )));
        let mut classifier = ViewportClassifier::default();
        let sink = shared.clone();
        classifier.subscribe(move |class| {
            let mut guard = sink.lock().unwrap();
            let (tracker, host) = &mut *guard;
            tracker.on_viewport(class, host);
        });

        classifier.update(1280.0);
        assert_eq!(shared.lock().unwrap().1.attaches, 4);

        let widths = [600.0, 1024.0, 700.0, 1440.0, 375.0];
        for (i, width) in widths.into_iter().enumerate() {
            // resize events fire repeatedly on each side of the line
            classifier.update(width);
            classifier.update(width + 1.0);
            let guard = shared.lock().unwrap();
            let crossings = i + 1;
            let to_desktop = crossings / 2;
            let to_mobile = crossings - to_desktop;
            assert_eq!(guard.1.attaches, 4 * (1 + to_desktop));
            assert_eq!(guard.1.detaches, 4 * to_mobile);
        }
        let guard = shared.lock().unwrap();
        assert!(guard.1.attached.is_empty());
        assert!(!guard.0.is_enabled());
    }

    #[test]
    fn test_ring_trails_dot() {
        let (mut tracker, _host) = enabled_tracker();
        tracker.pointer_move(100.0, 200.0);
        tracker.tick(100.0);
        assert_eq!(pos(&tracker, CURSOR_DOT), (100.0, 200.0));
        let (rx, _) = pos(&tracker, CURSOR_RING);
        assert!(rx > 0.0 && rx < 100.0);
        tracker.tick(300.0);
        assert_eq!(pos(&tracker, CURSOR_RING), (100.0, 200.0));
        assert_eq!(tracker.context().state(CURSOR_RING).unwrap().opacity, 1.0);
        assert_eq!(tracker.state().position, (100.0, 200.0));
    }

    #[test]
    fn test_press_shrinks_then_restores() {
        let (mut tracker, _host) = enabled_tracker();
        tracker.pointer_down();
        assert!(tracker.state().is_pressed);
        tracker.tick(100.0);
        assert_eq!(tracker.context().state(CURSOR_DOT).unwrap().scale, 0.7);
        tracker.tick(250.0);
        assert!(tracker.state().is_pressed);
        tracker.tick(400.0);
        assert_eq!(tracker.context().state(CURSOR_DOT).unwrap().scale, 1.0);
        assert!(!tracker.state().is_pressed);
    }

    #[test]
    fn test_hover_grows_ring_only() {
        let (mut tracker, _host) = enabled_tracker();
        tracker.hover(true);
        tracker.tick(300.0);
        assert_eq!(tracker.context().state(CURSOR_RING).unwrap().scale, 1.5);
        assert_eq!(tracker.context().state(CURSOR_DOT).unwrap().scale, 1.0);
        assert!(tracker.state().is_hovering_interactive);
        tracker.hover(false);
        tracker.tick(600.0);
        assert_eq!(tracker.context().state(CURSOR_RING).unwrap().scale, 1.0);
    }

    #[test]
    fn test_disabled_tracker_ignores_input() {
        let (mut tracker, mut host) = enabled_tracker();
        tracker.pointer_move(10.0, 10.0);
        tracker.on_viewport(ViewportClass::Mobile, &mut host);
        assert_eq!(tracker.context().active_tweens(), 0);
        assert_eq!(tracker.context().state(CURSOR_DOT).unwrap().opacity, 0.0);

        tracker.pointer_move(50.0, 50.0);
        tracker.pointer_down();
        tracker.hover(true);
        assert_eq!(tracker.context().active_tweens(), 0);
        assert_eq!(tracker.state(), CursorState::default());
    }

    #[test]
    fn test_teardown_detaches() {
        let (mut tracker, mut host) = enabled_tracker();
        tracker.pointer_move(1.0, 1.0);
        tracker.teardown(&mut host);
        assert!(host.attached.is_empty());
        assert_eq!(host.detaches, 4);
        assert!(tracker.context().is_idle());
        // a second teardown has nothing left to detach
        tracker.teardown(&mut host);
        assert_eq!(host.detaches, 4);
    }
}
