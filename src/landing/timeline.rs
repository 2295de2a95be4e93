use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::color::Rgba;
use super::easing::Ease;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prop {
    X,
    Y,
    Scale,
    Rotation,
    RotateX,
    Opacity,
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropValue {
    Num(f64),
    Color(Rgba),
}

impl PropValue {
    fn lerp(&self, to: &PropValue, t: f64) -> PropValue {
        match (self, to) {
            (PropValue::Num(a), PropValue::Num(b)) => PropValue::Num(a + (b - a) * t),
            (PropValue::Color(a), PropValue::Color(b)) => PropValue::Color(a.lerp(b, t)),
            // mismatched kinds can't be blended, hold until the end
            _ if t >= 1.0 => *to,
            _ => *self,
        }
    }
}

/// Animated properties of one visual element.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualState {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotation: f64,
    pub rotate_x: f64,
    pub opacity: f64,
    pub color: Option<Rgba>,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotation: 0.0,
            rotate_x: 0.0,
            opacity: 1.0,
            color: None,
        }
    }
}

impl VisualState {
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    pub fn get(&self, prop: Prop) -> PropValue {
        match prop {
            Prop::X => PropValue::Num(self.x),
            Prop::Y => PropValue::Num(self.y),
            Prop::Scale => PropValue::Num(self.scale),
            Prop::Rotation => PropValue::Num(self.rotation),
            Prop::RotateX => PropValue::Num(self.rotate_x),
            Prop::Opacity => PropValue::Num(self.opacity),
            Prop::Color => PropValue::Color(self.color.unwrap_or(Rgba::WHITE)),
        }
    }

    pub fn set(&mut self, prop: Prop, value: PropValue) {
        match (prop, value) {
            (Prop::Color, PropValue::Color(c)) => self.color = Some(c),
            (Prop::X, PropValue::Num(v)) => self.x = v,
            (Prop::Y, PropValue::Num(v)) => self.y = v,
            (Prop::Scale, PropValue::Num(v)) => self.scale = v,
            (Prop::Rotation, PropValue::Num(v)) => self.rotation = v,
            (Prop::RotateX, PropValue::Num(v)) => self.rotate_x = v,
            (Prop::Opacity, PropValue::Num(v)) => self.opacity = v,
            (prop, value) => log::warn!("ignoring {value:?} for {prop:?}"),
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) rotate({:.2}deg) rotateX({:.2}deg) scale({:.4})",
            self.x, self.y, self.rotation, self.rotate_x, self.scale
        )
    }

    /// Inline style for the element. `base_transform` is prepended so
    /// centring transforms survive animation.
    pub fn style_css(&self, base_transform: &str) -> String {
        let mut css = format!(
            "transform: {} {}; opacity: {:.3};",
            base_transform,
            self.transform_css(),
            self.opacity.clamp(0.0, 1.0)
        );
        if let Some(color) = self.color {
            css.push_str(&format!(" color: {color};"));
        }
        css
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropSet(Vec<(Prop, PropValue)>);

impl PropSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, prop: Prop, value: PropValue) -> Self {
        if let Some(slot) = self.0.iter_mut().find(|(p, _)| *p == prop) {
            slot.1 = value;
        } else {
            self.0.push((prop, value));
        }
        self
    }

    pub fn x(self, v: f64) -> Self {
        self.set(Prop::X, PropValue::Num(v))
    }

    pub fn y(self, v: f64) -> Self {
        self.set(Prop::Y, PropValue::Num(v))
    }

    pub fn scale(self, v: f64) -> Self {
        self.set(Prop::Scale, PropValue::Num(v))
    }

    pub fn rotation(self, v: f64) -> Self {
        self.set(Prop::Rotation, PropValue::Num(v))
    }

    pub fn rotate_x(self, v: f64) -> Self {
        self.set(Prop::RotateX, PropValue::Num(v))
    }

    pub fn opacity(self, v: f64) -> Self {
        self.set(Prop::Opacity, PropValue::Num(v))
    }

    pub fn color(self, c: Rgba) -> Self {
        self.set(Prop::Color, PropValue::Color(c))
    }

    pub fn get(&self, prop: Prop) -> Option<PropValue> {
        self.0.iter().find(|(p, _)| *p == prop).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Prop, PropValue)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn snapshot(state: &VisualState, props: impl Iterator<Item = Prop>) -> Self {
        props.fold(Self::new(), |set, p| set.set(p, state.get(p)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Extra cycles after the first one.
    Times(u32),
    #[default]
    Once,
    Infinite,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenVars {
    pub duration: Duration,
    pub delay: Duration,
    pub ease: Ease,
    pub repeat: Repeat,
    pub yoyo: bool,
    pub stagger: Duration,
}

impl TweenVars {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            ease: Ease::default(),
            repeat: Repeat::Once,
            yoyo: false,
            stagger: Duration::ZERO,
        }
    }

    pub fn secs(secs: f64) -> Self {
        Self::new(Duration::from_secs_f64(secs))
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    pub props: PropSet,
    pub duration: Duration,
}

impl Keyframe {
    pub fn new(props: PropSet, duration: Duration) -> Self {
        Self { props, duration }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEvent {
    TweenCompleted(TweenHandle),
    TimerFired(TimerHandle),
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

#[derive(Debug)]
struct Segment {
    offset: f64,
    duration: f64,
    props: PropSet,
}

#[derive(Debug)]
struct Track {
    target: ElementId,
    delay: f64,
    from: Option<PropSet>,
    // per-target end values, used by `from` tweens
    to: Option<PropSet>,
    done: bool,
}

#[derive(Debug)]
struct Tween {
    segments: Vec<Segment>,
    cycle: f64,
    start: f64,
    ease: Ease,
    repeat: Repeat,
    yoyo: bool,
    tracks: Vec<Track>,
}

impl Tween {
    fn props(&self) -> Vec<Prop> {
        let mut props = Vec::new();
        for (p, _) in self.segments.iter().flat_map(|s| s.props.iter()) {
            if !props.contains(p) {
                props.push(*p);
            }
        }
        props
    }

    /// Cycle-relative time for a track `local` ms into its run, or `None`
    /// once the last cycle has been played.
    fn cycle_time(&self, local: f64) -> Option<f64> {
        let cycles = match self.repeat {
            Repeat::Once => Some(1),
            Repeat::Times(n) => Some(n as u64 + 1),
            Repeat::Infinite => None,
        };
        if self.cycle <= 0.0 {
            return match cycles {
                Some(_) => None,
                None => Some(0.0),
            };
        }
        let index = (local / self.cycle).floor() as u64;
        if let Some(cycles) = cycles {
            if index >= cycles {
                return None;
            }
        }
        let t = local - index as f64 * self.cycle;
        Some(if self.yoyo && index % 2 == 1 {
            self.cycle - t
        } else {
            t
        })
    }

    fn final_time(&self) -> f64 {
        let last = match self.repeat {
            Repeat::Times(n) => n as u64,
            _ => 0,
        };
        if self.yoyo && last % 2 == 1 {
            0.0
        } else {
            self.cycle
        }
    }

    fn sample(&self, track: &Track, from: &PropSet, t: f64) -> PropSet {
        let mut current = from.clone();
        for segment in &self.segments {
            let end = track.to.as_ref().unwrap_or(&segment.props);
            let progress = if t >= segment.offset + segment.duration {
                1.0
            } else if t > segment.offset && segment.duration > 0.0 {
                self.ease.apply((t - segment.offset) / segment.duration)
            } else {
                break;
            };
            for (prop, value) in end.iter() {
                let start = current.get(*prop).unwrap_or(*value);
                current = current.set(*prop, start.lerp(value, progress));
            }
            if progress < 1.0 {
                break;
            }
        }
        current
    }
}

#[derive(Debug)]
struct Timer {
    due: f64,
    period: Option<f64>,
}

/// Owns every tween and timer one component creates, plus the animated
/// state of the elements it drives. Advanced by the host with [`tick`].
///
/// [`tick`]: AnimationContext::tick
#[derive(Debug, Default)]
pub struct AnimationContext {
    now: f64,
    next_id: u64,
    elements: HashMap<ElementId, VisualState>,
    dirty: BTreeSet<ElementId>,
    tweens: BTreeMap<u64, Tween>,
    timers: BTreeMap<u64, Timer>,
}

impl AnimationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn register(&mut self, id: ElementId, state: VisualState) {
        self.elements.insert(id, state);
        self.dirty.insert(id);
    }

    pub fn unregister(&mut self, id: ElementId) {
        self.elements.remove(&id);
        self.dirty.remove(&id);
    }

    pub fn is_registered(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn state(&self, id: ElementId) -> Option<&VisualState> {
        self.elements.get(&id)
    }

    /// Elements whose state changed since the last call.
    pub fn take_dirty(&mut self) -> Vec<ElementId> {
        std::mem::take(&mut self.dirty).into_iter().collect()
    }

    /// Applies `props` immediately, without a tween.
    pub fn set(&mut self, targets: &[ElementId], props: &PropSet) {
        for id in targets {
            if let Some(state) = self.elements.get_mut(id) {
                for (prop, value) in props.iter() {
                    state.set(*prop, *value);
                }
                self.dirty.insert(*id);
            }
        }
    }

    pub fn tween_to(
        &mut self,
        targets: &[ElementId],
        props: PropSet,
        vars: TweenVars,
    ) -> Option<TweenHandle> {
        let segments = vec![Segment {
            offset: 0.0,
            duration: ms(vars.duration),
            props,
        }];
        self.add_tween(targets, segments, vars, |_| (None, None))
    }

    /// Jumps to `props` and tweens back to the values held before the call.
    pub fn tween_from(
        &mut self,
        targets: &[ElementId],
        props: PropSet,
        vars: TweenVars,
    ) -> Option<TweenHandle> {
        let segments = vec![Segment {
            offset: 0.0,
            duration: ms(vars.duration),
            props: props.clone(),
        }];
        let mut originals = HashMap::new();
        for id in targets {
            if let Some(state) = self.elements.get(id) {
                let keys = props.iter().map(|(p, _)| *p);
                originals.insert(*id, PropSet::snapshot(state, keys));
            }
        }
        self.set(targets, &props);
        self.add_tween(targets, segments, vars, |id| {
            (Some(props.clone()), originals.remove(&id))
        })
    }

    pub fn keyframes(
        &mut self,
        targets: &[ElementId],
        frames: Vec<Keyframe>,
        vars: TweenVars,
    ) -> Option<TweenHandle> {
        let mut offset = 0.0;
        let segments = frames
            .into_iter()
            .map(|frame| {
                let duration = ms(frame.duration);
                let segment = Segment {
                    offset,
                    duration,
                    props: frame.props,
                };
                offset += duration;
                segment
            })
            .collect();
        self.add_tween(targets, segments, vars, |_| (None, None))
    }

    fn add_tween(
        &mut self,
        targets: &[ElementId],
        segments: Vec<Segment>,
        vars: TweenVars,
        mut endpoints: impl FnMut(ElementId) -> (Option<PropSet>, Option<PropSet>),
    ) -> Option<TweenHandle> {
        let tracks = targets
            .iter()
            .enumerate()
            .filter(|(_, id)| self.elements.contains_key(id))
            .map(|(i, id)| {
                let (from, to) = endpoints(*id);
                Track {
                    target: *id,
                    delay: ms(vars.delay) + ms(vars.stagger) * i as f64,
                    from,
                    to,
                    done: false,
                }
            })
            .collect::<Vec<_>>();
        if tracks.is_empty() {
            log::debug!("skipping tween, no mounted targets in {targets:?}");
            return None;
        }
        let cycle = segments.iter().map(|s| s.offset + s.duration).fold(0.0, f64::max);
        let id = self.next_id();
        self.tweens.insert(
            id,
            Tween {
                segments,
                cycle,
                start: self.now,
                ease: vars.ease,
                repeat: vars.repeat,
                yoyo: vars.yoyo,
                tracks,
            },
        );
        Some(TweenHandle(id))
    }

    pub fn delayed_call(&mut self, delay: Duration) -> TimerHandle {
        let id = self.next_id();
        self.timers.insert(
            id,
            Timer {
                due: self.now + ms(delay),
                period: None,
            },
        );
        TimerHandle(id)
    }

    pub fn interval(&mut self, period: Duration) -> TimerHandle {
        let id = self.next_id();
        let period = ms(period).max(1.0);
        self.timers.insert(
            id,
            Timer {
                due: self.now + period,
                period: Some(period),
            },
        );
        TimerHandle(id)
    }

    pub fn cancel_timer(&mut self, handle: TimerHandle) -> bool {
        self.timers.remove(&handle.0).is_some()
    }

    pub fn is_timer_pending(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle.0)
    }

    pub fn is_active(&self, handle: TweenHandle) -> bool {
        self.tweens.contains_key(&handle.0)
    }

    /// Stops one tween, leaving its targets where they are.
    pub fn kill(&mut self, handle: TweenHandle) -> bool {
        self.tweens.remove(&handle.0).is_some()
    }

    /// Stops every tween bound to an element in `scope`. Values stay frozen
    /// at their current interpolated state. Returns how many tweens ended.
    pub fn kill_all(&mut self, scope: &[ElementId]) -> usize {
        let before = self.tweens.len();
        self.tweens.retain(|_, tween| {
            tween.tracks.retain(|t| !scope.contains(&t.target));
            !tween.tracks.is_empty()
        });
        before - self.tweens.len()
    }

    /// Releases every tween and timer.
    pub fn dispose(&mut self) {
        self.tweens.clear();
        self.timers.clear();
    }

    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty() && self.timers.is_empty()
    }

    pub fn tick(&mut self, now: f64) -> Vec<TimelineEvent> {
        self.now = self.now.max(now);
        let mut events = self.fire_timers();

        let mut finished = Vec::new();
        for (id, tween) in self.tweens.iter_mut() {
            let props = tween.props();
            let mut tracks = std::mem::take(&mut tween.tracks);
            for track in tracks.iter_mut().filter(|t| !t.done) {
                let local = self.now - tween.start - track.delay;
                if local < 0.0 {
                    continue;
                }
                let Some(state) = self.elements.get_mut(&track.target) else {
                    // unmounted since the tween started
                    track.done = true;
                    continue;
                };
                let from = track
                    .from
                    .get_or_insert_with(|| PropSet::snapshot(&*state, props.iter().copied()))
                    .clone();
                let t = match tween.cycle_time(local) {
                    Some(t) => t,
                    None => {
                        track.done = true;
                        tween.final_time()
                    }
                };
                for (prop, value) in tween.sample(track, &from, t).iter() {
                    state.set(*prop, *value);
                }
                self.dirty.insert(track.target);
            }
            tween.tracks = tracks;
            if tween.tracks.iter().all(|t| t.done) {
                finished.push(*id);
            }
        }
        for id in finished {
            self.tweens.remove(&id);
            events.push(TimelineEvent::TweenCompleted(TweenHandle(id)));
        }
        events
    }

    fn fire_timers(&mut self) -> Vec<TimelineEvent> {
        let now = self.now;
        let mut due = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.due <= now)
            .map(|(id, timer)| (timer.due, *id))
            .collect::<Vec<_>>();
        due.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut events = Vec::with_capacity(due.len());
        for (_, id) in due {
            events.push(TimelineEvent::TimerFired(TimerHandle(id)));
            let Some(timer) = self.timers.get_mut(&id) else {
                continue;
            };
            match timer.period {
                Some(period) => {
                    while timer.due <= now {
                        timer.due += period;
                    }
                }
                None => {
                    self.timers.remove(&id);
                }
            }
        }
        events
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ElementId = ElementId(1);
    const B: ElementId = ElementId(2);

    fn ctx_with(ids: &[ElementId]) -> AnimationContext {
        let mut ctx = AnimationContext::new();
        for id in ids {
            ctx.register(*id, VisualState::default());
        }
        ctx.tick(0.0);
        ctx
    }

    fn x_of(ctx: &AnimationContext, id: ElementId) -> f64 {
        ctx.state(id).expect("element should be registered").x
    }

    #[test]
    fn test_tween_to_interpolates_and_completes() {
        let mut ctx = ctx_with(&[A]);
        let handle = ctx
            .tween_to(
                &[A],
                PropSet::new().x(100.0).opacity(0.0),
                TweenVars::secs(1.0).ease(Ease::Linear),
            )
            .expect("target is mounted");

        assert!(ctx.tick(500.0).is_empty());
        assert!((x_of(&ctx, A) - 50.0).abs() < 1e-9);

        let events = ctx.tick(1000.0);
        assert_eq!(events, vec![TimelineEvent::TweenCompleted(handle)]);
        let state = ctx.state(A).unwrap();
        assert_eq!(state.x, 100.0);
        assert_eq!(state.opacity, 0.0);
        assert!(!ctx.is_active(handle));
    }

    #[test]
    fn test_missing_targets_are_skipped() {
        let mut ctx = ctx_with(&[A]);
        assert!(ctx
            .tween_to(&[B], PropSet::new().x(1.0), TweenVars::secs(1.0))
            .is_none());

        let handle = ctx
            .tween_to(&[A, B], PropSet::new().x(1.0), TweenVars::secs(1.0))
            .unwrap();
        ctx.unregister(A);
        // the only live target went away, so the tween just finishes
        assert_eq!(
            ctx.tick(100.0),
            vec![TimelineEvent::TweenCompleted(handle)]
        );
    }

    #[test]
    fn test_infinite_yoyo_never_completes() {
        let mut ctx = ctx_with(&[A]);
        ctx.tween_to(
            &[A],
            PropSet::new().x(10.0),
            TweenVars::secs(1.0)
                .ease(Ease::Linear)
                .repeat(Repeat::Infinite)
                .yoyo(true),
        );
        ctx.tick(250.0);
        assert!((x_of(&ctx, A) - 2.5).abs() < 1e-9);
        // second cycle runs backwards
        ctx.tick(1250.0);
        assert!((x_of(&ctx, A) - 7.5).abs() < 1e-9);
        for step in 2..100 {
            assert!(ctx.tick(step as f64 * 1000.0).is_empty());
        }
        assert_eq!(ctx.active_tweens(), 1);
    }

    #[test]
    fn test_stagger_delays_each_target() {
        let mut ctx = ctx_with(&[A, B]);
        ctx.tween_to(
            &[A, B],
            PropSet::new().x(10.0),
            TweenVars::secs(1.0)
                .ease(Ease::Linear)
                .stagger(Duration::from_millis(500)),
        );
        ctx.tick(500.0);
        assert!((x_of(&ctx, A) - 5.0).abs() < 1e-9);
        assert_eq!(x_of(&ctx, B), 0.0);
        ctx.tick(1000.0);
        assert_eq!(x_of(&ctx, A), 10.0);
        assert!((x_of(&ctx, B) - 5.0).abs() < 1e-9);
        assert_eq!(ctx.tick(1500.0).len(), 1);
    }

    #[test]
    fn test_from_tween_returns_to_original() {
        let mut ctx = ctx_with(&[A]);
        ctx.set(&[A], &PropSet::new().y(0.0).opacity(1.0));
        ctx.tween_from(
            &[A],
            PropSet::new().y(-200.0).opacity(0.0),
            TweenVars::secs(2.0).ease(Ease::Linear),
        );
        // rendered at the from values before the first frame
        assert_eq!(ctx.state(A).unwrap().y, -200.0);
        ctx.tick(1000.0);
        assert!((ctx.state(A).unwrap().y + 100.0).abs() < 1e-9);
        ctx.tick(2000.0);
        assert_eq!(ctx.state(A).unwrap().y, 0.0);
        assert_eq!(ctx.state(A).unwrap().opacity, 1.0);
    }

    #[test]
    fn test_keyframes_play_in_order_and_yoyo() {
        let mut ctx = ctx_with(&[A]);
        let frame = Duration::from_millis(50);
        let handle = ctx
            .keyframes(
                &[A],
                vec![
                    Keyframe::new(PropSet::new().x(-5.0).color(Rgba::BLACK), frame),
                    Keyframe::new(PropSet::new().x(5.0), frame),
                    Keyframe::new(PropSet::new().x(0.0).color(Rgba::WHITE), frame),
                ],
                TweenVars::secs(0.0)
                    .ease(Ease::Linear)
                    .repeat(Repeat::Times(3))
                    .yoyo(true),
            )
            .unwrap();

        ctx.tick(50.0);
        assert_eq!(x_of(&ctx, A), -5.0);
        assert_eq!(ctx.state(A).unwrap().color, Some(Rgba::BLACK));
        ctx.tick(100.0);
        assert_eq!(x_of(&ctx, A), 5.0);
        // second cycle is reversed: at 200ms we're back at the second frame
        ctx.tick(200.0);
        assert_eq!(x_of(&ctx, A), 5.0);
        assert!(ctx.tick(599.0).is_empty());
        assert_eq!(
            ctx.tick(600.0),
            vec![TimelineEvent::TweenCompleted(handle)]
        );
    }

    #[test]
    fn test_kill_all_freezes_values() {
        let mut ctx = ctx_with(&[A, B]);
        ctx.tween_to(&[A], PropSet::new().x(100.0), TweenVars::secs(1.0).ease(Ease::Linear));
        let other = ctx
            .tween_to(&[B], PropSet::new().x(100.0), TweenVars::secs(1.0))
            .unwrap();
        ctx.tick(300.0);
        assert_eq!(ctx.kill_all(&[A]), 1);
        ctx.tick(2000.0);
        assert!((x_of(&ctx, A) - 30.0).abs() < 1e-9);
        assert!(!ctx.is_active(other));
        assert_eq!(x_of(&ctx, B), 100.0);
    }

    #[test]
    fn test_kill_all_on_shared_tween_keeps_other_targets() {
        let mut ctx = ctx_with(&[A, B]);
        let handle = ctx
            .tween_to(&[A, B], PropSet::new().x(100.0), TweenVars::secs(1.0))
            .unwrap();
        assert_eq!(ctx.kill_all(&[A]), 0);
        assert!(ctx.is_active(handle));
        ctx.tick(1000.0);
        assert_eq!(x_of(&ctx, A), 0.0);
        assert_eq!(x_of(&ctx, B), 100.0);
    }

    #[test]
    fn test_timers_and_intervals() {
        let mut ctx = ctx_with(&[]);
        let once = ctx.delayed_call(Duration::from_millis(100));
        let every = ctx.interval(Duration::from_millis(30));

        assert_eq!(ctx.tick(29.0), vec![]);
        assert_eq!(ctx.tick(30.0), vec![TimelineEvent::TimerFired(every)]);
        // fell behind by several periods: fires once and resyncs
        let events = ctx.tick(100.0);
        assert_eq!(
            events,
            vec![
                TimelineEvent::TimerFired(every),
                TimelineEvent::TimerFired(once)
            ]
        );
        assert!(!ctx.is_timer_pending(once));
        assert_eq!(ctx.tick(119.0), vec![]);
        assert_eq!(ctx.tick(120.0), vec![TimelineEvent::TimerFired(every)]);

        assert!(ctx.cancel_timer(every));
        assert!(ctx.tick(1000.0).is_empty());
        assert!(ctx.is_idle());
    }

    #[test]
    fn test_dispose_releases_everything() {
        let mut ctx = ctx_with(&[A]);
        ctx.tween_to(
            &[A],
            PropSet::new().x(1.0),
            TweenVars::secs(1.0).repeat(Repeat::Infinite),
        );
        ctx.interval(Duration::from_secs(3));
        ctx.delayed_call(Duration::from_secs(8));
        ctx.dispose();
        assert_eq!(ctx.active_tweens(), 0);
        assert_eq!(ctx.active_timers(), 0);
        assert!(ctx.tick(10_000.0).is_empty());
    }

    #[test]
    fn test_style_css() {
        let state = VisualState::default().with_opacity(0.5).with_color(Rgba::WHITE);
        let css = state.style_css("translate(-50%, -50%)");
        assert!(css.starts_with("transform: translate(-50%, -50%) translate(0.00px, 0.00px)"));
        assert!(css.contains("opacity: 0.500;"));
        assert!(css.contains("color: rgba(255, 255, 255, 1);"));
    }
}
