use serde::{Deserialize, Serialize};

pub const DEFAULT_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

type Subscriber = Box<dyn FnMut(ViewportClass) + Send + Sync>;

/// Single owner of the mobile breakpoint. Consumers subscribe to crossings
/// instead of running their own media queries.
pub struct ViewportClassifier {
    breakpoint: f64,
    current: Option<ViewportClass>,
    subscribers: Vec<Subscriber>,
}

impl std::fmt::Debug for ViewportClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportClassifier")
            .field("breakpoint", &self.breakpoint)
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for ViewportClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT_PX)
    }
}

impl ViewportClassifier {
    pub fn new(breakpoint: f64) -> Self {
        Self {
            breakpoint,
            current: None,
            subscribers: Vec::new(),
        }
    }

    pub fn breakpoint(&self) -> f64 {
        self.breakpoint
    }

    pub fn current(&self) -> Option<ViewportClass> {
        self.current
    }

    /// Same rule as `(max-width: 768px)`: the breakpoint itself is mobile.
    pub fn classify(&self, width: f64) -> ViewportClass {
        if width <= self.breakpoint {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    /// Records a new width. Returns the new class only when it differs from
    /// the previous one, after notifying subscribers.
    pub fn update(&mut self, width: f64) -> Option<ViewportClass> {
        let class = self.classify(width);
        if self.current == Some(class) {
            return None;
        }
        log::debug!("viewport {width}px is {class:?}");
        self.current = Some(class);
        for subscriber in self.subscribers.iter_mut() {
            subscriber(class);
        }
        Some(class)
    }

    /// The subscriber is called right away if the class is already known.
    pub fn subscribe(&mut self, mut subscriber: impl FnMut(ViewportClass) + Send + Sync + 'static) {
        if let Some(class) = self.current {
            subscriber(class);
        }
        self.subscribers.push(Box::new(subscriber));
    }
}
