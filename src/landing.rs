//! Host-agnostic pieces of the landing intro. Nothing in here touches the
//! DOM; the browser side in `app::intro` and `app::cursor` drives these
//! types from `requestAnimationFrame` and event listeners.

pub mod color;
pub mod cursor;
pub mod easing;
pub mod field;
pub mod gate;
pub mod readiness;
pub mod sequencer;
pub mod timeline;
pub mod viewport;

pub use color::{ColorError, Palette, Rgba};
pub use cursor::{CursorConfig, CursorState, CursorTracker, ListenerHost, ListenerKind};
pub use field::{generate_field, ElementKind, FieldCounts, VisualElement, VisualField};
pub use gate::ContentGate;
pub use readiness::{ReadinessGate, Slot};
pub use sequencer::{
    ExitJoin, ExitTrigger, IntroConfig, IntroSequencer, PointerFeedback, SequencerEvent,
    SequencerState,
};
pub use timeline::{AnimationContext, ElementId, TimelineEvent, VisualState};
pub use viewport::{ViewportClass, ViewportClassifier, DEFAULT_BREAKPOINT_PX};
