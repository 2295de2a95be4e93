use std::ops::Range;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::color::{Palette, Rgba};
use super::timeline::{ElementId, VisualState};

/// Ids below this are reserved for the named landing nodes.
pub const FIELD_ID_BASE: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Particle,
    Flare,
    ShockwaveRing,
}

struct KindRanges {
    size: Range<f64>,
    blur: Range<f64>,
    opacity: f64,
    centred: bool,
}

impl ElementKind {
    fn ranges(&self) -> KindRanges {
        match self {
            ElementKind::Particle => KindRanges {
                size: 2.0..6.0,
                blur: 0.0..2.0,
                opacity: 0.8,
                centred: false,
            },
            ElementKind::Flare => KindRanges {
                size: 50.0..200.0,
                blur: 20.0..20.0,
                opacity: 0.3,
                centred: false,
            },
            // rings are sized in vmin and expand from the middle of the screen
            ElementKind::ShockwaveRing => KindRanges {
                size: 100.0..100.0,
                blur: 0.0..0.0,
                opacity: 0.5,
                centred: true,
            },
        }
    }
}

/// Width and height, drawn independently from the same range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualElement {
    pub id: ElementId,
    pub kind: ElementKind,
    pub x_pct: f64,
    pub y_pct: f64,
    pub size: Size,
    pub color: Rgba,
    pub base_opacity: f64,
    pub blur: f64,
}

impl VisualElement {
    pub fn initial_state(&self) -> VisualState {
        VisualState::default().with_opacity(self.base_opacity)
    }

    /// Static part of the inline style; the animated part comes from
    /// [`VisualState::style_css`].
    pub fn base_style(&self) -> String {
        let position = format!("left: {:.3}%; top: {:.3}%;", self.x_pct, self.y_pct);
        match self.kind {
            ElementKind::Particle => format!(
                "{position} width: {w:.2}px; height: {h:.2}px; background-color: {c}; filter: blur({b:.2}px);",
                w = self.size.width,
                h = self.size.height,
                c = self.color,
                b = self.blur,
            ),
            ElementKind::Flare => format!(
                "{position} width: {w:.2}px; height: {h:.2}px; background: radial-gradient(circle, {c} 0%, transparent 70%); filter: blur({b:.2}px);",
                w = self.size.width,
                h = self.size.height,
                c = self.color,
                b = self.blur,
            ),
            ElementKind::ShockwaveRing => format!(
                "{position} width: {w}vmin; height: {h}vmin; border: 1px solid {c};",
                w = self.size.width,
                h = self.size.height,
                c = self.color.with_alpha(0.2),
            ),
        }
    }

    /// Transform that has to stay in front of the animated one.
    pub fn base_transform(&self) -> &'static str {
        match self.kind {
            ElementKind::ShockwaveRing => "translate(-50%, -50%)",
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldCounts {
    pub particles: usize,
    pub flares: usize,
    pub rings: usize,
}

impl Default for FieldCounts {
    fn default() -> Self {
        Self {
            particles: 300,
            flares: 15,
            rings: 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualField {
    elements: Vec<VisualElement>,
}

impl VisualField {
    pub fn elements(&self) -> &[VisualElement] {
        &self.elements
    }

    pub fn of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &VisualElement> {
        self.elements.iter().filter(move |e| e.kind == kind)
    }

    pub fn ids_of(&self, kind: ElementKind) -> Vec<ElementId> {
        self.of_kind(kind).map(|e| e.id).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Lays out the decorative field. The same seed always yields the same field;
/// without one the layout is different on every page load.
pub fn generate_field(counts: FieldCounts, palette: &Palette, seed: Option<u64>) -> VisualField {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_field_with(counts, palette, &mut rng)
}

pub fn generate_field_with<R: Rng>(
    counts: FieldCounts,
    palette: &Palette,
    rng: &mut R,
) -> VisualField {
    let kinds = [
        (ElementKind::ShockwaveRing, counts.rings),
        (ElementKind::Flare, counts.flares),
        (ElementKind::Particle, counts.particles),
    ];
    let mut next_id = FIELD_ID_BASE;
    let mut elements = Vec::with_capacity(counts.particles + counts.flares + counts.rings);
    for (kind, count) in kinds {
        let ranges = kind.ranges();
        for _ in 0..count {
            let (x_pct, y_pct) = if ranges.centred {
                (50.0, 50.0)
            } else {
                (rng.gen_range(0.0..=100.0), rng.gen_range(0.0..=100.0))
            };
            let colors = palette.colors();
            elements.push(VisualElement {
                id: ElementId(next_id),
                kind,
                x_pct,
                y_pct,
                size: Size {
                    width: sample(rng, &ranges.size),
                    height: sample(rng, &ranges.size),
                },
                color: colors[rng.gen_range(0..colors.len())],
                base_opacity: ranges.opacity,
                blur: sample(rng, &ranges.blur),
            });
            next_id += 1;
        }
    }
    VisualField { elements }
}

fn sample<R: Rng>(rng: &mut R, range: &Range<f64>) -> f64 {
    if range.is_empty() {
        range.start
    } else {
        rng.gen_range(range.clone())
    }
}
