use crate::landing::easing::Ease;
use crate::landing::Rgba;

/// How far below the top of the window a section counts as reached, so the
/// fixed header doesn't hide the section that's highlighted.
pub const SCROLL_OFFSET_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub id: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Home",
        id: "home",
    },
    NavItem {
        label: "About",
        id: "about",
    },
    NavItem {
        label: "Skills",
        id: "skills",
    },
    NavItem {
        label: "Projects",
        id: "projects",
    },
    NavItem {
        label: "Contact",
        id: "contact",
    },
];

/// Document offset and height of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

/// First section containing the scroll position, in nav order.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&'static str> {
    let position = scroll_y + SCROLL_OFFSET_PX;
    sections
        .iter()
        .find(|s| position >= s.top && position < s.top + s.height)
        .map(|s| s.id)
}

/// Fraction of the page scrolled, 0 to 1.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let max = scroll_height - viewport_height;
    if max <= 0.0 {
        return 0.0;
    }
    (scroll_y / max).clamp(0.0, 1.0)
}

/// Fraction of the window height an element's top edge has to rise above
/// before it reveals.
pub const REVEAL_LINE: f64 = 0.8;

/// Whether an element whose top sits `top` pixels below the top of the
/// window has crossed the reveal line. Scrolling back up un-reveals it.
pub fn is_revealed(top: f64, viewport_height: f64) -> bool {
    top <= viewport_height * REVEAL_LINE
}

/// Progress through a section that stays pinned for `distance` pixels of
/// scrolling once its top reaches the top of the window.
pub fn pinned_progress(scroll_y: f64, section_top: f64, distance: f64) -> f64 {
    if distance <= 0.0 {
        return if scroll_y >= section_top { 1.0 } else { 0.0 };
    }
    ((scroll_y - section_top) / distance).clamp(0.0, 1.0)
}

/// A section that pins while its row of panels slides sideways. Every pixel
/// scrolled down moves the row one pixel left, so the pin lasts exactly as
/// long as the row overflows the window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PinnedStrip {
    pub top: f64,
    pub strip_width: f64,
    pub viewport_width: f64,
}

impl PinnedStrip {
    pub fn distance(&self) -> f64 {
        (self.strip_width - self.viewport_width).max(0.0)
    }

    /// `translateX` for the row at this scroll position. Zero or negative.
    pub fn offset(&self, scroll_y: f64) -> f64 {
        let distance = self.distance();
        let progress = pinned_progress(scroll_y, self.top, distance);
        -distance * Ease::power_in_out(1).apply(progress)
    }
}

const CIRCLE_START: Rgba = Rgba::WHITE;
const CIRCLE_MID: Rgba = Rgba::rgb(0x93, 0x33, 0xea);
const CIRCLE_END: Rgba = Rgba::rgb(0xe9, 0xd5, 0xff);

/// One frame of the contact section's expanding circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleFrame {
    pub scale: f64,
    pub color: Rgba,
    /// Strength of the outer glow, 0 to 1.
    pub glow: f64,
    pub lead_opacity: f64,
    pub message_opacity: f64,
}

/// Local progress of `t` through the window `[start, end]`.
fn window_progress(t: f64, start: f64, end: f64) -> f64 {
    ((t - start) / (end - start)).clamp(0.0, 1.0)
}

/// The circle grows to 5x turning purple over the first half of the pin, then
/// to 17x in lilac over the second. The lead text fades out early and the
/// message fades in near the end.
pub fn circle_frame(progress: f64) -> CircleFrame {
    let p = progress.clamp(0.0, 1.0);
    let grow = Ease::power_in_out(1).apply(window_progress(p, 0.0, 0.5));
    let flood = Ease::power_in_out(2).apply(window_progress(p, 0.5, 1.0));
    let (scale, color) = if p < 0.5 {
        (1.0 + 4.0 * grow, CIRCLE_START.lerp(&CIRCLE_MID, grow))
    } else {
        (5.0 + 12.0 * flood, CIRCLE_MID.lerp(&CIRCLE_END, flood))
    };
    CircleFrame {
        scale,
        color,
        glow: flood,
        lead_opacity: 1.0 - Ease::power_out(1).apply(window_progress(p, 0.1, 0.3)),
        message_opacity: Ease::power_in(2).apply(window_progress(p, 0.7, 0.9)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        NAV_ITEMS
            .iter()
            .enumerate()
            .map(|(i, item)| SectionBounds {
                id: item.id,
                top: i as f64 * 800.0,
                height: 800.0,
            })
            .collect()
    }

    #[test]
    fn test_active_section() {
        let sections = sections();
        assert_eq!(active_section(0.0, &sections), Some("home"));
        // the offset switches a section early
        assert_eq!(active_section(699.0, &sections), Some("home"));
        assert_eq!(active_section(700.0, &sections), Some("about"));
        assert_eq!(active_section(3300.0, &sections), Some("contact"));
        assert_eq!(active_section(4000.0, &sections), None);
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn test_reveal_line() {
        assert!(!is_revealed(900.0, 1000.0));
        assert!(is_revealed(800.0, 1000.0));
        assert!(is_revealed(-300.0, 1000.0));
    }

    #[test]
    fn test_pinned_progress() {
        assert_eq!(pinned_progress(500.0, 1000.0, 400.0), 0.0);
        assert_eq!(pinned_progress(1200.0, 1000.0, 400.0), 0.5);
        assert_eq!(pinned_progress(5000.0, 1000.0, 400.0), 1.0);
        assert_eq!(pinned_progress(999.0, 1000.0, 0.0), 0.0);
        assert_eq!(pinned_progress(1000.0, 1000.0, 0.0), 1.0);
    }

    #[test]
    fn test_pinned_strip_slides_its_overflow() {
        let strip = PinnedStrip {
            top: 2000.0,
            strip_width: 3400.0,
            viewport_width: 1400.0,
        };
        assert_eq!(strip.distance(), 2000.0);
        assert_eq!(strip.offset(0.0), 0.0);
        assert_eq!(strip.offset(2000.0), 0.0);
        // power1.inOut is symmetric, halfway is halfway
        assert!((strip.offset(3000.0) + 1000.0).abs() < 1e-9);
        assert_eq!(strip.offset(4000.0), -2000.0);
        assert_eq!(strip.offset(9000.0), -2000.0);
    }

    #[test]
    fn test_pinned_strip_that_fits_never_moves() {
        let strip = PinnedStrip {
            top: 100.0,
            strip_width: 800.0,
            viewport_width: 1400.0,
        };
        assert_eq!(strip.distance(), 0.0);
        assert_eq!(strip.offset(500.0), 0.0);
    }

    #[test]
    fn test_circle_frame() {
        let start = circle_frame(0.0);
        assert_eq!(start.scale, 1.0);
        assert_eq!(start.color, Rgba::WHITE);
        assert_eq!(start.lead_opacity, 1.0);
        assert_eq!(start.message_opacity, 0.0);
        assert_eq!(start.glow, 0.0);

        let mid = circle_frame(0.5);
        assert_eq!(mid.scale, 5.0);
        assert_eq!(mid.color, CIRCLE_MID);
        assert_eq!(mid.lead_opacity, 0.0);
        assert_eq!(mid.message_opacity, 0.0);

        let end = circle_frame(1.0);
        assert_eq!(end.scale, 17.0);
        assert_eq!(end.color, CIRCLE_END);
        assert_eq!(end.glow, 1.0);
        assert_eq!(end.message_opacity, 1.0);
    }

    #[test]
    fn test_circle_only_grows() {
        let mut last = 0.0;
        for i in 0..=100 {
            let scale = circle_frame(i as f64 / 100.0).scale;
            assert!(scale >= last, "shrank at {i}");
            last = scale;
        }
    }
}
