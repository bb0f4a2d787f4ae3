pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_CLASS: &str = "active";
pub const SHOW_CLASS: &str = "show";

const NAVBAR_SCROLLED_AFTER: f64 = 50.0;
const SECTION_ACTIVATION_OFFSET: f64 = 200.0;
const BACK_TO_TOP_AFTER: f64 = 300.0;
const PARALLAX_FACTOR: f64 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionPosition {
    pub id: String,
    pub top: f64,
}

pub fn navbar_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AFTER
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_AFTER
}

/// Last section, in document order, whose top is within the activation
/// offset of the current scroll position.
pub fn active_section(scroll_y: f64, sections: &[SectionPosition]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| scroll_y >= section.top - SECTION_ACTIVATION_OFFSET)
        .last()
        .map(|section| section.id.as_str())
}

pub fn link_targets_section(href: Option<&str>, section_id: Option<&str>) -> bool {
    match (href.and_then(|href| href.strip_prefix('#')), section_id) {
        (Some(target), Some(id)) => target == id,
        _ => false,
    }
}

/// Scroll position that puts `offset_top` just below the fixed nav bar.
pub fn anchor_scroll_target(offset_top: f64, scroll_offset: f64) -> f64 {
    offset_top - scroll_offset
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * PARALLAX_FACTOR)
}

/// Leading-edge throttle: the first call in a window runs, the rest of the
/// window is dropped.
#[derive(Clone, Debug)]
pub struct Throttle {
    limit_ms: f64,
    blocked_until: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit_ms: f64::from(limit_ms),
            blocked_until: None,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        if let Some(until) = self.blocked_until {
            if now_ms < until {
                return false;
            }
        }

        self.blocked_until = Some(now_ms + self.limit_ms);
        true
    }
}
