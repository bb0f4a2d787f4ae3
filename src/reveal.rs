//! Count-up counters and progress bars that animate once they scroll into view.

pub const COUNTER_FRAME_MS: u32 = 16;
pub const PROGRESS_DELAY_MS: u32 = 500;

// Browsers report intersection ratios with rounding error around thresholds.
const RATIO_TOLERANCE: f64 = 0.01;

/// Leading-integer parse with JavaScript `parseInt` rules: optional leading
/// whitespace and sign, then digits; anything after the digits is ignored.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;

    Some(if negative { -value } else { value })
}

/// Linear count from zero to `target`, advanced once per frame.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: i64,
    increment: f64,
    current: f64,
    done: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountFrame {
    pub display: i64,
    pub done: bool,
}

impl CountUp {
    pub fn new(target: i64, duration_ms: u32) -> Self {
        let frames = (f64::from(duration_ms) / f64::from(COUNTER_FRAME_MS)).max(1.0);

        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
            done: false,
        }
    }

    pub fn tick(&mut self) -> CountFrame {
        if self.done {
            return CountFrame {
                display: self.target,
                done: true,
            };
        }

        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.done = true;
            return CountFrame {
                display: self.target,
                done: true,
            };
        }

        CountFrame {
            display: self.current.floor() as i64,
            done: false,
        }
    }
}

/// Reads a `data-width` attribute as a percentage in `[0, 100]`.
pub fn progress_width(raw: Option<&str>) -> Option<String> {
    let value: f64 = raw?.trim().trim_end_matches('%').parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    Some(format!("{}%", value.clamp(0.0, 100.0)))
}

/// Fires at most once, when the observed element is visible enough.
#[derive(Clone, Debug)]
pub struct RevealTrigger {
    threshold: f64,
    fired: bool,
}

impl RevealTrigger {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.fired || !is_intersecting || ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }

        self.fired = true;
        true
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_like_parse_int() {
        assert_eq!(parse_leading_int("150"), Some(150));
        assert_eq!(parse_leading_int("  42+ projects"), Some(42));
        assert_eq!(parse_leading_int("-7"), Some(-7));
        assert_eq!(parse_leading_int("+3"), Some(3));
        assert_eq!(parse_leading_int("years: 5"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn count_up_is_monotonic_and_ends_exactly_on_target() {
        let mut count = CountUp::new(137, 2_000);
        let mut last = 0;
        let mut frames = 0;

        loop {
            let frame = count.tick();
            frames += 1;
            assert!(frame.display >= last);
            assert!(frame.display <= 137);
            last = frame.display;

            if frame.done {
                assert_eq!(frame.display, 137);
                break;
            }
            assert!(frames < 1_000, "count-up never finished");
        }

        // 2000 ms at 16 ms per frame.
        assert!((124..=126).contains(&frames));
        assert_eq!(count.tick(), CountFrame { display: 137, done: true });
    }

    #[test]
    fn zero_and_negative_targets_finish_immediately() {
        assert_eq!(CountUp::new(0, 2_000).tick(), CountFrame { display: 0, done: true });
        assert_eq!(CountUp::new(-5, 2_000).tick(), CountFrame { display: -5, done: true });
    }

    #[test]
    fn progress_width_is_clamped_percentage() {
        assert_eq!(progress_width(Some("85")), Some("85%".to_string()));
        assert_eq!(progress_width(Some(" 92.5% ")), Some("92.5%".to_string()));
        assert_eq!(progress_width(Some("140")), Some("100%".to_string()));
        assert_eq!(progress_width(Some("-3")), Some("0%".to_string()));
        assert_eq!(progress_width(Some("wide")), None);
        assert_eq!(progress_width(None), None);
    }

    #[test]
    fn trigger_fires_once_at_threshold() {
        let mut trigger = RevealTrigger::new(0.5);

        assert!(!trigger.observe(false, 0.0));
        assert!(!trigger.observe(true, 0.2));
        assert!(trigger.observe(true, 0.498));
        assert!(trigger.fired());
        assert!(!trigger.observe(true, 1.0));
    }
}
