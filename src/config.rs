use serde::Deserialize;

use crate::error::SiteError;
use crate::logging::LogLevel;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

const DEFAULT_TYPEWRITER_SPEED_MS: u32 = 100;
const DEFAULT_TYPEWRITER_DELAY_MS: u32 = 1_000;
const DEFAULT_TYPEWRITER_HOLD_MS: u32 = 2_000;
const DEFAULT_TYPEWRITER_GAP_MS: u32 = 500;
const DEFAULT_ANIMATION_DURATION_MS: u32 = 800;
const DEFAULT_SCROLL_OFFSET: f64 = 80.0;
const DEFAULT_PARTICLE_COUNT: usize = 50;
const DEFAULT_COUNTER_DURATION_MS: u32 = 2_000;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.5;
const DEFAULT_SUBMIT_IDLE_LABEL: &str = "Gửi tin nhắn";
const DEFAULT_SUBMIT_SENT_LABEL: &str = "Đã gửi!";
const DEFAULT_TYPED_TEXT: &str = "Java Developer (Fresher)";

const TYPEWRITER_SPEED_MS_BOUNDS: (u32, u32) = (10, 2_000);
const TYPEWRITER_DELAY_MS_BOUNDS: (u32, u32) = (0, 60_000);
const TYPEWRITER_PAUSE_MS_BOUNDS: (u32, u32) = (0, 60_000);
const ANIMATION_DURATION_MS_BOUNDS: (u32, u32) = (0, 10_000);
const SCROLL_OFFSET_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const PARTICLE_COUNT_BOUNDS: (usize, usize) = (0, 500);
const COUNTER_DURATION_MS_BOUNDS: (u32, u32) = (16, 60_000);
const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);

/// Tunables for every component on the page.
///
/// The page may override any subset of these with a JSON document in
/// `<script type="application/json" id="site-config">`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub typewriter_speed_ms: u32,
    pub typewriter_delay_ms: u32,
    pub typewriter_hold_ms: u32,
    pub typewriter_gap_ms: u32,
    pub animation_duration_ms: u32,
    pub scroll_offset: f64,
    pub particle_count: usize,
    pub typed_texts: Vec<String>,
    pub counter_duration_ms: u32,
    pub reveal_threshold: f64,
    pub log_level: LogLevel,
    pub submit_idle_label: String,
    pub submit_sent_label: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            typewriter_speed_ms: DEFAULT_TYPEWRITER_SPEED_MS,
            typewriter_delay_ms: DEFAULT_TYPEWRITER_DELAY_MS,
            typewriter_hold_ms: DEFAULT_TYPEWRITER_HOLD_MS,
            typewriter_gap_ms: DEFAULT_TYPEWRITER_GAP_MS,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            scroll_offset: DEFAULT_SCROLL_OFFSET,
            particle_count: DEFAULT_PARTICLE_COUNT,
            typed_texts: vec![DEFAULT_TYPED_TEXT.to_string()],
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            log_level: LogLevel::Info,
            submit_idle_label: DEFAULT_SUBMIT_IDLE_LABEL.to_string(),
            submit_sent_label: DEFAULT_SUBMIT_SENT_LABEL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses a JSON override document; fields that are absent keep their
    /// defaults and fields outside their bounds fall back to the default.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let parsed: Self = serde_json::from_str(raw)?;
        Ok(parsed.within_bounds())
    }

    fn within_bounds(self) -> Self {
        Self {
            typewriter_speed_ms: u32_with_bounds(
                self.typewriter_speed_ms,
                DEFAULT_TYPEWRITER_SPEED_MS,
                TYPEWRITER_SPEED_MS_BOUNDS,
            ),
            typewriter_delay_ms: u32_with_bounds(
                self.typewriter_delay_ms,
                DEFAULT_TYPEWRITER_DELAY_MS,
                TYPEWRITER_DELAY_MS_BOUNDS,
            ),
            typewriter_hold_ms: u32_with_bounds(
                self.typewriter_hold_ms,
                DEFAULT_TYPEWRITER_HOLD_MS,
                TYPEWRITER_PAUSE_MS_BOUNDS,
            ),
            typewriter_gap_ms: u32_with_bounds(
                self.typewriter_gap_ms,
                DEFAULT_TYPEWRITER_GAP_MS,
                TYPEWRITER_PAUSE_MS_BOUNDS,
            ),
            animation_duration_ms: u32_with_bounds(
                self.animation_duration_ms,
                DEFAULT_ANIMATION_DURATION_MS,
                ANIMATION_DURATION_MS_BOUNDS,
            ),
            scroll_offset: f64_with_bounds(
                self.scroll_offset,
                DEFAULT_SCROLL_OFFSET,
                SCROLL_OFFSET_BOUNDS,
            ),
            particle_count: usize_with_bounds(
                self.particle_count,
                DEFAULT_PARTICLE_COUNT,
                PARTICLE_COUNT_BOUNDS,
            ),
            counter_duration_ms: u32_with_bounds(
                self.counter_duration_ms,
                DEFAULT_COUNTER_DURATION_MS,
                COUNTER_DURATION_MS_BOUNDS,
            ),
            reveal_threshold: f64_with_bounds(
                self.reveal_threshold,
                DEFAULT_REVEAL_THRESHOLD,
                REVEAL_THRESHOLD_BOUNDS,
            ),
            ..self
        }
    }
}

fn u32_with_bounds(value: u32, default: u32, bounds: (u32, u32)) -> u32 {
    Some(value)
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn usize_with_bounds(value: usize, default: usize, bounds: (usize, usize)) -> usize {
    Some(value)
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn f64_with_bounds(value: f64, default: f64, bounds: (f64, f64)) -> f64 {
    Some(value)
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = SiteConfig::from_json("  ").expect("blank config is accepted");

        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_named_fields() {
        let config = SiteConfig::from_json(
            r#"{"particleCount": 12, "typedTexts": ["Rust", "WebAssembly"], "logLevel": "debug"}"#,
        )
        .expect("valid config");

        assert_eq!(config.particle_count, 12);
        assert_eq!(config.typed_texts, vec!["Rust".to_string(), "WebAssembly".to_string()]);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.typewriter_speed_ms, DEFAULT_TYPEWRITER_SPEED_MS);
        assert_eq!(config.scroll_offset, DEFAULT_SCROLL_OFFSET);
    }

    #[test]
    fn out_of_bounds_values_fall_back_to_defaults() {
        let config = SiteConfig::from_json(
            r#"{"particleCount": 100000, "revealThreshold": 4.0, "typewriterSpeedMs": 1}"#,
        )
        .expect("valid config");

        assert_eq!(config.particle_count, DEFAULT_PARTICLE_COUNT);
        assert_eq!(config.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(config.typewriter_speed_ms, DEFAULT_TYPEWRITER_SPEED_MS);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let result = SiteConfig::from_json("{\"particleCount\": ");

        assert!(matches!(result, Err(SiteError::Config(_))));
    }
}
