use serde::Deserialize;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
                LogLevel::Error => 3,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Level-filtered structured logger; every line is one JSON object.
#[derive(Clone, Copy, Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn debug(&self, event: &str, fields: serde_json::Value) {
        self.log_event(LogLevel::Debug, event, fields);
    }

    pub fn info(&self, event: &str, fields: serde_json::Value) {
        self.log_event(LogLevel::Info, event, fields);
    }

    pub fn warn(&self, event: &str, fields: serde_json::Value) {
        self.log_event(LogLevel::Warn, event, fields);
    }

    pub fn error(&self, event: &str, fields: serde_json::Value) {
        self.log_event(LogLevel::Error, event, fields);
    }

    pub fn log_event(&self, level: LogLevel, event: &str, fields: serde_json::Value) {
        if !self.enabled(level) {
            return;
        }

        let line = event_payload(now_unix_millis(), level, event, fields).to_string();
        emit(level, &line);
    }
}

fn event_payload(
    ts: u64,
    level: LogLevel,
    event: &str,
    fields: serde_json::Value,
) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(ts)),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Error => web_sys::console::error_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn logger_filters_below_threshold() {
        let logger = Logger::new(LogLevel::Warn);

        assert!(!logger.enabled(LogLevel::Debug));
        assert!(!logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Warn));
        assert!(logger.enabled(LogLevel::Error));
    }

    #[test]
    fn payload_merges_extra_fields_after_envelope() {
        let payload = event_payload(
            42,
            LogLevel::Info,
            "component.started",
            json!({ "component": "particles", "count": 50 }),
        );

        assert_eq!(
            payload,
            json!({
                "ts": 42,
                "level": "info",
                "event": "component.started",
                "component": "particles",
                "count": 50,
            })
        );
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let payload = event_payload(1, LogLevel::Error, "boom", json!("not an object"));

        assert_eq!(payload, json!({ "ts": 1, "level": "error", "event": "boom" }));
    }
}
