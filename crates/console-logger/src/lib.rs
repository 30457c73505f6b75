//! Console Logger
//!
//! A `tracing` layer that writes events to the browser devtools console,
//! routing each level to the matching `console.*` method.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use wasm_bindgen::JsValue;

/// Layer that forwards every event it sees to `window.console`
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let line = JsValue::from(format_line(meta.level(), meta.target(), &fields.finish()));
        match *meta.level() {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            Level::DEBUG => web_sys::console::log_1(&line),
            Level::TRACE => web_sys::console::debug_1(&line),
        }
    }
}

/// Collects the `message` field and any structured `key=value` pairs
#[derive(Debug, Default)]
pub struct FieldCollector {
    message: String,
    pairs: Vec<(String, String)>,
}

impl FieldCollector {
    pub fn push(&mut self, name: &str, value: String) {
        if name == "message" {
            self.message = value;
        } else {
            self.pairs.push((name.to_string(), value));
        }
    }

    /// Render as `message key=value key=value`
    pub fn finish(self) -> String {
        let mut out = self.message;
        for (key, value) in self.pairs {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "{}={}", key, value);
        }
        out
    }
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field.name(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field.name(), format!("{:?}", value));
    }
}

/// One console line: `LEVEL target: body`
pub fn format_line(level: &Level, target: &str, body: &str) -> String {
    format!("{:<5} {}: {}", level.as_str(), target, body)
}

/// Install the console layer as the global subscriber.
///
/// Returns `false` when a global subscriber was already set.
pub fn init(max_level: Level) -> bool {
    let subscriber = tracing_subscriber::registry()
        .with(LevelFilter::from_level(max_level))
        .with(ConsoleLayer);
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
