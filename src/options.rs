//! Per-call options for the output and input entry points.
//!
//! Options are plain builder-style structs. They can also be read from a
//! JSON object, which is how the demo binary takes them on the command line.
//! Unknown keys and wrongly typed values are ignored.

use serde_json::{Value, json};

use crate::animate::{Animation, Direction, parse_delay};
use crate::palette::DEFAULT_COLOR;

/// Options for one output call.
///
/// # Example
///
/// ```
/// use btext::{Direction, PrintOptions};
///
/// let opts = PrintOptions::new()
///     .color("cyan")
///     .animated(true)
///     .direction(Direction::Right)
///     .delay("50ms");
/// assert_eq!(opts.animation_request().unwrap().delay.as_millis(), 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PrintOptions {
    /// Color spec for text before the first directive.
    pub color: String,
    pub animation: bool,
    pub direction: Direction,
    /// Number of seconds, or a string such as `"50ms"` / `"2s"`.
    pub delay: Value,
    /// Written after the text.
    pub end: String,
    /// Joins arguments within a segment, and segments in a static render.
    pub sep: String,
    /// Flush the writer after the call.
    pub flush: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            animation: false,
            direction: Direction::Left,
            delay: json!("0.1s"),
            end: "\n".to_string(),
            sep: " ".to_string(),
            flush: false,
        }
    }
}

impl PrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn animated(mut self, animation: bool) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn delay(mut self, delay: impl Into<Value>) -> Self {
        self.delay = delay.into();
        self
    }

    #[must_use]
    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = end.into();
        self
    }

    #[must_use]
    pub fn sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }

    #[must_use]
    pub fn flush(mut self, flush: bool) -> Self {
        self.flush = flush;
        self
    }

    /// The requested animation, if any, with the delay parsed.
    pub fn animation_request(&self) -> Option<Animation> {
        self.animation.then(|| Animation {
            direction: self.direction,
            delay: parse_delay(&self.delay),
        })
    }

    /// Read options from a JSON object. Missing keys keep their defaults.
    ///
    /// ```
    /// use btext::PrintOptions;
    /// use serde_json::json;
    ///
    /// let opts = PrintOptions::from_json(&json!({"color": "red", "end": ""}));
    /// assert_eq!(opts.color, "red");
    /// assert_eq!(opts.end, "");
    /// assert!(!opts.animation);
    /// ```
    pub fn from_json(value: &Value) -> Self {
        let mut opts = Self::default();
        let Some(obj) = value.as_object() else {
            return opts;
        };

        if let Some(color) = obj.get("color").and_then(Value::as_str) {
            opts.color = color.to_string();
        }
        if let Some(animation) = obj.get("animation").and_then(Value::as_bool) {
            opts.animation = animation;
        }
        if let Some(direction) = obj
            .get("direction")
            .and_then(Value::as_str)
            .and_then(Direction::parse)
        {
            opts.direction = direction;
        }
        if let Some(delay) = obj.get("delay") {
            opts.delay = delay.clone();
        }
        if let Some(end) = obj.get("end").and_then(Value::as_str) {
            opts.end = end.to_string();
        }
        if let Some(sep) = obj.get("sep").and_then(Value::as_str) {
            opts.sep = sep.to_string();
        }
        if let Some(flush) = obj.get("flush").and_then(Value::as_bool) {
            opts.flush = flush;
        }
        opts
    }
}

/// Options for one input call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOptions {
    /// Color spec applied to the prompt only.
    pub color: String,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl InputOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn from_json(value: &Value) -> Self {
        let mut opts = Self::default();
        if let Some(color) = value.get("color").and_then(Value::as_str) {
            opts.color = color.to_string();
        }
        opts
    }
}
