//! Splitting one output call into colored segments.
//!
//! Arguments are converted to display strings at the boundary. Any argument
//! that starts with [`DIRECTIVE_PREFIX`] ends the current segment and sets
//! the color for the arguments that follow it.
//!
//! # Example
//!
//! ```
//! use btext::{ColorSpec, build_segments};
//!
//! let segments = build_segments(&["a", "+color=red", "b"], "white", " ");
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[1].text, "b");
//! assert_eq!(segments[1].color, ColorSpec::named("red"));
//! ```

use std::fmt::Display;

use crate::palette::ColorSpec;

/// Marker that switches the active color, e.g. `+color=red`.
pub const DIRECTIVE_PREFIX: &str = "+color=";

/// A contiguous run of text sharing one color spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub color: ColorSpec,
}

impl Segment {
    pub fn new(text: impl Into<String>, color: ColorSpec) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    /// Colorize the segment text.
    pub fn paint(&self) -> String {
        self.color.resolve().apply(&self.text)
    }
}

/// Return the color spec if `arg` is a directive.
pub fn parse_directive(arg: &str) -> Option<&str> {
    arg.strip_prefix(DIRECTIVE_PREFIX).map(str::trim)
}

/// Convert heterogeneous arguments to their display strings.
pub fn display_args(args: &[&dyn Display]) -> Vec<String> {
    args.iter().map(ToString::to_string).collect()
}

/// Partition arguments into ordered segments.
///
/// Plain arguments accumulate into the current segment, joined by `sep`.
/// A directive closes the current segment (unless it has no text) and opens
/// a new one with the directive's color. The first segment uses
/// `default_color`. Returns an empty vector when no text was produced.
pub fn build_segments<S: AsRef<str>>(args: &[S], default_color: &str, sep: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut color = ColorSpec::parse(default_color);
    let mut parts: Vec<&str> = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        match parse_directive(arg) {
            Some(spec) => {
                push_segment(&mut segments, &mut parts, color, sep);
                color = ColorSpec::parse(spec);
            }
            None => parts.push(arg),
        }
    }
    push_segment(&mut segments, &mut parts, color, sep);

    segments
}

fn push_segment(segments: &mut Vec<Segment>, parts: &mut Vec<&str>, color: ColorSpec, sep: &str) {
    let text = parts.join(sep);
    parts.clear();
    if !text.is_empty() {
        segments.push(Segment::new(text, color));
    }
}
