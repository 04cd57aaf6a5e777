//! Character-by-character reveal animation.
//!
//! Each frame returns the cursor to the start of the line, erases it, and
//! writes the colored visible part of the text. Frames are written with a
//! single `write_all` each so a frame never interleaves with other output
//! on the same writer. The caller is blocked for `len * delay`.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use serde_json::Value;

use crate::palette::ColorFn;
use crate::segment::Segment;

/// Delay used when none is given or it cannot be parsed.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Carriage return followed by erase-entire-line.
pub const LINE_RESET: &str = "\r\x1b[2K";

// ============================================================================
// Request
// ============================================================================

/// Which end of the text appears first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Grow from the left edge: `h`, `hi`.
    #[default]
    Left,
    /// Grow from the right edge, right-aligned: ` i`, `hi`.
    Right,
}

impl Direction {
    /// Parse `"left"` or `"right"` (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Direction and per-frame delay of a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub direction: Direction,
    pub delay: Duration,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            direction: Direction::Left,
            delay: DEFAULT_DELAY,
        }
    }
}

// ============================================================================
// Delay Parsing
// ============================================================================

/// Parse a delay option: a number of seconds, or a string ending in `ms` or `s`.
///
/// Anything else (including negative values) yields [`DEFAULT_DELAY`].
///
/// # Example
///
/// ```
/// use btext::parse_delay;
/// use serde_json::json;
/// use std::time::Duration;
///
/// assert_eq!(parse_delay(&json!("2s")), Duration::from_secs(2));
/// assert_eq!(parse_delay(&json!(3)), Duration::from_secs(3));
/// assert_eq!(parse_delay(&json!("garbage")), Duration::from_millis(100));
/// ```
pub fn parse_delay(value: &Value) -> Duration {
    let parsed = match value {
        Value::Number(n) => n.as_f64().and_then(seconds),
        Value::String(s) => parse_delay_str(s),
        _ => None,
    };
    parsed.unwrap_or(DEFAULT_DELAY)
}

/// String form of [`parse_delay`]. Returns `None` when unparseable.
pub fn parse_delay_str(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();
    if let Some(ms) = s.strip_suffix("ms") {
        return ms.trim().parse::<f64>().ok().and_then(|v| seconds(v / 1000.0));
    }
    let secs = s.strip_suffix('s').unwrap_or(&s);
    secs.trim().parse::<f64>().ok().and_then(seconds)
}

fn seconds(value: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(value).ok()
}

// ============================================================================
// Pausing
// ============================================================================

/// Blocks between frames. Injected so tests can observe pauses without sleeping.
pub trait Pause: Send + Sync {
    fn pause(&self, delay: Duration);
}

/// Sleeps the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&self, delay: Duration) {
        thread::sleep(delay);
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Build frame `i` (1-based) of a reveal over `chars`.
///
/// Random color specs are re-applied per frame, so a character may change
/// color between frames.
pub fn frame(chars: &[char], i: usize, color: &ColorFn, direction: Direction) -> String {
    let len = chars.len();
    let i = i.min(len);
    match direction {
        Direction::Left => {
            let visible: String = chars[..i].iter().collect();
            format!("{LINE_RESET}{}", color.apply(&visible))
        }
        Direction::Right => {
            let visible: String = chars[len - i..].iter().collect();
            format!("{LINE_RESET}{}{}", " ".repeat(len - i), color.apply(&visible))
        }
    }
}

/// Play a reveal of `segment` on `out`, then write `end`.
pub fn animate<W: Write + ?Sized>(
    out: &mut W,
    segment: &Segment,
    animation: Animation,
    end: &str,
    pause: &dyn Pause,
) -> io::Result<()> {
    let color = segment.color.resolve();
    let chars: Vec<char> = segment.text.chars().collect();

    for i in 1..=chars.len() {
        let frame = frame(&chars, i, &color, animation.direction);
        out.write_all(frame.as_bytes())?;
        out.flush()?;
        pause.pause(animation.delay);
    }

    out.write_all(end.as_bytes())?;
    out.flush()
}
