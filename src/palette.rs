//! Color resolution: palette lookup and color-spec tokens.
//!
//! A color spec is a short token supplied by the caller, either as the
//! `color` option or through an inline `+color=` directive. It resolves to
//! a [`ColorFn`] that wraps text in escape sequences.
//!
//! # Spec tokens
//!
//! Tokens are trimmed and matched case-insensitively, in this order:
//!
//! - `random_<name>_<name>...` - per-character random choice among the listed names
//! - `random` - per-character random choice among the whole palette
//! - `<name>,<name>,...` - text split into contiguous runs, one per name
//! - `<name>` - a single palette color
//!
//! Resolution never fails. Unknown names become [`DEFAULT_COLOR`].

use std::sync::LazyLock;

use colored::Color;
use rand::Rng;

// ============================================================================
// Constants
// ============================================================================

/// Escape sequence that ends every colored run.
pub const RESET: &str = "\x1b[0m";

/// Color used when a name is not in the palette.
pub const DEFAULT_COLOR: &str = "white";

const RANDOM: &str = "random";
const RANDOM_PREFIX: &str = "random_";
const RANDOM_SEPARATOR: char = '_';
const LIST_SEPARATOR: char = ',';

// ============================================================================
// Palette
// ============================================================================

/// One named palette color and its escape prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: Color,
    pub prefix: String,
}

impl PaletteEntry {
    fn new(name: &'static str, color: Color) -> Self {
        Self {
            name,
            color,
            prefix: format!("\x1b[{}m", color.to_fg_str()),
        }
    }

    /// Wrap `text` as `prefix + text + reset`.
    pub fn paint(&self, text: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + text.len() + RESET.len());
        self.paint_into(&mut out, text);
        out
    }

    fn paint_into(&self, out: &mut String, text: &str) {
        out.push_str(&self.prefix);
        out.push_str(text);
        out.push_str(RESET);
    }
}

/// Immutable mapping from color name to escape prefix.
#[derive(Debug)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

static PALETTE: LazyLock<Palette> = LazyLock::new(|| Palette {
    entries: vec![
        PaletteEntry::new("black", Color::Black),
        PaletteEntry::new("red", Color::Red),
        PaletteEntry::new("green", Color::Green),
        PaletteEntry::new("yellow", Color::Yellow),
        PaletteEntry::new("blue", Color::Blue),
        PaletteEntry::new("magenta", Color::Magenta),
        PaletteEntry::new("cyan", Color::Cyan),
        PaletteEntry::new("white", Color::White),
    ],
});

/// The process-wide palette.
pub fn palette() -> &'static Palette {
    &PALETTE
}

impl Palette {
    /// Look up a color by name. Case-insensitive, surrounding whitespace ignored.
    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// The entry used for unknown names.
    pub fn default_entry(&self) -> &PaletteEntry {
        self.get(DEFAULT_COLOR).unwrap_or(&self.entries[self.entries.len() - 1])
    }

    /// Look up a color by name, substituting [`DEFAULT_COLOR`] for unknown names.
    pub fn get_or_default(&self, name: &str) -> &PaletteEntry {
        self.get(name).unwrap_or_else(|| self.default_entry())
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }
}

// ============================================================================
// Color Specs
// ============================================================================

/// A parsed color-spec token.
///
/// Names are stored lower-cased and trimmed but are not validated here;
/// validation happens in [`ColorSpec::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    Named(String),
    RandomAny,
    RandomSubset(Vec<String>),
    CommaList(Vec<String>),
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self::named(DEFAULT_COLOR)
    }
}

impl From<&str> for ColorSpec {
    fn from(spec: &str) -> Self {
        Self::parse(spec)
    }
}

impl ColorSpec {
    /// Parse a spec token. Never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use btext::ColorSpec;
    ///
    /// assert_eq!(ColorSpec::parse(" RED "), ColorSpec::named("red"));
    /// assert_eq!(ColorSpec::parse("Random"), ColorSpec::RandomAny);
    /// assert_eq!(
    ///     ColorSpec::parse("random_red_blue"),
    ///     ColorSpec::RandomSubset(vec!["red".into(), "blue".into()])
    /// );
    /// ```
    pub fn parse(spec: &str) -> Self {
        let spec = spec.trim().to_lowercase();

        if let Some(rest) = spec.strip_prefix(RANDOM_PREFIX) {
            let names = rest
                .split(RANDOM_SEPARATOR)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
            return Self::RandomSubset(names);
        }
        if spec == RANDOM {
            return Self::RandomAny;
        }
        if spec.contains(LIST_SEPARATOR) {
            let names = spec
                .split(LIST_SEPARATOR)
                .map(|name| name.trim().to_string())
                .collect();
            return Self::CommaList(names);
        }
        Self::Named(spec)
    }

    pub fn named(name: &str) -> Self {
        Self::Named(name.trim().to_lowercase())
    }

    /// Resolve against the palette.
    pub fn resolve(&self) -> ColorFn {
        let palette = palette();
        let kind = match self {
            Self::Named(name) => Kind::Fixed(palette.get_or_default(name)),
            Self::RandomAny => Kind::Random(palette.entries().iter().collect()),
            Self::RandomSubset(names) => {
                let allowed: Vec<_> = names.iter().filter_map(|n| palette.get(n)).collect();
                if allowed.is_empty() {
                    Kind::Random(palette.entries().iter().collect())
                } else {
                    Kind::Random(allowed)
                }
            }
            Self::CommaList(names) => {
                Kind::Runs(names.iter().map(|n| palette.get_or_default(n)).collect())
            }
        };
        ColorFn { kind }
    }
}

// ============================================================================
// Color Functions
// ============================================================================

/// Resolved color spec: turns plain text into colored text.
#[derive(Debug, Clone)]
pub struct ColorFn {
    kind: Kind,
}

#[derive(Debug, Clone)]
enum Kind {
    Fixed(&'static PaletteEntry),
    Random(Vec<&'static PaletteEntry>),
    Runs(Vec<&'static PaletteEntry>),
}

/// Resolve a spec token to a [`ColorFn`].
///
/// # Example
///
/// ```
/// use btext::resolve;
///
/// assert_eq!(resolve("red").apply("hi"), "\x1b[31mhi\x1b[0m");
/// // Unknown names fall back to white.
/// assert_eq!(resolve("purple").apply("hi"), resolve("white").apply("hi"));
/// ```
pub fn resolve(spec: &str) -> ColorFn {
    ColorSpec::parse(spec).resolve()
}

impl ColorFn {
    /// True when output differs between calls on the same text.
    pub fn is_random(&self) -> bool {
        matches!(self.kind, Kind::Random(_))
    }

    /// Colorize `text` using the thread-local generator for random specs.
    pub fn apply(&self, text: &str) -> String {
        self.apply_with(text, &mut rand::rng())
    }

    /// Colorize `text`, drawing random colors from `rng`.
    pub fn apply_with<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        match &self.kind {
            Kind::Fixed(entry) => entry.paint(text),
            Kind::Random(allowed) => {
                let mut out = String::new();
                let mut buf = [0u8; 4];
                for ch in text.chars() {
                    let entry = allowed[rng.random_range(0..allowed.len())];
                    entry.paint_into(&mut out, ch.encode_utf8(&mut buf));
                }
                out
            }
            Kind::Runs(entries) => paint_runs(entries, text),
        }
    }
}

/// Split `text` into one contiguous run per entry. The first `len % k` runs
/// take one extra character; empty runs emit nothing.
fn paint_runs(entries: &[&PaletteEntry], text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let count = entries.len();
    if count == 0 {
        return palette().default_entry().paint(text);
    }

    let base = chars.len() / count;
    let extra = chars.len() % count;
    let mut out = String::new();
    let mut start = 0;
    for (i, entry) in entries.iter().enumerate() {
        let size = base + usize::from(i < extra);
        if size == 0 {
            continue;
        }
        let run: String = chars[start..start + size].iter().collect();
        entry.paint_into(&mut out, &run);
        start += size;
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
