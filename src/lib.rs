//! Colored and animated terminal text for print/input style call sites.
//!
//! btext lets application code ask for colored or animated output without
//! handling escape codes. It handles:
//!
//! - Color specs: palette names, `random`, `random_<names>`, and comma lists
//! - Inline `+color=` directives that switch color mid-call
//! - Character-by-character reveal animations
//! - Colored input prompts
//!
//! Bad input never fails a call: unknown colors become white, bad delays
//! become 0.1s, and an animation over several colors is printed statically
//! with a [`Warning`].
//!
//! # Modules
//!
//! - [`palette`] - Palette and color-spec resolution
//! - [`segment`] - Directive parsing and segment building
//! - [`animate`] - Delay parsing and the reveal renderer
//! - [`render`] - Planning one output call
//! - [`options`] - Per-call options
//! - [`console`] - The injectable output/input service
//! - [`global`] - Process-wide default console with install/restore
//! - [`logging`] - Warning sink infrastructure

pub mod animate;
pub mod console;
pub mod global;
pub mod logging;
pub mod options;
pub mod palette;
pub mod render;
pub mod segment;

// Re-export commonly used types
pub use animate::{Animation, DEFAULT_DELAY, Direction, Pause, ThreadSleep, animate, parse_delay};
pub use console::Console;
pub use logging::{
    StderrSink, Warning, WarningSink, disable_logging, enable_logging, is_logging_enabled,
    log_warning, set_warning_sink,
};
pub use options::{InputOptions, PrintOptions};
pub use palette::{ColorFn, ColorSpec, DEFAULT_COLOR, RESET, palette, resolve};
pub use render::{Plan, Rendering, plan, render_static};
pub use segment::{DIRECTIVE_PREFIX, Segment, build_segments};
