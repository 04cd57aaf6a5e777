//! Diagnostic channel for non-fatal warnings.
//!
//! Nothing in btext fails because of bad input: unknown colors and bad delays
//! fall back to defaults, and unsupported animation requests are printed
//! statically. The last case is reported as a [`Warning`]. Warnings are
//! returned to the caller and also routed to a [`WarningSink`], either the
//! one injected into a [`crate::Console`] or the global sink set here.
//!
//! # Usage
//!
//! ```no_run
//! use btext::{StderrSink, set_warning_sink};
//! use std::sync::Arc;
//!
//! // Set up the sink at application startup
//! set_warning_sink(Arc::new(StderrSink));
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Flag to disable warning output (opt-out). Defaults to false (enabled).
static LOGGING_DISABLED: AtomicBool = AtomicBool::new(false);

/// Disable warning output. Call this in tests to keep stderr quiet.
pub fn disable_logging() {
    LOGGING_DISABLED.store(true, Ordering::SeqCst);
}

/// Re-enable warning output after it was disabled.
pub fn enable_logging() {
    LOGGING_DISABLED.store(false, Ordering::SeqCst);
}

/// Returns true unless explicitly disabled via `disable_logging()`.
pub fn is_logging_enabled() -> bool {
    !LOGGING_DISABLED.load(Ordering::SeqCst)
}

// ============================================================================
// Warnings
// ============================================================================

/// A non-fatal diagnostic produced while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Animation was requested for text with several color segments.
    AnimationDowngraded { segments: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnimationDowngraded { segments } => write!(
                f,
                "animation supports a single color; got {segments} segments, printing without animation"
            ),
        }
    }
}

// ============================================================================
// Sinks
// ============================================================================

/// Receiver for warnings.
pub trait WarningSink: Send + Sync {
    fn emit(&self, warning: &Warning);
}

/// Writes warnings to stderr as `warning: <message>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl WarningSink for StderrSink {
    fn emit(&self, warning: &Warning) {
        eprintln!("warning: {warning}");
    }
}

static WARNING_SINK: RwLock<Option<Arc<dyn WarningSink>>> = RwLock::new(None);

/// Set the global warning sink. Replaces any previous sink.
pub fn set_warning_sink(sink: Arc<dyn WarningSink>) {
    if let Ok(mut guard) = WARNING_SINK.write() {
        *guard = Some(sink);
    }
}

/// Get the current global warning sink.
pub fn get_warning_sink() -> Option<Arc<dyn WarningSink>> {
    WARNING_SINK.read().ok().and_then(|guard| guard.clone())
}

/// Clear the global warning sink.
pub fn reset_warning_sink() {
    if let Ok(mut guard) = WARNING_SINK.write() {
        *guard = None;
    }
}

/// Route a warning to the global sink. No-op without a sink.
pub fn log_warning(warning: &Warning) {
    if !is_logging_enabled() {
        return;
    }
    if let Some(sink) = get_warning_sink() {
        sink.emit(warning);
    }
}
