//! Shared test helpers for btext tests.
//!
//! This module provides common utilities used across test files to reduce
//! duplication and ensure consistent test behavior.

// Allow dead code since not all test files use all helpers
#![allow(dead_code)]

use btext::{Console, Pause, Warning, WarningSink};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// =============================================================================
// ANSI Stripping
// =============================================================================

/// Strip ANSI escape codes for content verification in tests.
///
/// Carriage returns are dropped too, so an animation frame reduces to the
/// characters it makes visible.
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip the escape sequence
            if chars.peek() == Some(&'[') {
                chars.next(); // consume '['
                // Skip until we hit a letter (the terminator)
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else if c != '\r' {
            result.push(c);
        }
    }

    result
}

// =============================================================================
// Recording Writer
// =============================================================================

/// Writer that records each `write` call as a separate entry.
///
/// btext writes every animation frame with one `write_all`, so each entry
/// is one frame (or one static line).
#[derive(Clone, Default)]
pub struct FrameRecorder {
    pub writes: Arc<Mutex<Vec<String>>>,
}

impl FrameRecorder {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn contents(&self) -> String {
        self.writes().concat()
    }
}

impl Write for FrameRecorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes
            .lock()
            .unwrap()
            .push(String::from_utf8_lossy(buf).into_owned());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// Recording Pause
// =============================================================================

/// Pause that records requested delays instead of sleeping.
#[derive(Clone, Default)]
pub struct RecordingPause {
    pub pauses: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPause {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

impl Pause for RecordingPause {
    fn pause(&self, delay: Duration) {
        self.pauses.lock().unwrap().push(delay);
    }
}

// =============================================================================
// Test Capture Sink
// =============================================================================

/// A warning sink that captures everything it receives.
///
/// # Example
///
/// ```ignore
/// let (sink, captured) = CaptureSink::new();
/// let console = console.with_warning_sink(Arc::new(sink));
/// ```
pub struct CaptureSink {
    pub captured: Arc<Mutex<Vec<Warning>>>,
}

impl CaptureSink {
    /// Create a new capture sink and return both the sink and a handle
    /// to the captured warnings.
    pub fn new() -> (Self, Arc<Mutex<Vec<Warning>>>) {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Self {
            captured: captured.clone(),
        };
        (sink, captured)
    }
}

impl WarningSink for CaptureSink {
    fn emit(&self, warning: &Warning) {
        self.captured.lock().unwrap().push(warning.clone());
    }
}

// =============================================================================
// Console Fixture
// =============================================================================

/// A console over a [`FrameRecorder`] and [`RecordingPause`], reading `input`.
pub fn recording_console(input: &str) -> (Console, FrameRecorder, RecordingPause) {
    let recorder = FrameRecorder::default();
    let pause = RecordingPause::default();
    let console = Console::new(recorder.clone(), io::Cursor::new(input.to_string()))
        .with_pause(pause.clone());
    (console, recorder, pause)
}

/// RAII guard that re-enables logging and clears the global sink on drop.
pub struct LoggingGuard;

impl Drop for LoggingGuard {
    fn drop(&mut self) {
        btext::enable_logging();
        btext::logging::reset_warning_sink();
    }
}
