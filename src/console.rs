//! The injectable output/input service.
//!
//! A [`Console`] owns a writer, a line reader, a [`Pause`] used between
//! animation frames, and optionally its own [`WarningSink`]. Call sites take
//! a `&Console` (or use the process-wide one in [`crate::global`]) instead
//! of writing escape codes themselves.
//!
//! # Example
//!
//! ```
//! use btext::{Console, PrintOptions};
//!
//! let console = Console::new(Vec::new(), std::io::empty());
//! let warnings = console
//!     .print(&[&"total:", &42, &"+color=green", &"ok"], &PrintOptions::default())
//!     .unwrap();
//! assert!(warnings.is_empty());
//! ```

use std::fmt::{self, Display};
use std::io::{self, BufRead, BufReader, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::animate::{Pause, ThreadSleep, animate};
use crate::logging::{Warning, WarningSink, log_warning};
use crate::options::{InputOptions, PrintOptions};
use crate::palette::resolve;
use crate::render::{Rendering, plan};
use crate::segment::display_args;

/// Colorizing writer and prompt reader.
pub struct Console {
    out: Mutex<Box<dyn Write + Send>>,
    input: Mutex<Box<dyn BufRead + Send>>,
    pause: Box<dyn Pause>,
    warnings: Option<Arc<dyn WarningSink>>,
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("has_warning_sink", &self.warnings.is_some())
            .finish_non_exhaustive()
    }
}

impl Console {
    /// Create a console over any writer and line reader. Frames sleep the
    /// calling thread and warnings go to the global sink.
    pub fn new(out: impl Write + Send + 'static, input: impl BufRead + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
            input: Mutex::new(Box::new(input)),
            pause: Box::new(ThreadSleep),
            warnings: None,
        }
    }

    /// Console over the process's stdout and stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), BufReader::new(io::stdin()))
    }

    #[must_use]
    pub fn with_pause(mut self, pause: impl Pause + 'static) -> Self {
        self.pause = Box::new(pause);
        self
    }

    /// Send warnings to `sink` instead of the global sink.
    #[must_use]
    pub fn with_warning_sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.warnings = Some(sink);
        self
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Print displayable arguments. See [`Console::print_strs`].
    pub fn print(&self, args: &[&dyn Display], opts: &PrintOptions) -> io::Result<Vec<Warning>> {
        let args = display_args(args);
        self.print_strs(&args, opts)
    }

    /// Print already-stringified arguments.
    ///
    /// `+color=` directives among the arguments switch color. An animated
    /// call blocks until the last frame is written. Warnings are reported
    /// before anything is written, and returned.
    pub fn print_strs<S: AsRef<str>>(
        &self,
        args: &[S],
        opts: &PrintOptions,
    ) -> io::Result<Vec<Warning>> {
        let plan = plan(args, opts);
        for warning in &plan.warnings {
            self.report(warning);
        }

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        match plan.rendering {
            Rendering::Empty => out.write_all(opts.end.as_bytes())?,
            Rendering::Static(text) => {
                out.write_all(format!("{text}{}", opts.end).as_bytes())?;
            }
            Rendering::Animated { segment, animation } => {
                animate(&mut *out, &segment, animation, &opts.end, self.pause.as_ref())?;
            }
        }
        if opts.flush {
            out.flush()?;
        }

        Ok(plan.warnings)
    }

    fn report(&self, warning: &Warning) {
        match &self.warnings {
            Some(sink) => sink.emit(warning),
            None => log_warning(warning),
        }
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Write `prompt` in the requested color, then read one line.
    ///
    /// The line is returned without its terminator and otherwise unchanged.
    /// End of input is an [`io::ErrorKind::UnexpectedEof`] error.
    pub fn input(&self, prompt: &str, opts: &InputOptions) -> io::Result<String> {
        let colored = resolve(&opts.color).apply(prompt);
        {
            let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
            out.write_all(colored.as_bytes())?;
            out.flush()?;
        }

        let mut input = self.input.lock().unwrap_or_else(PoisonError::into_inner);
        read_line(&mut **input)
    }
}

/// Read one line and strip its `\n` or `\r\n`.
pub(crate) fn read_line<R: BufRead + ?Sized>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input while reading line",
        ));
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
