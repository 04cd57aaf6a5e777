//! Process-wide default console.
//!
//! Code that cannot be handed a [`Console`] calls [`print`] and [`input`]
//! here. While a console is installed they go through it; after
//! [`restore`] (or before any [`install`]) they behave like the plain,
//! uncolored routines: arguments joined by `sep` and followed by `end`,
//! directives printed as ordinary text, no animation.
//!
//! # Usage
//!
//! ```no_run
//! use btext::{PrintOptions, global};
//!
//! global::install_stdio();
//! global::print(&[&"ready"], &PrintOptions::new().color("green")).unwrap();
//! global::restore();
//! ```

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::{Arc, RwLock};

use crate::console::{Console, read_line};
use crate::logging::Warning;
use crate::options::{InputOptions, PrintOptions};
use crate::segment::display_args;

static CONSOLE: RwLock<Option<Arc<Console>>> = RwLock::new(None);

/// Route [`print`] and [`input`] through `console`. Replaces any previous one.
pub fn install(console: Arc<Console>) {
    if let Ok(mut guard) = CONSOLE.write() {
        *guard = Some(console);
    }
}

/// Install a console over stdout and stdin.
pub fn install_stdio() {
    install(Arc::new(Console::stdio()));
}

/// Go back to the plain routines. Safe to call more than once.
pub fn restore() {
    if let Ok(mut guard) = CONSOLE.write() {
        *guard = None;
    }
}

pub fn is_installed() -> bool {
    installed().is_some()
}

/// The installed console, if any.
pub fn installed() -> Option<Arc<Console>> {
    CONSOLE.read().ok().and_then(|guard| guard.clone())
}

/// Print through the installed console, or plainly to stdout.
pub fn print(args: &[&dyn Display], opts: &PrintOptions) -> io::Result<Vec<Warning>> {
    // The lock is released before printing so nested calls work.
    match installed() {
        Some(console) => console.print(args, opts),
        None => {
            let mut out = io::stdout().lock();
            write_plain(&mut out, &display_args(args), opts)?;
            Ok(Vec::new())
        }
    }
}

/// Prompt and read a line through the installed console, or plainly.
pub fn input(prompt: &str, opts: &InputOptions) -> io::Result<String> {
    match installed() {
        Some(console) => console.input(prompt, opts),
        None => {
            {
                let mut out = io::stdout().lock();
                out.write_all(prompt.as_bytes())?;
                out.flush()?;
            }
            read_line(&mut io::stdin().lock())
        }
    }
}

fn write_plain<W: Write + ?Sized>(out: &mut W, args: &[String], opts: &PrintOptions) -> io::Result<()> {
    out.write_all(format!("{}{}", args.join(opts.sep.as_str()), opts.end).as_bytes())?;
    if opts.flush {
        out.flush()?;
    }
    Ok(())
}
