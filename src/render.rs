//! Deciding how one output call is emitted.
//!
//! [`plan`] turns arguments and options into a [`Rendering`] without doing
//! any I/O. Animation needs exactly one segment; with more, the call is
//! rendered statically and a [`Warning`] is attached.

use crate::animate::Animation;
use crate::logging::Warning;
use crate::options::PrintOptions;
use crate::segment::{Segment, build_segments};

/// What an output call writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering {
    /// No text: only the line terminator is written.
    Empty,
    /// Colored text, written in one piece followed by the terminator.
    Static(String),
    /// A reveal animation of a single segment.
    Animated {
        segment: Segment,
        animation: Animation,
    },
}

/// A rendering plus any warnings raised while planning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub rendering: Rendering,
    pub warnings: Vec<Warning>,
}

/// Plan an output call.
///
/// # Example
///
/// ```
/// use btext::{PrintOptions, Rendering, Warning, plan};
///
/// let opts = PrintOptions::new().animated(true);
/// let plan = plan(&["a", "+color=red", "b"], &opts);
/// assert!(matches!(plan.rendering, Rendering::Static(_)));
/// assert_eq!(plan.warnings, vec![Warning::AnimationDowngraded { segments: 2 }]);
/// ```
pub fn plan<S: AsRef<str>>(args: &[S], opts: &PrintOptions) -> Plan {
    let mut segments = build_segments(args, &opts.color, &opts.sep);
    let mut warnings = Vec::new();

    let rendering = if segments.is_empty() {
        Rendering::Empty
    } else if let Some(animation) = opts.animation_request() {
        if segments.len() == 1 {
            Rendering::Animated {
                segment: segments.remove(0),
                animation,
            }
        } else {
            warnings.push(Warning::AnimationDowngraded {
                segments: segments.len(),
            });
            Rendering::Static(render_static(&segments, &opts.sep))
        }
    } else {
        Rendering::Static(render_static(&segments, &opts.sep))
    };

    Plan {
        rendering,
        warnings,
    }
}

/// Concatenate colored segments, joined by an uncolored `sep`.
pub fn render_static(segments: &[Segment], sep: &str) -> String {
    segments
        .iter()
        .map(Segment::paint)
        .collect::<Vec<_>>()
        .join(sep)
}
