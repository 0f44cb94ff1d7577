// SPDX-License-Identifier: PMPL-1.0-or-later

//! The string composer: one pseudo-localized string out of one source
//! string.
//!
//! The transform is one-way; the output is not meant to be parsed back.

use crate::error::Result;
use crate::options::Options;
use crate::placeholder::{render_placeholder, PlaceholderPattern, Segment};
use crate::transform::transform_literal;

/// Right-to-Left Override, prepended in RTL mode.
const RLO: char = '\u{202E}';
/// Pop Directional Formatting, appended in RTL mode.
const PDF: char = '\u{202C}';

/// Pseudo-localize a single string.
///
/// Splits the input on the configured placeholder format, transforms the
/// literal parts, renders the placeholder parts, wraps the result in the
/// start/end markers, and in RTL mode additionally wraps it in bidi
/// control characters.
///
/// The only possible error is an invalid placeholder format; options built
/// through [`Options::with_overrides`] have already been validated and
/// cannot fail here.
pub fn pseudo_localize(input: &str, options: &Options) -> Result<String> {
    let pattern = PlaceholderPattern::new(&options.placeholder_format)?;
    Ok(localize_with(&pattern, input, options))
}

/// Composer body, reusable with a pre-built pattern (the tree processor
/// compiles the pattern once and calls this per leaf).
pub(crate) fn localize_with(
    pattern: &PlaceholderPattern,
    input: &str,
    options: &Options,
) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    out.push_str(&options.start_marker);

    for segment in pattern.segments(input) {
        match segment {
            Segment::Literal(text) => out.push_str(&transform_literal(text, options)),
            Segment::Placeholder(content) => {
                out.push_str(&render_placeholder(pattern, content, options))
            }
        }
    }

    out.push_str(&options.end_marker);

    if options.rtl {
        format!("{RLO}{out}{PDF}")
    } else {
        out
    }
}
