// SPDX-License-Identifier: PMPL-1.0-or-later

//! Placeholder matching and rendering.
//!
//! A placeholder format is a template containing the literal substring
//! `key`, e.g. `{{key}}`, `{key}`, `%key%`, `${key}`. Splitting an input
//! string on that format is a two-phase literal scan: find the prefix,
//! then the nearest following suffix, take the shortest run between them
//! as placeholder content. No pattern engine is involved, so characters
//! that would be metacharacters in a regex (`$`, `{`, `%`, ...) need no
//! escaping.

use crate::error::{Error, Result};
use crate::options::Options;

/// A classified span of an input string.
///
/// Concatenating literals verbatim and placeholders re-wrapped in
/// `prefix + content + suffix` reconstructs the input exactly; no span is
/// ever dropped or merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any placeholder.
    Literal(&'a str),
    /// The content between a placeholder's prefix and suffix.
    Placeholder(&'a str),
}

/// Compiled placeholder format: the literal text before and after `key`.
#[derive(Debug, Clone)]
pub struct PlaceholderPattern {
    format: String,
    prefix: String,
    suffix: String,
}

impl PlaceholderPattern {
    /// Split a format template at its `key` marker.
    ///
    /// Fails with [`Error::Configuration`] when the marker is absent.
    pub fn new(format: &str) -> Result<PlaceholderPattern> {
        let Some(idx) = format.find("key") else {
            return Err(Error::Configuration {
                format: format.to_string(),
            });
        };
        Ok(PlaceholderPattern {
            format: format.to_string(),
            prefix: format[..idx].to_string(),
            suffix: format[idx + "key".len()..].to_string(),
        })
    }

    /// Split an input string into the ordered interleaving of literal text
    /// and placeholder content.
    ///
    /// Matches are leftmost-earliest and non-overlapping; placeholder
    /// content is the shortest run between a prefix and the nearest
    /// following suffix. Empty input yields a single empty literal. A
    /// zero-width pattern (format exactly `key`) cannot make progress, so
    /// the whole input is returned as one literal.
    pub fn segments<'a>(&self, input: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();

        if self.prefix.is_empty() && self.suffix.is_empty() {
            segments.push(Segment::Literal(input));
            return segments;
        }

        let mut cursor = 0;
        while let Some(rel) = input[cursor..].find(&self.prefix) {
            let start = cursor + rel;
            let content_start = start + self.prefix.len();
            let content_end = if self.suffix.is_empty() {
                content_start
            } else {
                match input[content_start..].find(&self.suffix) {
                    Some(rel) => content_start + rel,
                    // No suffix anywhere after this prefix, so no suffix
                    // after any later prefix either.
                    None => break,
                }
            };
            segments.push(Segment::Literal(&input[cursor..start]));
            segments.push(Segment::Placeholder(&input[content_start..content_end]));
            cursor = content_end + self.suffix.len();
        }
        segments.push(Segment::Literal(&input[cursor..]));

        segments
    }

    /// Re-wrap placeholder content in the original format, substituting
    /// only the first `key` occurrence (the same split point `new` used).
    pub fn render(&self, content: &str) -> String {
        self.format.replacen("key", content, 1)
    }
}

/// Render a placeholder's visible form according to the configuration.
pub fn render_placeholder(
    pattern: &PlaceholderPattern,
    content: &str,
    options: &Options,
) -> String {
    let content: String = if options.rtl && options.reverse_placeholders {
        content.chars().rev().collect()
    } else {
        content.to_string()
    };

    if options.replace_placeholders {
        format!("<{}>", content.to_uppercase())
    } else {
        pattern.render(&content)
    }
}
