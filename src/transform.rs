// SPDX-License-Identifier: PMPL-1.0-or-later

//! Literal-text transformation: accent substitution and length-expansion
//! padding.
//!
//! Padding simulates the growth of translated text. It is inserted before
//! any trailing run of whitespace/punctuation so sentence-final marks stay
//! where a reader expects them: `"Hello!"` becomes `"Ĥëļļõ‹pad›!"`, not
//! `"Ĥëļļõ!‹pad›"`.

use crate::options::Options;

/// Characters that a pad must not be inserted after when they end a
/// segment. Unicode whitespace is treated the same way.
const TRAILING_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '\'', '"', '(', ')', '[', ']', '{', '}', '<', '>', '-',
];

fn is_trailing(c: char) -> bool {
    c.is_whitespace() || TRAILING_PUNCTUATION.contains(&c)
}

/// Pseudo-localize one literal segment: substitute accented characters,
/// then insert the expansion pad.
pub fn transform_literal(segment: &str, options: &Options) -> String {
    let substituted: String = segment
        .chars()
        .map(|c| options.accent_map.get(&c).copied().unwrap_or(c))
        .collect();

    // ceil(chars * expansion / 100); an empty segment gets an empty pad.
    let char_len = substituted.chars().count();
    let pad_len = (char_len * options.expansion as usize).div_ceil(100);
    let pad: String = std::iter::repeat(options.expansion_char)
        .take(pad_len)
        .collect();

    let ends_ascii_alphanumeric = substituted
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric());

    if substituted.is_empty() || ends_ascii_alphanumeric {
        return substituted + &pad;
    }

    // Split off the maximal trailing run of whitespace/punctuation and
    // insert the pad before it. The run may be empty (e.g. a segment
    // ending in an accented letter), in which case the pad lands at the
    // end anyway.
    let boundary = substituted
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_trailing(c))
        .map(|(idx, c)| idx + c.len_utf8())
        .unwrap_or(0);

    let (body, trailing) = substituted.split_at(boundary);
    format!("{body}{pad}{trailing}")
}
