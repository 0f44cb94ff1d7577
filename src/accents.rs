// SPDX-License-Identifier: PMPL-1.0-or-later

//! Default accent table for pseudo-localization.
//!
//! Maps ASCII letters to visually similar accented equivalents. The table
//! is a compile-time static; callers that need a custom mapping pass their
//! own map through [`crate::Overrides::accent_map`].

use std::collections::HashMap;

/// Default accented replacements, one entry per ASCII letter.
///
/// Each replacement is a single code point that reads like the source
/// letter, so pseudo-localized text stays legible while being obviously
/// not the source language.
pub const DEFAULT_ACCENT_MAP: &[(char, char)] = &[
    ('a', 'à'),
    ('b', 'ƀ'),
    ('c', 'ç'),
    ('d', 'đ'),
    ('e', 'ë'),
    ('f', 'ƒ'),
    ('g', 'ğ'),
    ('h', 'ĥ'),
    ('i', 'ï'),
    ('j', 'ĵ'),
    ('k', 'ķ'),
    ('l', 'ļ'),
    ('m', 'ɱ'),
    ('n', 'ñ'),
    ('o', 'õ'),
    ('p', 'ƥ'),
    ('q', 'ɋ'),
    ('r', 'ř'),
    ('s', 'š'),
    ('t', 'ţ'),
    ('u', 'ü'),
    ('v', 'ṽ'),
    ('w', 'ŵ'),
    ('x', 'ẋ'),
    ('y', 'ý'),
    ('z', 'ž'),
    ('A', 'À'),
    ('B', 'ß'),
    ('C', 'Ç'),
    ('D', 'Đ'),
    ('E', 'Ë'),
    ('F', 'Ƒ'),
    ('G', 'Ğ'),
    ('H', 'Ħ'),
    ('I', 'Ï'),
    ('J', 'Ĵ'),
    ('K', 'Ķ'),
    ('L', 'Ļ'),
    ('M', 'Ṁ'),
    ('N', 'Ñ'),
    ('O', 'Õ'),
    ('P', 'Ƥ'),
    ('Q', 'Ɋ'),
    ('R', 'Ř'),
    ('S', 'Š'),
    ('T', 'Ť'),
    ('U', 'Ü'),
    ('V', 'Ṽ'),
    ('W', 'Ŵ'),
    ('X', 'Ẍ'),
    ('Y', 'Ŷ'),
    ('Z', 'Ž'),
];

/// Build an owned lookup map from the default table.
pub fn default_accent_map() -> HashMap<char, char> {
    DEFAULT_ACCENT_MAP.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_ascii_letter() {
        let map = default_accent_map();
        for c in ('a'..='z').chain('A'..='Z') {
            assert!(map.contains_key(&c), "missing accent for {:?}", c);
        }
        assert_eq!(map.len(), 52);
    }

    #[test]
    fn replacements_are_not_identity() {
        for &(src, dst) in DEFAULT_ACCENT_MAP {
            assert_ne!(src, dst, "accent for {:?} maps to itself", src);
        }
    }
}
