// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration for the pseudo-localization transform.
//!
//! [`Options`] is the full, immutable configuration every transform runs
//! against. Callers normally start from [`Options::default`] and apply a
//! partial [`Overrides`] on top via [`Options::with_overrides`], which also
//! validates the placeholder format once up front. A constructed `Options`
//! is never mutated, so sharing one across threads is safe.

use crate::accents::default_accent_map;
use crate::error::Result;
use crate::placeholder::PlaceholderPattern;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default text expansion percentage.
pub const DEFAULT_EXPANSION: u32 = 40;
/// Default placeholder format (i18next style).
pub const DEFAULT_PLACEHOLDER_FORMAT: &str = "{{key}}";
/// Default start marker wrapped around every pseudo-localized string.
pub const DEFAULT_START_MARKER: &str = "⟦";
/// Default end marker.
pub const DEFAULT_END_MARKER: &str = "⟧";
/// Default padding fill character.
pub const DEFAULT_EXPANSION_CHAR: char = 'ē';

/// Full configuration for a pseudo-localization run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Text expansion percentage (default: 40).
    pub expansion: u32,
    /// Placeholder format: `{{key}}`, `{key}`, `%key%`, etc. Must contain
    /// the literal substring `key`.
    pub placeholder_format: String,
    /// Replace placeholders with `<UPPERCASED_CONTENT>` instead of keeping
    /// the original format.
    pub replace_placeholders: bool,
    /// Marker prepended to every output string.
    pub start_marker: String,
    /// Marker appended to every output string.
    pub end_marker: String,
    /// Enable RTL (Right-to-Left) simulation via bidi control characters.
    pub rtl: bool,
    /// Reverse placeholder content character-wise in RTL mode.
    pub reverse_placeholders: bool,
    /// Character substitution table applied to literal text.
    pub accent_map: HashMap<char, char>,
    /// Padding fill character.
    pub expansion_char: char,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            expansion: DEFAULT_EXPANSION,
            placeholder_format: DEFAULT_PLACEHOLDER_FORMAT.to_string(),
            replace_placeholders: false,
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
            rtl: false,
            reverse_placeholders: true,
            accent_map: default_accent_map(),
            expansion_char: DEFAULT_EXPANSION_CHAR,
        }
    }
}

impl Options {
    /// Merge partial overrides over the documented defaults.
    ///
    /// Validates the resulting placeholder format once, so later transform
    /// calls cannot hit a configuration error.
    pub fn with_overrides(overrides: Overrides) -> Result<Options> {
        let mut options = Options::default();

        if let Some(expansion) = overrides.expansion {
            options.expansion = expansion;
        }
        if let Some(format) = overrides.placeholder_format {
            options.placeholder_format = format;
        }
        if let Some(replace) = overrides.replace_placeholders {
            options.replace_placeholders = replace;
        }
        if let Some(marker) = overrides.start_marker {
            options.start_marker = marker;
        }
        if let Some(marker) = overrides.end_marker {
            options.end_marker = marker;
        }
        if let Some(rtl) = overrides.rtl {
            options.rtl = rtl;
        }
        if let Some(reverse) = overrides.reverse_placeholders {
            options.reverse_placeholders = reverse;
        }
        if let Some(map) = overrides.accent_map {
            options.accent_map = map;
        }
        if let Some(fill) = overrides.expansion_char {
            options.expansion_char = fill;
        }

        PlaceholderPattern::new(&options.placeholder_format)?;
        Ok(options)
    }
}

/// Partial configuration: every field optional, unset fields fall back to
/// the defaults documented on [`Options`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Overrides {
    pub expansion: Option<u32>,
    pub placeholder_format: Option<String>,
    pub replace_placeholders: Option<bool>,
    pub start_marker: Option<String>,
    pub end_marker: Option<String>,
    pub rtl: Option<bool>,
    pub reverse_placeholders: Option<bool>,
    pub accent_map: Option<HashMap<char, char>>,
    pub expansion_char: Option<char>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_overrides_yield_defaults() {
        let options = Options::with_overrides(Overrides::default()).unwrap();
        assert_eq!(options.expansion, 40);
        assert_eq!(options.placeholder_format, "{{key}}");
        assert!(!options.replace_placeholders);
        assert_eq!(options.start_marker, "⟦");
        assert_eq!(options.end_marker, "⟧");
        assert!(!options.rtl);
        assert!(options.reverse_placeholders);
        assert_eq!(options.expansion_char, 'ē');
    }

    #[test]
    fn overrides_win_over_defaults() {
        let options = Options::with_overrides(Overrides {
            expansion: Some(100),
            placeholder_format: Some("%key%".to_string()),
            rtl: Some(true),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(options.expansion, 100);
        assert_eq!(options.placeholder_format, "%key%");
        assert!(options.rtl);
        // untouched fields keep their defaults
        assert_eq!(options.start_marker, "⟦");
    }

    #[test]
    fn format_without_key_is_rejected_at_construction() {
        let err = Options::with_overrides(Overrides {
            placeholder_format: Some("[[value]]".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn overrides_deserialize_from_camel_case_json() {
        let overrides: Overrides = serde_json::from_str(
            r#"{"expansion": 60, "replacePlaceholders": true, "expansionChar": "x"}"#,
        )
        .unwrap();
        assert_eq!(overrides.expansion, Some(60));
        assert_eq!(overrides.replace_placeholders, Some(true));
        assert_eq!(overrides.expansion_char, Some('x'));
        assert!(overrides.rtl.is_none());
    }
}
