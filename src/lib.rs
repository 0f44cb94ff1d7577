// SPDX-License-Identifier: PMPL-1.0-or-later

//! pseudo-l10n — Pseudo-Localization Generator for i18n Testing.
//!
//! Transforms translation-resource data (nested string/array/object trees)
//! into a pseudo-localized variant used to visually stress-test
//! internationalization readiness: untranslated/hardcoded text, truncation
//! from text expansion, and RTL-layout bugs show up without requiring real
//! translations.
//!
//! TRANSFORM STAGES:
//! 1. **Placeholder matching**: split input on a configurable placeholder
//!    format (`{{key}}`, `{key}`, `%key%`, ...) so template slots survive
//!    the transform intact.
//! 2. **Text transformation**: accented character substitution plus
//!    length-expansion padding, inserted before trailing punctuation.
//! 3. **Wrapping**: visual markers `⟦…⟧` around every string, with
//!    optional bidi control characters (U+202E/U+202C) for RTL simulation.
//!
//! The transform is pure and stateless given an [`Options`]; concurrent
//! use over independent strings or trees needs no synchronization.

pub mod accents;
pub mod error;
pub mod generate;
pub mod localize;
pub mod options;
pub mod placeholder;
pub mod transform;
pub mod tree;

pub use accents::DEFAULT_ACCENT_MAP;
pub use error::{Error, Result};
pub use generate::{generate_file, generate_file_async};
pub use localize::pseudo_localize;
pub use options::{Options, Overrides};
pub use tree::process_tree;
