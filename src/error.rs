// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for pseudo-l10n.
//!
//! Every failure is reported immediately with enough context (path,
//! underlying message) to diagnose; nothing is retried. CLI usage errors
//! are handled at the binary boundary and never appear here.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The placeholder format does not contain the literal `key` marker.
    /// Raised once, when options are constructed or a pattern is built.
    #[error("placeholder format {format:?} must contain the literal substring \"key\"")]
    Configuration { format: String },

    /// The source file is missing, unreadable, or not valid JSON.
    #[error("failed to read {}: {message}", .path.display())]
    FileRead { path: PathBuf, message: String },

    /// The destination directory cannot be created or the file cannot
    /// be written.
    #[error("failed to write {}: {message}", .path.display())]
    FileWrite { path: PathBuf, message: String },
}

impl Error {
    pub(crate) fn file_read(path: &std::path::Path, message: impl ToString) -> Self {
        Error::FileRead {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    pub(crate) fn file_write(path: &std::path::Path, message: impl ToString) -> Self {
        Error::FileWrite {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}
