// SPDX-License-Identifier: PMPL-1.0-or-later

//! File-pair transform: read a translation JSON file, pseudo-localize it,
//! write the result.
//!
//! The whole tree is transformed in memory before any write happens, so a
//! failure never leaves a partial output file behind.

use crate::error::{Error, Result};
use crate::options::Options;
use crate::tree::process_tree;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Generate a pseudo-localized JSON file from an input file.
///
/// Reads UTF-8 JSON from `input_path`, pseudo-localizes every string leaf,
/// creates any missing directories along `output_path`, and writes the
/// result pretty-printed with 2-space indentation.
pub fn generate_file(input_path: &Path, output_path: &Path, options: &Options) -> Result<()> {
    let content =
        fs::read_to_string(input_path).map_err(|err| Error::file_read(input_path, err))?;
    let tree: Value =
        serde_json::from_str(&content).map_err(|err| Error::file_read(input_path, err))?;

    let output = process_tree(&tree, options)?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|err| Error::file_write(output_path, err))?;
    }
    let json =
        serde_json::to_string_pretty(&output).map_err(|err| Error::file_write(output_path, err))?;
    fs::write(output_path, json).map_err(|err| Error::file_write(output_path, err))?;

    Ok(())
}

/// Async form of [`generate_file`] with identical semantics.
///
/// This is sugar over the blocking call for callers already living in an
/// async context; it performs no concurrent work and introduces no
/// parallelism.
pub async fn generate_file_async(
    input_path: &Path,
    output_path: &Path,
    options: &Options,
) -> Result<()> {
    generate_file(input_path, output_path, options)
}
