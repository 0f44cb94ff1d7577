// SPDX-License-Identifier: PMPL-1.0-or-later

//! Walkthrough of the pseudo-l10n library API.
//!
//! Run with: `cargo run --example demo`. Output files land in `demos/out/`.

use anyhow::Result;
use pseudo_l10n::{generate_file, pseudo_localize, Options, Overrides};
use std::path::Path;

fn main() -> Result<()> {
    let input = Path::new("demos/input.json");
    let out_dir = Path::new("demos/out");

    println!("Example 1: single string");
    let original = "Hello, {{name}}! Welcome to our application.";
    let pseudo = pseudo_localize(original, &Options::default())?;
    println!("  Original: {original}");
    println!("  Pseudo:   {pseudo}\n");

    println!("Example 2: generate with defaults");
    let default_out = out_dir.join("pseudo-default.json");
    generate_file(input, &default_out, &Options::default())?;
    println!("  Generated: {}\n", default_out.display());

    println!("Example 3: custom markers and expansion");
    let custom = Options::with_overrides(Overrides {
        expansion: Some(30),
        start_marker: Some("« ".to_string()),
        end_marker: Some(" »".to_string()),
        ..Default::default()
    })?;
    let custom_out = out_dir.join("pseudo-custom.json");
    generate_file(input, &custom_out, &custom)?;
    println!("  Generated: {}\n", custom_out.display());

    println!("Example 4: RTL simulation");
    let rtl = Options::with_overrides(Overrides {
        rtl: Some(true),
        ..Default::default()
    })?;
    let rtl_out = out_dir.join("pseudo-rtl.json");
    generate_file(input, &rtl_out, &rtl)?;
    println!("  Generated: {}\n", rtl_out.display());

    println!("Example 5: replace placeholders");
    let replaced = Options::with_overrides(Overrides {
        replace_placeholders: Some(true),
        ..Default::default()
    })?;
    let replaced_out = out_dir.join("pseudo-replaced.json");
    generate_file(input, &replaced_out, &replaced)?;
    println!("  Generated: {}\n", replaced_out.display());

    println!("Example 6: other placeholder formats");
    for (format, sample) in [
        ("{key}", "Hello {name}, you have {count} messages"),
        ("%key%", "Hello %name%, you have %count% messages"),
        ("${key}", "Hello ${name}, you have ${count} messages"),
    ] {
        let options = Options::with_overrides(Overrides {
            placeholder_format: Some(format.to_string()),
            ..Default::default()
        })?;
        println!("  {format:7} {}", pseudo_localize(sample, &options)?);
    }

    Ok(())
}
