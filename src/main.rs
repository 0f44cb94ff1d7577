// SPDX-License-Identifier: PMPL-1.0-or-later

//! pseudo-l10n: pseudo-locale generator for translation JSON files
//!
//! Reads a translation JSON file, pseudo-localizes every string leaf
//! (text expansion, accented replacement, visual markers, optional RTL
//! simulation), and writes the result next to where you point it.
//!
//! Usage:
//!   pseudo-l10n input.json output.json [--expansion=40] [--replacePlaceholders] [--rtl]

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use pseudo_l10n::{generate_file, Options, Overrides};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "pseudo-l10n")]
#[command(version)]
#[command(about = "Generate pseudo-localized translation JSON files for i18n testing")]
struct Cli {
    /// Input translation JSON file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output pseudo-locale JSON file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Text expansion percentage
    #[arg(long = "expansion", value_name = "INT", default_value_t = 40)]
    expansion: u32,

    /// Replace placeholders with their <UPPERCASED> form
    #[arg(long = "replacePlaceholders")]
    replace_placeholders: bool,

    /// Enable RTL (Right-to-Left) simulation
    #[arg(long = "rtl")]
    rtl: bool,
}

fn main() {
    // Bad usage must exit with status 1, not clap's default 2. Help and
    // version keep clap's behavior (stdout, exit 0).
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            err.exit();
        }
        eprintln!("{err}");
        process::exit(1);
    });

    if let Err(err) = run(&cli) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        process::exit(1);
    }

    println!(
        "{} {}",
        "Pseudo-locale file generated:".green(),
        cli.output.display()
    );
}

fn run(cli: &Cli) -> Result<()> {
    let options = Options::with_overrides(Overrides {
        expansion: Some(cli.expansion),
        replace_placeholders: Some(cli.replace_placeholders),
        rtl: Some(cli.rtl),
        ..Default::default()
    })?;

    generate_file(&cli.input, &cli.output, &options)?;
    Ok(())
}
