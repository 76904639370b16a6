/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod cli;
mod error;
mod flags;
mod format;
mod input;
mod output;

use std::io::Write;

use clap::{CommandFactory, Parser};
use colored::*;

use crate::cli::Cli;
use crate::error::CliError;
use crate::input::SourceUnit;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli, &mut std::io::stdout()) {
        report(&err);
        std::process::exit(err.exit_code());
    }
}

/// The whole pipeline. Flags are validated before any input is read, so
/// a bad invocation never touches a file.
fn run<W: Write>(cli: &Cli, stdout: &mut W) -> Result<(), CliError> {
    let flags = flags::normalize(flags::raw_flags(cli))?;
    let units = input::collect(&cli.input)?;
    let options = format::resolve_options(&flags);
    let results: Vec<SourceUnit> = units
        .into_iter()
        .map(|unit| SourceUnit {
            content: format::pretty(&unit.content, &options),
            path: unit.path,
        })
        .collect();
    output::route(&results, stdout)?;
    Ok(())
}

/// Expected failures get the usage text with the message below it, like
/// the CLI frameworks render them. Anything else is a crash and prints
/// raw, with its full context chain.
fn report(err: &CliError) {
    if err.is_managed() {
        eprintln!(
            "{}\n\n  {}",
            Cli::command().render_help().to_string().trim_end(),
            err.to_string().red()
        );
    } else {
        eprintln!("{}", format!("{err:#}").red());
    }
}
