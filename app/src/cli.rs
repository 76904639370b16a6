/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Kept free of crate-local imports: build.rs includes this file to
// generate completions and the man page.

use clap::Parser;

static LONG_ABOUT: &str = "
html-beautifier pretty-prints HTML.

Given files or glob patterns it rewrites every matched .html file in place.
Given no input it reads from stdin and prints the formatted result to
stdout. Flag values are type-checked up front: a flag passed with the wrong
kind of value aborts before any input is read. Formatting defaults live in
the formatter, so only flags actually passed are forwarded.";

static EXAMPLES: &str = "Examples:
  html-beautifier index.html            # overwrites in place
  html-beautifier 'docs/**/*.html'      # overwrites in place
  echo \"<span>html</span>\" | html-beautifier";

/// Boolean flags take an optional value so that a mistyped invocation like
/// `--jsx 1` reaches the flag validator instead of being rejected by the
/// argv parser; value flags stay untyped strings for the same reason.
/// Each boolean also has a hidden `--no-` twin and the later of the pair
/// wins, POSIX style.
#[derive(Debug, Parser)]
#[command(author, version, about = LONG_ABOUT, after_help = EXAMPLES)]
pub struct Cli {
    /// Files or glob patterns to format in place; reads stdin when absent
    #[arg(value_name = "input")]
    pub input: Vec<String>,

    /// Pass through JSX/E4X [false]
    #[arg(short = 'x', long, visible_alias = "e4x", overrides_with = "no_jsx")]
    pub jsx: Option<Option<String>>,

    /// Negates --jsx
    #[arg(long, hide = true)]
    pub no_jsx: bool,

    /// Use .editorconfig for options [false]
    #[arg(short = 'c', long, overrides_with = "no_editorconfig")]
    pub editorconfig: Option<Option<String>>,

    /// Negates --editorconfig
    #[arg(long, hide = true)]
    pub no_editorconfig: bool,

    /// Ensure newline at file end [false]
    #[arg(short = 'n', long, overrides_with = "no_end_with_newline")]
    pub end_with_newline: Option<Option<String>>,

    /// Negates --end-with-newline
    #[arg(long, hide = true)]
    pub no_end_with_newline: bool,

    /// Carriage return character ["\n"]
    #[arg(short = 'e', long)]
    pub eol: Option<String>,

    /// Indentation character [" "]
    #[arg(short = 'i', long)]
    pub indent_character: Option<String>,

    /// Initial indentation level [0]
    #[arg(short = 'l', long)]
    pub indent_level: Option<String>,

    /// Indentation size [4]
    #[arg(short = 's', long)]
    pub indent_size: Option<String>,

    /// Count of newlines to preserve per chunk [10]
    #[arg(short = 'm', long)]
    pub max_preserve_newlines: Option<String>,

    /// Preserve newlines [true]
    #[arg(short = 'p', long, overrides_with = "no_preserve_newlines")]
    pub preserve_newlines: Option<Option<String>>,

    /// Negates --preserve-newlines
    #[arg(long, hide = true)]
    pub no_preserve_newlines: bool,
}
