/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use html_beautifier::Options;

use crate::flags::{FlagValue, NormalizedOptions};

/// Map validated flags onto the formatter's options. Flags the formatter
/// has no field for, `jsx` and `editorconfig` included, are ignored here.
pub fn resolve_options(flags: &NormalizedOptions) -> Options {
    let mut options = Options::default();
    for (name, value) in flags {
        match (name.as_str(), value) {
            ("indent_size", FlagValue::Num(number)) => options.indent_size = *number as usize,
            ("indent_level", FlagValue::Num(number)) => options.indent_level = *number as usize,
            ("max_preserve_newlines", FlagValue::Num(number)) => {
                options.max_preserve_newlines = *number as usize
            }
            ("indent_character", FlagValue::Str(text)) => options.indent_char = text.clone(),
            ("eol", FlagValue::Str(text)) => options.eol = text.clone(),
            ("end_with_newline", FlagValue::Bool(flag)) => options.end_with_newline = *flag,
            ("preserve_newlines", FlagValue::Bool(flag)) => options.preserve_newlines = *flag,
            _ => {}
        }
    }
    options
}

pub fn pretty(content: &str, options: &Options) -> String {
    html_beautifier::beautify(content, options)
}
