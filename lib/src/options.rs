/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Formatting options for [`beautify`](crate::beautify).
///
/// `eol` and `indent_char` accept the literal escapes `\n`, `\r` and `\t`,
/// so a shell can pass `--eol '\n'` without quoting an actual newline.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// How many `indent_char` repetitions make up one indentation step.
    pub indent_size: usize,
    /// The character (or string) used for indentation.
    pub indent_char: String,
    /// Base indentation applied to every line, in steps.
    pub indent_level: usize,
    /// Line terminator joining output lines.
    pub eol: String,
    /// Terminate the output with a final `eol`.
    pub end_with_newline: bool,
    /// Keep blank lines found between nodes in the input.
    pub preserve_newlines: bool,
    /// Cap on consecutive newlines kept per gap. Zero means no cap.
    pub max_preserve_newlines: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            indent_size: 4,
            indent_char: String::from(" "),
            indent_level: 0,
            eol: String::from("\n"),
            end_with_newline: false,
            preserve_newlines: true,
            max_preserve_newlines: 10,
        }
    }
}

impl Options {
    pub(crate) fn indent_unit(&self) -> String {
        resolve_escapes(&self.indent_char).repeat(self.indent_size)
    }

    pub(crate) fn line_separator(&self) -> String {
        resolve_escapes(&self.eol)
    }
}

fn resolve_escapes(text: &str) -> String {
    text.replace("\\r", "\r")
        .replace("\\n", "\n")
        .replace("\\t", "\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_four_spaces_per_level() {
        assert_eq!(Options::default().indent_unit(), "    ");
    }

    #[test]
    fn resolves_escaped_terminators() {
        let options = Options {
            eol: String::from("\\r\\n"),
            ..Options::default()
        };
        assert_eq!(options.line_separator(), "\r\n");
    }

    #[test]
    fn resolves_escaped_indentation() {
        let options = Options {
            indent_char: String::from("\\t"),
            indent_size: 1,
            ..Options::default()
        };
        assert_eq!(options.indent_unit(), "\t");
    }

    #[test]
    fn keeps_literal_characters() {
        let options = Options {
            eol: String::from("\r\n"),
            ..Options::default()
        };
        assert_eq!(options.line_separator(), "\r\n");
    }
}
