/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::options::Options;
use crate::scan::{self, Scanner, TagInfo, Token};

struct Printer<'a> {
    options: &'a Options,
    indent_unit: String,
    lines: Vec<String>,
    open: Vec<OpenElement>,
    level: usize,
    pending_newlines: usize,
}

struct OpenElement {
    name: String,
    level: usize,
}

impl<'a> Printer<'a> {
    fn new(options: &'a Options) -> Printer<'a> {
        Printer {
            options,
            indent_unit: options.indent_unit(),
            lines: Vec::new(),
            open: Vec::new(),
            level: 0,
            pending_newlines: 0,
        }
    }

    /// Start a fresh output line at the current indentation, emitting any
    /// preserved blank lines first.
    fn push_line(&mut self, content: &str) {
        self.flush_blank_lines();
        let mut line = self
            .indent_unit
            .repeat(self.options.indent_level + self.level);
        line.push_str(content);
        self.lines.push(line);
        self.pending_newlines = 0;
    }

    fn append_to_last(&mut self, content: &str) {
        if content.is_empty() {
            return;
        }
        match self.lines.last_mut() {
            Some(line) => line.push_str(content),
            None => self.lines.push(content.to_string()),
        }
    }

    fn flush_blank_lines(&mut self) {
        if !self.options.preserve_newlines || self.lines.is_empty() || self.pending_newlines < 2 {
            return;
        }
        let mut newlines = self.pending_newlines;
        if self.options.max_preserve_newlines > 0 {
            newlines = newlines.min(self.options.max_preserve_newlines);
        }
        for _ in 1..newlines {
            self.lines.push(String::new());
        }
    }

    fn finish(self) -> String {
        let eol = self.options.line_separator();
        let mut formatted = self.lines.join(&eol);
        if self.options.end_with_newline {
            formatted.push_str(&eol);
        }
        formatted
    }
}

/// Re-indent `source` as one element per line.
///
/// Start tags open a line and indent, end tags dedent. Void and
/// self-closing elements do not indent. The content of `pre`, `textarea`,
/// `script` and `style` is kept verbatim. Unterminated constructs degrade
/// to verbatim text, so this never fails.
pub fn beautify(source: &str, options: &Options) -> String {
    let source = normalize_newlines(source);
    let mut printer = Printer::new(options);
    for token in Scanner::new(&source) {
        match token {
            Token::Text(text) => format_text(&mut printer, text),
            Token::Tag { raw, info } => format_tag(&mut printer, raw, &info),
            Token::Comment(raw) | Token::Declaration(raw) => format_comment(&mut printer, raw),
            Token::Raw { content, end_tag } => format_raw(&mut printer, content, end_tag),
        }
    }
    printer.finish()
}

fn format_text(printer: &mut Printer, text: &str) {
    for (index, segment) in text.split('\n').enumerate() {
        if index > 0 {
            printer.pending_newlines += 1;
        }
        let line = segment.trim();
        if !line.is_empty() {
            printer.push_line(line);
        }
    }
}

fn format_tag(printer: &mut Printer, raw: &str, info: &TagInfo) {
    let tag = scan::normalize_tag(raw);
    if info.is_end {
        // Unwind to the matching open element; stray end tags print
        // where they are.
        if let Some(at) = printer
            .open
            .iter()
            .rposition(|element| element.name.eq_ignore_ascii_case(info.name))
        {
            printer.level = printer.open[at].level;
            printer.open.truncate(at);
        }
        printer.push_line(&tag);
        return;
    }
    printer.push_line(&tag);
    if !info.self_closing && !scan::is_void(info.name) && !scan::is_raw_text(info.name) {
        printer.open.push(OpenElement {
            name: info.name.to_ascii_lowercase(),
            level: printer.level,
        });
        printer.level += 1;
    }
}

fn format_comment(printer: &mut Printer, raw: &str) {
    let mut parts = raw.split('\n');
    if let Some(first) = parts.next() {
        printer.push_line(first);
    }
    for part in parts {
        printer.lines.push(part.to_string());
    }
}

/// Raw-text content glues to the line of its start tag and keeps its own
/// line structure untouched, so `<script></script>` stays on one line and
/// `pre` content survives byte for byte.
fn format_raw(printer: &mut Printer, content: &str, end_tag: Option<&str>) {
    let mut parts = content.split('\n');
    if let Some(first) = parts.next() {
        printer.append_to_last(first);
    }
    for part in parts {
        printer.lines.push(part.to_string());
    }
    if let Some(end_tag) = end_tag {
        printer.append_to_last(&scan::normalize_tag(end_tag));
    }
    printer.pending_newlines = 0;
}

fn normalize_newlines(source: &str) -> String {
    source.replace("\r\n", "\n").replace('\r', "\n")
}
