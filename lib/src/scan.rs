/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Byte-level HTML token scanner. All delimiters are ASCII, so positions
//! found on the byte slice are always valid `&str` boundaries.

use memchr::{memchr, memmem};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagInfo<'a> {
    pub name: &'a str,
    pub is_end: bool,
    pub self_closing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    /// Plain text between constructs, whitespace included.
    Text(&'a str),
    /// A `<...>` tag with its parsed name and flags.
    Tag { raw: &'a str, info: TagInfo<'a> },
    /// A full `<!-- ... -->` comment, or the unterminated remainder.
    Comment(&'a str),
    /// A `<!...>` or `<?...>` declaration.
    Declaration(&'a str),
    /// Verbatim content of a raw-text element, followed by its end tag
    /// when one was found.
    Raw {
        content: &'a str,
        end_tag: Option<&'a str>,
    },
}

pub struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    raw_element: Option<&'a str>,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Scanner<'a> {
        Scanner {
            text,
            pos: 0,
            raw_element: None,
        }
    }

    /// Whether the `<` at `at` opens a tag, comment or declaration.
    fn starts_construct(&self, at: usize) -> bool {
        match self.text.as_bytes().get(at + 1) {
            Some(&next) => {
                next == b'/' || next == b'!' || next == b'?' || next.is_ascii_alphabetic()
            }
            None => false,
        }
    }

    fn text_token(&mut self) -> Token<'a> {
        let bytes = self.text.as_bytes();
        let start = self.pos;
        let mut search = start;
        if bytes[start] == b'<' {
            // A '<' that opens nothing is plain text.
            search = start + 1;
        }
        loop {
            match memchr(b'<', &bytes[search..]) {
                Some(offset) => {
                    let at = search + offset;
                    if self.starts_construct(at) {
                        self.pos = at;
                        return Token::Text(&self.text[start..at]);
                    }
                    search = at + 1;
                }
                None => {
                    self.pos = self.text.len();
                    return Token::Text(&self.text[start..]);
                }
            }
        }
    }

    fn comment_token(&mut self) -> Token<'a> {
        let start = self.pos;
        match memmem::find(&self.text.as_bytes()[start + 4..], b"-->") {
            Some(offset) => {
                let end = start + 4 + offset + 3;
                self.pos = end;
                Token::Comment(&self.text[start..end])
            }
            None => {
                self.pos = self.text.len();
                Token::Comment(&self.text[start..])
            }
        }
    }

    fn declaration_token(&mut self) -> Token<'a> {
        let start = self.pos;
        match find_tag_end(self.text.as_bytes(), start) {
            Some(end) => {
                self.pos = end + 1;
                Token::Declaration(&self.text[start..=end])
            }
            None => {
                self.pos = self.text.len();
                Token::Text(&self.text[start..])
            }
        }
    }

    /// Collect verbatim bytes until the matching end tag of `name`.
    fn raw_token(&mut self, name: &'a str) -> Token<'a> {
        let bytes = self.text.as_bytes();
        let start = self.pos;
        let mut i = start;
        loop {
            let Some(offset) = memchr(b'<', &bytes[i..]) else {
                break;
            };
            let at = i + offset;
            if bytes.get(at + 1) != Some(&b'/') {
                i = at + 1;
                continue;
            }
            let Some(end) = find_tag_end(bytes, at) else {
                break;
            };
            let raw = &self.text[at..=end];
            if parse_tag_info(raw).name.eq_ignore_ascii_case(name) {
                self.pos = end + 1;
                return Token::Raw {
                    content: &self.text[start..at],
                    end_tag: Some(raw),
                };
            }
            // A non-matching end tag stays content; rescan right after
            // its "</" so a matching end tag inside it is not skipped.
            i = at + 2;
        }
        self.pos = self.text.len();
        Token::Raw {
            content: &self.text[start..],
            end_tag: None,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pos >= self.text.len() {
            return None;
        }
        if let Some(name) = self.raw_element.take() {
            return Some(self.raw_token(name));
        }
        let bytes = self.text.as_bytes();
        let start = self.pos;
        if bytes[start] == b'<' && self.starts_construct(start) {
            if self.text[start..].starts_with("<!--") {
                return Some(self.comment_token());
            }
            if bytes[start + 1] == b'!' || bytes[start + 1] == b'?' {
                return Some(self.declaration_token());
            }
            if let Some(end) = find_tag_end(bytes, start) {
                let raw = &self.text[start..=end];
                let info = parse_tag_info(raw);
                self.pos = end + 1;
                if !info.is_end && !info.self_closing && is_raw_text(info.name) {
                    self.raw_element = Some(info.name);
                }
                return Some(Token::Tag { raw, info });
            }
            // Unterminated tag, degrade to verbatim text.
            self.pos = self.text.len();
            return Some(Token::Text(&self.text[start..]));
        }
        Some(self.text_token())
    }
}

/// Find the `>` closing the tag that starts at `start`, skipping quoted
/// attribute values.
fn find_tag_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut quote = 0u8;
    for (offset, &b) in bytes[start + 1..].iter().enumerate() {
        if quote != 0 {
            if b == quote {
                quote = 0;
            }
        } else if b == b'"' || b == b'\'' {
            quote = b;
        } else if b == b'>' {
            return Some(start + 1 + offset);
        }
    }
    None
}

/// Extract name and end/self-closing flags from raw `<...>` text.
pub(crate) fn parse_tag_info(raw: &str) -> TagInfo<'_> {
    let bytes = raw.as_bytes();
    let n = bytes.len();
    let mut i = 1;
    let is_end = bytes.get(1) == Some(&b'/');
    if is_end {
        i += 1;
    }
    while i < n && is_ws(bytes[i]) {
        i += 1;
    }
    let name_start = i;
    while i < n && is_name_byte(bytes[i]) {
        i += 1;
    }
    let name = &raw[name_start..i];

    let mut j = n.saturating_sub(1);
    while j > 0 && is_ws(bytes[j - 1]) {
        j -= 1;
    }
    let self_closing = j >= 2 && bytes[j - 1] == b'/';

    TagInfo {
        name,
        is_end,
        self_closing,
    }
}

/// Collapse whitespace inside a tag: runs outside quotes become a single
/// space, runs touching `=` or the tag edges disappear, quoted attribute
/// values stay byte for byte.
pub(crate) fn normalize_tag(raw: &str) -> String {
    if raw.len() < 2 {
        return raw.to_string();
    }
    let inner = &raw[1..raw.len() - 1];
    let bytes = inner.as_bytes();
    let n = bytes.len();

    let mut out = String::with_capacity(raw.len());
    out.push('<');
    let mut i = 0;
    let mut span_start = 0;
    let mut quote = 0u8;
    while i < n {
        let b = bytes[i];
        if quote != 0 {
            if b == quote {
                quote = 0;
            }
            i += 1;
            continue;
        }
        if b == b'"' || b == b'\'' {
            quote = b;
            i += 1;
            continue;
        }
        if is_ws(b) {
            out.push_str(&inner[span_start..i]);
            let mut j = i;
            while j < n && is_ws(bytes[j]) {
                j += 1;
            }
            let left = if i > 0 { bytes[i - 1] } else { 0 };
            let right = if j < n { bytes[j] } else { 0 };
            let at_edge = out.len() == 1 || j == n;
            if !(at_edge || left == b'=' || right == b'=') {
                out.push(' ');
            }
            i = j;
            span_start = j;
            continue;
        }
        i += 1;
    }
    out.push_str(&inner[span_start..]);
    out.push('>');
    out
}

pub(crate) fn is_void(name: &str) -> bool {
    matches_ignore_case(
        name,
        &[
            "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
            "source", "track", "wbr",
        ],
    )
}

pub(crate) fn is_raw_text(name: &str) -> bool {
    matches_ignore_case(name, &["pre", "textarea", "script", "style"])
}

fn matches_ignore_case(name: &str, set: &[&str]) -> bool {
    set.iter().any(|entry| name.eq_ignore_ascii_case(entry))
}

#[inline]
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

#[inline]
fn is_ws(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n' || b == b'\r'
}
