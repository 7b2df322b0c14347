// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// meta characters `( ) { } [ ] \ + * ? . | ^ $` need to be escaped when
// used as literal characters, e.g. `\(`, `\*` and `\.`
//
// `#`, `&`, `-` and `~` are escaped as well, so that the escaped text can
// also be placed inside a charset, e.g. `[^\-\]]`, and is still safe when
// the engine runs in extended (`x`) mode.

use std::fmt::Display;

/// Text whose regex meta characters have already been escaped.
///
/// The only way to obtain an `EscapedText` is through [`escape`] (or
/// `EscapedText::new`), so a value of this type can be inserted into a
/// pattern verbatim. Passing it back into a builder method never escapes
/// it a second time.
#[derive(Debug, PartialEq, Eq, Clone, Default, Hash)]
pub struct EscapedText(String);

impl EscapedText {
    pub fn new(raw: &str) -> Self {
        let mut escaped = String::with_capacity(raw.len());
        for c in raw.chars() {
            if is_meta_char(c) {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        EscapedText(escaped)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for EscapedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<char> for EscapedText {
    fn from(value: char) -> Self {
        EscapedText::new(value.encode_utf8(&mut [0; 4]))
    }
}

impl AsRef<str> for EscapedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Escape all regex meta characters in `raw`.
pub fn escape(raw: &str) -> EscapedText {
    EscapedText::new(raw)
}

pub fn is_meta_char(c: char) -> bool {
    matches!(
        c,
        '\\' | '.'
            | '+'
            | '*'
            | '?'
            | '('
            | ')'
            | '|'
            | '['
            | ']'
            | '{'
            | '}'
            | '^'
            | '$'
            | '#'
            | '&'
            | '-'
            | '~'
    )
}
