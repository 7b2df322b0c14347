// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// every builder method takes its text arguments as `impl Into<Text>` (or
// `impl Into<CharGroup>`), so raw strings are escaped by the conversion
// before the method body runs.

use std::fmt::Display;

use crate::{
    escape::EscapedText,
    token::{CharClass, SpecialChar},
    verbex::Verbex,
};

/// An argument of a builder method that inserts a sub-pattern.
#[derive(Debug, PartialEq, Clone)]
pub enum Text {
    /// Literal text, already escaped.
    Escaped(EscapedText),
    Special(SpecialChar),
    Class(CharClass),

    /// The rendered pattern of another builder, inserted verbatim.
    /// The flags of that builder are ignored.
    Pattern(String),
}

impl Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Text::Escaped(e) => f.write_str(e.as_str()),
            Text::Special(s) => f.write_str(s.as_pattern()),
            Text::Class(c) => f.write_str(c.as_pattern()),
            Text::Pattern(p) => f.write_str(p),
        }
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::Escaped(EscapedText::new(value))
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::Escaped(EscapedText::new(&value))
    }
}

impl From<&String> for Text {
    fn from(value: &String) -> Self {
        Text::Escaped(EscapedText::new(value))
    }
}

impl From<char> for Text {
    fn from(value: char) -> Self {
        Text::Escaped(EscapedText::from(value))
    }
}

impl From<EscapedText> for Text {
    fn from(value: EscapedText) -> Self {
        Text::Escaped(value)
    }
}

impl From<&EscapedText> for Text {
    fn from(value: &EscapedText) -> Self {
        Text::Escaped(value.clone())
    }
}

impl From<SpecialChar> for Text {
    fn from(value: SpecialChar) -> Self {
        Text::Special(value)
    }
}

impl From<CharClass> for Text {
    fn from(value: CharClass) -> Self {
        Text::Class(value)
    }
}

impl From<&Verbex> for Text {
    fn from(value: &Verbex) -> Self {
        Text::Pattern(value.to_string())
    }
}

impl From<&mut Verbex> for Text {
    fn from(value: &mut Verbex) -> Self {
        Text::Pattern(value.to_string())
    }
}

impl From<Verbex> for Text {
    fn from(value: Verbex) -> Self {
        Text::Pattern(value.to_string())
    }
}

/// An argument of a builder method that places its content
/// inside a charset, e.g. `[...]` or `[^...]`.
///
/// Only literal chars and preset charsets are accepted, since groups
/// and anchors have no meaning inside a charset.
#[derive(Debug, PartialEq, Clone)]
pub enum CharGroup {
    Chars(EscapedText),
    Class(CharClass),
}

impl Display for CharGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharGroup::Chars(e) => f.write_str(e.as_str()),
            CharGroup::Class(c) => f.write_str(c.as_pattern()),
        }
    }
}

impl From<&str> for CharGroup {
    fn from(value: &str) -> Self {
        CharGroup::Chars(EscapedText::new(value))
    }
}

impl From<String> for CharGroup {
    fn from(value: String) -> Self {
        CharGroup::Chars(EscapedText::new(&value))
    }
}

impl From<&String> for CharGroup {
    fn from(value: &String) -> Self {
        CharGroup::Chars(EscapedText::new(value))
    }
}

impl From<char> for CharGroup {
    fn from(value: char) -> Self {
        CharGroup::Chars(EscapedText::from(value))
    }
}

impl From<EscapedText> for CharGroup {
    fn from(value: EscapedText) -> Self {
        CharGroup::Chars(value)
    }
}

impl From<&EscapedText> for CharGroup {
    fn from(value: &EscapedText) -> Self {
        CharGroup::Chars(value.clone())
    }
}

impl From<CharClass> for CharGroup {
    fn from(value: CharClass) -> Self {
        CharGroup::Class(value)
    }
}
