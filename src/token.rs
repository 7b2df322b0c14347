// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// Shorthand for patterns that are not single characters.
///
/// These are inserted verbatim, they are regex syntax rather than
/// literal text. `LineBreak` is a group, so it must not be used
/// inside a charset.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SpecialChar {
    LineBreak,
    StartOfLine,
    EndOfLine,
    Tab,
}

impl SpecialChar {
    pub fn as_pattern(&self) -> &'static str {
        match self {
            SpecialChar::LineBreak => r"(\n|(\r\n))",
            SpecialChar::StartOfLine => "^",
            SpecialChar::EndOfLine => "$",
            SpecialChar::Tab => r"\t",
        }
    }
}

impl Display for SpecialChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_pattern())
    }
}

/// Preset charsets.
///
/// Each renders to a shorthand that is valid both on its own and inside
/// a charset, e.g. `(?:[\d])`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CharClass {
    Digit,
    Letter,
    UppercaseLetter,
    LowercaseLetter,
    Whitespace,
    Tab,
}

impl CharClass {
    pub fn as_pattern(&self) -> &'static str {
        match self {
            CharClass::Digit => r"\d",
            CharClass::Letter => r"\w",
            CharClass::UppercaseLetter => r"\p{Lu}",
            CharClass::LowercaseLetter => r"\p{Ll}",
            CharClass::Whitespace => r"\s",
            CharClass::Tab => r"\t",
        }
    }
}

impl Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_pattern())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CharClass, SpecialChar};

    #[test]
    fn test_special_char_pattern() {
        assert_eq!(SpecialChar::LineBreak.to_string(), r"(\n|(\r\n))");
        assert_eq!(SpecialChar::StartOfLine.to_string(), "^");
        assert_eq!(SpecialChar::EndOfLine.to_string(), "$");
        assert_eq!(SpecialChar::Tab.to_string(), r"\t");
    }

    #[test]
    fn test_char_class_pattern() {
        assert_eq!(CharClass::Digit.to_string(), r"\d");
        assert_eq!(CharClass::Letter.to_string(), r"\w");
        assert_eq!(CharClass::UppercaseLetter.to_string(), r"\p{Lu}");
        assert_eq!(CharClass::LowercaseLetter.to_string(), r"\p{Ll}");
        assert_eq!(CharClass::Whitespace.to_string(), r"\s");
        assert_eq!(CharClass::Tab.to_string(), r"\t");
    }
}
