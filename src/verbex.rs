// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::{
    engine::{compile, CompileOptions, Pattern},
    error::Error,
    escape::EscapedText,
    flags::Flags,
    text::{CharGroup, Text},
    token::SpecialChar,
};

/// A regular expression built from chained method calls.
///
/// Each method appends one piece of pattern (or sets a flag) and returns
/// the builder, so calls can be chained:
///
/// ```
/// use verbex::Verbex;
///
/// let mut v = Verbex::new();
/// v.start_of_line().find("http").maybe("s").find("://");
/// assert_eq!(v.to_string(), "^http(?:s)?://");
/// ```
///
/// String arguments are always taken as literal text and their meta
/// characters are escaped. Pass a [`SpecialChar`], a [`crate::CharClass`],
/// an [`EscapedText`] or another `Verbex` to insert a pattern verbatim.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Verbex {
    parts: Vec<String>,
    flags: Flags,
}

impl Verbex {
    pub fn new() -> Self {
        Self::with_flags(Flags::empty())
    }

    pub fn with_flags(flags: Flags) -> Self {
        Verbex {
            parts: vec![],
            flags,
        }
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Compile the pattern with the accumulated flags.
    pub fn regex(&self) -> Result<Pattern, Error> {
        self.regex_with(&CompileOptions::default())
    }

    pub fn regex_with(&self, options: &CompileOptions) -> Result<Pattern, Error> {
        compile(&self.to_string(), self.flags, options)
    }

    fn add(&mut self, part: String) -> &mut Self {
        log::trace!("append {:?}", part);
        self.parts.push(part);
        self
    }
}

fn to_text(value: impl Into<Text>) -> Text {
    value.into()
}

fn to_char_group(value: impl Into<CharGroup>) -> CharGroup {
    value.into()
}

// literal, repetition and lookaround

impl Verbex {
    pub fn find(&mut self, text: impl Into<Text>) -> &mut Self {
        self.add(to_text(text).to_string())
    }

    /// Same as `find`.
    pub fn then(&mut self, text: impl Into<Text>) -> &mut Self {
        self.find(text)
    }

    pub fn maybe(&mut self, text: impl Into<Text>) -> &mut Self {
        self.add(format!("(?:{})?", to_text(text)))
    }

    pub fn zero_or_more(&mut self, text: impl Into<Text>) -> &mut Self {
        self.add(format!("(?:{})*", to_text(text)))
    }

    pub fn one_or_more(&mut self, text: impl Into<Text>) -> &mut Self {
        self.add(format!("(?:{})+", to_text(text)))
    }

    pub fn n_times(&mut self, text: impl Into<Text>, n: usize) -> &mut Self {
        self.add(format!("(?:{}){{{}}}", to_text(text), n))
    }

    pub fn n_times_or_more(&mut self, text: impl Into<Text>, n: usize) -> &mut Self {
        self.add(format!("(?:{}){{{},}}", to_text(text), n))
    }

    /// `n` must not be greater than `m`, otherwise the pattern
    /// fails to compile.
    pub fn n_to_m_times(&mut self, text: impl Into<Text>, n: usize, m: usize) -> &mut Self {
        self.add(format!("(?:{}){{{},{}}}", to_text(text), n, m))
    }

    /// Positive lookahead.
    pub fn followed_by(&mut self, text: impl Into<Text>) -> &mut Self {
        self.add(format!("(?={})", to_text(text)))
    }

    /// Negative lookahead.
    pub fn not_followed_by(&mut self, text: impl Into<Text>) -> &mut Self {
        self.add(format!("(?!{})", to_text(text)))
    }

    /// Positive lookbehind.
    pub fn preceded_by(&mut self, text: impl Into<Text>) -> &mut Self {
        self.add(format!("(?<={})", to_text(text)))
    }

    /// Negative lookbehind.
    pub fn not_preceded_by(&mut self, text: impl Into<Text>) -> &mut Self {
        self.add(format!("(?<!{})", to_text(text)))
    }

    /// Appends `|` followed by `text`.
    ///
    /// The left side of the alternation is everything appended before,
    /// not only the last piece, e.g. `find("a").find("b").or("c")`
    /// renders `ab|c`. Wrap the alternatives in a nested `Verbex` and
    /// pass it to `find` or `capture_group` to limit the scope.
    pub fn or(&mut self, text: impl Into<Text>) -> &mut Self {
        self.add("|".to_owned());
        self.find(text)
    }

    /// Makes the preceding repetition lazy.
    ///
    /// Only meaningful right after a repetition, e.g. `anything()`.
    pub fn as_few(&mut self) -> &mut Self {
        self.add("?".to_owned())
    }
}

// groups

impl Verbex {
    pub fn capture_group(&mut self, text: impl Into<Text>) -> &mut Self {
        self.add(format!("({})", to_text(text)))
    }

    /// Appends a named capture group `(?<name>text)`.
    ///
    /// The name must start with a letter or `_`, followed by letters,
    /// digits or `_`.
    pub fn named_capture_group(
        &mut self,
        name: &str,
        text: impl Into<Text>,
    ) -> Result<&mut Self, Error> {
        if !is_valid_group_name(name) {
            return Err(Error::InvalidArgument(format!(
                "\"{}\" is not a valid capture group name.",
                name
            )));
        }

        Ok(self.add(format!("(?<{}>{})", name, to_text(text))))
    }

    /// A word between word boundaries, captured.
    pub fn word(&mut self) -> &mut Self {
        self.add(r"(\b\w+\b)".to_owned())
    }
}

fn is_valid_group_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

// charsets

impl Verbex {
    /// One or more of any character except the line break.
    pub fn anything(&mut self) -> &mut Self {
        self.add(".+".to_owned())
    }

    /// One or more of any character not in `chars`.
    pub fn anything_but(&mut self, chars: impl Into<CharGroup>) -> &mut Self {
        self.add(format!("[^{}]+", to_char_group(chars)))
    }

    /// A single character in `chars`.
    pub fn any_of(&mut self, chars: impl Into<CharGroup>) -> &mut Self {
        self.add(format!("(?:[{}])", to_char_group(chars)))
    }

    /// A single character not in `chars`.
    pub fn not_any_of(&mut self, chars: impl Into<CharGroup>) -> &mut Self {
        self.add(format!("(?:[^{}])", to_char_group(chars)))
    }

    /// Any of the integers from `start` to `end` (both included),
    /// e.g. `(?:8|9|10)`.
    pub fn number_range(&mut self, start: i64, end: i64) -> Result<&mut Self, Error> {
        if start > end {
            return Err(Error::InvalidArgument(format!(
                "The start {} of the number range is greater than the end {}.",
                start, end
            )));
        }

        let numbers: Vec<String> = (start..=end).map(|n| n.to_string()).collect();
        Ok(self.add(format!("(?:{})", numbers.join("|"))))
    }

    /// A single character from `start` to `end` (both included).
    pub fn letter_range(&mut self, start: char, end: char) -> &mut Self {
        self.add(format!("[{}]", char_range(start, end)))
    }

    /// A single character from any of the given ranges,
    /// e.g. `[('a', 'b'), ('X', 'Z')]` renders `[a-bX-Z]`.
    pub fn letter_ranges(&mut self, ranges: &[(char, char)]) -> Result<&mut Self, Error> {
        if ranges.is_empty() {
            return Err(Error::InvalidArgument(
                "At least one letter range is required.".to_owned(),
            ));
        }

        let members: String = ranges
            .iter()
            .map(|(start, end)| char_range(*start, *end))
            .collect();
        Ok(self.add(format!("[{}]", members)))
    }
}

fn char_range(start: char, end: char) -> String {
    format!("{}-{}", EscapedText::from(start), EscapedText::from(end))
}

// special chars

impl Verbex {
    pub fn start_of_line(&mut self) -> &mut Self {
        self.find(SpecialChar::StartOfLine)
    }

    pub fn end_of_line(&mut self) -> &mut Self {
        self.find(SpecialChar::EndOfLine)
    }

    /// `\n` or `\r\n`.
    pub fn line_break(&mut self) -> &mut Self {
        self.find(SpecialChar::LineBreak)
    }

    pub fn tab(&mut self) -> &mut Self {
        self.find(SpecialChar::Tab)
    }
}

// flags

impl Verbex {
    pub fn with_any_case(&mut self) -> &mut Self {
        self.flags |= Flags::CASE_INSENSITIVE;
        self
    }

    /// `^` and `$` match at the start and the end of each line.
    pub fn search_by_line(&mut self) -> &mut Self {
        self.flags |= Flags::MULTI_LINE;
        self
    }

    /// Preset charsets and word boundaries match ASCII characters only.
    ///
    /// The negative shorthands `\D`, `\W` and `\S` inside a bracket class
    /// stay Unicode-aware. The builder never produces them, they can only
    /// come from a raw pattern passed to `engine::compile`.
    pub fn with_ascii(&mut self) -> &mut Self {
        self.flags |= Flags::ASCII;
        self
    }
}

impl Display for Verbex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            f.write_str(part)?;
        }
        Ok(())
    }
}
