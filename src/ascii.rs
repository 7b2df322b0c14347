// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// rewrites the Unicode-aware preset charsets of a pattern into
// ASCII-only charsets:
//
// - \d       [0-9]
// - \w       [0-9A-Za-z_]
// - \s       [\t\n\v\f\r ]
// - \p{Lu}   [A-Z]
// - \p{Ll}   [a-z]
//
// and the negative forms `\D`, `\W`, `\S`, `\P{Lu}` and `\P{Ll}`.
//
// inside a charset the members are spliced in without brackets, e.g.
// `[\d_]` becomes `[0-9_]`. the negative forms are kept as they are
// inside a charset, since a negative set can not be spliced.
//
// word boundaries `\b` and `\B` outside a charset become the ASCII
// boundaries `(?-u:\b)` and `(?-u:\B)`. inside a charset `\b` is a
// backspace and is kept.

const ASCII_DIGIT: &str = "0-9";
const ASCII_WORD: &str = "0-9A-Za-z_";
const ASCII_SPACE: &str = r"\t\n\v\f\r ";
const ASCII_UPPER: &str = "A-Z";
const ASCII_LOWER: &str = "a-z";

pub fn to_ascii_charsets(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut rewriter = Rewriter::new(&chars);
    rewriter.rewrite();
    rewriter.output
}

struct Rewriter<'a> {
    chars: &'a [char],
    index: usize,
    charset_depth: usize,
    output: String,
}

impl<'a> Rewriter<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            index: 0,
            charset_depth: 0,
            output: String::with_capacity(chars.len()),
        }
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.get(self.index).copied();
        if c.is_some() {
            self.index += 1;
        }
        c
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    fn peek_char_and_equals(&self, offset: usize, expected_char: char) -> bool {
        matches!(self.peek_char(offset), Some(c) if c == expected_char)
    }

    fn copy_char(&mut self) {
        if let Some(c) = self.next_char() {
            self.output.push(c);
        }
    }
}

impl Rewriter<'_> {
    fn rewrite(&mut self) {
        while let Some(current_char) = self.peek_char(0) {
            match current_char {
                '\\' => {
                    self.rewrite_escaping();
                }
                '[' => {
                    self.copy_char(); // consume '['

                    if self.peek_char_and_equals(0, '^') {
                        self.copy_char(); // consume '^'
                    }

                    // a ']' right after the opening is a literal
                    if self.peek_char_and_equals(0, ']') {
                        self.copy_char();
                    }

                    self.charset_depth += 1;
                }
                ']' if self.charset_depth > 0 => {
                    self.copy_char(); // consume ']'
                    self.charset_depth -= 1;
                }
                _ => {
                    self.copy_char();
                }
            }
        }
    }

    fn rewrite_escaping(&mut self) {
        // \x     //
        // ^ ^____// to here
        // |______// current char, validated

        self.next_char(); // consume '\'

        let Some(escaped_char) = self.next_char() else {
            // a trailing backslash, leave it for the engine to report
            self.output.push('\\');
            return;
        };

        match escaped_char {
            'd' => self.push_charset(ASCII_DIGIT, false, r"\d"),
            'D' => self.push_charset(ASCII_DIGIT, true, r"\D"),
            'w' => self.push_charset(ASCII_WORD, false, r"\w"),
            'W' => self.push_charset(ASCII_WORD, true, r"\W"),
            's' => self.push_charset(ASCII_SPACE, false, r"\s"),
            'S' => self.push_charset(ASCII_SPACE, true, r"\S"),
            'b' | 'B' if self.charset_depth == 0 => {
                self.output.push_str("(?-u:\\");
                self.output.push(escaped_char);
                self.output.push(')');
            }
            'p' | 'P' => {
                let negative = escaped_char == 'P';
                let property = self.take_property();
                let original = format!("\\{}{}", escaped_char, property);
                match property.as_str() {
                    "{Lu}" => self.push_charset(ASCII_UPPER, negative, &original),
                    "{Ll}" => self.push_charset(ASCII_LOWER, negative, &original),
                    _ => self.output.push_str(&original),
                }
            }
            _ => {
                self.output.push('\\');
                self.output.push(escaped_char);
            }
        }
    }

    // takes either `{name}` or a single letter name, e.g. `\pL`
    fn take_property(&mut self) -> String {
        let mut property = String::new();

        if self.peek_char_and_equals(0, '{') {
            while let Some(c) = self.next_char() {
                property.push(c);
                if c == '}' {
                    break;
                }
            }
        } else if let Some(c) = self.next_char() {
            property.push(c);
        }

        property
    }

    fn push_charset(&mut self, members: &str, negative: bool, original: &str) {
        if self.charset_depth > 0 {
            if negative {
                self.output.push_str(original);
            } else {
                self.output.push_str(members);
            }
        } else {
            self.output.push('[');
            if negative {
                self.output.push('^');
            }
            self.output.push_str(members);
            self.output.push(']');
        }
    }
}
