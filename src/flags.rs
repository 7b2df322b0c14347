// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use bitflags::bitflags;

bitflags! {
    /// Matching modes that apply to the whole compiled pattern.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u8 {
        /// Letters match regardless of case.
        const CASE_INSENSITIVE = 1 << 0;
        /// `^` and `$` match at the start and end of every line.
        const MULTI_LINE = 1 << 1;
        /// `\d`, `\w`, `\s` and the letter classes match ASCII only.
        const ASCII = 1 << 2;
    }
}

impl Flags {
    /// The inline flag group understood by the engine, e.g. `(?im)`.
    /// Empty when neither `CASE_INSENSITIVE` nor `MULTI_LINE` is set.
    pub fn inline_prefix(&self) -> String {
        let mut letters = String::new();
        if self.contains(Flags::CASE_INSENSITIVE) {
            letters.push('i');
        }
        if self.contains(Flags::MULTI_LINE) {
            letters.push('m');
        }

        if letters.is_empty() {
            letters
        } else {
            format!("(?{})", letters)
        }
    }
}
