// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{borrow::Cow, sync::OnceLock};

use fancy_regex::{Captures, Match, Regex, RegexBuilder};

use crate::{ascii::to_ascii_charsets, error::Error, flags::Flags};

// same as the default limit of `fancy_regex`
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CompileOptions {
    /// Maximum number of backtracking steps for patterns that need the
    /// backtracking VM, e.g. patterns with lookbehind.
    pub backtrack_limit: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
        }
    }
}

/// A compiled pattern.
///
/// The regex that searches anywhere in the text is built by `compile`.
/// The regexes anchored at the start of the text and covering the whole
/// text are built on the first call of `match_start` and `full_match`.
#[derive(Debug)]
pub struct Pattern {
    source: String,
    flags: Flags,
    options: CompileOptions,

    // the pattern handed to the engine, after the ASCII rewrite
    body: String,
    search: Regex,
    start: OnceLock<Result<Regex, Error>>,
    full: OnceLock<Result<Regex, Error>>,
}

/// Compile `pattern` with `flags`.
///
/// The flags are applied as an inline group in front of the pattern, and
/// `Flags::ASCII` rewrites the preset charsets into ASCII-only charsets.
pub fn compile(pattern: &str, flags: Flags, options: &CompileOptions) -> Result<Pattern, Error> {
    log::debug!(
        "compiling pattern {:?} with flags {:?} and backtrack limit {}",
        pattern,
        flags,
        options.backtrack_limit
    );

    let body = if flags.contains(Flags::ASCII) {
        to_ascii_charsets(pattern)
    } else {
        pattern.to_owned()
    };

    let search = build(&format!("{}{}", flags.inline_prefix(), body), options)?;

    Ok(Pattern {
        source: pattern.to_owned(),
        flags,
        options: *options,
        body,
        search,
        start: OnceLock::new(),
        full: OnceLock::new(),
    })
}

fn build(pattern: &str, options: &CompileOptions) -> Result<Regex, Error> {
    RegexBuilder::new(pattern)
        .backtrack_limit(options.backtrack_limit)
        .build()
        .map_err(|e| {
            log::debug!("pattern {:?} rejected: {}", pattern, e);
            Error::from(e)
        })
}

impl Pattern {
    /// The pattern as rendered by the builder, without the flags.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Whether the pattern occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> Result<bool, Error> {
        Ok(self.search.is_match(text)?)
    }

    /// The first occurrence of the pattern in `text`.
    pub fn search<'t>(&self, text: &'t str) -> Result<Option<Match<'t>>, Error> {
        Ok(self.search.find(text)?)
    }

    /// Match at the start of `text`, the rest of `text` is ignored.
    pub fn match_start<'t>(&self, text: &'t str) -> Result<Option<Match<'t>>, Error> {
        let regex = self.anchored(&self.start, "")?;
        Ok(regex.find(text)?)
    }

    /// Match the whole of `text`.
    pub fn full_match<'t>(&self, text: &'t str) -> Result<Option<Match<'t>>, Error> {
        let regex = self.anchored(&self.full, r"\z")?;
        Ok(regex.find(text)?)
    }

    // the body is wrapped in a group so that a top-level `|` stays
    // inside the anchors
    fn anchored<'a>(
        &self,
        cell: &'a OnceLock<Result<Regex, Error>>,
        end_anchor: &str,
    ) -> Result<&'a Regex, Error> {
        cell.get_or_init(|| {
            build(
                &format!(
                    r"{}\A(?:{}){}",
                    self.flags.inline_prefix(),
                    self.body,
                    end_anchor
                ),
                &self.options,
            )
        })
        .as_ref()
        .map_err(Clone::clone)
    }

    /// All non-overlapping occurrences of the pattern in `text`.
    pub fn find_all<'t>(&self, text: &'t str) -> Result<Vec<Match<'t>>, Error> {
        self.search
            .find_iter(text)
            .map(|item| item.map_err(Error::from))
            .collect()
    }

    pub fn captures<'t>(&self, text: &'t str) -> Result<Option<Captures<'t>>, Error> {
        Ok(self.search.captures(text)?)
    }

    /// Replace the first occurrence with `replacement`, which may refer
    /// to groups as `$1` or `${name}`.
    pub fn replace<'t>(&self, text: &'t str, replacement: &str) -> Result<Cow<'t, str>, Error> {
        Ok(self.search.try_replacen(text, 1, replacement)?)
    }

    /// Replace all occurrences with `replacement`.
    pub fn replace_all<'t>(&self, text: &'t str, replacement: &str) -> Result<Cow<'t, str>, Error> {
        Ok(self.search.try_replacen(text, 0, replacement)?)
    }
}
