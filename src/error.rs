// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    /// A builder method was called with arguments it cannot accept.
    /// The builder is left untouched when this is returned.
    InvalidArgument(String),

    /// The regex engine refused the rendered pattern.
    Compile(String),

    /// The regex engine failed while matching, e.g. the backtrack limit
    /// was exceeded.
    Runtime(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::Compile(msg) => write!(f, "Failed to compile pattern: {}", msg),
            Error::Runtime(msg) => write!(f, "Failed to run pattern: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<fancy_regex::Error> for Error {
    fn from(value: fancy_regex::Error) -> Self {
        match value {
            fancy_regex::Error::RuntimeError(e) => Error::Runtime(e.to_string()),
            other => Error::Compile(other.to_string()),
        }
    }
}
