// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

mod ascii;
mod error;
mod escape;
mod flags;
mod text;
mod token;

pub mod engine;
pub mod verbex;

pub use engine::{CompileOptions, Pattern};
pub use error::Error;
pub use escape::{escape, EscapedText};
pub use flags::Flags;
pub use text::{CharGroup, Text};
pub use token::{CharClass, SpecialChar};
pub use verbex::Verbex;
