// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use verbex::{CharClass, Verbex};

pub fn main() {
    let mut hex = Verbex::new();
    hex.any_of(CharClass::Digit).or(Verbex::new().letter_range('a', 'f'));

    let mut color = Verbex::new();
    color
        .find("#")
        .named_capture_group("red", Verbex::new().n_times(&hex, 2))
        .unwrap()
        .named_capture_group("green", Verbex::new().n_times(&hex, 2))
        .unwrap()
        .named_capture_group("blue", Verbex::new().n_times(&hex, 2))
        .unwrap()
        .with_any_case();

    println!("Pattern: {}", color);

    let re = color.regex().unwrap();
    let text = "The color is #FFbb33 and the background is #bbdd99.";

    if let Some(m) = re.captures(text).unwrap() {
        println!("Found match: {}", m.get(0).unwrap().as_str());
        println!("Red: {}", m.name("red").unwrap().as_str());
        println!("Green: {}", m.name("green").unwrap().as_str());
        println!("Blue: {}", m.name("blue").unwrap().as_str());
    } else {
        println!("No match found");
    }

    for m in re.find_all(text).unwrap() {
        println!("Found match: {}", m.as_str());
    }
}
