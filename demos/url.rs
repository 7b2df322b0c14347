// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use verbex::Verbex;

pub fn main() {
    let mut tester = Verbex::new();
    tester
        .start_of_line()
        .find("http")
        .maybe("s")
        .find("://")
        .maybe("www.")
        .anything_but(" ")
        .end_of_line();

    println!("Pattern: {}", tester);

    let re = tester.regex().unwrap();
    for url in ["https://www.google.com", "http://example.org/a b"] {
        if re.is_match(url).unwrap() {
            println!("Valid URL: {}", url);
        } else {
            println!("Invalid URL: {}", url);
        }
    }

    // replace
    let mut bird = Verbex::new();
    bird.find("bird");
    let re = bird.regex().unwrap();
    println!("{}", re.replace("Replace bird with a duck", "duck").unwrap());
}
