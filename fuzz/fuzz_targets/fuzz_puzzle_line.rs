// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

#![no_main]

use libfuzzer_sys::fuzz_target;

use forcedle::domain::Puzzle;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };
    // Parsing must reject bad lines without panicking, and accepted lines
    // must survive a round trip.
    if let Ok(puzzle) = Puzzle::parse_line(line) {
        let reparsed = Puzzle::parse_line(&puzzle.to_line()).unwrap();
        assert_eq!(reparsed, puzzle);
    }
});
