// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

#![no_main]

use libfuzzer_sys::fuzz_target;

use forcedle::domain::{ALL_GREEN, Coloring, Word};

fn word_from(bytes: &[u8]) -> Word {
    let letters: String = bytes
        .iter()
        .take(5)
        .map(|b| char::from(b'a' + b % 26))
        .collect();
    letters.parse().unwrap()
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    let guess = word_from(&data[..5]);
    let solution = word_from(&data[5..10]);

    let code = Coloring::score(guess, solution).code();
    assert!(code <= ALL_GREEN);
    if guess == solution {
        assert_eq!(code, ALL_GREEN);
    }
    // The code decodes back to the tiles that produced it.
    assert_eq!(Coloring::from_code(code).code(), code);
});
