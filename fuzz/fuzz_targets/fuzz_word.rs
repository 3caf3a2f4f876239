// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

#![no_main]

use libfuzzer_sys::fuzz_target;

use forcedle::domain::Word;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(word) = s.parse::<Word>() {
        // Accepted words display as five lowercase letters and reparse to
        // the same value.
        let shown = word.to_string();
        assert_eq!(shown.len(), 5);
        assert_eq!(shown.parse::<Word>().unwrap(), word);
    }
});
