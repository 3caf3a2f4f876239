// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

pub mod colorings;
pub mod finder;
pub mod forces;
pub mod hardmode;
pub mod solver;
pub mod stats;
pub mod store;
pub mod wordlist;
