// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

mod coloring;
mod lexicon;
mod puzzle;
mod word;

pub use coloring::*;
pub use lexicon::*;
pub use puzzle::*;
pub use word::*;
