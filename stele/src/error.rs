// Copyright 2026 the Stele Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use thiserror::Error;

/// Errors produced while parsing input or rendering an inscription.
#[derive(Debug, Error)]
pub enum Error {
    /// A token looked like a Unicode hex code point but did not convert.
    #[error("invalid Unicode hex: {0}")]
    InvalidHex(String),
    /// A literal character outside the Egyptian Hieroglyphs block.
    #[error("unexpected character '{ch}' (U+{code:X})")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Its code point.
        code: u32,
    },
    /// The direction string was neither horizontal nor vertical.
    #[error("unknown direction {0:?}, expected 'V' or 'H'")]
    UnknownDirection(String),
    /// The output file stem failed validation.
    #[error("invalid file name: {0}")]
    InvalidFileName(String),
    /// The font file could not be parsed.
    #[error("failed to read font: {0}")]
    Font(String),
    /// The font has no glyph for a requested character.
    #[error("font has no glyph for '{ch}' (U+{code:X})", ch = .0, code = *.0 as u32)]
    MissingGlyph(char),
    /// The glyph sequence was empty.
    #[error("inscription contains no glyphs")]
    EmptyInscription,
    /// An I/O failure while writing the output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A PNG encoding failure.
    #[error(transparent)]
    Png(#[from] png::EncodingError),
}
