// Copyright 2026 the Stele Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing and validation of user-supplied glyph sequences and file names.

use crate::Error;

/// First code point of the Egyptian Hieroglyphs block.
pub const HIEROGLYPH_BLOCK_START: u32 = 0x13000;
/// Last code point of the Egyptian Hieroglyphs block.
pub const HIEROGLYPH_BLOCK_END: u32 = 0x1342F;

/// Maximum length of an output file stem.
pub const MAX_FILE_STEM_LEN: usize = 100;

/// Returns whether `ch` lies in the Egyptian Hieroglyphs block.
pub fn is_hieroglyph(ch: char) -> bool {
    (HIEROGLYPH_BLOCK_START..=HIEROGLYPH_BLOCK_END).contains(&(ch as u32))
}

/// Parses a whitespace-separated glyph input string into an ordered
/// character sequence.
///
/// Each token is either a 4–6 digit hexadecimal code point or a run of
/// literal characters. Every resulting character must lie in the Egyptian
/// Hieroglyphs block (U+13000..=U+1342F); order is preserved and duplicates
/// are allowed.
pub fn parse_glyphs(raw: &str) -> Result<Vec<char>, Error> {
    let mut glyphs = Vec::new();
    for token in raw.split_whitespace() {
        if is_hex_token(token) {
            let code = u32::from_str_radix(token, 16)
                .map_err(|_| Error::InvalidHex(token.to_owned()))?;
            let ch = char::from_u32(code).ok_or_else(|| Error::InvalidHex(token.to_owned()))?;
            push_hieroglyph(&mut glyphs, ch)?;
        } else {
            for ch in token.chars() {
                push_hieroglyph(&mut glyphs, ch)?;
            }
        }
    }
    Ok(glyphs)
}

fn is_hex_token(token: &str) -> bool {
    (4..=6).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_hexdigit())
}

fn push_hieroglyph(glyphs: &mut Vec<char>, ch: char) -> Result<(), Error> {
    if is_hieroglyph(ch) {
        glyphs.push(ch);
        Ok(())
    } else {
        Err(Error::UnexpectedCharacter {
            ch,
            code: ch as u32,
        })
    }
}

/// Validates and normalizes an output file name.
///
/// The name is lowercased, a trailing `.png` is stripped, and the remaining
/// stem must be 1..=100 characters drawn from letters, digits, underscore,
/// dash and space. Returns the normalized full file name including the
/// `.png` suffix.
pub fn validate_output_name(raw: &str) -> Result<String, Error> {
    let lower = raw.trim().to_lowercase();
    let stem = lower.strip_suffix(".png").unwrap_or(&lower);
    if stem.is_empty() || stem.chars().count() > MAX_FILE_STEM_LEN {
        return Err(Error::InvalidFileName(
            "file name must be between 1 and 100 characters".to_owned(),
        ));
    }
    let ok = stem
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' '));
    if !ok {
        return Err(Error::InvalidFileName(
            "only letters, numbers, underscores, dashes, and spaces allowed".to_owned(),
        ));
    }
    Ok(format!("{stem}.png"))
}
