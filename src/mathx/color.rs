//! Hex colour parsing for the asset-free palette.

use bevy::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexColorError {
    #[error("expected 6 hex digits, got {0} characters")]
    Length(usize),
    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

/// Parse `"RRGGBB"` into an opaque sRGB colour.
pub fn hex(code: &str) -> Result<Color, HexColorError> {
    if code.len() != 6 {
        return Err(HexColorError::Length(code.chars().count()));
    }
    if !code.is_ascii() {
        return Err(HexColorError::Digit(code.to_owned()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&code[range], 16).map_err(|_| HexColorError::Digit(code.to_owned()))
    };

    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;

    Ok(Color::srgb_u8(r, g, b))
}
