//! WinAnsi encoding for the built-in PDF font.

use crate::config::UnsupportedCharPolicy;
use crate::error::{NotesError, Result};

/// Characters in 0x80..=0x9F that WinAnsi assigns beyond Latin-1.
const WIN_ANSI_EXTRAS: [(char, u8); 27] = [
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

fn encode_char(c: char) -> Option<u8> {
    match c {
        '\n' => Some(b'\n'),
        '\t' => Some(b' '),
        ' '..='~' => Some(c as u8),
        '\u{A0}'..='\u{FF}' => Some(c as u32 as u8),
        _ => WIN_ANSI_EXTRAS
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, byte)| *byte),
    }
}

/// Encode text as WinAnsi bytes.
///
/// Carriage returns are dropped so CRLF text lays out like LF text, and tabs
/// become spaces. Any other character outside WinAnsi is handled according
/// to `policy`; `position` in the error is the character index.
pub fn encode_win_ansi(text: &str, policy: UnsupportedCharPolicy) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(text.len());

    for (position, c) in text.chars().enumerate() {
        if c == '\r' {
            continue;
        }
        match (encode_char(c), policy) {
            (Some(byte), _) => bytes.push(byte),
            (None, UnsupportedCharPolicy::Replace) => bytes.push(b'?'),
            (None, UnsupportedCharPolicy::Strict) => {
                return Err(NotesError::Encoding {
                    character: c,
                    position,
                })
            }
        }
    }

    Ok(bytes)
}
