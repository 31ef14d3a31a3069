//! Level files.
//!
//! Two on-disk formats carry the same static wall list:
//!
//! * **text** (`.walls`) – one wall per line, hand-editable;
//! * **binary** – `WALL` magic, `u32` LE count, then fixed 19-byte records.
//!
//! [`load_level`] sniffs the magic, so the extension does not matter.

mod binary;
mod text;

use std::{fs, io, path::Path};

use thiserror::Error;

use crate::world::Level;

pub use binary::{MAGIC, RECORD_SIZE, decode_binary, encode_binary};
pub use text::parse_text;

/// Everything that can go wrong while reading a level.
#[derive(Error, Debug)]
pub enum LevelError {
    /// Underlying I/O failure – propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("level text is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("line {line}: expected `R G B : x1,y1 -> x2,y2`, got `{text}`")]
    BadLine { line: usize, text: String },

    #[error("line {line}: colour channel {value} outside 0..=255")]
    BadChannel { line: usize, value: u32 },

    #[error("not a WALL file")]
    BadMagic,

    #[error("header claims {count} walls but only {available} bytes follow")]
    Truncated { count: u32, available: usize },

    #[error("wall record {index}: {source}")]
    BadRecord {
        index: usize,
        source: bincode::error::DecodeError,
    },

    #[error("wall record {index}: coordinate is not finite")]
    NonFinite { index: usize },

    #[error(transparent)]
    Encode(#[from] bincode::error::EncodeError),
}

/// Read a level from `path`, text or binary.
pub fn load_level<P: AsRef<Path>>(path: P) -> Result<Level, LevelError> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let bytes = fs::read(path)?;
    if bytes.starts_with(MAGIC) {
        decode_binary(name, &bytes)
    } else {
        parse_text(name, &String::from_utf8(bytes)?)
    }
}
