//! Image loading.
//!
//! Initial images are whitespace-separated streams of hexadecimal byte
//! tokens (an optional `0x`/`0X` prefix is accepted, case-insensitive).
//! One stream populates the instruction store, one the data store, and one
//! the registers in index order; missing trailing tokens leave the
//! corresponding slots at zero. Any open or parse failure is fatal before
//! simulation starts.

use std::fs;
use std::path::Path;

use crate::common::constants::{NUM_REGISTERS, STORE_SIZE};
use crate::common::error::{ImageError, SimError};

/// Parses a hex-byte token stream into at most `capacity` bytes.
///
/// # Errors
///
/// Returns [`ImageError::BadToken`] for a token that is not a valid
/// hexadecimal byte and [`ImageError::TooLarge`] when the stream holds more
/// tokens than the target container.
pub fn parse_hex_bytes(text: &str, capacity: usize) -> Result<Vec<u8>, ImageError> {
    let mut bytes = Vec::new();
    for token in text.split_whitespace() {
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        let byte = u8::from_str_radix(digits, 16).map_err(|_| ImageError::BadToken {
            token: token.to_string(),
        })?;
        bytes.push(byte);
    }
    if bytes.len() > capacity {
        return Err(ImageError::TooLarge {
            count: bytes.len(),
            capacity,
        });
    }
    Ok(bytes)
}

/// Reads and parses a store image (instruction or data) from a file.
///
/// # Errors
///
/// Returns [`SimError::Image`] if the file cannot be read or parsed.
pub fn load_store_image(path: &Path) -> Result<Vec<u8>, SimError> {
    Ok(parse_hex_bytes(&read_image(path)?, STORE_SIZE)?)
}

/// Reads and parses a register image from a file.
///
/// # Errors
///
/// Returns [`SimError::Image`] if the file cannot be read or parsed.
pub fn load_register_image(path: &Path) -> Result<Vec<u8>, SimError> {
    Ok(parse_hex_bytes(&read_image(path)?, NUM_REGISTERS)?)
}

fn read_image(path: &Path) -> Result<String, ImageError> {
    fs::read_to_string(path).map_err(|source| ImageError::Open {
        path: path.to_path_buf(),
        source,
    })
}
