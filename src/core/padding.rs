//! Space padding to a block multiple.
//!
//! The same primitive pads plaintext to the cipher block size and
//! passwords to a triple DES key length.

use crate::core::constants::PAD_BYTE;

/// Append spaces to `bytes` until its length is a positive multiple of `block`.
///
/// Empty input becomes exactly `block` spaces. A `block` of zero returns
/// the input unchanged.
pub fn pad_bytes(bytes: &[u8], block: usize) -> Vec<u8> {
    let target = padded_len(bytes.len(), block);
    let mut padded = Vec::with_capacity(target);
    padded.extend_from_slice(bytes);
    padded.resize(target, PAD_BYTE);
    padded
}

/// Append spaces to `text` until its UTF-8 byte length is a positive multiple of `block`.
pub fn pad(text: &str, block: usize) -> String {
    let mut padded = String::with_capacity(text.len() + block);
    padded.push_str(text);
    let missing = padded_len(text.len(), block) - text.len();
    padded.extend(std::iter::repeat(PAD_BYTE as char).take(missing));
    padded
}

/// Length of `len` bytes once padded to `block`.
pub fn padded_len(len: usize, block: usize) -> usize {
    match (len, block) {
        (len, 0) => len,
        (0, block) => block,
        (len, block) => len.div_ceil(block) * block,
    }
}

/// Strip padding (and any other trailing whitespace) from decrypted text.
///
/// Lossy: text that legitimately ends in whitespace loses it.
pub fn unpad(text: &str) -> &str {
    text.trim_end()
}
