//! Byte-order conversions at the module boundary.
//!
//! Hex strings represent digests in display byte order; hashing operates on
//! the reversed (internal) byte order. The reversal is kept as an explicit,
//! named step here rather than being entangled with hex encode/decode.

/// A fixed-length hash value in internal (reversed) byte order.
///
/// Leaf digests share one caller-determined length; every interior node is
/// a 32-byte SHA-256 output.
pub type Digest = Vec<u8>;

/// Reverse the byte order of a buffer, returning the flipped copy.
///
/// The flip is its own inverse: `flip(&flip(x)) == x`.
#[must_use]
pub fn flip(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

/// Decode a hexadecimal leaf into its internal (byte-reversed) digest.
///
/// Surrounding ASCII whitespace is tolerated.
///
/// # Errors
///
/// Returns `hex::FromHexError` for odd-length input or non-hexadecimal
/// characters.
pub fn to_internal_digest(hex_str: &str) -> Result<Digest, hex::FromHexError> {
    let mut digest = hex::decode(hex_str.trim())?;
    digest.reverse();
    Ok(digest)
}

/// Encode an internal digest back to its canonical display form:
/// byte-reversed, uppercase hexadecimal.
#[must_use]
pub fn to_display_hex(digest: &[u8]) -> String {
    hex::encode_upper(flip(digest))
}
