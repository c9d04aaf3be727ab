use sha2::{Digest, Sha256};

/// Double SHA-256 over raw bytes: `SHA256(SHA256(input))`.
///
/// Both passes operate on raw bytes, not hex-encoded text.
#[inline]
#[must_use]
pub fn double_sha256(input: &[u8]) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update(input);
    let inner = h.finalize();

    let mut h2 = Sha256::new();
    h2.update(inner);
    let digest = h2.finalize();

    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}
