use crate::errors::MerkleError;
use crate::hashers::double_sha256;
use crate::ser::{to_display_hex, to_internal_digest, Digest};

/// Hash two sibling digests into their parent: `sha256d(left || right)`.
#[inline]
fn parent_hash(left: &[u8], right: &[u8]) -> Digest {
    let mut cat = Vec::with_capacity(left.len() + right.len());
    cat.extend_from_slice(left);
    cat.extend_from_slice(right);
    double_sha256(&cat).to_vec()
}

/// Decode every leaf into its internal digest, enforcing uniform length.
fn decode_leaves<S: AsRef<str>>(data: &[S]) -> Result<Vec<Digest>, MerkleError> {
    if data.is_empty() {
        return Err(MerkleError::Empty);
    }
    let mut leaves: Vec<Digest> = Vec::with_capacity(data.len());
    let mut expected = 0usize;
    for (index, datum) in data.iter().enumerate() {
        let digest = to_internal_digest(datum.as_ref())
            .map_err(|source| MerkleError::InvalidHex { index, source })?;
        if index == 0 {
            expected = digest.len();
        } else if digest.len() != expected {
            return Err(MerkleError::LengthMismatch {
                index,
                expected,
                got: digest.len(),
            });
        }
        leaves.push(digest);
    }
    Ok(leaves)
}

/// Reduce a leaf level to the single binary root. When the number of nodes
/// at a level is odd, the last node is duplicated.
fn reduce(mut level: Vec<Digest>) -> Digest {
    while level.len() > 1 {
        if level.len() % 2 == 1 {
            if let Some(last) = level.last().cloned() {
                level.push(last);
            }
        }
        let mut next: Vec<Digest> = Vec::with_capacity(level.len() / 2);
        let mut i = 0usize;
        while i < level.len() {
            next.push(parent_hash(&level[i], &level[i + 1]));
            i += 2;
        }
        level = next;
    }
    // length >= 1
    level.swap_remove(0)
}

/// Compute the Merkle root of an ordered sequence of hexadecimal leaf
/// hashes.
///
/// Each element is decoded from hex and byte-reversed into internal order;
/// the levels are then reduced pairwise with [`double_sha256`] until a
/// single digest remains, which is reversed back and returned as uppercase
/// hexadecimal. A single leaf is treated as the two-leaf tree over the leaf
/// and its own duplicate, mirroring the single-transaction-block case.
///
/// # Errors
///
/// Returns [`MerkleError::Empty`] when `data` is empty,
/// [`MerkleError::InvalidHex`] when an element is not valid hexadecimal or
/// has odd length, and [`MerkleError::LengthMismatch`] when decoded
/// elements differ in byte length.
pub fn root<S: AsRef<str>>(data: &[S]) -> Result<String, MerkleError> {
    let mut leaves = decode_leaves(data)?;
    if leaves.len() == 1 {
        let only = leaves[0].clone();
        leaves.push(only);
    }
    let binary_root = reduce(leaves);
    Ok(to_display_hex(&binary_root))
}

/// Check whether `root` is the Merkle root of `data`.
///
/// The comparison is exact and case-sensitive: only the canonical uppercase
/// form produced by [`root`] matches. A mismatch is `Ok(false)`, never an
/// error.
///
/// # Errors
///
/// Malformed `data` propagates the same [`MerkleError`] a direct [`root`]
/// call would.
pub fn verify<S: AsRef<str>>(root: &str, data: &[S]) -> Result<bool, MerkleError> {
    let computed = self::root(data)?;
    Ok(computed == root)
}
