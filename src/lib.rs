#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

//! Merkle Engine
//!
//! This crate computes and verifies Merkle roots over ordered lists of
//! pre-hashed data items, following the construction used by Bitcoin for
//! transaction trees.
//!
//! Fixed algorithmic choices:
//! - Hash: double SHA-256 (32-byte output)
//! - Byte order: leaves arrive as display-order hex, are byte-reversed
//!   into internal order for hashing, and the root is reversed back for
//!   display (the "little-endian internal, big-endian display" convention)
//! - Pairing: index 0 with 1, 2 with 3, ...; an odd-width level duplicates
//!   its last node; a single leaf is paired with itself
//! - Output: canonical uppercase hexadecimal
//!
//! The engine is pure and stateless. Every call is an independent
//! computation with no shared or global state, so concurrent use from
//! multiple callers is safe.

// Core modules
pub mod errors;
pub mod hashers;
pub mod merkle;
pub mod ser;

// Re-export commonly used types and functions
pub use errors::MerkleError;
pub use hashers::double_sha256;
pub use merkle::{root, verify};
pub use ser::{flip, to_display_hex, to_internal_digest, Digest};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
