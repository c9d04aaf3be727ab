//! Property-based tests for the Merkle root engine.

use merkle_engine::{flip, root, to_display_hex, to_internal_digest, verify};
use proptest::prelude::*;

/// A well-formed 32-byte leaf as lowercase hex.
fn leaf() -> impl Strategy<Value = String> {
    prop::array::uniform32(any::<u8>()).prop_map(hex::encode)
}

proptest! {
    #[test]
    fn root_is_deterministic(data in prop::collection::vec(leaf(), 1..24)) {
        let r1 = root(&data).expect("valid leaves");
        let r2 = root(&data).expect("valid leaves");
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn verify_accepts_its_own_root(data in prop::collection::vec(leaf(), 1..24)) {
        let r = root(&data).expect("valid leaves");
        prop_assert!(verify(&r, &data).expect("valid leaves"));
    }

    #[test]
    fn single_leaf_equals_duplicated_pair(x in leaf()) {
        let single = root(&[x.clone()]).expect("valid leaf");
        let pair = root(&[x.clone(), x]).expect("valid leaves");
        prop_assert_eq!(single, pair);
    }

    #[test]
    fn swapping_two_distinct_leaves_changes_the_root(a in leaf(), b in leaf()) {
        prop_assume!(a != b);
        let forward = root(&[a.clone(), b.clone()]).expect("valid leaves");
        let backward = root(&[b, a]).expect("valid leaves");
        prop_assert_ne!(forward, backward);
    }

    #[test]
    fn lowercased_root_never_verifies(data in prop::collection::vec(leaf(), 1..24)) {
        let r = root(&data).expect("valid leaves");
        let lower = r.to_lowercase();
        // A root with no alphabetic hex digits is unchanged by lowercasing
        prop_assume!(lower != r);
        prop_assert!(!verify(&lower, &data).expect("valid leaves"));
    }

    #[test]
    fn flip_is_involutive(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(flip(&flip(&bytes)), bytes);
    }

    #[test]
    fn display_round_trip_is_canonical(bytes in prop::array::uniform32(any::<u8>())) {
        let hex_str = hex::encode_upper(bytes);
        let digest = to_internal_digest(&hex_str).expect("valid hex");
        prop_assert_eq!(to_display_hex(&digest), hex_str);
    }

    #[test]
    fn root_output_is_uppercase_hex_of_leaf_width(data in prop::collection::vec(leaf(), 1..24)) {
        let r = root(&data).expect("valid leaves");
        prop_assert_eq!(r.len(), 64);
        prop_assert!(r.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }
}
