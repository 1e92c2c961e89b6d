//! Property tests for the structured cache key.

use bot_forge::CacheKey;
use proptest::prelude::*;

/// A string with two distinct split points, each producing a (role,
/// difficulty) pair whose concatenation is identical
fn splits() -> impl Strategy<Value = (String, usize, usize)> {
    "[a-z]{4,16}".prop_flat_map(|s| {
        let len = s.len();
        (Just(s), 1..len, 1..len)
    })
}

proptest! {
    // Identical concatenations with different split points must land in
    // different cache entries; a naive concatenated-string key fails this
    #[test]
    fn distinct_splits_get_distinct_keys((s, i, j) in splits()) {
        prop_assume!(i != j);
        let a = CacheKey::new(&s[..i], &s[i..]);
        let b = CacheKey::new(&s[..j], &s[j..]);
        prop_assert_ne!(a, b);
    }

    #[test]
    fn key_equality_is_componentwise(
        r1 in "[a-zA-Z]{1,8}",
        d1 in "[a-zA-Z]{1,8}",
        r2 in "[a-zA-Z]{1,8}",
        d2 in "[a-zA-Z]{1,8}",
    ) {
        let same = r1.eq_ignore_ascii_case(&r2) && d1.eq_ignore_ascii_case(&d2);
        prop_assert_eq!(CacheKey::new(&r1, &d1) == CacheKey::new(&r2, &d2), same);
    }

    #[test]
    fn key_preserves_components_lowercased(role in "[a-zA-Z]{1,12}", tier in "[a-zA-Z]{1,12}") {
        let key = CacheKey::new(&role, &tier);
        prop_assert_eq!(key.role(), role.to_lowercase());
        prop_assert_eq!(key.difficulty(), tier.to_lowercase());
    }
}
