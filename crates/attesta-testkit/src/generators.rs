//! Proptest strategies for registry inputs.

use proptest::prelude::*;

use attesta_access::MAX_GRANT_DURATION_MS;
use attesta_core::{ContentHash, Identity, SubjectHash};

/// A non-zero 32-byte array.
fn nonzero_bytes() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>().prop_filter("zero is a reserved sentinel", |b| b != &[0u8; 32])
}

/// An arbitrary non-zero identity.
pub fn identity() -> impl Strategy<Value = Identity> {
    nonzero_bytes().prop_map(Identity::from_bytes)
}

/// An arbitrary non-zero subject hash.
pub fn subject_hash() -> impl Strategy<Value = SubjectHash> {
    nonzero_bytes().prop_map(SubjectHash::from_bytes)
}

/// An arbitrary non-zero content hash.
pub fn content_hash() -> impl Strategy<Value = ContentHash> {
    nonzero_bytes().prop_map(ContentHash::from_bytes)
}

/// A plausible non-empty metadata reference (CID-shaped).
pub fn metadata_ref() -> impl Strategy<Value = String> {
    "[a-z2-7]{8,46}".prop_map(|s| format!("bafy{s}"))
}

/// A duration inside the allowed `(0, 365 days]` range.
pub fn valid_duration_ms() -> impl Strategy<Value = i64> {
    1..=MAX_GRANT_DURATION_MS
}

/// A duration outside the allowed range.
pub fn invalid_duration_ms() -> impl Strategy<Value = i64> {
    prop_oneof![
        Just(0i64),
        i64::MIN..0,
        (MAX_GRANT_DURATION_MS + 1)..=i64::MAX / 2,
    ]
}

/// Full valid registration inputs.
pub fn registration() -> impl Strategy<Value = (SubjectHash, String, ContentHash)> {
    (subject_hash(), metadata_ref(), content_hash())
}

#[cfg(test)]
mod tests {
    use super::*;
    use attesta_access::duration_in_range;

    proptest! {
        #[test]
        fn generated_durations_respect_their_range(
            valid in valid_duration_ms(),
            invalid in invalid_duration_ms(),
        ) {
            prop_assert!(duration_in_range(valid));
            prop_assert!(!duration_in_range(invalid));
        }

        #[test]
        fn generated_inputs_are_nonzero((subject, cid, content) in registration()) {
            prop_assert!(!subject.is_zero());
            prop_assert!(!content.is_zero());
            prop_assert!(!cid.is_empty());
        }
    }
}
