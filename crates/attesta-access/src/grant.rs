//! The access grant: a time-bounded permission for one verifier.

use serde::{Deserialize, Serialize};

/// Maximum grant duration: 365 days in milliseconds.
pub const MAX_GRANT_DURATION_MS: i64 = 365 * 24 * 60 * 60 * 1000;

/// A time-bounded permission for a specific verifier on a specific record.
///
/// Expiry is evaluated live against the deadline on every check; there is
/// no sweep and no timer. Revocation flips `active` and is immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGrant {
    /// When the grant was created (unix ms).
    pub granted_at: i64,

    /// Deadline: the grant is live strictly before this instant (unix ms).
    pub expires_at: i64,

    /// False once revoked by the subject.
    pub active: bool,
}

impl AccessGrant {
    /// Create a grant running from `granted_at` for `duration_ms`.
    ///
    /// The caller validates the duration range; this constructor only does
    /// arithmetic.
    pub fn new(granted_at: i64, duration_ms: i64) -> Self {
        Self {
            granted_at,
            expires_at: granted_at + duration_ms,
            active: true,
        }
    }

    /// Whether the grant is live at `now`: active and not yet expired.
    pub fn is_live(&self, now: i64) -> bool {
        self.active && now < self.expires_at
    }
}

/// Whether a requested duration is inside the allowed `(0, 365 days]` range.
pub fn duration_in_range(duration_ms: i64) -> bool {
    duration_ms > 0 && duration_ms <= MAX_GRANT_DURATION_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_until_deadline() {
        let grant = AccessGrant::new(1000, 500);
        assert_eq!(grant.expires_at, 1500);
        assert!(grant.is_live(1000));
        assert!(grant.is_live(1499));
        assert!(!grant.is_live(1500), "deadline instant is already expired");
        assert!(!grant.is_live(2000));
    }

    #[test]
    fn test_revoked_grant_never_live() {
        let mut grant = AccessGrant::new(1000, 500);
        grant.active = false;
        assert!(!grant.is_live(1100));
    }

    #[test]
    fn test_duration_range() {
        assert!(!duration_in_range(0));
        assert!(!duration_in_range(-1));
        assert!(duration_in_range(1));
        assert!(duration_in_range(MAX_GRANT_DURATION_MS));
        assert!(!duration_in_range(MAX_GRANT_DURATION_MS + 1));
    }
}
