//! The transcript record: the atomic unit the registry stores.

use serde::{Deserialize, Serialize};

use crate::crypto::{ContentHash, Identity, SubjectHash};
use crate::types::{RecordId, RecordStatus};

/// A single academic-transcript record.
///
/// The registry never stores the transcript file itself, only an external
/// metadata pointer and the file's content digest. Records are append-only:
/// the one mutable field is `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    /// Derived identifier, unique within the owning store.
    pub record_id: RecordId,

    /// Digest identifying the subject; never a raw identity.
    pub subject_hash: SubjectHash,

    /// Pointer to externally stored descriptive metadata (e.g. a CID).
    pub metadata_ref: String,

    /// Digest of the off-chain transcript file.
    pub content_hash: ContentHash,

    /// The identity that registered the record.
    pub issuer: Identity,

    /// When the record was registered (unix ms).
    pub issued_at: i64,

    /// Current lifecycle status.
    pub status: RecordStatus,
}

impl TranscriptRecord {
    /// Whether a transition from the current status to `next` is legal.
    ///
    /// Self-transitions are the only illegal move; everything else,
    /// including returning to a previously held status, is allowed.
    pub fn can_transition_to(&self, next: RecordStatus) -> bool {
        self.status != next
    }
}
