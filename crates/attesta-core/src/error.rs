//! Error types and the shared violation taxonomy.

use thiserror::Error;

/// The four-way classification every registry failure maps into.
///
/// Callers that do not care about the specific error can branch on the kind:
/// preconditions are caller bugs to fix and retry, authorization failures
/// are denials worth auditing, conflicts reject a state change that would
/// contradict existing state, and not-found covers unknown keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Invalid input rejected before any state was touched.
    Precondition,
    /// The caller is not allowed to perform this operation.
    Authorization,
    /// The operation contradicts existing state.
    Conflict,
    /// A referenced tenant, record, or grant does not exist.
    NotFound,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ViolationKind::Precondition => "precondition",
            ViolationKind::Authorization => "authorization",
            ViolationKind::Conflict => "conflict",
            ViolationKind::NotFound => "not-found",
        };
        f.write_str(s)
    }
}

/// Errors from the implementation switch.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// The proposed logic carries the version already installed.
    #[error("implementation version {0} is already current")]
    AlreadyCurrent(u32),
}

impl SwitchError {
    /// Classify this error.
    pub fn kind(&self) -> ViolationKind {
        match self {
            SwitchError::AlreadyCurrent(_) => ViolationKind::Conflict,
        }
    }
}
