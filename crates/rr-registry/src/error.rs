use thiserror::Error;

/// Failure modes of the guarded registry operations.
///
/// Every operation validates synchronously and returns the first failing
/// check; a failed call leaves the registry untouched.  Each variant carries
/// a stable numeric code (see [`RegistryError::code`]) so callers that still
/// speak the historical integer codes can keep branching on them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("caller is not the current admin")]
    NotAuthorized,

    #[error("principal already has a registered node")]
    AlreadyRegistered,

    #[error("principal has no registered node")]
    NotRegistered,

    #[error("principal has no stake bonded")]
    InsufficientStake,

    #[error("node type is not one of relay, rpc, indexer")]
    InvalidNodeType,
}

impl RegistryError {
    /// The stable numeric code for this error.
    pub fn code(&self) -> u32 {
        match self {
            RegistryError::NotAuthorized => 100,
            RegistryError::AlreadyRegistered => 101,
            RegistryError::NotRegistered => 102,
            RegistryError::InsufficientStake => 103,
            RegistryError::InvalidNodeType => 104,
        }
    }
}
