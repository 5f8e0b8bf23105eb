//! # Error Types
//!
//! Error types shared across subsystems, plus the `ErrorKind` taxonomy every
//! subsystem error maps onto so the host can react uniformly (abort the
//! enclosing transaction, surface a query error, ...).

use thiserror::Error;

/// Cross-subsystem error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed params, amount or address. Rejected before any write.
    Validation,
    /// One-time operation attempted a second time.
    AlreadyInitialized,
    /// Lookup of a missing record.
    NotFound,
    /// Feature flag (minting, trading) is off.
    Disabled,
    /// Store handle missing or unreachable.
    StoreUnavailable,
    /// A host capability (bank) refused the operation.
    Capability,
    /// A persisted record could not be decoded.
    Corruption,
}

/// Maps a subsystem error onto the shared taxonomy.
pub trait Classify {
    fn kind(&self) -> ErrorKind;
}

/// Key-value store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store handle is missing or the backend is unreachable.
    #[error("Store unavailable: {reason}")]
    Unavailable { reason: String },

    /// I/O error during read/write.
    #[error("Store I/O error: {message}")]
    Io { message: String },

    /// A value could not be encoded or decoded.
    #[error("Codec error: {message}")]
    Codec { message: String },
}

impl Classify for StoreError {
    fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Unavailable { .. } | StoreError::Io { .. } => ErrorKind::StoreUnavailable,
            StoreError::Codec { .. } => ErrorKind::Corruption,
        }
    }
}

/// A field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl Classify for ValidationError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

/// Address parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,

    #[error("address must start with {expected}")]
    MissingPrefix { expected: String },

    #[error("address has no body after the prefix")]
    EmptyBody,

    #[error("address too long: {len} characters, max {max}")]
    TooLong { len: usize, max: usize },

    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
}

impl From<AddressError> for ValidationError {
    fn from(err: AddressError) -> Self {
        ValidationError::new("address", err.to_string())
    }
}

/// Key layout errors (detected at construction time).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyLayoutError {
    #[error("key prefix for {entity} is empty")]
    EmptyPrefix { entity: String },

    #[error("key prefix for {first} collides with {second}")]
    Collision { first: String, second: String },
}
