//! Error types shared by the virtual machine's built-in functions.

use thiserror::Error;

/// Result type for built-in function operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while validating or executing a protocol call.
///
/// Every variant except [`Error::Serialization`] is fatal to the call that
/// raised it: the first failure short-circuits the remaining execution steps
/// and the enclosing transaction is expected to discard partial state.
#[derive(Debug, Error)]
pub enum Error {
    /// A required collaborator reference was absent at construction time.
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// Argument count, shape or value violation.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// An address argument does not match the caller's address length.
    #[error("invalid address length")]
    InvalidAddressLength,

    /// The receiver address is not valid for this operation.
    #[error("invalid receiver address")]
    InvalidReceiver,

    /// The account does not hold the role grant required by the operation.
    #[error("action not allowed: {0}")]
    ActionNotAllowed(String),

    /// The gas provided does not cover the computed cost of the call.
    #[error("not enough gas")]
    InsufficientGas,

    /// No acting account was supplied for an operation that requires one.
    #[error("missing user account")]
    MissingAccount,

    /// The loaded account does not expose per-account key-value storage.
    #[error("account does not support user storage")]
    UnsupportedAccountType,

    /// No stored token unit exists for the requested identifier and nonce.
    #[error("token not found")]
    TokenNotFound,

    /// Operations on the token are suspended ledger-wide.
    #[error("token is paused")]
    TokenPaused,

    /// No built-in function is registered under the requested name.
    #[error("function not found: {0}")]
    FunctionNotFound(String),

    /// Failure reported by the account or token storage collaborator.
    #[error("storage error: {0}")]
    Storage(String),

    /// Failure reported by the serializer collaborator.
    #[error("serialization error: {0}")]
    Serialization(String),
}
