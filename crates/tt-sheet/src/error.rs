//! Error types for the adventure sheet.

use thiserror::Error;

/// Result type for sheet operations.
pub type SheetResult<T> = Result<T, SheetError>;

/// Errors raised while loading, saving or configuring the sheet.
///
/// Mutations themselves never fail; invalid targets are ignored.
#[derive(Debug, Error)]
pub enum SheetError {
    /// A stored record exists but cannot be read as a sheet.
    #[error("corrupt save: {0}")]
    CorruptSave(#[source] serde_json::Error),

    /// A stored record exists but its bytes are not text.
    #[error("unreadable save: {0}")]
    UnreadableSave(#[source] std::io::Error),

    /// The record could not be serialized.
    #[error("cannot encode sheet: {0}")]
    Encode(#[source] serde_json::Error),

    /// The storage backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The file logger could not be started.
    #[error("logging error: {0}")]
    Logging(String),
}
