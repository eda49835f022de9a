use thiserror::Error;

use crate::content::ContentKind;
use crate::mode::EditorMode;

/// Errors produced by session-level operations.
///
/// All of these are local to a single `EditorSession`; none are fatal to the
/// host. Mutation errors are rejected at the call site, save failures are
/// surfaced to the caller and retried on the next autosave tick.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A mutation was attempted while the session is in Preview mode.
    #[error("cannot edit content in {mode} mode")]
    InvalidMode { mode: EditorMode },

    /// The delta targets a different content kind than the session holds.
    #[error("delta for {delta} content cannot be applied to {content} content")]
    DeltaMismatch {
        content: ContentKind,
        delta: ContentKind,
    },

    /// The delta references a position that does not exist in the content.
    #[error("invalid edit: {0}")]
    InvalidEdit(String),

    /// The requested operation only applies to text content.
    #[error("operation requires text content, session holds {0}")]
    NotText(ContentKind),
}

/// Errors from the storage collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize content: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write content: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to read stored content: {0}")]
    Read(String),

    #[error("storage rejected the write: {0}")]
    Rejected(String),
}

/// Errors from the export collaborator.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The exporter cannot produce the requested format for this content kind.
    #[error("cannot export {content} content as {format}")]
    UnsupportedFormat {
        content: ContentKind,
        format: crate::export::ExportFormat,
    },

    #[error("failed to encode export payload: {0}")]
    Encoding(#[from] serde_json::Error),
}
