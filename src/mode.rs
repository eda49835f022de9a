use serde::{Deserialize, Serialize};
use std::fmt;

/// The presentational mode of an editor session.
///
/// Modes are pure views over the same content: every mode can transition to
/// every other mode. What changes is whether mutation is permitted: Preview
/// rejects edits, Edit and Split accept them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Full editing surface, no rendered preview.
    #[default]
    Edit,
    /// Rendered preview only. Content is read-only in this mode.
    Preview,
    /// Editing surface and rendered preview side by side.
    Split,
}

impl EditorMode {
    /// Returns true if content may be mutated while in this mode.
    pub fn is_writable(self) -> bool {
        !matches!(self, EditorMode::Preview)
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Edit => write!(f, "edit"),
            EditorMode::Preview => write!(f, "preview"),
            EditorMode::Split => write!(f, "split"),
        }
    }
}
