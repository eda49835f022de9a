use serde::{Deserialize, Serialize};

/// Word / character / line counts shown in the editor status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub words: usize,
    pub chars: usize,
    pub lines: usize,
}

impl TextStats {
    /// Counts words (whitespace-separated, non-empty), characters, and lines.
    /// An empty body still counts as one line, matching what an editor caret
    /// on an empty document shows.
    pub fn of(text: &str) -> Self {
        Self {
            words: text.split_whitespace().count(),
            chars: text.chars().count(),
            lines: text.split('\n').count(),
        }
    }
}
