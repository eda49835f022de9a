use crate::mode::EditorMode;

/// Events broadcast by an editor session as its state changes.
///
/// Hosts subscribe to drive UI affordances: the autosave indicator, the mode
/// toolbar, re-rendering the preview pane after content changes.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The presentational mode changed. Not emitted for same-mode calls.
    ModeChanged {
        old: EditorMode,
        new: EditorMode,
    },
    /// Content was mutated through an edit, undo, or redo.
    ContentChanged,
    /// A template replaced the document body.
    TemplateApplied {
        name: String,
    },
    /// Content was durably persisted.
    Saved {
        at: u64,
    },
    /// The storage collaborator reported a failure; the session stays dirty
    /// and will retry on the next tick.
    SaveFailed,
    /// The session was closed by the host; the autosave timer is cancelled.
    Closed,
}
