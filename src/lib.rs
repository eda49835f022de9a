#![warn(clippy::all, rust_2018_idioms)]

pub mod content;
pub mod error;
pub mod event;
pub mod export;
pub mod mode;
pub mod search;
pub mod session;
pub mod shortcuts;
pub mod storage;
pub mod template;
pub mod theme;
pub mod util;

pub use content::{ChartKind, ChartSpec, Content, ContentKind, Delta, Series, TextStats};
pub use error::{EditorError, ExportError, StorageError};
pub use event::{EventBus, EventHandler, SessionEvent};
pub use export::{ContentExporter, ExportFormat, Exporter};
pub use mode::EditorMode;
pub use search::{Finder, Match, SearchOptions};
pub use session::{EditorSession, SaveOutcome, DEFAULT_AUTOSAVE_INTERVAL};
pub use shortcuts::{EditorAction, Shortcut, ShortcutMap, TextStyle};
pub use storage::{ContentStore, FileStore, MemoryStore};
pub use template::{builtin_templates, Template};
pub use theme::{Theme, ThemeContext};
